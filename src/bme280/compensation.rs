//! Fixed-point compensation formulas.
//!
//! Raw ADC codes are linearized with the factory trim coefficients
//! using pure integer arithmetic; only the final scaling to a physical
//! unit is done in floating point. The order of operations and the
//! intermediate truncating divisions are part of the chip's calibrated
//! accuracy model, so each step maps one-to-one onto the reference
//! formulas from the datasheet.
//!
//! Pressure and humidity both depend on the fine-temperature value
//! produced by [`compensate_temperature`]; the driver refreshes it
//! immediately before either computation.

use super::calibration::CalibrationData;

/// Compensate a raw 20-bit temperature code.
///
/// Returns the fine-temperature intermediate (input to the pressure
/// and humidity formulas) and the temperature in degrees Celsius with
/// two decimal digits of resolution.
pub(crate) fn compensate_temperature(
    adc_t: i32,
    calib: &CalibrationData,
    t_fine_adjust: i32,
) -> (i32, f32) {
    let mut var1 = (adc_t / 8) - ((calib.dig_t1 as i32) * 2);
    var1 = (var1 * (calib.dig_t2 as i32)) / 2048;
    let mut var2 = (adc_t / 16) - (calib.dig_t1 as i32);
    var2 = (((var2 * var2) / 4096) * (calib.dig_t3 as i32)) / 16384;

    let t_fine = var1 + var2 + t_fine_adjust;
    let t = (t_fine * 5 + 128) / 256;

    (t_fine, t as f32 / 100.0)
}

/// Compensate a raw 20-bit pressure code.
///
/// The intermediate products exceed 32 bits, so the whole chain runs
/// in signed 64-bit arithmetic. Returns 0.0 when the normalization
/// term is zero (degenerate trim set), matching chip convention.
pub(crate) fn compensate_pressure(adc_p: i32, calib: &CalibrationData, t_fine: i32) -> f32 {
    let mut var1 = (t_fine as i64) - 128000;
    let mut var2 = var1 * var1 * (calib.dig_p6 as i64);
    var2 += (var1 * (calib.dig_p5 as i64)) * 131072;
    var2 += (calib.dig_p4 as i64) * 34359738368;
    var1 = ((var1 * var1 * (calib.dig_p3 as i64)) / 256) + (var1 * (calib.dig_p2 as i64) * 4096);
    let var3: i64 = 140737488355328;
    var1 = ((var3 + var1) * (calib.dig_p1 as i64)) / 8589934592;

    if var1 == 0 {
        return 0.0;
    }

    let mut var4 = 1048576 - (adc_p as i64);
    var4 = (((var4 * 2147483648) - var2) * 3125) / var1;
    var1 = ((calib.dig_p9 as i64) * (var4 / 8192) * (var4 / 8192)) / 33554432;
    var2 = ((calib.dig_p8 as i64) * var4) / 524288;
    var4 = ((var4 + var1 + var2) / 256) + ((calib.dig_p7 as i64) * 16);

    var4 as f32 / 256.0
}

/// Compensate a raw 16-bit humidity code.
///
/// The result is clamped to the representable range before scaling,
/// yielding 0..100 %RH.
pub(crate) fn compensate_humidity(adc_h: i32, calib: &CalibrationData, t_fine: i32) -> f32 {
    let var1 = t_fine - 76800;
    let mut var2 = adc_h * 16384;
    let mut var3 = (calib.dig_h4 as i32) * 1048576;
    let mut var4 = (calib.dig_h5 as i32) * var1;
    let mut var5 = (((var2 - var3) - var4) + 16384) / 32768;
    var2 = (var1 * (calib.dig_h6 as i32)) / 1024;
    var3 = (var1 * (calib.dig_h3 as i32)) / 2048;
    var4 = ((var2 * (var3 + 32768)) / 1024) + 2097152;
    var2 = ((var4 * (calib.dig_h2 as i32)) + 8192) / 16384;
    var3 = var5 * var2;
    var4 = ((var3 / 32768) * (var3 / 32768)) / 128;
    var5 = var3 - ((var4 * (calib.dig_h1 as i32)) / 16);
    var5 = var5.clamp(0, 419430400);

    (var5 / 4096) as f32 / 1024.0
}

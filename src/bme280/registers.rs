//! BME280 Register Map
//!
//! Registers fall into three groups:
//! - Calibration registers: factory trim coefficients (0x88..0xA1 and 0xE1..0xE7)
//! - Control registers: oversampling, power mode, filter, standby
//! - Data registers: raw ADC output for pressure, temperature and humidity
//!
//! The humidity coefficients H4 and H5 are 12-bit values packed into three
//! bytes: 0xE4 and 0xE6 carry the signed high bytes, 0xE5 carries one nibble
//! of each.

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Temperature trim T1, unsigned 16-bit little-endian
    DigT1 = 0x88,
    /// Temperature trim T2, signed 16-bit little-endian
    DigT2 = 0x8A,
    /// Temperature trim T3, signed 16-bit little-endian
    DigT3 = 0x8C,

    /// Pressure trim P1, unsigned 16-bit little-endian
    DigP1 = 0x8E,
    /// Pressure trims P2..P9, signed 16-bit little-endian
    DigP2 = 0x90,
    DigP3 = 0x92,
    DigP4 = 0x94,
    DigP5 = 0x96,
    DigP6 = 0x98,
    DigP7 = 0x9A,
    DigP8 = 0x9C,
    DigP9 = 0x9E,

    /// Humidity trim H1, unsigned 8-bit
    DigH1 = 0xA1,
    /// Humidity trim H2, signed 16-bit little-endian
    DigH2 = 0xE1,
    /// Humidity trim H3, unsigned 8-bit
    DigH3 = 0xE3,
    /// High byte of H4 (signed)
    DigH4 = 0xE4,
    /// Shared nibble register: low nibble of H4, high nibble of H5
    DigH4H5 = 0xE5,
    /// High byte of H5 (signed)
    DigH5 = 0xE6,
    /// Humidity trim H6, signed 8-bit
    DigH6 = 0xE7,

    /// Chip identity register (0x60 for BME280, 0x58 for BMP280)
    ChipId = 0xD0,
    /// Soft reset register; writing 0xB6 restarts the device
    SoftReset = 0xE0,

    /// Humidity oversampling control.
    /// Only latches after the next write to [`Register::CtrlMeas`].
    CtrlHum = 0xF2,
    /// Status register; bit 0 is set while the factory calibration
    /// is being copied from NVM
    Status = 0xF3,
    /// Temperature/pressure oversampling and power mode control
    CtrlMeas = 0xF4,
    /// Standby duration, IIR filter and SPI-3-wire configuration
    Config = 0xF5,

    /// Raw pressure, 20 bits across 0xF7..0xF9
    PressureData = 0xF7,
    /// Raw temperature, 20 bits across 0xFA..0xFC
    TemperatureData = 0xFA,
    /// Raw humidity, 16 bits across 0xFD..0xFE
    HumidityData = 0xFD,
}

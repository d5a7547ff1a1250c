//! Bosch BME280 environmental sensor driver.
//!
//! The driver owns the bus handle and the per-device state the
//! compensation formulas need: the factory trim coefficients (read once
//! at startup) and the fine-temperature intermediate shared by the
//! pressure and humidity formulas. Construction runs the full init
//! sequence: soft reset, chip-identity check, calibration-ready wait,
//! coefficient read and sampling configuration.

pub mod address;
pub mod calibration;
mod compensation;
pub mod config;
pub mod registers;

use crate::{
    bme280::{
        address::Address,
        calibration::CalibrationData,
        config::{SamplingConfig, SensorMode},
        registers::Register,
    },
    error::{Error, InitError},
};
use embedded_hal::{delay::DelayNs, i2c::I2c};

const CHIP_ID_BME280: u8 = 0x60;
const CHIP_ID_BMP280: u8 = 0x58;
const SOFT_RESET_COMMAND: u8 = 0xB6;
const STATUS_IM_UPDATE: u8 = 1 << 0;

const RESET_DELAY_MS: u32 = 2;
const CONFIG_DELAY_MS: u32 = 100;
const CALIBRATION_POLL_DELAY_MS: u32 = 10;
const CALIBRATION_POLL_ATTEMPTS: u32 = 100;

/// Bosch BME280 Driver
pub struct Bme280<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    calibration: CalibrationData,
    config: SamplingConfig,
    t_fine: i32,
    t_fine_adjust: i32,
}

impl<I> Bme280<I>
where
    I: I2c,
{
    /// Construct a new i2c driver for the BME280 and run the startup
    /// sequence with the default sampling configuration.
    pub fn new(i2c: I, address: Address, delay: &mut impl DelayNs) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
            calibration: CalibrationData::default(),
            config: SamplingConfig::default(),
            t_fine: 0,
            t_fine_adjust: 0,
        };

        if let Err(error) = sensor.initialize(delay) {
            Err(InitError {
                error,
                i2c: sensor.i2c,
            })
        } else {
            Ok(sensor)
        }
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.i2c
    }

    fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.reset(delay)?;

        let chip_id = self.read_register(Register::ChipId)?;
        if chip_id != CHIP_ID_BME280 && chip_id != CHIP_ID_BMP280 {
            return Err(Error::WrongDevice);
        }

        self.wait_for_calibration(delay)?;
        self.read_coefficients()?;
        self.set_sampling(self.config)?;
        delay.delay_ms(CONFIG_DELAY_MS);
        Ok(())
    }

    /// Perform a soft reset of the device.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.write_register(Register::SoftReset, SOFT_RESET_COMMAND)?;
        delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    /// Block until the device has finished copying its factory
    /// calibration out of NVM, or fail after a bounded number of polls.
    fn wait_for_calibration(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        for _ in 0..CALIBRATION_POLL_ATTEMPTS {
            let status = self.read_register(Register::Status)?;
            if status & STATUS_IM_UPDATE == 0 {
                return Ok(());
            }
            delay.delay_ms(CALIBRATION_POLL_DELAY_MS);
        }
        Err(Error::CalibrationTimeout)
    }

    /// Read every trim coefficient, one typed read per field.
    fn read_coefficients(&mut self) -> Result<(), Error<I>> {
        let dig_t1 = self.read_u16_le(Register::DigT1)?;
        let dig_t2 = self.read_i16_le(Register::DigT2)?;
        let dig_t3 = self.read_i16_le(Register::DigT3)?;

        let dig_p1 = self.read_u16_le(Register::DigP1)?;
        let dig_p2 = self.read_i16_le(Register::DigP2)?;
        let dig_p3 = self.read_i16_le(Register::DigP3)?;
        let dig_p4 = self.read_i16_le(Register::DigP4)?;
        let dig_p5 = self.read_i16_le(Register::DigP5)?;
        let dig_p6 = self.read_i16_le(Register::DigP6)?;
        let dig_p7 = self.read_i16_le(Register::DigP7)?;
        let dig_p8 = self.read_i16_le(Register::DigP8)?;
        let dig_p9 = self.read_i16_le(Register::DigP9)?;

        let dig_h1 = self.read_register(Register::DigH1)?;
        let dig_h2 = self.read_i16_le(Register::DigH2)?;
        let dig_h3 = self.read_register(Register::DigH3)?;
        // H4 and H5 are 12-bit values sharing the nibble register 0xE5;
        // an aligned 16-bit read would corrupt both
        let dig_h4 = {
            let msb = self.read_register(Register::DigH4)?;
            let shared = self.read_register(Register::DigH4H5)?;
            CalibrationData::pack_h4(msb, shared)
        };
        let dig_h5 = {
            let msb = self.read_register(Register::DigH5)?;
            let shared = self.read_register(Register::DigH4H5)?;
            CalibrationData::pack_h5(msb, shared)
        };
        let dig_h6 = self.read_register(Register::DigH6)? as i8;

        self.calibration = CalibrationData {
            dig_t1,
            dig_t2,
            dig_t3,
            dig_p1,
            dig_p2,
            dig_p3,
            dig_p4,
            dig_p5,
            dig_p6,
            dig_p7,
            dig_p8,
            dig_p9,
            dig_h1,
            dig_h2,
            dig_h3,
            dig_h4,
            dig_h5,
            dig_h6,
        };
        Ok(())
    }

    /// Write a new sampling configuration.
    ///
    /// The device must pass through sleep mode for the control
    /// registers to latch, and `ctrl_hum` only takes effect after the
    /// following `ctrl_meas` write, so the order here is fixed.
    pub fn set_sampling(&mut self, config: SamplingConfig) -> Result<(), Error<I>> {
        self.write_register(Register::CtrlMeas, SensorMode::Sleep as u8)?;
        self.write_register(Register::CtrlHum, config.ctrl_hum_byte())?;
        self.write_register(Register::Config, config.config_byte())?;
        self.write_register(Register::CtrlMeas, config.ctrl_meas_byte())?;
        self.config = config;
        Ok(())
    }

    /// The active sampling configuration.
    pub fn sampling_config(&self) -> &SamplingConfig {
        &self.config
    }

    /// The trim coefficients read at startup.
    pub fn calibration(&self) -> &CalibrationData {
        &self.calibration
    }

    /// Bias added into the fine-temperature intermediate, shifting the
    /// reported temperature and, through it, pressure and humidity.
    pub fn set_fine_temperature_adjustment(&mut self, adjustment: i32) {
        self.t_fine_adjust = adjustment;
    }

    /// Read the compensated temperature in degrees Celsius.
    ///
    /// Returns 0.0 without a bus transaction when temperature
    /// oversampling is skipped.
    pub fn read_temperature(&mut self) -> Result<f32, Error<I>> {
        if self.config.temperature_oversampling.is_skipped() {
            return Ok(0.0);
        }

        let adc_t = (self.read_u24(Register::TemperatureData)? >> 4) as i32;
        let (t_fine, celsius) =
            compensation::compensate_temperature(adc_t, &self.calibration, self.t_fine_adjust);
        self.t_fine = t_fine;
        Ok(celsius)
    }

    /// Read the compensated pressure in pascals.
    ///
    /// Returns 0.0 when pressure oversampling is skipped, or when the
    /// trim set degenerates to a zero divisor.
    pub fn read_pressure(&mut self) -> Result<f32, Error<I>> {
        if self.config.pressure_oversampling.is_skipped() {
            return Ok(0.0);
        }

        // pressure compensation needs a fine-temperature value from
        // this sampling cycle, not a stale one
        self.read_temperature()?;

        let adc_p = (self.read_u24(Register::PressureData)? >> 4) as i32;
        Ok(compensation::compensate_pressure(
            adc_p,
            &self.calibration,
            self.t_fine,
        ))
    }

    /// Read the compensated relative humidity in percent.
    ///
    /// Returns 0.0 when humidity oversampling is skipped.
    pub fn read_humidity(&mut self) -> Result<f32, Error<I>> {
        if self.config.humidity_oversampling.is_skipped() {
            return Ok(0.0);
        }

        self.read_temperature()?;

        let adc_h = self.read_u16(Register::HumidityData)? as i32;
        Ok(compensation::compensate_humidity(
            adc_h,
            &self.calibration,
            self.t_fine,
        ))
    }

    /// Altitude in meters derived from a pressure read and the given
    /// sea-level reference pressure in hectopascals.
    pub fn read_altitude(&mut self, sea_level_hpa: f32) -> Result<f32, Error<I>> {
        // barometric formula works in hPa
        let atmospheric = self.read_pressure()? / 100.0;
        Ok(44330.0 * (1.0 - libm::powf(atmospheric / sea_level_hpa, 0.1903)))
    }

    pub(crate) fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .map_err(Error::WriteReadError)
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c.write(self.address, bytes).map_err(Error::WriteError)
    }

    pub(crate) fn read_register(&mut self, reg: Register) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(&[reg as u8], &mut buf)?;
        Ok(buf[0])
    }

    pub(crate) fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I>> {
        self.write(&[reg as u8, value])
    }

    /// Two contiguous bytes reassembled big-endian.
    pub(crate) fn read_u16(&mut self, reg: Register) -> Result<u16, Error<I>> {
        let mut buf = [0; 2];
        self.read(&[reg as u8], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Byte-swapped variant of [`Self::read_u16`] for the little-endian
    /// calibration banks.
    pub(crate) fn read_u16_le(&mut self, reg: Register) -> Result<u16, Error<I>> {
        Ok(self.read_u16(reg)?.swap_bytes())
    }

    /// Two's-complement reinterpretation; wraparound is the chip's
    /// native encoding, so no range check.
    pub(crate) fn read_i16_le(&mut self, reg: Register) -> Result<i16, Error<I>> {
        Ok(self.read_u16_le(reg)? as i16)
    }

    /// Three contiguous bytes reassembled big-endian.
    pub(crate) fn read_u24(&mut self, reg: Register) -> Result<u32, Error<I>> {
        let mut buf = [0; 3];
        self.read(&[reg as u8], &mut buf)?;
        Ok((buf[0] as u32) << 16 | (buf[1] as u32) << 8 | buf[2] as u32)
    }
}

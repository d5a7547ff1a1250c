//! InvenSense MPU6050 inertial sensor driver.
//!
//! The driver owns the bus handle and the device address. Construction
//! checks the chip identity and wakes the device out of sleep; after
//! that, acceleration and angular rate are read on demand. Scaled
//! reads look the active full-scale range up from the device on every
//! call, so an externally reconfigured range is always honored.

pub mod accel;
pub mod address;
pub mod gyro;
pub mod registers;

use crate::{
    error::{Error, InitError},
    mpu6050::{
        accel::{Accel, AccelF32, AccelFullScale},
        address::Address,
        gyro::{Gyro, GyroF32, GyroFullScale},
        registers::Register,
    },
};
use embedded_hal::i2c::I2c;

const CHIP_ID: u8 = 0x68;
const SLEEP_BIT: u8 = 1 << 6;
/// Full-scale range field, bits 4:3 of both configuration registers.
const FS_SEL_MASK: u8 = 0b0001_1000;

/// InvenSense MPU-6050 Driver
pub struct Mpu6050<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
}

impl<I> Mpu6050<I>
where
    I: I2c,
{
    /// Construct a new i2c driver for the MPU-6050.
    ///
    /// Checks the identity register and wakes the device from sleep.
    pub fn new(i2c: I, address: Address) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
        };

        if let Err(error) = sensor.initialize() {
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

    fn initialize(&mut self) -> Result<(), Error<I>> {
        let chip_id = self.read_register(Register::WhoAmI)?;
        if chip_id != CHIP_ID {
            return Err(Error::WrongDevice);
        }
        self.disable_sleep()
    }

    /// Clear the sleep bit; the device powers up asleep.
    pub fn disable_sleep(&mut self) -> Result<(), Error<I>> {
        let mut value = self.read_register(Register::PwrMgmt1)?;
        value &= !SLEEP_BIT;
        self.write_register(Register::PwrMgmt1, value)
    }

    pub fn set_accel_full_scale(&mut self, scale: AccelFullScale) -> Result<(), Error<I>> {
        let mut value = self.read_register(Register::AccelConfig)?;
        value &= !FS_SEL_MASK;
        value |= (scale as u8) << 3;
        self.write_register(Register::AccelConfig, value)
    }

    pub fn set_gyro_full_scale(&mut self, scale: GyroFullScale) -> Result<(), Error<I>> {
        let mut value = self.read_register(Register::GyroConfig)?;
        value &= !FS_SEL_MASK;
        value |= (scale as u8) << 3;
        self.write_register(Register::GyroConfig, value)
    }

    /// The accelerometer range currently programmed in the device.
    pub fn accel_full_scale(&mut self) -> Result<AccelFullScale, Error<I>> {
        let value = self.read_register(Register::AccelConfig)?;
        Ok(AccelFullScale::from_bits(value >> 3))
    }

    /// The gyroscope range currently programmed in the device.
    pub fn gyro_full_scale(&mut self) -> Result<GyroFullScale, Error<I>> {
        let value = self.read_register(Register::GyroConfig)?;
        Ok(GyroFullScale::from_bits(value >> 3))
    }

    /// Raw acceleration axes.
    pub fn accel_raw(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelX_H, &mut data)?;
        Ok(Accel::from_bytes(data))
    }

    /// Raw angular rate axes.
    pub fn gyro_raw(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroX_H, &mut data)?;
        Ok(Gyro::from_bytes(data))
    }

    /// Acceleration in g, scaled by the range read back from the
    /// device at call time.
    pub fn accel(&mut self) -> Result<AccelF32, Error<I>> {
        let scale = self.accel_full_scale()?;
        Ok(self.accel_raw()?.scaled(scale))
    }

    /// Angular rate in deg/s, scaled by the range read back from the
    /// device at call time.
    pub fn gyro(&mut self) -> Result<GyroF32, Error<I>> {
        let scale = self.gyro_full_scale()?;
        Ok(self.gyro_raw()?.scaled(scale))
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

    pub(crate) fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I>> {
        self.read(&[reg as u8], buf)?;
        Ok(buf)
    }

    pub(crate) fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I>> {
        self.write(&[reg as u8, value])
    }
}

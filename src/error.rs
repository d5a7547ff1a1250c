use core::fmt::Debug;
use core::fmt::Formatter;
use embedded_hal::i2c::I2c;

/// Error during initialization of a sensor. Wraps [`Error`].
///
/// The I2C peripheral is handed back so the caller can retry with
/// different settings or reuse the bus for another device.
pub struct InitError<I>
where
    I: I2c,
{
    pub i2c: I,
    pub error: Error<I>,
}

impl<I> Debug for InitError<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

/// Error for sensor operations.
pub enum Error<I>
where
    I: I2c,
{
    WriteError(I::Error),
    WriteReadError(I::Error),
    /// The chip-identity register did not report an expected device.
    WrongDevice,
    /// The sensor never reported its factory calibration as readable
    /// within the bounded startup poll.
    CalibrationTimeout,
}

impl<I> Debug for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::WriteReadError(e) => f.debug_tuple("WriteReadError").field(e).finish(),
            Self::WriteError(e) => f.debug_tuple("WriteError").field(e).finish(),
            Self::WrongDevice => f.write_str("WrongDevice"),
            Self::CalibrationTimeout => f.write_str("CalibrationTimeout"),
        }
    }
}

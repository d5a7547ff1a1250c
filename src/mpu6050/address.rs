//! MPU6050 I2C Address Configuration
//!
//! The MPU6050 uses one of two 7-bit addresses selected by the AD0
//! pin:
//! - 0x68 (default, AD0 low)
//! - 0x69 (alternate, AD0 high)
//!
//! This allows two devices to share the same I2C bus.

/// Represents an MPU6050 I2C address.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(pub u8);

impl Default for Address {
    /// Returns the default I2C address (0x68, AD0 low or floating).
    fn default() -> Self {
        Self(0x68)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}

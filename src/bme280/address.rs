//! BME280 I2C Address Configuration
//!
//! The BME280 responds on one of two 7-bit addresses selected by the
//! SDO pin:
//! - 0x77 (default, SDO high)
//! - 0x76 (alternate, SDO low)

/// Represents a BME280 I2C address.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(pub u8);

impl Default for Address {
    /// Returns the default I2C address (0x77, SDO high).
    fn default() -> Self {
        Self(0x77)
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

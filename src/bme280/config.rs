//! Sampling configuration.
//!
//! The BME280 is configured through three packed control registers:
//! `ctrl_hum` (humidity oversampling), `ctrl_meas` (temperature and
//! pressure oversampling plus power mode) and `config` (standby
//! duration, IIR filter, SPI-3-wire). The bit packing is computed here
//! with explicit shifts and masks; register write ordering is handled
//! by the driver.

/// Per-channel oversampling selection.
///
/// `Skipped` disables the channel entirely: the corresponding read
/// returns 0 without touching the bus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Oversampling {
    Skipped = 0,
    X1 = 1,
    X2 = 2,
    X4 = 3,
    X8 = 4,
    X16 = 5,
}

impl Oversampling {
    pub fn is_skipped(self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Power mode bits of `ctrl_meas`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum SensorMode {
    /// No measurements, lowest power
    Sleep = 0b00,
    /// One measurement cycle, then back to sleep
    Forced = 0b01,
    /// Continuous measurement with the configured standby time
    Normal = 0b11,
}

/// IIR filter coefficient.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Filter {
    Off = 0,
    X2 = 1,
    X4 = 2,
    X8 = 3,
    X16 = 4,
}

/// Inactive duration between measurements in normal mode.
///
/// The bit codes are not monotonic in time; they follow the register
/// map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum StandbyDuration {
    Ms0_5 = 0,
    Ms62_5 = 1,
    Ms125 = 2,
    Ms250 = 3,
    Ms500 = 4,
    Ms1000 = 5,
    Ms10 = 6,
    Ms20 = 7,
}

/// Complete sampling configuration for the device.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SamplingConfig {
    pub temperature_oversampling: Oversampling,
    pub pressure_oversampling: Oversampling,
    pub humidity_oversampling: Oversampling,
    pub mode: SensorMode,
    pub filter: Filter,
    pub standby: StandbyDuration,
    pub spi3w: bool,
}

impl Default for SamplingConfig {
    /// 16x oversampling on every channel, normal mode, filter off,
    /// shortest standby.
    fn default() -> Self {
        Self {
            temperature_oversampling: Oversampling::X16,
            pressure_oversampling: Oversampling::X16,
            humidity_oversampling: Oversampling::X16,
            mode: SensorMode::Normal,
            filter: Filter::Off,
            standby: StandbyDuration::Ms0_5,
            spi3w: false,
        }
    }
}

impl SamplingConfig {
    /// Packed `ctrl_hum` byte: osrs_h in bits 2:0.
    pub(crate) fn ctrl_hum_byte(&self) -> u8 {
        self.humidity_oversampling as u8
    }

    /// Packed `ctrl_meas` byte: osrs_t in bits 7:5, osrs_p in 4:2,
    /// mode in 1:0.
    pub(crate) fn ctrl_meas_byte(&self) -> u8 {
        ((self.temperature_oversampling as u8) << 5)
            | ((self.pressure_oversampling as u8) << 2)
            | self.mode as u8
    }

    /// Packed `config` byte: t_sb in bits 7:5, filter in 4:2,
    /// spi3w_en in 0.
    pub(crate) fn config_byte(&self) -> u8 {
        ((self.standby as u8) << 5) | ((self.filter as u8) << 2) | self.spi3w as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_bytes() {
        let config = SamplingConfig::default();
        assert_eq!(config.ctrl_hum_byte(), 0b0000_0101);
        assert_eq!(config.ctrl_meas_byte(), 0b1011_0111);
        assert_eq!(config.config_byte(), 0b0000_0000);
    }

    #[test]
    fn packed_bytes_follow_bit_layout() {
        let config = SamplingConfig {
            temperature_oversampling: Oversampling::X1,
            pressure_oversampling: Oversampling::X4,
            humidity_oversampling: Oversampling::X2,
            mode: SensorMode::Forced,
            filter: Filter::X16,
            standby: StandbyDuration::Ms1000,
            spi3w: true,
        };
        assert_eq!(config.ctrl_meas_byte(), (1 << 5) | (3 << 2) | 1);
        assert_eq!(config.ctrl_hum_byte(), 2);
        assert_eq!(config.config_byte(), (5 << 5) | (4 << 2) | 1);
    }

    #[test]
    fn sleep_mode_clears_mode_bits() {
        let config = SamplingConfig {
            mode: SensorMode::Sleep,
            ..SamplingConfig::default()
        };
        assert_eq!(config.ctrl_meas_byte() & 0b11, 0);
    }
}

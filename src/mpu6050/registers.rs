//! MPU6050 Register Map
//!
//! Only the registers this driver exercises are listed: power
//! management, the two full-scale configuration registers and the
//! burst-readable measurement banks.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Gyroscope Configuration register (0x1B)
    /// Full-scale range in bits 4:3
    GyroConfig = 0x1B,

    /// Accelerometer Configuration register (0x1C)
    /// Full-scale range in bits 4:3
    AccelConfig = 0x1C,

    /// High byte of X-axis acceleration; X/Y/Z pairs follow
    /// contiguously through 0x40
    AccelX_H = 0x3B,

    /// High byte of X-axis angular rate; X/Y/Z pairs follow
    /// contiguously through 0x48
    GyroX_H = 0x43,

    /// Power Management 1 register (0x6B)
    /// Controls device power state, clock source, and reset
    PwrMgmt1 = 0x6B,

    /// Who Am I register (0x75)
    /// Reads 0x68 on a responsive MPU6050
    WhoAmI = 0x75,
}

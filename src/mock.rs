//! Register-file I2C mock for driver tests.
//!
//! Models a register-addressed I2C peripheral: a write sets the
//! register pointer (and optionally stores data there), a following
//! read returns bytes from the pointer with auto-increment. All
//! transactions are recorded for ordering assertions.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, I2c, Operation};
use std::vec::Vec;

/// Recorded bus transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transaction {
    Write { addr: u8, bytes: Vec<u8> },
    Read { addr: u8, register: u8, len: usize },
}

/// Injected transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BusFault;

impl i2c::Error for BusFault {
    fn kind(&self) -> i2c::ErrorKind {
        i2c::ErrorKind::Other
    }
}

pub(crate) struct BusMock {
    registers: [u8; 256],
    pointer: u8,
    pub(crate) log: Vec<Transaction>,
    /// When set, every transaction fails with [`BusFault`].
    pub(crate) fail: bool,
}

impl BusMock {
    pub(crate) fn new() -> Self {
        Self {
            registers: [0; 256],
            pointer: 0,
            log: Vec::new(),
            fail: false,
        }
    }

    /// Seed a single register.
    pub(crate) fn set(&mut self, register: u8, value: u8) {
        self.registers[register as usize] = value;
    }

    /// Seed a contiguous run of registers.
    pub(crate) fn set_bytes(&mut self, register: u8, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.registers[register as usize + offset] = *byte;
        }
    }

    /// Current register content, as left behind by the device under
    /// test.
    pub(crate) fn register(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }
}

impl i2c::ErrorType for BusMock {
    type Error = BusFault;
}

impl I2c for BusMock {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), BusFault> {
        if self.fail {
            return Err(BusFault);
        }

        match operations {
            // plain write: first byte selects the register, the rest
            // is stored there
            [Operation::Write(bytes)] => {
                self.log.push(Transaction::Write {
                    addr: address,
                    bytes: bytes.to_vec(),
                });
                let (register, data) = bytes.split_first().expect("empty write");
                self.pointer = *register;
                for byte in data {
                    self.registers[self.pointer as usize] = *byte;
                    self.pointer = self.pointer.wrapping_add(1);
                }
            }
            // write-read: register select followed by an
            // auto-incrementing read
            [Operation::Write(bytes), Operation::Read(buffer)] => {
                self.pointer = *bytes.first().expect("empty register select");
                self.log.push(Transaction::Read {
                    addr: address,
                    register: self.pointer,
                    len: buffer.len(),
                });
                for slot in buffer.iter_mut() {
                    *slot = self.registers[self.pointer as usize];
                    self.pointer = self.pointer.wrapping_add(1);
                }
            }
            _ => panic!("unsupported transaction shape"),
        }
        Ok(())
    }
}

/// Delay provider that returns immediately; settle times are
/// irrelevant against the mock.
pub(crate) struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let mut bus = BusMock::new();
        bus.write(0x76, &[0x10, 0xAB, 0xCD]).unwrap();

        let mut buf = [0u8; 2];
        bus.write_read(0x76, &[0x10], &mut buf).unwrap();
        assert_eq!(buf, [0xAB, 0xCD]);
    }

    #[test]
    fn reads_are_logged_with_their_register() {
        let mut bus = BusMock::new();
        bus.set_bytes(0x3B, &[1, 2, 3]);

        let mut buf = [0u8; 3];
        bus.write_read(0x68, &[0x3B], &mut buf).unwrap();

        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(
            bus.log,
            [Transaction::Read {
                addr: 0x68,
                register: 0x3B,
                len: 3
            }]
        );
    }

    #[test]
    fn injected_fault_fails_the_transaction() {
        let mut bus = BusMock::new();
        bus.fail = true;
        assert_eq!(bus.write(0x76, &[0x00, 0x00]), Err(BusFault));
    }
}

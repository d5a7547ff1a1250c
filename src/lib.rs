#![no_std]

#[cfg(test)]
extern crate std;

pub mod bme280;
pub mod error;
#[cfg(test)]
mod mock;
pub mod mpu6050;

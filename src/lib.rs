//! Driver for the Bosch BMX055 9-axis sensor package.
//!
//! The accelerometer ([`Bma2x2`]) and gyroscope ([`Bmg160`]) sit behind
//! separate I2C addresses and can be used on their own, or together through
//! [`Bmx055`] which shares one bus between them. The magnetometer is not
//! supported.

#![no_std]

mod bma2x2;
mod bmg160;
pub mod register;

use core::cell::RefCell;

use embedded_hal::i2c::I2c;
use embedded_hal_bus::i2c::RefCellDevice;

pub use bma2x2::{AccelRange, Bma2x2, InvalidConfiguration};
pub use bmg160::Bmg160;

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    Bus(E),
    /// Neither the primary nor the fallback address answered.
    DeviceNotFound,
}

impl<E: core::fmt::Display> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        match self {
            Error::Bus(e) => write!(f, "Bus error: {}", e),
            Error::DeviceNotFound => write!(f, "Device not found"),
        }
    }
}

impl<E> core::convert::From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

/// Interpret the low `bits` bits of `value` as a two's complement integer.
pub fn twos_complement(value: u32, bits: u8) -> i32 {
    debug_assert!((1..=32).contains(&bits));

    if value & (1 << (bits - 1)) != 0 {
        (value as i64 - (1_i64 << bits)) as i32
    } else {
        value as i32
    }
}

/// Read the chip ID at each candidate address in turn, returning the first
/// address that answered along with its chip ID.
pub(crate) fn probe<I2C: I2c>(
    i2c: &mut I2C,
    register: u8,
    addresses: [u8; 2],
) -> Result<(u8, u8), Error<I2C::Error>> {
    for address in addresses {
        let mut data: [u8; 1] = [0; 1];
        match i2c.write_read(address, &[register], &mut data) {
            Ok(()) => return Ok((address, data[0])),
            Err(e) => log::debug!("no answer at {:#04x}: {:?}", address, e),
        }
    }

    Err(Error::DeviceNotFound)
}

/// Accelerometer and gyroscope sharing a single I2C bus.
pub struct Bmx055<'a, I2C> {
    accel: Bma2x2<RefCellDevice<'a, I2C>>,
    gyro: Bmg160<RefCellDevice<'a, I2C>>,
}

impl<'a, I2C: I2c<Error = E>, E> Bmx055<'a, I2C> {
    /// Probe both sensors on `bus`. The accelerometer is brought up first
    /// and left at ±2g.
    pub fn new(bus: &'a RefCell<I2C>) -> Result<Self, Error<E>> {
        let accel = Bma2x2::new(RefCellDevice::new(bus))?;
        let gyro = Bmg160::new(RefCellDevice::new(bus))?;

        Ok(Bmx055 { accel, gyro })
    }

    pub fn accel(&mut self) -> &mut Bma2x2<RefCellDevice<'a, I2C>> {
        &mut self.accel
    }

    pub fn gyro(&mut self) -> &mut Bmg160<RefCellDevice<'a, I2C>> {
        &mut self.gyro
    }
}

use embedded_hal::i2c::I2c;

use crate::{probe, register::gyro as register, twos_complement, Error};

// Fixed ±2000°/s full scale over a signed 16-bit word.
const FULL_SCALE_DPS: f32 = 2000.0;
const LSB_PER_FULL_SCALE: f32 = 32768.0;

/// BMG160 gyroscope, as found at 0x68/0x69 on the BMX055.
pub struct Bmg160<I2C> {
    address: u8,
    i2c: I2C,
    chip_id: u8,
}

impl<I2C: I2c<Error = E>, E> Bmg160<I2C> {
    pub fn new(mut i2c: I2C) -> Result<Self, Error<E>> {
        let (address, chip_id) = probe(
            &mut i2c,
            register::CHIP_ID,
            [register::PRIMARY_ADDRESS, register::FALLBACK_ADDRESS],
        )?;
        log::debug!("BMG160 chip {:#04x} at {:#04x}", chip_id, address);

        Ok(Bmg160 {
            address,
            i2c,
            chip_id,
        })
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn chip_id(&self) -> u8 {
        self.chip_id
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Angular rate in degrees per second from the LSB/MSB pair starting
    /// at `register`.
    pub fn read_axis(&mut self, register: u8) -> Result<f32, Error<E>> {
        let mut buf = [0; 2];
        self.i2c.write_read(self.address, &[register], &mut buf)?;

        let lsb = twos_complement(buf[0] as u32, 8);
        let msb = twos_complement(buf[1] as u32, 8);
        let raw = lsb + (msb << 8);

        Ok(FULL_SCALE_DPS * raw as f32 / LSB_PER_FULL_SCALE)
    }

    pub fn x(&mut self) -> Result<f32, Error<E>> {
        self.read_axis(register::RATE_X_LSB)
    }

    pub fn y(&mut self) -> Result<f32, Error<E>> {
        self.read_axis(register::RATE_Y_LSB)
    }

    pub fn z(&mut self) -> Result<f32, Error<E>> {
        self.read_axis(register::RATE_Z_LSB)
    }

    pub fn xyz(&mut self) -> Result<(f32, f32, f32), Error<E>> {
        Ok((self.x()?, self.y()?, self.z()?))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    use super::*;

    #[test]
    fn test_new_uses_primary_address() {
        let expectations = [Transaction::write_read(0x68, vec![0x00], vec![0x0F])];
        let mut i2c = Mock::new(&expectations);

        let bmg160 = Bmg160::new(&mut i2c).unwrap();
        assert_eq!(bmg160.address(), 0x68);
        assert_eq!(bmg160.chip_id(), 0x0F);

        i2c.done();
    }

    // Reads must go to the address that answered the probe, not the
    // primary one.
    #[test]
    fn test_fallback_address_used_for_reads() {
        let expectations = [
            Transaction::write_read(0x68, vec![0x00], vec![0x00]).with_error(ErrorKind::Other),
            Transaction::write_read(0x69, vec![0x00], vec![0x0F]),
            Transaction::write_read(0x69, vec![0x02], vec![0x00, 0x01]),
        ];
        let mut i2c = Mock::new(&expectations);

        let mut bmg160 = Bmg160::new(&mut i2c).unwrap();
        assert_eq!(bmg160.address(), 0x69);
        assert_eq!(bmg160.x().unwrap(), 2000.0 * 256.0 / 32768.0);

        i2c.done();
    }

    #[test]
    fn test_new_device_not_found() {
        let expectations = [
            Transaction::write_read(0x68, vec![0x00], vec![0x00]).with_error(ErrorKind::Other),
            Transaction::write_read(0x69, vec![0x00], vec![0x00]).with_error(ErrorKind::Other),
        ];
        let mut i2c = Mock::new(&expectations);

        assert!(matches!(
            Bmg160::new(&mut i2c),
            Err(Error::DeviceNotFound)
        ));

        i2c.done();
    }

    #[test]
    fn test_rate_scaling() {
        let expectations = [
            Transaction::write_read(0x68, vec![0x00], vec![0x0F]),
            Transaction::write_read(0x68, vec![0x02], vec![0xFF, 0x0F]),
        ];
        let mut i2c = Mock::new(&expectations);

        let mut bmg160 = Bmg160::new(&mut i2c).unwrap();
        // -1 + (15 << 8) = 3839
        let rate = bmg160.x().unwrap();
        assert!((rate - 3839.0 * 2000.0 / 32768.0).abs() < 1e-3);
        assert!((rate - 234.3).abs() < 0.05);

        i2c.done();
    }

    #[test]
    fn test_negative_rate() {
        let expectations = [
            Transaction::write_read(0x68, vec![0x00], vec![0x0F]),
            Transaction::write_read(0x68, vec![0x06], vec![0x00, 0x80]),
        ];
        let mut i2c = Mock::new(&expectations);

        let mut bmg160 = Bmg160::new(&mut i2c).unwrap();
        assert_eq!(bmg160.z().unwrap(), -2000.0);

        i2c.done();
    }

    #[test]
    fn test_xyz_reads_in_order() {
        let expectations = [
            Transaction::write_read(0x68, vec![0x00], vec![0x0F]),
            Transaction::write_read(0x68, vec![0x02], vec![0x00, 0x01]),
            Transaction::write_read(0x68, vec![0x04], vec![0x00, 0x02]),
            Transaction::write_read(0x68, vec![0x06], vec![0x00, 0x04]),
        ];
        let mut i2c = Mock::new(&expectations);

        let mut bmg160 = Bmg160::new(&mut i2c).unwrap();
        let (x, y, z) = bmg160.xyz().unwrap();
        assert_eq!(x, 2000.0 * 256.0 / 32768.0);
        assert_eq!(y, 2000.0 * 512.0 / 32768.0);
        assert_eq!(z, 2000.0 * 1024.0 / 32768.0);

        i2c.done();
    }

    #[test]
    fn test_xyz_stops_at_first_bus_error() {
        let expectations = [
            Transaction::write_read(0x68, vec![0x00], vec![0x0F]),
            Transaction::write_read(0x68, vec![0x02], vec![0x00, 0x01]),
            Transaction::write_read(0x68, vec![0x04], vec![0x00, 0x00]).with_error(ErrorKind::Other),
        ];
        let mut i2c = Mock::new(&expectations);

        let mut bmg160 = Bmg160::new(&mut i2c).unwrap();
        assert_eq!(bmg160.xyz(), Err(Error::Bus(ErrorKind::Other)));

        i2c.done();
    }
}

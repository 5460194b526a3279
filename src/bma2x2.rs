use embedded_hal::i2c::I2c;

use crate::{probe, register::accel as register, twos_complement, Error};

/// Full-scale acceleration range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    G2,
    G4,
    G8,
    G16,
}

impl AccelRange {
    /// Value written to the PMU_RANGE register.
    pub fn bits(self) -> u8 {
        match self {
            AccelRange::G2 => 0b0011,
            AccelRange::G4 => 0b0101,
            AccelRange::G8 => 0b1000,
            AccelRange::G16 => 0b1100,
        }
    }

    /// Resolution in milli-g per LSB.
    pub fn resolution(self) -> f32 {
        match self {
            AccelRange::G2 => 0.98,
            AccelRange::G4 => 1.95,
            AccelRange::G8 => 3.91,
            AccelRange::G16 => 7.81,
        }
    }
}

/// A g-range that isn't one of 2, 4, 8 or 16.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidConfiguration(pub u8);

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid range: {}g", self.0)
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = InvalidConfiguration;

    fn try_from(g: u8) -> Result<Self, Self::Error> {
        match g {
            2 => Ok(AccelRange::G2),
            4 => Ok(AccelRange::G4),
            8 => Ok(AccelRange::G8),
            16 => Ok(AccelRange::G16),
            _ => Err(InvalidConfiguration(g)),
        }
    }
}

/// BMA2x2 accelerometer, as found at 0x18/0x19 on the BMX055.
pub struct Bma2x2<I2C> {
    address: u8,
    i2c: I2C,
    chip_id: u8,
    resolution: f32,
}

impl<I2C: I2c<Error = E>, E> Bma2x2<I2C> {
    /// Find the accelerometer on the bus and set it to ±2g.
    pub fn new(mut i2c: I2C) -> Result<Self, Error<E>> {
        let (address, chip_id) = probe(
            &mut i2c,
            register::CHIP_ID,
            [register::PRIMARY_ADDRESS, register::FALLBACK_ADDRESS],
        )?;
        log::debug!("BMA2x2 chip {:#04x} at {:#04x}", chip_id, address);

        let mut bma2x2 = Bma2x2 {
            address,
            i2c,
            chip_id,
            resolution: AccelRange::G2.resolution(),
        };
        bma2x2.set_range(AccelRange::G2)?;

        Ok(bma2x2)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn chip_id(&self) -> u8 {
        self.chip_id
    }

    /// Current resolution in milli-g per LSB.
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Configure the range and return the PMU_RANGE register as read back
    /// from the device.
    pub fn set_range(&mut self, range: AccelRange) -> Result<u8, Error<E>> {
        log::debug!("setting range {:?} ({:#04x})", range, range.bits());
        self.write(&[register::PMU_RANGE, range.bits()])?;
        self.resolution = range.resolution();
        self.range()
    }

    /// Like [`Bma2x2::set_range`] but takes the range in g. Anything other
    /// than 2, 4, 8 or 16 falls back to 16g.
    pub fn set_range_g(&mut self, g: u8) -> Result<u8, Error<E>> {
        let range = AccelRange::try_from(g).unwrap_or_else(|e| {
            log::warn!("{}, using 16g instead", e);
            AccelRange::G16
        });
        self.set_range(range)
    }

    /// Raw contents of the PMU_RANGE register.
    pub fn range(&mut self) -> Result<u8, Error<E>> {
        self.read_u8(register::PMU_RANGE)
    }

    /// Acceleration in g from the LSB/MSB pair starting at `register`.
    pub fn read_axis(&mut self, register: u8) -> Result<f32, Error<E>> {
        let mut buf = [0; 2];
        self.read_registers(register, &mut buf)?;

        // Each byte is sign-decoded on its own before being combined.
        let lsb = twos_complement(buf[0] as u32, 8);
        let msb = twos_complement(buf[1] as u32, 8);
        let raw = lsb + (msb << 4);

        Ok(raw as f32 * self.resolution / 1000.0)
    }

    pub fn x(&mut self) -> Result<f32, Error<E>> {
        self.read_axis(register::ACCD_X_LSB)
    }

    pub fn y(&mut self) -> Result<f32, Error<E>> {
        self.read_axis(register::ACCD_Y_LSB)
    }

    pub fn z(&mut self) -> Result<f32, Error<E>> {
        self.read_axis(register::ACCD_Z_LSB)
    }

    /// Three separate reads, so the axes may come from different samples.
    pub fn xyz(&mut self) -> Result<(f32, f32, f32), Error<E>> {
        Ok((self.x()?, self.y()?, self.z()?))
    }

    /// Chip temperature in Celsius.
    pub fn temperature(&mut self) -> Result<f32, Error<E>> {
        let temp = self.read_u8(register::ACCD_TEMP)?;
        Ok(temp as f32 / 2.0 + 23.0)
    }

    // Register r/w utilities

    fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c.write_read(self.address, &[register], buf)?;
        Ok(())
    }

    fn read_u8(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut data: [u8; 1] = [0; 1];
        self.read_registers(register, &mut data)?;
        Ok(data[0])
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Error<E>> {
        self.i2c.write(self.address, data)?;
        Ok(())
    }
}

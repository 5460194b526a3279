#![allow(dead_code)]

/// BMA2x2 accelerometer registers
pub mod accel {
    /// Primary I2C address (SDO pulled low)
    pub const PRIMARY_ADDRESS: u8 = 0x18;
    /// Alternate I2C address (SDO pulled high)
    pub const FALLBACK_ADDRESS: u8 = 0x19;

    /// Chip identification code
    pub const CHIP_ID: u8 = 0x00;

    /// ACC_X(LSB)
    pub const ACCD_X_LSB: u8 = 0x02;
    /// ACC_X(MSB)
    pub const ACCD_X_MSB: u8 = 0x03;
    /// ACC_Y(LSB)
    pub const ACCD_Y_LSB: u8 = 0x04;
    /// ACC_Y(MSB)
    pub const ACCD_Y_MSB: u8 = 0x05;
    /// ACC_Z(LSB)
    pub const ACCD_Z_LSB: u8 = 0x06;
    /// ACC_Z(MSB)
    pub const ACCD_Z_MSB: u8 = 0x07;

    /// Contains the temperature value of the sensor
    pub const ACCD_TEMP: u8 = 0x08;

    /// Selection of the accelerometer g-range
    pub const PMU_RANGE: u8 = 0x0F;
}

/// BMG160 gyroscope registers
pub mod gyro {
    /// Primary I2C address (SDO pulled low)
    pub const PRIMARY_ADDRESS: u8 = 0x68;
    /// Alternate I2C address (SDO pulled high)
    pub const FALLBACK_ADDRESS: u8 = 0x69;

    /// Chip identification code
    pub const CHIP_ID: u8 = 0x00;

    /// RATE_X(LSB)
    pub const RATE_X_LSB: u8 = 0x02;
    /// RATE_X(MSB)
    pub const RATE_X_MSB: u8 = 0x03;
    /// RATE_Y(LSB)
    pub const RATE_Y_LSB: u8 = 0x04;
    /// RATE_Y(MSB)
    pub const RATE_Y_MSB: u8 = 0x05;
    /// RATE_Z(LSB)
    pub const RATE_Z_LSB: u8 = 0x06;
    /// RATE_Z(MSB)
    pub const RATE_Z_MSB: u8 = 0x07;
}

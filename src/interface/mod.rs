//! Bus interface abstraction for the ADXL345 driver.

pub mod i2c;

/// Abstraction over the low-level register access required by the driver.
///
/// Opening the bus is the job of whoever builds the implementation, and
/// closing it is dropping (or releasing) it.
pub trait Adxl345Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads multiple consecutive registers into the provided buffer.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;
}

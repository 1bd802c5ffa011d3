//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Adxl345Interface;
use crate::params::Address;

/// I2C-based interface implementation for the ADXL345 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: Address,
}

impl<I2C> I2cInterface<I2C> {
    /// Binds the bus to the device found at `address`.
    pub const fn new(i2c: I2C, address: Address) -> Self {
        Self { i2c, address }
    }

    /// Device address used for every transaction.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Provides shared access to the wrapped I2C bus.
    pub fn i2c(&self) -> &I2C {
        &self.i2c
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Adxl345Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address.into(), &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        // Multi-byte reads auto-increment the register pointer.
        self.i2c.write_read(self.address.into(), &[register], buf)
    }
}

#[cfg(test)]
mod tests {
    use super::I2cInterface;
    use crate::interface::Adxl345Interface;
    use crate::params::Address;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

    #[test]
    fn write_register_sends_register_then_value() {
        let expectations = [I2cTrans::write(0x53, vec![0x2D, 0x08])];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), Address::Default);

        interface.write_register(0x2D, 0x08).unwrap();
        i2c.done();
    }

    #[test]
    fn read_register_uses_write_read() {
        let expectations = [I2cTrans::write_read(0x1D, vec![0x31], vec![0x0B])];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), Address::Alternate);

        assert_eq!(interface.read_register(0x31).unwrap(), 0x0B);
        i2c.done();
    }

    #[test]
    fn read_many_fills_buffer_in_one_transaction() {
        let expectations = [I2cTrans::write_read(
            0x53,
            vec![0x32],
            vec![0x01, 0x00, 0xFF, 0xFF, 0x00, 0x80],
        )];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), Address::Default);

        let mut buffer = [0u8; 6];
        interface.read_many(0x32, &mut buffer).unwrap();
        assert_eq!(buffer, [0x01, 0x00, 0xFF, 0xFF, 0x00, 0x80]);
        i2c.done();
    }

    #[test]
    fn read_many_ignores_empty_buffer() {
        let expectations: [I2cTrans; 0] = [];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), Address::Default);

        interface.read_many(0x32, &mut []).unwrap();
        i2c.done();
    }

    #[test]
    fn bus_errors_are_passed_through() {
        let expectations =
            [I2cTrans::write_read(0x53, vec![0x00], vec![0x00]).with_error(ErrorKind::Other)];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), Address::Default);

        assert_eq!(interface.read_register(0x00), Err(ErrorKind::Other));
        i2c.done();
    }

    #[test]
    fn release_returns_the_bus() {
        let expectations: [I2cTrans; 0] = [];
        let i2c = I2cMock::new(&expectations);
        let interface = I2cInterface::new(i2c, Address::Default);

        assert_eq!(interface.address(), Address::Default);
        interface.release().done();
    }
}

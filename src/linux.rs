//! Opening the sensor through a Linux `i2c-dev` character device.

use embedded_hal::i2c::{ErrorType, I2c, Operation};
use linux_embedded_hal::{I2CError, I2cdev};

use crate::config::Config;
use crate::device::Adxl345;
use crate::error::{Error, Result};
use crate::log::debug;
use crate::params::Address;

/// `/dev/i2c-<n>` bus that remembers its index.
pub struct LinuxI2c {
    dev: I2cdev,
    bus_index: u32,
}

impl LinuxI2c {
    /// Opens `/dev/i2c-<bus_index>`.
    pub fn open(bus_index: u32) -> core::result::Result<Self, I2CError> {
        Self::open_path(bus_path(bus_index), bus_index)
    }

    fn open_path(
        path: impl AsRef<std::path::Path>,
        bus_index: u32,
    ) -> core::result::Result<Self, I2CError> {
        let dev = I2cdev::new(path).map_err(I2CError::from)?;
        Ok(Self { dev, bus_index })
    }

    /// Index of the bus this device node was opened from.
    pub fn bus_index(&self) -> u32 {
        self.bus_index
    }

    /// Consumes the wrapper and returns the raw `I2cdev`.
    pub fn into_inner(self) -> I2cdev {
        self.dev
    }
}

impl ErrorType for LinuxI2c {
    type Error = I2CError;
}

impl I2c for LinuxI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> core::result::Result<(), Self::Error> {
        self.dev.transaction(address, operations)
    }
}

/// Driver bound to a Linux I2C bus. The bus index lives on the transport and
/// is available through [`Adxl345::bus_index`].
pub type LinuxAdxl345 = Adxl345<crate::interface::i2c::I2cInterface<LinuxI2c>>;

impl LinuxAdxl345 {
    /// Index of the `/dev/i2c-<n>` bus the device was opened on.
    pub fn bus_index(&self) -> u32 {
        self.interface().i2c().bus_index()
    }
}

/// Path of the character device for `bus_index`.
pub fn bus_path(bus_index: u32) -> std::string::String {
    std::format!("/dev/i2c-{bus_index}")
}

/// Opens `/dev/i2c-<bus_index>` and configures the device with
/// [`Config::default()`].
///
/// Failing to open the bus is reported before any register is touched.
/// Dropping the returned driver (or the bus from [`Adxl345::close_i2c`])
/// closes the file descriptor.
pub fn open(bus_index: u32, address: Address) -> Result<LinuxAdxl345, I2CError> {
    open_with_config(bus_index, address, Config::default())
}

/// Same as [`open`] with a custom configuration.
pub fn open_with_config(
    bus_index: u32,
    address: Address,
    config: Config,
) -> Result<LinuxAdxl345, I2CError> {
    let i2c = LinuxI2c::open(bus_index).map_err(Error::Interface)?;
    debug!("opened i2c bus {=u32}", bus_index);
    Adxl345::with_config_i2c(i2c, address, config)
}

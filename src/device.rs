//! High-level ADXL345 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::Adxl345Interface;
use crate::interface::i2c::I2cInterface;
use crate::log::{debug, trace, warning};
use crate::params::{Address, BandwidthRate, Range};
use crate::registers::{
    AXIS_DATA_LEN,
    BwRate,
    DataFormat,
    EXPECTED_DEVID,
    PowerControl,
    Register,
    RegisterAccess,
};
use crate::units::{counts_to_g, decode_axes, g_to_ms2};
use crate::vector::Vector;
use embedded_hal::i2c::I2c;

/// High-level synchronous driver for the ADXL345 accelerometer.
///
/// A value of this type always refers to a configured device in measurement
/// mode: the constructors either finish the whole setup sequence or return
/// the error of the first step that failed.
pub struct Adxl345<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Adxl345<IFACE> {
    // ==================================================================
    // == Ownership =====================================================
    // ==================================================================
    /// Returns the configuration last written through this driver.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Provides shared access to the underlying interface.
    pub fn interface(&self) -> &IFACE {
        &self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Consumes the driver and returns the owned interface.
    ///
    /// The device keeps measuring; call [`Adxl345::standby`] first to stop it.
    pub fn close(self) -> IFACE {
        self.interface
    }
}

impl<I2C> Adxl345<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports using [`Config::default()`].
    pub fn new_i2c(i2c: I2C, address: Address) -> Result<Self, I2C::Error> {
        Self::new(I2cInterface::new(i2c, address))
    }

    /// Convenience constructor for I2C transports with a custom configuration.
    pub fn with_config_i2c(i2c: I2C, address: Address, config: Config) -> Result<Self, I2C::Error> {
        Self::with_config(I2cInterface::new(i2c, address), config)
    }

    /// Device address on the bus.
    pub fn address(&self) -> Address {
        self.interface.address()
    }

    /// Releases the driver, returning the I2C bus.
    pub fn close_i2c(self) -> I2C {
        self.close().release()
    }
}

impl<IFACE, CommE> Adxl345<IFACE>
where
    IFACE: Adxl345Interface<Error = CommE>,
{
    // ==================================================================
    // == Construction & Global Configuration ===========================
    // ==================================================================
    /// Configures the device with [`Config::default()`] (100 Hz bandwidth,
    /// ±2 g) and enables measurement.
    pub fn new(interface: IFACE) -> Result<Self, CommE> {
        Self::with_config(interface, Config::default())
    }

    /// Writes `config` in order (bandwidth rate, then range), enables
    /// measurement and returns the driver. The first failing step aborts the
    /// sequence and the interface is dropped.
    pub fn with_config(interface: IFACE, config: Config) -> Result<Self, CommE> {
        let mut device = Self { interface, config };
        device.configure(config)?;
        device.enable_measurement()?;
        debug!("ADXL345 measuring: {}", config);
        Ok(device)
    }

    /// Applies a new rate and range to the device.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        self.set_bandwidth_rate(config.rate)?;
        self.set_range(config.range)?;
        Ok(())
    }

    /// Writes the bandwidth / output data rate code to `BW_RATE`.
    ///
    /// The low-power bit is cleared as part of the write.
    pub fn set_bandwidth_rate(&mut self, rate: BandwidthRate) -> Result<(), CommE> {
        let value = BwRate::new().with_rate(rate);
        self.write(Register::BwRate, u8::from(value))?;
        self.config.rate = rate;
        Ok(())
    }

    /// Reads `BW_RATE` back; `None` when it holds a code outside
    /// [`BandwidthRate`].
    pub fn read_bandwidth_rate(&mut self) -> Result<Option<BandwidthRate>, CommE> {
        let raw = self
            .interface
            .read_register(Register::BwRate.addr())
            .map_err(Error::from)?;
        Ok(BwRate::decode_rate(raw))
    }

    /// Changes the measurement range.
    ///
    /// Read-modify-write of `DATA_FORMAT`: bits 3:0 are replaced by `range`
    /// with full resolution forced on, bits 7:4 are kept.
    pub fn set_range(&mut self, range: Range) -> Result<(), CommE> {
        let current = self
            .interface
            .read_register(Register::DataFormat.addr())
            .map_err(Error::from)?;

        let updated = DataFormat::with_forced_full_resolution(current, range);
        self.write(Register::DataFormat, u8::from(updated))?;
        self.config.range = range;
        Ok(())
    }

    /// Switches the device from standby to measurement mode.
    pub fn enable_measurement(&mut self) -> Result<(), CommE> {
        let power = PowerControl::new().with_measure(true);
        self.write(Register::PowerCtl, u8::from(power))
    }

    /// Puts the device back into standby.
    pub fn standby(&mut self) -> Result<(), CommE> {
        self.write(Register::PowerCtl, u8::from(PowerControl::new()))
    }

    // ==================================================================
    // == Identification ================================================
    // ==================================================================
    /// Reads the `DEVID` register.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self
            .interface
            .read_register(Register::DevId.addr())
            .map_err(Error::from)
    }

    /// Verifies `DEVID` against the fixed ADXL345 identifier.
    pub fn check_id(&mut self) -> Result<(), CommE> {
        let id = self.device_id()?;
        if id != EXPECTED_DEVID {
            warning!("unexpected DEVID {=u8:#x}", id);
            return Err(Error::DeviceIdMismatch);
        }
        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads a raw X, Y, Z triplet with a single block read.
    pub fn read_axes_raw(&mut self) -> Result<[i16; 3], CommE> {
        let mut raw = [0u8; AXIS_DATA_LEN];
        self
            .interface
            .read_many(Register::DataX0.addr(), &mut raw)
            .map_err(Error::from)?;

        Ok(decode_axes(&raw))
    }

    /// Returns acceleration in g, rounded to four decimals.
    pub fn read_axes_g(&mut self) -> Result<Vector, CommE> {
        let [x, y, z] = self.read_axes_raw()?;
        Ok(Vector::new(counts_to_g(x), counts_to_g(y), counts_to_g(z)))
    }

    /// Returns acceleration in m/s², rounded to four decimals.
    pub fn read_axes_ms2(&mut self) -> Result<Vector, CommE> {
        Ok(self.read_axes_g()?.map(g_to_ms2))
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    fn write(&mut self, register: Register, value: u8) -> Result<(), CommE> {
        debug_assert_eq!(register.access(), RegisterAccess::ReadWrite);
        trace!("write {} <- {=u8:#x}", register.name(), value);
        self
            .interface
            .write_register(register.addr(), value)
            .map_err(Error::from)
    }
}

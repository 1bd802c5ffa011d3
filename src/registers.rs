//! Register map definitions for the ADXL345 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{BandwidthRate, Range, WakeUpFrequency};

/// Value of `DEVID` on every ADXL345.
pub const EXPECTED_DEVID: u8 = 0xE5;

/// Number of consecutive bytes spanning X, Y, Z axis samples.
pub const AXIS_DATA_LEN: usize = 6;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Registers used by the driver, keyed by their datasheet address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Device identifier.
    DevId = 0x00,
    /// Bandwidth and output data rate.
    BwRate = 0x2C,
    /// Standby/measure mode and sleep control.
    PowerCtl = 0x2D,
    /// Range and resolution flags.
    DataFormat = 0x31,
    /// X-axis data, low byte.
    DataX0 = 0x32,
    /// X-axis data, high byte.
    DataX1 = 0x33,
    /// Y-axis data, low byte.
    DataY0 = 0x34,
    /// Y-axis data, high byte.
    DataY1 = 0x35,
    /// Z-axis data, low byte.
    DataZ0 = 0x36,
    /// Z-axis data, high byte.
    DataZ1 = 0x37,
}

impl Register {
    /// Register address as documented in the datasheet.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Datasheet mnemonic.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DevId => "DEVID",
            Self::BwRate => "BW_RATE",
            Self::PowerCtl => "POWER_CTL",
            Self::DataFormat => "DATA_FORMAT",
            Self::DataX0 => "DATAX0",
            Self::DataX1 => "DATAX1",
            Self::DataY0 => "DATAY0",
            Self::DataY1 => "DATAY1",
            Self::DataZ0 => "DATAZ0",
            Self::DataZ1 => "DATAZ1",
        }
    }

    /// Access permission classification.
    pub const fn access(self) -> RegisterAccess {
        match self {
            Self::BwRate | Self::PowerCtl | Self::DataFormat => RegisterAccess::ReadWrite,
            _ => RegisterAccess::ReadOnly,
        }
    }
}

/// Bitfield representation of the `BW_RATE` register (address `0x2C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BwRate {
    // Bandwidth / output data rate code (bits 3:0).
    pub rate: BandwidthRate,
    // Reduced power operation (bit 4).
    pub low_power: bool,
    #[skip]
    __: B3,
}

impl BwRate {
    /// Decodes the rate field of a raw `BW_RATE` byte.
    ///
    /// Only the seven named codes are recognised; anything else (including
    /// the slower rates below code `0x09`) yields `None`.
    pub fn decode_rate(raw: u8) -> Option<BandwidthRate> {
        Self::from_bytes([raw]).rate_or_err().ok()
    }
}

impl From<BwRate> for u8 {
    fn from(value: BwRate) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `POWER_CTL` register (address `0x2D`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerControl {
    // Reading frequency while asleep (bits 1:0).
    pub wakeup: WakeUpFrequency,
    // Sleep mode (bit 2).
    pub sleep: bool,
    // Measurement mode; cleared means standby (bit 3).
    pub measure: bool,
    // Automatic sleep on inactivity (bit 4).
    pub auto_sleep: bool,
    // Serial activity/inactivity link (bit 5).
    pub link: bool,
    #[skip]
    __: B2,
}

impl From<u8> for PowerControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerControl> for u8 {
    fn from(value: PowerControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `DATA_FORMAT` register (address `0x31`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormat {
    // Measurement range (bits 1:0).
    pub range: Range,
    // Left-justified output (bit 2).
    pub justify: bool,
    // Full resolution, 4 mg/LSB at every range (bit 3).
    pub full_resolution: bool,
    #[skip]
    __: B1,
    // Interrupts active low (bit 5).
    pub int_invert: bool,
    // 3-wire SPI (bit 6).
    pub spi_3wire: bool,
    // Self-test force (bit 7).
    pub self_test: bool,
}

impl DataFormat {
    /// Clears the low nibble of `current`, then sets `range` and forces full
    /// resolution. Bits 7:4 are carried over untouched.
    pub fn with_forced_full_resolution(current: u8, range: Range) -> Self {
        Self::from(current)
            .with_range(range)
            .with_justify(false)
            .with_full_resolution(true)
    }
}

impl From<u8> for DataFormat {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<DataFormat> for u8 {
    fn from(value: DataFormat) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_table_matches_datasheet_addresses() {
        assert_eq!(Register::DataFormat.addr(), 0x31);
        assert_eq!(Register::BwRate.addr(), 0x2C);
        assert_eq!(Register::PowerCtl.addr(), 0x2D);
        let data = [
            (Register::DataX0, 0x32),
            (Register::DataX1, 0x33),
            (Register::DataY0, 0x34),
            (Register::DataY1, 0x35),
            (Register::DataZ0, 0x36),
            (Register::DataZ1, 0x37),
        ];
        for (reg, addr) in data {
            assert_eq!(reg.addr(), addr);
            assert_eq!(reg.access(), RegisterAccess::ReadOnly);
        }
        assert_eq!(Register::DataFormat.access(), RegisterAccess::ReadWrite);
    }

    #[test]
    fn bw_rate_encodes_code_in_low_nibble() {
        let reg = BwRate::new().with_rate(BandwidthRate::Bw100Hz);
        assert_eq!(u8::from(reg), 0x0B);
        assert_eq!(u8::from(reg.with_low_power(true)), 0x1B);
    }

    #[test]
    fn decode_rate_rejects_unnamed_codes_without_panicking() {
        assert_eq!(BwRate::decode_rate(0x1B), Some(BandwidthRate::Bw100Hz));
        assert_eq!(BwRate::decode_rate(0x0F), Some(BandwidthRate::Bw1600Hz));
        for raw in 0x00..=0x08u8 {
            assert_eq!(BwRate::decode_rate(raw), None);
        }
    }

    #[test]
    fn measure_bit_is_bit_three() {
        let reg = PowerControl::new().with_measure(true);
        assert_eq!(u8::from(reg), 0x08);
        assert!(PowerControl::from(0x08).measure());
    }

    #[test]
    fn full_resolution_is_forced_for_every_prior_value() {
        let ranges = [Range::G2, Range::G4, Range::G8, Range::G16];
        for prior in 0..=u8::MAX {
            for range in ranges {
                let written = u8::from(DataFormat::with_forced_full_resolution(prior, range));
                assert_eq!(written & 0x08, 0x08);
                assert_eq!(written, (prior & !0x0F) | range as u8 | 0x08);
            }
        }
    }
}

//! Strongly typed parameter enumerations for the ADXL345 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use adxl345::params::{Address, BandwidthRate, Range};
//!
//! let address = Address::Default;
//! let rate = BandwidthRate::Bw100Hz;
//! let range = Range::G2;
//! assert_eq!(u8::from(address), 0x53);
//! assert_eq!(rate.output_data_rate_hz(), 200);
//! assert_eq!(range.max_g(), 2);
//! ```

use modular_bitfield::prelude::Specifier;

/// I2C addresses selectable through the `ALT ADDRESS` pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
    /// `ALT ADDRESS` tied low.
    Default,
    /// `ALT ADDRESS` tied high.
    Alternate,
}

impl From<Address> for u8 {
    fn from(value: Address) -> Self {
        match value {
            Address::Default => 0x53,
            Address::Alternate => 0x1D,
        }
    }
}

/// Bandwidth / output data rate codes encoded in `BW_RATE[3:0]`.
///
/// Variants are named after the filter bandwidth; the output data rate is
/// twice that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum BandwidthRate {
    /// 25 Hz bandwidth.
    Bw25Hz = 0x09,
    /// 50 Hz bandwidth.
    Bw50Hz = 0x0A,
    /// 100 Hz bandwidth.
    Bw100Hz = 0x0B,
    /// 200 Hz bandwidth.
    Bw200Hz = 0x0C,
    /// 400 Hz bandwidth.
    Bw400Hz = 0x0D,
    /// 800 Hz bandwidth.
    Bw800Hz = 0x0E,
    /// 1600 Hz bandwidth.
    Bw1600Hz = 0x0F,
}

impl BandwidthRate {
    /// Returns the filter bandwidth in hertz.
    pub const fn bandwidth_hz(self) -> u32 {
        match self {
            Self::Bw25Hz => 25,
            Self::Bw50Hz => 50,
            Self::Bw100Hz => 100,
            Self::Bw200Hz => 200,
            Self::Bw400Hz => 400,
            Self::Bw800Hz => 800,
            Self::Bw1600Hz => 1_600,
        }
    }

    /// Returns the output data rate in hertz.
    pub const fn output_data_rate_hz(self) -> u32 {
        self.bandwidth_hz() * 2
    }
}

/// Measurement ranges encoded in `DATA_FORMAT[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Range {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl Range {
    /// Returns the full-scale limit in g.
    pub const fn max_g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

/// Sleep-mode reading frequencies encoded in `POWER_CTL[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum WakeUpFrequency {
    /// 8 Hz.
    Hz8 = 0b00,
    /// 4 Hz.
    Hz4 = 0b01,
    /// 2 Hz.
    Hz2 = 0b10,
    /// 1 Hz.
    Hz1 = 0b11,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_match_alt_pin_levels() {
        assert_eq!(u8::from(Address::Default), 0x53);
        assert_eq!(u8::from(Address::Alternate), 0x1D);
    }

    #[test]
    fn output_rate_is_twice_bandwidth() {
        assert_eq!(BandwidthRate::Bw25Hz.output_data_rate_hz(), 50);
        assert_eq!(BandwidthRate::Bw1600Hz.output_data_rate_hz(), 3_200);
    }
}

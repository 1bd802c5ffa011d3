#![cfg_attr(not(any(test, feature = "linux")), no_std)]

mod error;

pub mod config;
pub mod device;
pub mod interface;
#[cfg(feature = "linux")]
pub mod linux;
mod log;
pub mod params;
pub mod registers;
pub mod units;
pub mod vector;

pub use crate::config::Config;
pub use crate::device::Adxl345;
pub use crate::error::{Error, Result};
pub use crate::params::{Address, BandwidthRate, Range};
pub use crate::vector::Vector;

//! Error handling primitives for the ADXL345 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// `DEVID` did not hold the ADXL345 identifier.
    DeviceIdMismatch,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Interface(_) => defmt::write!(f, "Error::Interface"),
            Self::DeviceIdMismatch => defmt::write!(f, "Error::DeviceIdMismatch"),
        }
    }
}

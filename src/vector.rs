//! Three-axis value type returned by the conversion reads.

use core::fmt;

/// Acceleration along X, Y and Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// X-axis component.
    pub x: f64,
    /// Y-axis component.
    pub y: f64,
    /// Z-axis component.
    pub z: f64,
}

impl Vector {
    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Applies `f` to every component.
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {}, y: {}, z: {}}}", self.x, self.y, self.z)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Vector {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{{x: {}, y: {}, z: {}}}", self.x, self.y, self.z);
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn display_lists_all_components() {
        let v = Vector::new(0.0039, -1.5, 0.0);
        assert_eq!(format!("{v}"), "{x: 0.0039, y: -1.5, z: 0}");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Vector::default(), Vector::new(0.0, 0.0, 0.0));
    }
}

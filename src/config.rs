//! Configuration primitives for the ADXL345 driver.

use crate::params::{BandwidthRate, Range};

/// User-facing configuration for the ADXL345 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Bandwidth / output data rate selection.
    pub rate: BandwidthRate,
    /// Measurement range selection.
    pub range: Range,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the bandwidth rate.
    pub fn rate(mut self, rate: BandwidthRate) -> Self {
        self.config.rate = rate;
        self
    }

    /// Overrides the measurement range.
    pub fn range(mut self, range: Range) -> Self {
        self.config.range = range;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate: BandwidthRate::Bw100Hz,
            range: Range::G2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_100hz_2g() {
        let config = Config::default();
        assert_eq!(config.rate, BandwidthRate::Bw100Hz);
        assert_eq!(config.range, Range::G2);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = Config::new().rate(BandwidthRate::Bw800Hz).range(Range::G16).build();
        assert_eq!(config.rate, BandwidthRate::Bw800Hz);
        assert_eq!(config.range, Range::G16);
    }
}

//! Raw sample decoding and unit conversion.

/// Typical full-resolution scale factor in g/LSB.
pub const SCALE_G_PER_LSB: f64 = 0.0039;

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY_MS2: f64 = 9.80665;

/// Decimal places kept on converted values.
pub const DECIMAL_PLACES: i32 = 4;

/// Decodes one axis from its `DATAx0`/`DATAx1` pair.
#[inline]
pub fn decode_axis(lsb: u8, msb: u8) -> i16 {
    i16::from_le_bytes([lsb, msb])
}

/// Decodes the six data bytes starting at `DATAX0` into X, Y, Z counts.
pub fn decode_axes(raw: &[u8; 6]) -> [i16; 3] {
    [
        decode_axis(raw[0], raw[1]),
        decode_axis(raw[2], raw[3]),
        decode_axis(raw[4], raw[5]),
    ]
}

/// Rounds half up to `places` decimals: `floor(value * 10^places + 0.5) / 10^places`.
///
/// Ties on negative values move toward positive infinity, so `-2.5` at zero
/// places becomes `-2.0`, not `-3.0`.
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let shift = libm::pow(10.0, places as f64);
    libm::floor(value * shift + 0.5) / shift
}

/// Converts a raw count to g.
pub fn counts_to_g(counts: i16) -> f64 {
    round_half_up(counts as f64 * SCALE_G_PER_LSB, DECIMAL_PLACES)
}

/// Converts a value in g to m/s².
pub fn g_to_ms2(g: f64) -> f64 {
    round_half_up(g * STANDARD_GRAVITY_MS2, DECIMAL_PLACES)
}

//! Theme palette and RGB interpolation for lines and dots.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// An opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`.
    #[must_use]
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => Some(Self::new(
                parse_channel(&hex[0..1].repeat(2))?,
                parse_channel(&hex[1..2].repeat(2))?,
                parse_channel(&hex[2..3].repeat(2))?,
            )),
            6 => Some(Self::new(
                parse_channel(&hex[0..2])?,
                parse_channel(&hex[2..4])?,
                parse_channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self::new(
            lerp_channel(self.r, other.r, t),
            lerp_channel(self.g, other.g, t),
            lerp_channel(self.b, other.b, t),
        )
    }

    /// CSS `rgba()` string with `alpha` clamped to `[0, 1]`.
    #[must_use]
    pub fn css_rgba(self, alpha: f64) -> String {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        format!("rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
    }
}

fn parse_channel(pair: &str) -> Option<u8> {
    match u8::from_str_radix(pair, 16) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let a = f64::from(from);
    let b = f64::from(to);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

/// The two theme colors the mesh blends between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
}

/// Electric cyan.
pub const DEFAULT_PRIMARY: Rgb = Rgb::new(0, 240, 255);
/// Deep violet.
pub const DEFAULT_SECONDARY: Rgb = Rgb::new(123, 47, 247);

impl Default for Palette {
    fn default() -> Self {
        Self { primary: DEFAULT_PRIMARY, secondary: DEFAULT_SECONDARY }
    }
}

impl Palette {
    /// Build a palette from hex strings, keeping the default for any value
    /// that does not parse.
    #[must_use]
    pub fn from_hex(primary: &str, secondary: &str) -> Self {
        Self {
            primary: Rgb::parse_hex(primary).unwrap_or(DEFAULT_PRIMARY),
            secondary: Rgb::parse_hex(secondary).unwrap_or(DEFAULT_SECONDARY),
        }
    }

    /// Like [`Palette::from_hex`], with an absent value keeping its default.
    #[must_use]
    pub fn from_optional_hex(primary: Option<&str>, secondary: Option<&str>) -> Self {
        Self::from_hex(primary.unwrap_or_default(), secondary.unwrap_or_default())
    }

    /// Color at `t` along primary → secondary.
    #[must_use]
    pub fn blend(&self, t: f64) -> Rgb {
        self.primary.lerp(self.secondary, t)
    }
}

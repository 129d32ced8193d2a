//! Compartment display color.
//!
//! The engine never renders anything itself; it only carries one `Rgb` per
//! compartment so rendering layers can read an agent's current color without
//! knowing the catalog.

/// An 8-bit-per-channel RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }
}

impl std::fmt::Display for Rgb {
    /// CSS-style hex rendering, e.g. `#2e8b57`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

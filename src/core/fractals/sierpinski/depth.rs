/// Recursion depth of the Sierpinski subdivision, always within `0..=9`.
///
/// The bound keeps a render at no more than `3^9` leaf triangles. It is
/// enforced here, where the depth changes, rather than inside the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SierpinskiDepth(u8);

impl SierpinskiDepth {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(9);
    pub const DEFAULT: Self = Self(5);

    /// Clamps `depth` into the valid range.
    #[must_use]
    pub fn new(depth: i64) -> Self {
        Self(depth.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for SierpinskiDepth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for SierpinskiDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! crates/treewalk/src/config.rs
//! Walker configuration.

/// Recursion ceiling used when nothing else is configured.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Settings for a [`crate::TreeWalker`].
///
/// With the `serde` feature, missing fields fall back to their defaults so a
/// partial document such as `{}` deserializes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkConfig {
    /// Maximum number of nested descents per branch. A walk starting at
    /// depth `max_depth` lists nothing.
    pub max_depth: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl WalkConfig {
    /// Returns a copy with the recursion ceiling replaced.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

//! Configuration for plan resolution.

/// Default maximum depth of the rendered tree.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for the resolver.
///
/// Controls how deep a reference chain may grow before resolution gives up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Deepest level a definition body may be expanded at.
    ///
    /// The root name sits at depth 0 and its body at depth 1, so a limit
    /// of 0 rejects every plan.
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ResolverConfig {
    /// Creates a configuration with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the maximum depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

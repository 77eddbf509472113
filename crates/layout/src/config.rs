#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// How many macro / script levels the markup engine will descend into.
    ///
    /// Deeper groups are dropped with a warning. Markup comes from a model,
    /// not a human, and a runaway `\sqrt{\sqrt{...}}` chain should cost a
    /// missing stroke rather than the stack.
    ///
    /// Defaults to `64`.
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl LayoutConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Settings for one document composition.
///
/// The grid layout is supplied separately through
/// [`Composer::with_grid`](crate::Composer::with_grid).
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    /// How many primary symbols may be nested inside an anchor, one inside the
    /// next. Letters beyond this become decals.
    pub nesting_depth: usize,
    /// Render a few whole words (`the`, `that`, `they`) as a single symbol.
    pub word_overrides: bool,
    /// Uniform scale applied when the document is emitted. Must be positive
    /// and finite; [`Composer::finish`](crate::Composer::finish) rejects
    /// anything else.
    pub scale: f64,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            nesting_depth: 1,
            word_overrides: true,
            scale: 1.0,
        }
    }
}

impl ComposeOptions {
    pub fn with_nesting_depth(mut self, nesting_depth: usize) -> Self {
        self.nesting_depth = nesting_depth;
        self
    }

    pub fn with_word_overrides(mut self, word_overrides: bool) -> Self {
        self.word_overrides = word_overrides;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

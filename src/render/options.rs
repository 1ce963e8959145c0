//! Rendering options configuration.

/// Highest heading level wiki markup supports (`h6.`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Options for rendering wiki markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit `!name!` placeholders for named pictures
    pub include_pictures: bool,

    /// Highest heading style rendered as a heading (1-6); paragraphs styled
    /// with a deeper level are rendered as plain paragraphs
    pub max_heading_level: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_pictures: true,
            max_heading_level: MAX_HEADING_LEVEL,
        }
    }
}

impl RenderOptions {
    /// Create default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable picture placeholders.
    pub fn with_pictures(mut self, include: bool) -> Self {
        self.include_pictures = include;
        self
    }

    /// Set the deepest heading level, clamped to 1-6.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, MAX_HEADING_LEVEL);
        self
    }
}

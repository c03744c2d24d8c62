/// Session-scoped view configuration.
///
/// Every session starts from these defaults; nothing is persisted across
/// runs. The fields live on the session rather than in process-wide state
/// so a future second window gets its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub font_size: u32,
    pub dark_mode: bool,
}

pub const DEFAULT_FONT_SIZE: u32 = 12;
pub const MIN_FONT_SIZE: u32 = 1;

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            dark_mode: false,
        }
    }
}

impl SessionConfig {
    /// Grow the font by one point. Returns the new size.
    pub fn zoom_in(&mut self) -> u32 {
        self.font_size += 1;
        self.font_size
    }

    /// Shrink the font by one point; shrinking below the minimum is a no-op.
    /// Returns the new size.
    pub fn zoom_out(&mut self) -> u32 {
        if self.font_size > MIN_FONT_SIZE {
            self.font_size -= 1;
        }
        self.font_size
    }

    /// Restore the default font size. Returns the new size.
    pub fn reset_zoom(&mut self) -> u32 {
        self.font_size = DEFAULT_FONT_SIZE;
        self.font_size
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}

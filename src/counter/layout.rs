use super::config::CounterSettings;

/// Pixel geometry derived from the settings once, at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterLayout {
    /// Vertical distance between two consecutive glyph rows in a strip
    pub gap: f32,
    /// Width of one digit slot
    pub slot_width: f32,
    /// Height of one strip: half the window plus ten glyph rows
    pub strip_height: f32,
    /// Visible window height
    pub window_height: f32,
}

impl CounterLayout {
    pub fn compute(settings: &CounterSettings) -> Self {
        let gap = (settings.padding + settings.font_size / 2.0).ceil();
        Self {
            gap,
            slot_width: (settings.width / settings.digits as f32).ceil(),
            strip_height: settings.height / 2.0 + 10.0 * gap,
            window_height: settings.height,
        }
    }

    /// Vertical center of glyph `digit` inside a strip.
    pub fn glyph_row(&self, digit: u8) -> f32 {
        self.window_height / 2.0 + digit as f32 * self.gap
    }

    /// Strip offset that centers `digit` in the visible window.
    pub fn offset_for(&self, digit: u8) -> f32 {
        -(digit as f32) * self.gap
    }
}

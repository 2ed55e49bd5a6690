//! Counter configuration: the raw, all-optional form callers write and the
//! resolved settings the widget actually uses.

use std::time::Duration;

use bevy::color::{Color, Srgba};
use serde::Deserialize;

const DEFAULT_BACKGROUND: u32 = 0xffffff;
const DEFAULT_FONT_COLOR: &str = "#000000";
const DEFAULT_FONT_FAMILY: &str = "Arial";
const DEFAULT_FONT_SIZE: f32 = 24.0;
const DEFAULT_DIGITS: usize = 6;
const DEFAULT_SHADE: f32 = 0.9;
const DEFAULT_DURATION_MS: f32 = 1000.0;

/// Raw counter configuration. Every field is optional.
///
/// Keys are camelCase when deserialized, so a layout file can say
/// `{ "fontSize": 32, "backgroundColor": 13369344 }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    /// Width in pixels. Default: digits * (font_size + 4)
    pub width: Option<f32>,
    /// Height in pixels. Default and maximum: font_size * 2
    pub height: Option<f32>,
    /// Number of digit slots. Default: 6
    pub digits: Option<usize>,
    /// Vertical space between stacked glyphs. Default: round(font_size / 2)
    pub padding: Option<f32>,
    /// Glyph size in pixels. Default: 24
    pub font_size: Option<f32>,
    /// Glyph color in html hex form, e.g. `"#ff00ff"`. Default: `"#000000"`
    pub font_color: Option<String>,
    /// Strip background as 0xRRGGBB. Default: 0xffffff
    pub background_color: Option<u32>,
    /// Alpha of the shade overlay, 0 disables it. Default: 0.9
    pub shade: Option<f32>,
    /// Milliseconds to roll to a new number. Default: 1000
    pub duration: Option<f32>,
    /// Font family for the glyphs. Default: `"Arial"`
    pub font_family: Option<String>,
}

/// Fully resolved configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSettings {
    pub width: f32,
    pub height: f32,
    pub digits: usize,
    pub padding: f32,
    pub font_size: f32,
    pub font_color: String,
    pub background_color: u32,
    pub shade: f32,
    pub duration_ms: f32,
    pub font_family: String,
}

/// Keeps a size only when it is usable (finite and strictly positive).
fn usable(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

impl CounterSettings {
    /// Resolve a raw config into settings. Never fails: degenerate sizes fall
    /// back to their defaults, `shade` is clamped to [0, 1] and a negative
    /// duration becomes 0.
    pub fn resolve(config: &CounterConfig) -> Self {
        let font_size = usable(config.font_size).unwrap_or(DEFAULT_FONT_SIZE);
        let padding = usable(config.padding).unwrap_or((font_size / 2.0).round());
        let digits = config.digits.filter(|d| *d > 0).unwrap_or(DEFAULT_DIGITS);
        let height = usable(config.height)
            .unwrap_or(font_size * 2.0)
            .min(font_size * 2.0);
        let width = usable(config.width).unwrap_or(digits as f32 * (font_size + 4.0));

        let shade = match config.shade {
            Some(s) if s.is_finite() => s.clamp(0.0, 1.0),
            Some(_) => 0.0,
            None => DEFAULT_SHADE,
        };
        let duration_ms = match config.duration {
            Some(d) if d.is_finite() => d.max(0.0),
            Some(_) => 0.0,
            None => DEFAULT_DURATION_MS,
        };

        let font_color = match &config.font_color {
            Some(hex) if Srgba::hex(hex).is_ok() => hex.clone(),
            Some(hex) => {
                log::warn!("invalid counter font color {hex:?}, using {DEFAULT_FONT_COLOR}");
                DEFAULT_FONT_COLOR.to_string()
            }
            None => DEFAULT_FONT_COLOR.to_string(),
        };

        Self {
            width,
            height,
            digits,
            padding,
            font_size,
            font_color,
            background_color: config.background_color.unwrap_or(DEFAULT_BACKGROUND),
            shade,
            duration_ms,
            font_family: config
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        }
    }

    /// Glyph color as an engine color.
    pub fn glyph_color(&self) -> Color {
        Srgba::hex(&self.font_color)
            .map(Color::Srgba)
            .unwrap_or(Color::BLACK)
    }

    /// Roll duration. Values too large for a `Duration` saturate.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.duration_ms / 1000.0).unwrap_or(Duration::MAX)
    }

    /// Background color as an engine color.
    pub fn background(&self) -> Color {
        hex_to_color(self.background_color)
    }
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self::resolve(&CounterConfig::default())
    }
}

/// Convert a 0xRRGGBB integer into an opaque color.
pub fn hex_to_color(rgb: u32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::srgb_u8(r, g, b)
}

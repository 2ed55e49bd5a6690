//! Mask and shade overlay: the window every strip is clipped to and the
//! darkening ramps drawn over it.

use bevy::color::Color;
use bevy::math::{Rect, Vec2};

use super::config::CounterSettings;
use super::host::{CounterHost, Paint};

/// Rectangle of the visible window with its top-left corner at `top_left`.
pub fn window_rect(settings: &CounterSettings, top_left: Vec2) -> Rect {
    Rect::from_corners(
        top_left,
        top_left + Vec2::new(settings.width, settings.height),
    )
}

/// The two ramps of the overlay: darkest at the top and bottom edges, clear
/// at the center line.
pub fn shade_paints(settings: &CounterSettings) -> [Paint; 2] {
    let half = settings.height / 2.0;
    [
        Paint::Ramp {
            rect: Rect::new(0.0, 0.0, settings.width, half),
            color: Color::BLACK,
            top_alpha: settings.shade,
            bottom_alpha: 0.0,
        },
        Paint::Ramp {
            rect: Rect::new(0.0, half, settings.width, settings.height),
            color: Color::BLACK,
            top_alpha: 0.0,
            bottom_alpha: settings.shade,
        },
    ]
}

/// Build the overlay, or nothing at all when shade is disabled.
pub fn build_shade<H: CounterHost>(
    host: &mut H,
    settings: &CounterSettings,
    top_left: Vec2,
) -> Option<H::Id> {
    if settings.shade <= 0.0 {
        return None;
    }
    let overlay = host.create_image(window_rect(settings, top_left));
    for paint in &shade_paints(settings) {
        host.paint(overlay, paint);
    }
    Some(overlay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::config::CounterConfig;
    use crate::counter::host::recording::RecordingHost;

    #[test]
    fn test_ramps_are_mirrored() {
        let settings = CounterSettings::default();
        let [top, bottom] = shade_paints(&settings);

        let Paint::Ramp { rect, top_alpha, bottom_alpha, .. } = top else {
            panic!("expected ramp");
        };
        assert_eq!(rect, Rect::new(0.0, 0.0, 168.0, 24.0));
        assert_eq!((top_alpha, bottom_alpha), (0.9, 0.0));

        let Paint::Ramp { rect, top_alpha, bottom_alpha, .. } = bottom else {
            panic!("expected ramp");
        };
        assert_eq!(rect, Rect::new(0.0, 24.0, 168.0, 48.0));
        assert_eq!((top_alpha, bottom_alpha), (0.0, 0.9));
    }

    #[test]
    fn test_no_overlay_without_shade() {
        let settings = CounterSettings::resolve(&CounterConfig {
            shade: Some(0.0),
            ..Default::default()
        });
        let mut host = RecordingHost::default();

        assert!(build_shade(&mut host, &settings, Vec2::ZERO).is_none());
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_overlay_covers_window() {
        let settings = CounterSettings::default();
        let mut host = RecordingHost::default();

        let overlay = build_shade(&mut host, &settings, Vec2::new(5.0, 7.0)).unwrap();
        assert_eq!(host.position(overlay), Vec2::new(5.0, 7.0));
        assert_eq!(host.paints(overlay).len(), 2);
    }
}

//! Digit strips: one tall image per slot holding every glyph the slot can show.
//!
//! Rows from top to bottom are a fake '9', the digits '0'..='9', then a fake
//! '0', so a roll from 9 to 0 (or back) has something to scroll through.

use bevy::color::Color;
use bevy::math::{Rect, Vec2};

use super::config::CounterSettings;
use super::host::{CounterHost, GlyphStyle, Paint, Stroke};
use super::layout::CounterLayout;

/// Number of glyph rows in a strip, wrap fakes included.
pub const STRIP_ROWS: usize = 12;

const OUTLINE: Stroke = Stroke {
    width: 1.0,
    color: Color::srgba(0.0, 0.0, 0.0, 0.9),
};

/// The glyphs of one strip with their vertical centers, top to bottom.
pub fn glyph_rows(layout: &CounterLayout) -> [(char, f32); STRIP_ROWS] {
    let mut rows = [('0', 0.0); STRIP_ROWS];
    rows[0] = ('9', layout.glyph_row(0) - layout.gap);
    for digit in 0..10u8 {
        rows[digit as usize + 1] = (char::from(b'0' + digit), layout.glyph_row(digit));
    }
    rows[STRIP_ROWS - 1] = ('0', layout.strip_height);
    rows
}

/// Draw operations for one strip. Identical for every slot of a counter.
pub fn strip_paints(settings: &CounterSettings, layout: &CounterLayout) -> Vec<Paint> {
    let style = GlyphStyle {
        family: settings.font_family.clone(),
        size: settings.font_size,
        bold: true,
        color: settings.glyph_color(),
    };
    let center_x = layout.slot_width / 2.0;

    let background = Paint::Fill {
        rect: Rect::new(0.0, 0.0, layout.slot_width, layout.strip_height),
        color: settings.background(),
        stroke: Some(OUTLINE),
    };

    std::iter::once(background)
        .chain(glyph_rows(layout).into_iter().map(|(glyph, y)| Paint::Glyph {
            glyph,
            center: Vec2::new(center_x, y),
            style: style.clone(),
        }))
        .collect()
}

/// Build the strip images for every slot and clip them to `mask`.
///
/// `top_left` is the counter's draw offset; slot `i` starts `i` slot widths
/// to its right.
pub fn build_strips<H: CounterHost>(
    host: &mut H,
    settings: &CounterSettings,
    layout: &CounterLayout,
    top_left: Vec2,
    mask: H::Id,
) -> Vec<H::Id> {
    let paints = strip_paints(settings, layout);

    (0..settings.digits)
        .map(|i| {
            let min = top_left + Vec2::new(i as f32 * layout.slot_width, 0.0);
            let image = host.create_image(Rect::from_corners(
                min,
                min + Vec2::new(layout.slot_width, layout.strip_height),
            ));
            for paint in &paints {
                host.paint(image, paint);
            }
            host.apply_mask(image, mask);
            image
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::host::recording::RecordingHost;

    #[test]
    fn test_glyph_rows_order_and_spacing() {
        let layout = CounterLayout::compute(&CounterSettings::default());
        let rows = glyph_rows(&layout);

        let glyphs: String = rows.iter().map(|(g, _)| *g).collect();
        assert_eq!(glyphs, "901234567890");

        // wrap '9' sits one gap above '0'
        assert_eq!(rows[0].1, 24.0 - 24.0);
        assert_eq!(rows[1].1, 24.0);
        assert_eq!(rows[10].1, 24.0 + 9.0 * 24.0);
        // wrap '0' sits at the bottom edge of the strip
        assert_eq!(rows[11].1, layout.strip_height);
    }

    #[test]
    fn test_strip_paints_start_with_background() {
        let settings = CounterSettings::default();
        let layout = CounterLayout::compute(&settings);
        let paints = strip_paints(&settings, &layout);

        assert_eq!(paints.len(), 1 + STRIP_ROWS);
        match &paints[0] {
            Paint::Fill { rect, color, stroke } => {
                assert_eq!(rect.width(), layout.slot_width);
                assert_eq!(rect.height(), layout.strip_height);
                assert_eq!(*color, Color::srgb_u8(255, 255, 255));
                assert!(stroke.is_some());
            }
            other => panic!("expected background fill, got {other:?}"),
        }
        for paint in &paints[1..] {
            let Paint::Glyph { center, style, .. } = paint else {
                panic!("expected glyph, got {paint:?}");
            };
            assert_eq!(center.x, layout.slot_width / 2.0);
            assert!(style.bold);
            assert_eq!(style.family, "Arial");
            assert_eq!(style.size, 24.0);
        }
    }

    #[test]
    fn test_build_strips_places_slots_side_by_side() {
        let settings = CounterSettings::default();
        let layout = CounterLayout::compute(&settings);
        let mut host = RecordingHost::default();
        let mask = 99;

        let strips = build_strips(&mut host, &settings, &layout, Vec2::new(10.0, 20.0), mask);

        assert_eq!(strips.len(), 6);
        for (i, id) in strips.iter().enumerate() {
            assert_eq!(
                host.position(*id),
                Vec2::new(10.0 + i as f32 * 28.0, 20.0)
            );
            assert_eq!(host.masks[id], mask);
            assert_eq!(host.paints(*id).len(), 1 + STRIP_ROWS);
        }
    }
}

//! `CounterHost` over Bevy UI nodes.
//!
//! Images are absolutely positioned nodes, paints become child nodes, and the
//! mask is a node with clipped overflow that strips are parented to.

use bevy::prelude::*;

use crate::counter::{CounterHost, GlyphStyle, Paint, Stroke};

use super::CanvasPosition;

/// Number of solid bands a ramp is approximated with.
const RAMP_BANDS: usize = 12;

/// Overlay images sit above the masked strips.
const OVERLAY_Z: i32 = 1;

pub struct UiCanvas<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    font: Handle<Font>,
}

impl<'a, 'w, 's> UiCanvas<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, font: Handle<Font>) -> Self {
        Self { commands, font }
    }

    fn absolute(rect: Rect) -> Node {
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(rect.min.x),
            top: Val::Px(rect.min.y),
            width: Val::Px(rect.width()),
            height: Val::Px(rect.height()),
            ..default()
        }
    }

    fn spawn_fill(&mut self, image: Entity, rect: Rect, color: Color, stroke: Option<Stroke>) {
        let Some(stroke) = stroke else {
            self.commands
                .spawn((Self::absolute(rect), BackgroundColor(color), ChildOf(image)));
            return;
        };

        // outer node in the stroke color, inner node inset by the stroke width
        let inner = Rect::new(
            stroke.width,
            stroke.width,
            rect.width() - stroke.width,
            rect.height() - stroke.width,
        );
        self.commands.spawn((
            Self::absolute(rect),
            BackgroundColor(stroke.color),
            ChildOf(image),
            children![(Self::absolute(inner), BackgroundColor(color))],
        ));
    }

    fn spawn_glyph(&mut self, image: Entity, glyph: char, center: Vec2, style: &GlyphStyle) {
        // TextFont has no weight; bold comes from whichever font the canvas was given
        let cell = style.size * 2.0;
        let bounds = Rect::from_center_size(center, Vec2::splat(cell));
        self.commands.spawn((
            Node {
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..Self::absolute(bounds)
            },
            ChildOf(image),
            children![(
                Text::new(glyph.to_string()),
                TextFont {
                    font: self.font.clone(),
                    font_size: style.size,
                    ..default()
                },
                TextColor(style.color),
            )],
        ));
    }

    fn spawn_ramp(&mut self, image: Entity, rect: Rect, color: Color, top_alpha: f32, bottom_alpha: f32) {
        let band = 100.0 / RAMP_BANDS as f32;
        self.commands
            .spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    ..Self::absolute(rect)
                },
                ChildOf(image),
            ))
            .with_children(|bands| {
                for i in 0..RAMP_BANDS {
                    let t = (i as f32 + 0.5) / RAMP_BANDS as f32;
                    let alpha = top_alpha + (bottom_alpha - top_alpha) * t;
                    bands.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(band),
                            ..default()
                        },
                        BackgroundColor(color.with_alpha(alpha)),
                    ));
                }
            });
    }
}

impl CounterHost for UiCanvas<'_, '_, '_> {
    type Id = Entity;

    fn create_image(&mut self, rect: Rect) -> Entity {
        self.commands
            .spawn((
                Self::absolute(rect),
                CanvasPosition(rect.min),
                ZIndex(OVERLAY_Z),
                Name::new("Counter Image"),
            ))
            .id()
    }

    fn paint(&mut self, image: Entity, paint: &Paint) {
        match paint {
            Paint::Fill { rect, color, stroke } => self.spawn_fill(image, *rect, *color, *stroke),
            Paint::Glyph { glyph, center, style } => self.spawn_glyph(image, *glyph, *center, style),
            Paint::Ramp {
                rect,
                color,
                top_alpha,
                bottom_alpha,
            } => self.spawn_ramp(image, *rect, *color, *top_alpha, *bottom_alpha),
        }
    }

    fn create_mask(&mut self, rect: Rect) -> Entity {
        self.commands
            .spawn((
                Node {
                    overflow: Overflow::clip(),
                    ..Self::absolute(rect)
                },
                CanvasPosition(rect.min),
                Name::new("Counter Mask"),
            ))
            .id()
    }

    fn apply_mask(&mut self, image: Entity, mask: Entity) {
        // inside the mask the default stacking order is enough
        self.commands
            .entity(image)
            .remove::<ZIndex>()
            .insert(ChildOf(mask));
    }

    fn move_to(&mut self, id: Entity, position: Vec2) {
        self.commands.entity(id).insert(CanvasPosition(position));
    }

    fn destroy(&mut self, id: Entity) {
        self.commands.entity(id).try_despawn();
    }
}

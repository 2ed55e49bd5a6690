//! The seam between the counter and whatever engine draws it.
//!
//! A counter never touches engine objects directly. It asks its host to create
//! images and a clip mask, sends plain [`Paint`] values to draw into them, and
//! later moves or destroys them by id.

use std::fmt::Debug;

use bevy::color::Color;
use bevy::math::{Rect, Vec2};

/// Outline drawn inside the edge of a filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

/// Font description for a single glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphStyle {
    pub family: String,
    pub size: f32,
    pub bold: bool,
    pub color: Color,
}

/// One draw operation into an image, in image-local pixels (y down).
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Solid rectangle, optionally outlined
    Fill {
        rect: Rect,
        color: Color,
        stroke: Option<Stroke>,
    },
    /// A single character centered on `center`
    Glyph {
        glyph: char,
        center: Vec2,
        style: GlyphStyle,
    },
    /// Rectangle whose alpha goes linearly from `top_alpha` to `bottom_alpha`
    Ramp {
        rect: Rect,
        color: Color,
        top_alpha: f32,
        bottom_alpha: f32,
    },
}

/// Capabilities a counter needs from its rendering host.
pub trait CounterHost {
    type Id: Copy + Eq + Debug;

    /// Create an empty image covering `rect` (top-left anchored).
    fn create_image(&mut self, rect: Rect) -> Self::Id;

    fn paint(&mut self, image: Self::Id, paint: &Paint);

    /// Create a rectangular clip region.
    fn create_mask(&mut self, rect: Rect) -> Self::Id;

    /// Clip `image` to `mask`. The image keeps its own absolute position.
    fn apply_mask(&mut self, image: Self::Id, mask: Self::Id);

    /// Move an image or mask so its top-left corner is at `position`.
    fn move_to(&mut self, id: Self::Id, position: Vec2);

    fn destroy(&mut self, id: Self::Id);
}

#[cfg(test)]
pub(crate) mod recording {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum HostCall {
        CreateImage(u32, Rect),
        Paint(u32, Paint),
        CreateMask(u32, Rect),
        ApplyMask(u32, u32),
        MoveTo(u32, Vec2),
        Destroy(u32),
    }

    /// Host that records every call and tracks where things are.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        next: u32,
        pub calls: Vec<HostCall>,
        pub positions: HashMap<u32, Vec2>,
        pub masks: HashMap<u32, u32>,
    }

    impl RecordingHost {
        fn alloc(&mut self, rect: Rect) -> u32 {
            let id = self.next;
            self.next += 1;
            self.positions.insert(id, rect.min);
            id
        }

        pub fn live(&self) -> usize {
            self.positions.len()
        }

        pub fn position(&self, id: u32) -> Vec2 {
            self.positions[&id]
        }

        pub fn paints(&self, image: u32) -> Vec<&Paint> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    HostCall::Paint(id, paint) if *id == image => Some(paint),
                    _ => None,
                })
                .collect()
        }

        pub fn clear_calls(&mut self) {
            self.calls.clear();
        }
    }

    impl CounterHost for RecordingHost {
        type Id = u32;

        fn create_image(&mut self, rect: Rect) -> u32 {
            let id = self.alloc(rect);
            self.calls.push(HostCall::CreateImage(id, rect));
            id
        }

        fn paint(&mut self, image: u32, paint: &Paint) {
            self.calls.push(HostCall::Paint(image, paint.clone()));
        }

        fn create_mask(&mut self, rect: Rect) -> u32 {
            let id = self.alloc(rect);
            self.calls.push(HostCall::CreateMask(id, rect));
            id
        }

        fn apply_mask(&mut self, image: u32, mask: u32) {
            self.masks.insert(image, mask);
            self.calls.push(HostCall::ApplyMask(image, mask));
        }

        fn move_to(&mut self, id: u32, position: Vec2) {
            assert!(self.positions.contains_key(&id), "moved unknown id {id}");
            self.positions.insert(id, position);
            self.calls.push(HostCall::MoveTo(id, position));
        }

        fn destroy(&mut self, id: u32) {
            assert!(self.positions.remove(&id).is_some(), "destroyed unknown id {id}");
            self.masks.remove(&id);
            self.calls.push(HostCall::Destroy(id));
        }
    }
}

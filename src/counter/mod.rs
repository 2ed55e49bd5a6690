//! Odometer-style digit counter.
//!
//! Each digit slot is a tall strip holding every glyph the slot can show,
//! clipped to a shared window. Setting a number rolls each strip to the row of
//! its digit with a per-slot tween that [`Counter::update`] advances every
//! frame.

pub mod config;
pub mod host;
pub mod layout;
pub mod shade;
pub mod strip;
pub mod tween;

use std::time::Duration;

use bevy::math::Vec2;

pub use config::{CounterConfig, CounterSettings};
pub use host::{CounterHost, GlyphStyle, Paint, Stroke};
pub use layout::CounterLayout;

use shade::{build_shade, window_rect};
use strip::build_strips;
use tween::SlotTween;

#[derive(Debug, Clone)]
struct Slot<Id> {
    image: Id,
    /// Top-left of the strip when its offset is zero
    base: Vec2,
    /// Current scroll offset relative to `base` (0 shows '0', -d*gap shows d)
    offset: f32,
    tween: Option<SlotTween>,
}

impl<Id: Copy> Slot<Id> {
    fn position(&self) -> Vec2 {
        self.base + Vec2::new(0.0, self.offset)
    }
}

/// An analog counter drawn through a [`CounterHost`].
///
/// The counter owns the ids of everything it created; call
/// [`Counter::destroy`] with the same host to release them.
#[derive(Debug)]
pub struct Counter<Id> {
    settings: CounterSettings,
    layout: CounterLayout,
    duration: Duration,
    slots: Vec<Slot<Id>>,
    mask: Id,
    mask_position: Vec2,
    overlay: Option<Id>,
    x: f32,
    y: f32,
    origin: Vec2,
    top_left: Vec2,
}

/// Decimal digits of `number` left-padded with zeros to `width`.
///
/// Numbers wider than `width` keep their lowest `width` digits, the way a
/// mechanical odometer rolls over.
pub fn padded_digits(number: u64, width: usize) -> Vec<u8> {
    let text = format!("{number:0>width$}");
    let skip = text.len().saturating_sub(width);
    text.bytes().skip(skip).map(|b| b - b'0').collect()
}

impl<Id: Copy + Eq + std::fmt::Debug> Counter<Id> {
    /// Build a counter anchored at (`x`, `y`) with origin (0, 0).
    pub fn new<H>(host: &mut H, x: f32, y: f32, config: &CounterConfig) -> Self
    where
        H: CounterHost<Id = Id>,
    {
        let settings = CounterSettings::resolve(config);
        let layout = CounterLayout::compute(&settings);
        let top_left = Vec2::new(x, y);

        let mask = host.create_mask(window_rect(&settings, top_left));
        let slots = build_strips(host, &settings, &layout, top_left, mask)
            .into_iter()
            .enumerate()
            .map(|(i, image)| Slot {
                image,
                base: top_left + Vec2::new(i as f32 * layout.slot_width, 0.0),
                offset: 0.0,
                tween: None,
            })
            .collect();
        let overlay = build_shade(host, &settings, top_left);

        log::debug!(
            "counter built at ({x}, {y}): {} digits, gap {}, slot {}x{}",
            settings.digits,
            layout.gap,
            layout.slot_width,
            layout.strip_height
        );

        Self {
            duration: settings.duration(),
            settings,
            layout,
            slots,
            mask,
            mask_position: top_left,
            overlay,
            x,
            y,
            origin: Vec2::ZERO,
            top_left,
        }
    }

    /// Roll every slot toward the digits of `number`.
    ///
    /// Slots already showing (or already rolling to) their digit are left
    /// alone. A slot that is mid-roll toward another digit is retargeted from
    /// where it currently is.
    pub fn set_number(&mut self, number: u64) {
        let digits = padded_digits(number, self.settings.digits);
        if number.checked_ilog10().unwrap_or(0) as usize + 1 > self.settings.digits {
            log::warn!(
                "{number} is wider than {} digits, showing the lowest digits only",
                self.settings.digits
            );
        }

        for (slot, digit) in self.slots.iter_mut().zip(digits) {
            let target = self.layout.offset_for(digit);
            match &slot.tween {
                Some(tween) if tween.to == target => continue,
                None if slot.offset == target => continue,
                _ => {}
            }
            slot.tween = Some(SlotTween::new(slot.offset, target, self.duration));
        }
    }

    /// Advance in-flight rolls by `dt` and move their strips.
    pub fn update<H>(&mut self, dt: Duration, host: &mut H)
    where
        H: CounterHost<Id = Id>,
    {
        for slot in &mut self.slots {
            let Some(tween) = slot.tween.as_mut() else {
                continue;
            };
            slot.offset = tween.advance(dt);
            if tween.is_finished() {
                slot.tween = None;
            }
            host.move_to(slot.image, slot.position());
        }
    }

    /// Set the relative origin; `origin_y` defaults to `origin_x`.
    ///
    /// Values outside [0, 1] are accepted and shift the counter accordingly.
    pub fn set_origin<H>(&mut self, host: &mut H, origin_x: f32, origin_y: Option<f32>)
    where
        H: CounterHost<Id = Id>,
    {
        self.origin = Vec2::new(origin_x, origin_y.unwrap_or(origin_x));
        self.set_position(host, Some(self.x), Some(self.y));
    }

    /// Move the anchor. An omitted axis keeps its current value.
    pub fn set_position<H>(&mut self, host: &mut H, x: Option<f32>, y: Option<f32>)
    where
        H: CounterHost<Id = Id>,
    {
        let mut delta = Vec2::ZERO;
        if let Some(x) = x {
            let new_x = x - self.origin.x * self.settings.width;
            delta.x = new_x - self.top_left.x;
            self.x = x;
            self.top_left.x = new_x;
        }
        if let Some(y) = y {
            let new_y = y - self.origin.y * self.settings.height;
            delta.y = new_y - self.top_left.y;
            self.y = y;
            self.top_left.y = new_y;
        }
        if delta == Vec2::ZERO {
            return;
        }

        for slot in &mut self.slots {
            slot.base += delta;
            host.move_to(slot.image, slot.position());
        }
        if let Some(overlay) = self.overlay {
            host.move_to(overlay, self.top_left);
        }
        self.mask_position += delta;
        host.move_to(self.mask, self.mask_position);
    }

    /// Cancel every roll and release everything this counter created.
    pub fn destroy<H>(self, host: &mut H)
    where
        H: CounterHost<Id = Id>,
    {
        for slot in self.slots {
            host.destroy(slot.image);
        }
        if let Some(overlay) = self.overlay {
            host.destroy(overlay);
        }
        host.destroy(self.mask);
    }

    pub fn width(&self) -> f32 {
        self.settings.width
    }

    pub fn height(&self) -> f32 {
        self.settings.height
    }

    pub fn digits(&self) -> usize {
        self.settings.digits
    }

    pub fn padding(&self) -> f32 {
        self.settings.padding
    }

    pub fn font_size(&self) -> f32 {
        self.settings.font_size
    }

    pub fn font_color(&self) -> &str {
        &self.settings.font_color
    }

    pub fn background_color(&self) -> u32 {
        self.settings.background_color
    }

    pub fn shade(&self) -> f32 {
        self.settings.shade
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Applies to rolls started after the change.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        self.settings.duration_ms = duration.as_secs_f32() * 1000.0;
    }

    pub fn settings(&self) -> &CounterSettings {
        &self.settings
    }

    pub fn layout(&self) -> &CounterLayout {
        &self.layout
    }

    /// Anchor position as passed to `new`/`set_position`.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Top-left corner of the visible window.
    pub fn top_left(&self) -> Vec2 {
        self.top_left
    }

    pub fn slot_offsets(&self) -> Vec<f32> {
        self.slots.iter().map(|slot| slot.offset).collect()
    }

    pub fn is_animating(&self) -> bool {
        self.slots.iter().any(|slot| slot.tween.is_some())
    }

    pub fn has_shade(&self) -> bool {
        self.overlay.is_some()
    }
}

//! Odometer-style analog counter widget with a Bevy UI binding.

pub mod canvas;
pub mod counter;

pub use canvas::{CanvasFont, CanvasPlugin, CounterWidget, UiCanvas, despawn_counter};
pub use counter::{Counter, CounterConfig, CounterHost, CounterSettings};

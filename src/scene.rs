//! Demo scene: a few counters that roll to random numbers on every click.
//!
//! Keys: Space toggles the origin between top-left and center, arrows nudge
//! the counters, R tears every counter down and builds them again.

use analog_counter::canvas::advance_counters;
use analog_counter::{CanvasFont, CounterConfig, CounterWidget, UiCanvas, despawn_counter};
use bevy::prelude::*;
use rand::prelude::*;
use rand::rng;
use serde::Deserialize;

use crate::input::PointerDown;

const LAYOUT_JSON: &str = include_str!("../assets/counters.json");

/// Pixels moved per arrow key press.
const NUDGE: f32 = 10.0;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid layout json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout has no counters")]
    Empty,
    #[error("counter {index} has an empty range {min}..={max}")]
    EmptyRange { index: usize, min: u64, max: u64 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hint {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CounterEntry {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub origin: f32,
    /// Inclusive range random targets are drawn from
    pub range: (u64, u64),
    #[serde(default)]
    pub config: CounterConfig,
}

/// The demo layout, embedded from `assets/counters.json`.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct DemoLayout {
    pub hint: Option<Hint>,
    pub counters: Vec<CounterEntry>,
}

impl DemoLayout {
    pub fn load() -> Result<Self, LayoutError> {
        Self::from_json(LAYOUT_JSON)
    }

    fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: DemoLayout = serde_json::from_str(json)?;
        if layout.counters.is_empty() {
            return Err(LayoutError::Empty);
        }
        for (index, entry) in layout.counters.iter().enumerate() {
            let (min, max) = entry.range;
            if min > max {
                return Err(LayoutError::EmptyRange { index, min, max });
            }
        }
        Ok(layout)
    }
}

/// Which layout entry a counter was built from.
#[derive(Component, Debug, Clone, Copy)]
pub struct DemoCounter(pub usize);

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        let layout = DemoLayout::load().expect("Failed to parse embedded counters.json");
        app.insert_resource(layout)
            .add_systems(Startup, (spawn_hint, spawn_counters))
            .add_systems(
                Update,
                (roll_on_pointer, keyboard_controls).before(advance_counters),
            );
    }
}

fn spawn_hint(mut commands: Commands, layout: Res<DemoLayout>) {
    let Some(hint) = &layout.hint else {
        return;
    };
    let size = Vec2::new(300.0, 40.0);
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(hint.x - size.x / 2.0),
            top: Val::Px(hint.y - size.y / 2.0),
            width: Val::Px(size.x),
            height: Val::Px(size.y),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        children![(Text::new(hint.text.clone()), TextColor(Color::WHITE))],
    ));
}

fn spawn_counters(mut commands: Commands, layout: Res<DemoLayout>, font: Res<CanvasFont>) {
    for (index, entry) in layout.counters.iter().enumerate() {
        let widget = {
            let mut canvas = UiCanvas::new(&mut commands, font.0.clone());
            let mut widget = CounterWidget::build(&mut canvas, entry.x, entry.y, &entry.config);
            widget.0.set_origin(&mut canvas, entry.origin, None);
            widget
        };
        info!(
            "🔢 Counter {} at ({}, {}): {} digits",
            index,
            entry.x,
            entry.y,
            widget.0.digits()
        );
        commands.spawn((widget, DemoCounter(index), Name::new("Analog Counter")));
    }
}

/// System: every pointer press rolls each counter to a random number in its range.
fn roll_on_pointer(
    mut pointer_downs: MessageReader<PointerDown>,
    layout: Res<DemoLayout>,
    mut counters: Query<(&mut CounterWidget, &DemoCounter)>,
) {
    let mut rng = rng();
    for press in pointer_downs.read() {
        debug!("pointer {} down at {:?}", press.id, press.position);
        for (mut widget, demo) in &mut counters {
            let (min, max) = layout.counters[demo.0].range;
            let number = rng.random_range(min..=max);
            widget.0.set_number(number);
            info!("Counter {} → {}", demo.0, number);
        }
    }
}

fn keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    font: Res<CanvasFont>,
    mut commands: Commands,
    mut counters: Query<(Entity, &mut CounterWidget)>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        for (entity, _) in &counters {
            commands.queue(despawn_counter(entity));
        }
        commands.run_system_cached(spawn_counters);
        info!("Counters rebuilt");
        return;
    }

    let nudge = [
        (KeyCode::ArrowLeft, Vec2::new(-NUDGE, 0.0)),
        (KeyCode::ArrowRight, Vec2::new(NUDGE, 0.0)),
        (KeyCode::ArrowUp, Vec2::new(0.0, -NUDGE)),
        (KeyCode::ArrowDown, Vec2::new(0.0, NUDGE)),
    ]
    .into_iter()
    .filter(|(key, _)| keys.just_pressed(*key))
    .map(|(_, delta)| delta)
    .sum::<Vec2>();
    let toggle_origin = keys.just_pressed(KeyCode::Space);
    if nudge == Vec2::ZERO && !toggle_origin {
        return;
    }

    let mut canvas = UiCanvas::new(&mut commands, font.0.clone());
    for (_, mut widget) in &mut counters {
        let counter = &mut widget.0;
        if toggle_origin {
            let origin = if counter.origin().x == 0.0 { 0.5 } else { 0.0 };
            counter.set_origin(&mut canvas, origin, None);
        }
        if nudge != Vec2::ZERO {
            let target = counter.position() + nudge;
            let x = (nudge.x != 0.0).then_some(target.x);
            let y = (nudge.y != 0.0).then_some(target.y);
            counter.set_position(&mut canvas, x, y);
        }
    }
}

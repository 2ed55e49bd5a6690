use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<PointerDown>()
            .add_systems(Update, (track_cursor_pos, collect_pointer_downs).chain());
    }
}

/// A mouse press or touch start anywhere in the window.
#[derive(Message, Debug, Clone)]
pub struct PointerDown {
    /// Window (logical) coordinates, top-left origin
    pub position: Vec2,
    /// 0 = mouse, >0 = touch id
    pub id: u64,
}

#[derive(Resource, Default, Debug, Clone, Copy)]
struct CursorPos(pub Option<Vec2>);

fn track_cursor_pos(mut ev_cursor: MessageReader<CursorMoved>, mut pos: ResMut<CursorPos>) {
    for e in ev_cursor.read() {
        // last event wins
        pos.0 = Some(e.position);
    }
}

fn collect_pointer_downs(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorPos>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerDown>,
) {
    if mouse_buttons.just_pressed(MouseButton::Left) {
        out.write(PointerDown {
            position: cursor.0.unwrap_or_default(),
            id: 0,
        });
    }

    for ev in touch_events.read() {
        if ev.phase == TouchPhase::Started {
            out.write(PointerDown {
                position: ev.position,
                id: ev.id,
            });
        }
    }
}

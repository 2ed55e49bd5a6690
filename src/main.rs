use bevy::prelude::*;

mod camera;
mod input;
mod scene;

use analog_counter::CanvasPlugin;
use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;
use scene::DemoPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Analog Counter".into(),
            resolution: WindowResolution::new(400, 400),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(CanvasPlugin)
    .add_plugins(DemoPlugin);

    app.run();
}

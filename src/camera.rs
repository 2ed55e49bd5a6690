use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, setup_camera);
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Setup the 2D camera the counters' UI nodes render through.
///
/// UI coordinates are window pixels with the origin at the top-left corner
/// and +Y pointing down, which is what counter positions are expressed in.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

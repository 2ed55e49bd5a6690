//! Bevy binding for the counter: a UI-node canvas implementing
//! [`CounterHost`](crate::counter::CounterHost) plus the systems that tick
//! counters and place their nodes each frame.

pub mod ui_host;
pub mod widget;

use bevy::prelude::*;

pub use ui_host::UiCanvas;
pub use widget::{CounterWidget, advance_counters, despawn_counter};

pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CanvasFont>()
            .add_systems(Update, (advance_counters, place_canvas_nodes).chain());
    }
}

/// Absolute top-left position of a canvas node in window pixels (y down).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CanvasPosition(pub Vec2);

/// Font used for every counter glyph. Defaults to Bevy's built-in font.
#[derive(Resource, Default, Clone)]
pub struct CanvasFont(pub Handle<Font>);

/// System: turn absolute canvas positions into UI offsets relative to the
/// parent canvas node, if any.
pub fn place_canvas_nodes(
    mut nodes: Query<(&CanvasPosition, Option<&ChildOf>, &mut Node)>,
    anchors: Query<&CanvasPosition>,
) {
    for (position, parent, mut node) in &mut nodes {
        let origin = parent
            .and_then(|child_of| anchors.get(child_of.parent()).ok())
            .map_or(Vec2::ZERO, |anchor| anchor.0);
        let local = position.0 - origin;

        let left = Val::Px(local.x);
        let top = Val::Px(local.y);
        if node.left != left || node.top != top {
            node.left = left;
            node.top = top;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_children_are_placed_relative_to_parent() {
        let mut world = World::new();
        let mask = world
            .spawn((CanvasPosition(Vec2::new(100.0, 40.0)), Node::default()))
            .id();
        let strip = world
            .spawn((
                CanvasPosition(Vec2::new(128.0, 16.0)),
                Node::default(),
                ChildOf(mask),
            ))
            .id();

        world.run_system_once(place_canvas_nodes).unwrap();

        let mask_node = world.get::<Node>(mask).unwrap();
        assert_eq!(mask_node.left, Val::Px(100.0));
        assert_eq!(mask_node.top, Val::Px(40.0));

        let strip_node = world.get::<Node>(strip).unwrap();
        assert_eq!(strip_node.left, Val::Px(28.0));
        assert_eq!(strip_node.top, Val::Px(-24.0));
    }
}

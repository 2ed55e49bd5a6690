use bevy::prelude::*;

use crate::counter::{Counter, CounterConfig};

use super::{CanvasFont, UiCanvas};

/// A counter living on a Bevy entity. Its strips, mask and overlay are
/// separate UI entities owned through the counter.
#[derive(Component, Debug)]
pub struct CounterWidget(pub Counter<Entity>);

impl CounterWidget {
    /// Build a counter at (`x`, `y`) (window pixels, y down) on `canvas`.
    pub fn build(canvas: &mut UiCanvas, x: f32, y: f32, config: &CounterConfig) -> Self {
        Self(Counter::new(canvas, x, y, config))
    }
}

/// System: advance every counter's rolls by the frame time.
pub fn advance_counters(
    time: Res<Time>,
    font: Res<CanvasFont>,
    mut commands: Commands,
    mut counters: Query<&mut CounterWidget>,
) {
    let mut canvas = UiCanvas::new(&mut commands, font.0.clone());
    for mut widget in &mut counters {
        if widget.0.is_animating() {
            widget.0.update(time.delta(), &mut canvas);
        }
    }
}

/// Command that tears down the counter on `entity` together with every UI
/// entity it created, then despawns `entity`.
pub fn despawn_counter(entity: Entity) -> impl FnOnce(&mut World) {
    move |world: &mut World| {
        let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
            return;
        };
        let Some(widget) = entity_mut.take::<CounterWidget>() else {
            return;
        };
        entity_mut.despawn();

        let font = world
            .get_resource::<CanvasFont>()
            .map(|font| font.0.clone())
            .unwrap_or_default();
        {
            let mut commands = world.commands();
            widget.0.destroy(&mut UiCanvas::new(&mut commands, font));
        }
        world.flush();
        debug!("counter {entity} despawned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasPosition;

    fn spawn_counter(world: &mut World, config: &CounterConfig) -> Entity {
        let id = {
            let mut commands = world.commands();
            let widget = CounterWidget::build(
                &mut UiCanvas::new(&mut commands, Handle::default()),
                200.0,
                50.0,
                config,
            );
            commands.spawn(widget).id()
        };
        world.flush();
        id
    }

    #[test]
    fn test_counter_spawns_masked_strips() {
        let mut world = World::new();
        let entity = spawn_counter(&mut world, &CounterConfig::default());

        let positions = world
            .query::<&CanvasPosition>()
            .iter(&world)
            .count();
        // mask + 6 strips + overlay
        assert_eq!(positions, 8);

        let mut nodes = world.query_filtered::<(&Node, &Children), With<CanvasPosition>>();
        let masks: Vec<usize> = nodes
            .iter(&world)
            .filter(|(node, _)| node.overflow == Overflow::clip())
            .map(|(_, children)| children.len())
            .collect();
        assert_eq!(masks, vec![6]);

        assert_eq!(world.get::<CounterWidget>(entity).unwrap().0.digits(), 6);
    }

    #[test]
    fn test_despawn_counter_removes_everything() {
        let mut world = World::new();
        world.init_resource::<CanvasFont>();
        let baseline = world.query::<Entity>().iter(&world).count();
        let entity = spawn_counter(
            &mut world,
            &CounterConfig {
                digits: Some(2),
                shade: Some(0.0),
                ..Default::default()
            },
        );
        assert!(world.query::<Entity>().iter(&world).count() > baseline + 3);

        world.commands().queue(despawn_counter(entity));
        world.flush();

        assert!(world.get_entity(entity).is_err());
        assert_eq!(world.query::<Entity>().iter(&world).count(), baseline);
    }
}

//! Movement domain: fixed-tick systems that step every character.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::avian::{AvianBody, AvianWorld};
use crate::movement::{Clock, ControllerConfig, Locomotion};

/// A character without a collider has no body extent or feet to sense with.
pub(crate) fn reject_unbound_characters(
    query: Query<Entity, (With<Locomotion>, Without<Collider>)>,
) {
    if let Some(entity) = query.iter().next() {
        panic!("character {entity} has a Locomotion but no Collider; bind one at spawn");
    }
}

pub(crate) fn run_controllers(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    spatial_query: SpatialQuery,
    mut query: Query<(
        Entity,
        &Transform,
        &Collider,
        Option<&ComputedMass>,
        &mut Locomotion,
        &mut LinearVelocity,
        &mut LinearDamping,
        &mut GravityScale,
        Option<&mut Sprite>,
    )>,
) {
    let dt = time.delta_secs();
    let now = time.now();

    for (entity, transform, collider, mass, mut locomotion, velocity, damping, gravity, mut sprite) in
        &mut query
    {
        let mut body = AvianBody::new(
            transform.translation.truncate(),
            collider,
            mass,
            dt,
            velocity,
            damping,
            gravity,
        );
        let world = AvianWorld::new(&spatial_query, entity);
        let mut facing = sprite.as_deref_mut();

        locomotion.fixed_tick(&config, dt, now, &mut body, &world, &mut facing);
    }
}

//! Movement domain: host-loop facade over a single character.
//!
//! For hosts that own their physics handles directly instead of going through
//! the ECS systems. Ports are bound once at construction through
//! [`ControllerBuilder`].

use std::sync::Arc;

use bevy::prelude::*;

use crate::movement::{
    Clock, ControllerConfig, ControllerError, FacingSink, JumpEdge, JumpGrant, Locomotion,
    PhysicsQueryPort, RigidBodyPort,
};

pub struct PlatformerController<B, W, C, F = ()> {
    config: Arc<ControllerConfig>,
    locomotion: Locomotion,
    body: B,
    world: W,
    clock: C,
    facing: F,
}

impl<B, W, C, F> PlatformerController<B, W, C, F>
where
    B: RigidBodyPort,
    W: PhysicsQueryPort,
    C: Clock,
    F: FacingSink,
{
    pub fn on_move_input(&mut self, value: Vec2) {
        self.locomotion.on_move_input(value);
    }

    /// Evaluate a jump edge immediately at the clock's current time.
    pub fn on_jump_input(&mut self, edge: JumpEdge) -> Option<JumpGrant> {
        let now = self.clock.now();
        self.locomotion
            .apply_jump_edge(&self.config, &mut self.body, edge, now)
    }

    pub fn fixed_tick(&mut self, dt: f32) {
        let now = self.clock.now();
        self.locomotion.fixed_tick(
            &self.config,
            dt,
            now,
            &mut self.body,
            &self.world,
            &mut self.facing,
        );
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn locomotion(&self) -> &Locomotion {
        &self.locomotion
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn facing_sink(&self) -> &F {
        &self.facing
    }
}

pub struct ControllerBuilder<B, W, C, F = ()> {
    config: Arc<ControllerConfig>,
    body: Option<B>,
    world: Option<W>,
    clock: Option<C>,
    facing: F,
}

impl<B, W, C> ControllerBuilder<B, W, C, ()> {
    pub fn new(config: impl Into<Arc<ControllerConfig>>) -> Self {
        Self {
            config: config.into(),
            body: None,
            world: None,
            clock: None,
            facing: (),
        }
    }
}

impl<B, W, C, F> ControllerBuilder<B, W, C, F>
where
    B: RigidBodyPort,
    W: PhysicsQueryPort,
    C: Clock,
    F: FacingSink,
{
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn world(mut self, world: W) -> Self {
        self.world = Some(world);
        self
    }

    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn facing_sink<G: FacingSink>(self, facing: G) -> ControllerBuilder<B, W, C, G> {
        ControllerBuilder {
            config: self.config,
            body: self.body,
            world: self.world,
            clock: self.clock,
            facing,
        }
    }

    /// Bind everything and validate the tuning; any gap is a wiring error.
    pub fn build(self) -> Result<PlatformerController<B, W, C, F>, ControllerError> {
        let body = self.body.ok_or(ControllerError::MissingBody)?;
        let world = self.world.ok_or(ControllerError::MissingQuerySurface)?;
        let clock = self.clock.ok_or(ControllerError::MissingClock)?;
        self.config.validate()?;

        Ok(PlatformerController {
            locomotion: Locomotion::new(&self.config),
            config: self.config,
            body,
            world,
            clock,
            facing: self.facing,
        })
    }
}

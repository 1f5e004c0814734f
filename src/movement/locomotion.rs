//! Movement domain: the per-character controller pipeline.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CharacterState, ControllerConfig, FacingSink, InputSampler, JumpEdge, JumpGrant, JumpRuntime,
    PhysicsQueryPort, RigidBodyPort, drive, gravity, orientation, sensors,
};

/// One character's controller state. Created at spawn, stepped once per
/// fixed tick, dropped with the character.
#[derive(Component, Debug, Clone)]
#[require(RigidBody = RigidBody::Dynamic, LinearVelocity, LinearDamping, GravityScale)]
pub struct Locomotion {
    pub state: CharacterState,
    pub jump: JumpRuntime,
    pub input: InputSampler,
}

impl Locomotion {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            state: CharacterState::default(),
            jump: JumpRuntime::new(&config.jump),
            input: InputSampler::default(),
        }
    }

    /// Latest movement axis from the input layer; only `x` drives the controller.
    pub fn on_move_input(&mut self, value: Vec2) {
        self.input.set_axis(value);
    }

    /// Queue a jump edge for the jump phase of the next fixed tick.
    pub fn on_jump_input(&mut self, edge: JumpEdge) {
        self.input.push_jump(edge);
    }

    /// Evaluate a jump edge right away against the state of the last tick.
    pub fn apply_jump_edge<B: RigidBodyPort + ?Sized>(
        &mut self,
        config: &ControllerConfig,
        body: &mut B,
        edge: JumpEdge,
        now: f32,
    ) -> Option<JumpGrant> {
        let grant = self
            .jump
            .handle_edge(&config.jump, &mut self.state, body, edge, now);
        drive::clamp_speed(&config.movement, body);
        grant
    }

    /// Run one fixed tick: sensors, drive, jump, gravity, orientation.
    pub fn fixed_tick<B, W, F>(
        &mut self,
        config: &ControllerConfig,
        dt: f32,
        now: f32,
        body: &mut B,
        world: &W,
        facing: &mut F,
    ) where
        B: RigidBodyPort + ?Sized,
        W: PhysicsQueryPort + ?Sized,
        F: FacingSink + ?Sized,
    {
        let move_x = self.input.move_x();

        let report = sensors::refresh(
            &config.sensors,
            config.jump.wall_ray_extra_length,
            body,
            world,
            move_x,
        );
        let was_grounded = self.state.is_grounded;
        let locked = self.jump.ground_locked(now);
        self.state.is_grounded = report.grounded && !locked;
        self.state.is_touching_wall = report.touching_wall;
        self.state.wall_checked = report.wall_checked;

        if self.state.is_grounded && !was_grounded {
            debug!(
                "Landed: on_ground={}, extra_jumps_remaining={}",
                self.state.is_grounded, config.jump.extra_jump_count
            );
        } else if !self.state.is_grounded && was_grounded {
            debug!(
                "Left ground: on_ground={}, extra_jumps_remaining={}",
                self.state.is_grounded, self.jump.remaining_extra_jumps
            );
        }
        self.jump
            .track_ground(&config.jump, self.state.is_grounded, was_grounded, dt);

        drive::apply(&config.movement, body, self.state.is_grounded, move_x);

        self.jump
            .update_wall_slide(&config.jump, &mut self.state, body, move_x, now);
        for edge in self.input.take_jumps() {
            self.jump
                .handle_edge(&config.jump, &mut self.state, body, edge, now);
        }
        self.jump
            .release_buffered(&config.jump, &mut self.state, body, now);
        // A wall jump kick must not leave the tick above the speed cap.
        drive::clamp_speed(&config.movement, body);

        gravity::apply(
            &config.jump,
            body,
            self.state.is_grounded,
            self.jump.last_jump_kind,
        );

        orientation::update(&mut self.state, move_x, facing);
    }
}

//! Movement domain: the jump state machine.
//!
//! Owns the coyote timer, the jump buffer, the extra-jump budget and the
//! wall-jump allowance. Timers that can be absent are `Option`s and are only
//! compared while present.

use bevy::prelude::*;

use crate::movement::{CharacterState, Facing, JumpConfig, JumpEdge, JumpKind, RigidBodyPort};

/// A jump request waiting to be honoured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferedJump {
    pub pressed_at: f32,
    /// Set once the input layer has confirmed the interaction.
    pub kind: Option<JumpKind>,
}

impl BufferedJump {
    pub fn is_live(&self, now: f32, window: f32) -> bool {
        now - self.pressed_at < window
    }
}

/// Jump phase derived from the runtime fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    Grounded,
    /// Airborne with coyote time left.
    CoyoteEligible,
    /// Airborne with the coyote window spent.
    Airborne,
    WallSliding,
}

/// Which rule granted a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpGrant {
    Primary,
    Wall,
    Extra,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JumpRuntime {
    pub remaining_extra_jumps: u8,
    /// Seconds of coyote time left; never negative.
    pub coyote_timer: f32,
    pub jump_buffer: Option<BufferedJump>,
    pub wall_jump_expires_at: Option<f32>,
    /// Side of the wall being slid on.
    pub wall_side: Option<Facing>,
    pub last_jump_kind: Option<JumpKind>,
    pub ground_lockout_until: Option<f32>,
}

impl JumpRuntime {
    pub fn new(config: &JumpConfig) -> Self {
        Self {
            remaining_extra_jumps: config.extra_jump_count,
            ..Default::default()
        }
    }

    pub fn phase(&self, state: &CharacterState) -> JumpPhase {
        if state.is_grounded {
            JumpPhase::Grounded
        } else if state.is_wall_sliding {
            JumpPhase::WallSliding
        } else if self.coyote_timer > 0.0 {
            JumpPhase::CoyoteEligible
        } else {
            JumpPhase::Airborne
        }
    }

    /// Whether ground contact is ignored at `now`. An expired lockout is cleared.
    pub fn ground_locked(&mut self, now: f32) -> bool {
        match self.ground_lockout_until {
            Some(until) if now < until => true,
            Some(_) => {
                self.ground_lockout_until = None;
                false
            }
            None => false,
        }
    }

    /// Coyote and budget bookkeeping for this tick's grounded reading.
    pub fn track_ground(&mut self, config: &JumpConfig, grounded: bool, was_grounded: bool, dt: f32) {
        if grounded {
            self.coyote_timer = config.coyote_window;
            if !was_grounded {
                self.remaining_extra_jumps = config.extra_jump_count;
            }
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }
    }

    /// Engage, refresh or release the wall slide and clamp the fall while engaged.
    ///
    /// Sensors only report a wall along the input direction, so touching a wall
    /// while airborne means pressing into it.
    pub fn update_wall_slide<B: RigidBodyPort + ?Sized>(
        &mut self,
        config: &JumpConfig,
        state: &mut CharacterState,
        body: &mut B,
        move_x: f32,
        now: f32,
    ) {
        let was_sliding = state.is_wall_sliding;

        if state.is_grounded {
            self.wall_jump_expires_at = None;
            self.wall_side = None;
        } else if state.is_touching_wall {
            self.wall_jump_expires_at = Some(now + config.wall_jump_buffer_window);
            self.wall_side = Facing::from_axis(move_x);
        }

        if self.wall_jump_expires_at.is_some_and(|expires_at| now >= expires_at) {
            self.wall_jump_expires_at = None;
            self.wall_side = None;
        }
        state.is_wall_sliding = self.wall_jump_expires_at.is_some();

        if state.is_wall_sliding {
            if !was_sliding {
                if config.refill_extra_jumps_on_wall_slide {
                    self.remaining_extra_jumps = config.extra_jump_count;
                }
                debug!(
                    "Wall slide engaged: side={:?}, extra_jumps_remaining={}",
                    self.wall_side, self.remaining_extra_jumps
                );
            }
            let mut velocity = body.linear_velocity();
            if velocity.y < -config.wall_slide_speed {
                velocity.y = -config.wall_slide_speed;
                body.set_linear_velocity(velocity);
            }
        } else if was_sliding {
            debug!("Wall slide released: grounded={}", state.is_grounded);
        }
    }

    /// Handle one jump button edge at `now`.
    pub fn handle_edge<B: RigidBodyPort + ?Sized>(
        &mut self,
        config: &JumpConfig,
        state: &mut CharacterState,
        body: &mut B,
        edge: JumpEdge,
        now: f32,
    ) -> Option<JumpGrant> {
        match edge {
            JumpEdge::Pressed => {
                self.jump_buffer = Some(BufferedJump {
                    pressed_at: now,
                    kind: None,
                });
                None
            }
            JumpEdge::Performed(kind) => {
                // Confirmation restarts the buffer window.
                self.jump_buffer = Some(BufferedJump {
                    pressed_at: now,
                    kind: Some(kind),
                });
                self.decide(config, state, body, kind, now)
            }
            JumpEdge::Released => {
                if self.jump_buffer.is_some_and(|buffer| buffer.kind.is_none()) {
                    self.jump_buffer = None;
                }
                None
            }
        }
    }

    /// Fire a confirmed, still-live buffered request once coyote time allows it.
    /// Expired requests are dropped.
    pub fn release_buffered<B: RigidBodyPort + ?Sized>(
        &mut self,
        config: &JumpConfig,
        state: &mut CharacterState,
        body: &mut B,
        now: f32,
    ) -> Option<JumpGrant> {
        let buffer = self.jump_buffer?;
        if !buffer.is_live(now, config.jump_buffer_window) {
            self.jump_buffer = None;
            return None;
        }
        let kind = buffer.kind?;
        if self.coyote_timer <= 0.0 {
            return None;
        }
        self.launch(config, state, body, kind, now);
        debug!("Buffered jump released on landing: kind={:?}", kind);
        Some(JumpGrant::Primary)
    }

    fn decide<B: RigidBodyPort + ?Sized>(
        &mut self,
        config: &JumpConfig,
        state: &mut CharacterState,
        body: &mut B,
        kind: JumpKind,
        now: f32,
    ) -> Option<JumpGrant> {
        // The request was stamped at this edge, so only a zero window fails here.
        // Staleness is enforced by `release_buffered`.
        let buffered = self
            .jump_buffer
            .is_some_and(|buffer| buffer.is_live(now, config.jump_buffer_window));
        let pressed_into_wall = state.is_touching_wall;

        if self.coyote_timer > 0.0 && buffered {
            self.launch(config, state, body, kind, now);
            debug!(
                "Primary jump: kind={:?}, extra_jumps_remaining={}",
                kind, self.remaining_extra_jumps
            );
            return Some(JumpGrant::Primary);
        }

        if state.is_wall_sliding && !pressed_into_wall {
            let wall_side = self.wall_side;
            self.launch(config, state, body, kind, now);
            if let Some(side) = wall_side
                && config.wall_jump_kick > 0.0
            {
                let mut velocity = body.linear_velocity();
                velocity.x = side.opposite().sign() * config.wall_jump_kick;
                body.set_linear_velocity(velocity);
            }
            self.wall_jump_expires_at = None;
            self.wall_side = None;
            state.is_wall_sliding = false;
            debug!("Wall jump: kind={:?}, wall_side={:?}", kind, wall_side);
            return Some(JumpGrant::Wall);
        }

        // Any confirmed air press spends the budget; only a tap gets the impulse.
        if self.remaining_extra_jumps > 0 && !pressed_into_wall {
            self.remaining_extra_jumps -= 1;
            if kind == JumpKind::Tap {
                let mut velocity = body.linear_velocity();
                velocity.y += config.jump_force * config.extra_jump_force_multiplier;
                body.set_linear_velocity(velocity);
                self.last_jump_kind = Some(JumpKind::Tap);
            }
            self.jump_buffer = None;
            debug!(
                "Extra jump: kind={:?}, extra_jumps_remaining now {}",
                kind, self.remaining_extra_jumps
            );
            return Some(JumpGrant::Extra);
        }

        // Nothing granted: spend the coyote window so it cannot be reused later.
        // The request stays buffered for a landing inside the buffer window.
        self.coyote_timer = 0.0;
        None
    }

    /// Full-force jump added on top of the current vertical velocity.
    fn launch<B: RigidBodyPort + ?Sized>(
        &mut self,
        config: &JumpConfig,
        state: &mut CharacterState,
        body: &mut B,
        kind: JumpKind,
        now: f32,
    ) {
        let mut velocity = body.linear_velocity();
        velocity.y += config.jump_force;
        body.set_linear_velocity(velocity);

        self.coyote_timer = 0.0;
        self.jump_buffer = None;
        self.last_jump_kind = Some(kind);
        self.ground_lockout_until =
            (config.ground_lockout > 0.0).then_some(now + config.ground_lockout);
        state.is_grounded = false;
    }
}

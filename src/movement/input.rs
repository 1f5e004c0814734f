//! Movement domain: input adaptation for locomotion.
//!
//! The sampler is a pure adapter: it stores the latest axis and queues jump
//! edges for the next jump phase. All jump timing lives in `jump`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How the input layer resolved a jump press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum JumpKind {
    /// Quick press and release; short hop.
    Tap,
    /// Press sustained past the hold threshold; full height.
    Hold,
}

/// A jump button edge as reported by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpEdge {
    Pressed,
    Performed(JumpKind),
    Released,
}

#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    axis: Vec2,
    pending: Vec<JumpEdge>,
}

impl InputSampler {
    /// Store the movement axis, clamped to [-1, 1]. Non-finite components read as zero.
    pub fn set_axis(&mut self, value: Vec2) {
        let sanitize = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        self.axis = Vec2::new(sanitize(value.x), sanitize(value.y));
    }

    pub fn axis(&self) -> Vec2 {
        self.axis
    }

    pub fn move_x(&self) -> f32 {
        self.axis.x
    }

    pub fn push_jump(&mut self, edge: JumpEdge) {
        self.pending.push(edge);
    }

    pub fn has_pending_jumps(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take every queued edge, oldest first.
    pub fn take_jumps(&mut self) -> Vec<JumpEdge> {
        std::mem::take(&mut self.pending)
    }
}

/// Resolves a jump button into Tap/Hold edges from its held level over time.
#[derive(Debug, Clone)]
pub struct HoldClassifier {
    pub hold_threshold: f32,
    pressed_at: Option<f32>,
    hold_sent: bool,
}

impl Default for HoldClassifier {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl HoldClassifier {
    pub fn new(hold_threshold: f32) -> Self {
        Self {
            hold_threshold,
            pressed_at: None,
            hold_sent: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Feed the button level sampled at `now`; edges are handed to `emit` in order.
    pub fn sample(&mut self, held: bool, now: f32, mut emit: impl FnMut(JumpEdge)) {
        match (self.pressed_at, held) {
            (None, true) => {
                self.pressed_at = Some(now);
                self.hold_sent = false;
                emit(JumpEdge::Pressed);
            }
            (Some(pressed_at), true) => {
                if !self.hold_sent && now - pressed_at >= self.hold_threshold {
                    self.hold_sent = true;
                    emit(JumpEdge::Performed(JumpKind::Hold));
                }
            }
            (Some(pressed_at), false) => {
                if !self.hold_sent {
                    let kind = if now - pressed_at >= self.hold_threshold {
                        JumpKind::Hold
                    } else {
                        JumpKind::Tap
                    };
                    emit(JumpEdge::Performed(kind));
                }
                self.pressed_at = None;
                self.hold_sent = false;
                emit(JumpEdge::Released);
            }
            (None, false) => {}
        }
    }
}

//! Movement domain: system modules for locomotion updates.

pub mod avian;
pub(crate) mod controller;
pub(crate) mod input;

pub(crate) use controller::{reject_unbound_characters, run_controllers};
pub use input::JumpButton;
pub(crate) use input::read_input;

//! Movement domain: controller wiring errors.

/// Misuse detected while wiring a controller. These are programming errors;
/// hosts are expected to fail fast on them rather than recover.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    MissingBody,
    MissingQuerySurface,
    MissingClock,
    InvalidSensor { reason: &'static str },
    InvalidTuning { field: &'static str, value: f32 },
}

impl std::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerError::MissingBody => write!(f, "no rigid body bound to the controller"),
            ControllerError::MissingQuerySurface => {
                write!(f, "no physics query surface bound to the controller")
            }
            ControllerError::MissingClock => write!(f, "no game clock bound to the controller"),
            ControllerError::InvalidSensor { reason } => write!(f, "invalid sensor: {}", reason),
            ControllerError::InvalidTuning { field, value } => {
                write!(f, "invalid tuning value {} for {}", value, field)
            }
        }
    }
}

impl std::error::Error for ControllerError {}

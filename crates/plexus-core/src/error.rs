use thiserror::Error;

/// Errors raised while setting up a [`crate::ParticleField`].
///
/// Ticking never fails; every check happens once, at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("invalid field config: `{field}` must be positive and finite, got {value}")]
    InvalidConfig { field: &'static str, value: f32 },
}

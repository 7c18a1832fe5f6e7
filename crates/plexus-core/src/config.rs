use crate::constants::*;
use crate::error::FieldError;

/// Init-time parameters of the particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Half the bounding cube edge; coordinates live in `[-half_edge, half_edge]`.
    pub half_edge: f32,
    pub connect_distance: f32,
    /// Velocity components are sampled in `[-velocity_range, velocity_range]`.
    pub velocity_range: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: MAX_PARTICLES,
            half_edge: CUBE_HALF_EDGE,
            connect_distance: CONNECT_DISTANCE,
            velocity_range: VELOCITY_RANGE,
        }
    }
}

impl FieldConfig {
    /// Default config with the point count derived from the viewport width.
    pub fn for_viewport(width_px: f64) -> Self {
        Self {
            particle_count: particle_count_for_viewport(width_px),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        check_positive("half_edge", self.half_edge)?;
        check_positive("connect_distance", self.connect_distance)?;
        check_positive("velocity_range", self.velocity_range)?;
        Ok(())
    }
}

/// One point per ten pixels of width, capped at [`MAX_PARTICLES`].
pub fn particle_count_for_viewport(width_px: f64) -> usize {
    if !width_px.is_finite() || width_px <= 0.0 {
        return 0;
    }
    let n = (width_px / VIEWPORT_PX_PER_PARTICLE).floor() as usize;
    n.min(MAX_PARTICLES)
}

#[inline]
fn check_positive(field: &'static str, value: f32) -> Result<(), FieldError> {
    // NaN fails the comparison too
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FieldError::InvalidConfig { field, value })
    }
}

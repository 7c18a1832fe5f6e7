//! Particle field simulation: points drifting in a cube, reflecting off its
//! walls, linked by a line whenever two of them are closer than the connect
//! distance.
//!
//! The connection scan is all-pairs and therefore quadratic in the point
//! count. At the viewport-derived cap of 120 points that is at most 7,140
//! distance checks per tick; larger fields would need a uniform grid or a
//! k-d tree in front of the scan.

use crate::config::FieldConfig;
use crate::constants::{LINE_COLOR_END, LINE_COLOR_START};
use crate::error::FieldError;
use crate::state::CloudRotation;
use glam::Vec3;
use rand::prelude::*;

/// A line between two points that were within the connect distance this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    /// Lower point index.
    pub a: usize,
    /// Higher point index.
    pub b: usize,
    pub a_pos: Vec3,
    pub b_pos: Vec3,
    pub color_a: [f32; 3],
    pub color_b: [f32; 3],
    /// `1 - distance / connect_distance`. Not applied to the line colors.
    pub alpha: f32,
}

/// Borrowed draw payload for the current tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldFrame<'a> {
    pub positions: &'a [Vec3],
    pub connections: &'a [Connection],
    pub active_connection_count: usize,
    pub rotation: CloudRotation,
}

pub struct ParticleField {
    config: FieldConfig,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    connection_counts: Vec<u32>,
    connections: Vec<Connection>,
    rotation: CloudRotation,
}

impl ParticleField {
    /// Random field: positions uniform in the cube, velocities uniform in
    /// `[-velocity_range, velocity_range]` per axis.
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self, FieldError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let h = config.half_edge;
        let v = config.velocity_range;
        let n = config.particle_count;
        let mut positions = Vec::with_capacity(n);
        let mut velocities = Vec::with_capacity(n);
        for _ in 0..n {
            positions.push(Vec3::new(
                rng.gen_range(-h..=h),
                rng.gen_range(-h..=h),
                rng.gen_range(-h..=h),
            ));
            velocities.push(Vec3::new(
                rng.gen_range(-v..=v),
                rng.gen_range(-v..=v),
                rng.gen_range(-v..=v),
            ));
        }
        log::debug!(
            "[field] seeded {} points in cube half-edge {:.1}, connect distance {:.1}",
            n,
            h,
            config.connect_distance
        );
        Ok(Self::assemble(config, positions, velocities))
    }

    /// Field with preset `(position, velocity)` pairs. The point count is
    /// taken from `points`, not from `config.particle_count`.
    pub fn from_points<I>(config: FieldConfig, points: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = (Vec3, Vec3)>,
    {
        config.validate()?;
        let (positions, velocities): (Vec<Vec3>, Vec<Vec3>) = points.into_iter().unzip();
        let config = FieldConfig {
            particle_count: positions.len(),
            ..config
        };
        Ok(Self::assemble(config, positions, velocities))
    }

    fn assemble(config: FieldConfig, positions: Vec<Vec3>, velocities: Vec<Vec3>) -> Self {
        let n = positions.len();
        Self {
            config,
            positions,
            velocities,
            connection_counts: vec![0; n],
            connections: Vec::with_capacity(pair_count(n)),
            rotation: CloudRotation::default(),
        }
    }

    /// Advance one display refresh.
    pub fn tick(&mut self) {
        self.connection_counts.fill(0);
        self.integrate();
        self.scan_connections();
        self.rotation.advance();
    }

    /// Move every point by its velocity, then flip each velocity component
    /// whose coordinate left the cube. The position is not pulled back, so a
    /// point may sit outside by up to one step until its next move.
    fn integrate(&mut self) {
        let h = self.config.half_edge;
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *p += *v;
            if p.x < -h || p.x > h {
                v.x = -v.x;
            }
            if p.y < -h || p.y > h {
                v.y = -v.y;
            }
            if p.z < -h || p.z > h {
                v.z = -v.z;
            }
        }
    }

    fn scan_connections(&mut self) {
        self.connections.clear();
        let max_dist = self.config.connect_distance;
        let n = self.positions.len();
        for i in 0..n {
            let pi = self.positions[i];
            for j in (i + 1)..n {
                let pj = self.positions[j];
                let dist = pi.distance(pj);
                if dist < max_dist {
                    self.connection_counts[i] += 1;
                    self.connection_counts[j] += 1;
                    self.connections.push(Connection {
                        a: i,
                        b: j,
                        a_pos: pi,
                        b_pos: pj,
                        color_a: LINE_COLOR_START,
                        color_b: LINE_COLOR_END,
                        alpha: 1.0 - dist / max_dist,
                    });
                }
            }
        }
    }

    /// Current draw payload. Reading it does not mutate the field.
    pub fn frame(&self) -> FieldFrame<'_> {
        FieldFrame {
            positions: &self.positions,
            connections: &self.connections,
            active_connection_count: self.connections.len(),
            rotation: self.rotation,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn connection_counts(&self) -> &[u32] {
        &self.connection_counts
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn active_connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn rotation(&self) -> CloudRotation {
        self.rotation
    }

    /// Upper bound on connections per tick, C(n, 2).
    pub fn max_connections(&self) -> usize {
        pair_count(self.positions.len())
    }
}

#[inline]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

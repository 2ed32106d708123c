//! Demo placement for lockets: a cone spiral for the tree and a random
//! spherical cloud for the scattered arrangement.
//!
//! The production scene builds its own poses; this layout backs the
//! headless binary and tests.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::pose::DualPose;
use crate::state::LocketId;

/// Shape parameters for [`spiral_layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Number of lockets.
    pub count: usize,
    /// Tree height (world units), centered on the origin.
    pub tree_height: f32,
    /// Tree radius at its base.
    pub tree_radius: f32,
    /// Spiral turns from base to tip.
    pub turns: f32,
    /// Radius of the scatter cloud.
    pub scatter_radius: f32,
    /// RNG seed; the same seed always yields the same layout.
    pub seed: u64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            count: 12,
            tree_height: 14.0,
            tree_radius: 5.5,
            turns: 3.5,
            scatter_radius: 16.0,
            seed: 0x00A2_1C25,
        }
    }
}

/// Build `params.count` poses with ids `locket-0`, `locket-1`, ...
#[must_use]
pub fn spiral_layout(params: &LayoutParams) -> Vec<DualPose> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let half = params.tree_height * 0.5;

    (0..params.count)
        .map(|i| {
            // Keep the tip free for the star.
            let t = (i as f32 + 0.5) / params.count as f32 * 0.9;
            let angle = t * params.turns * TAU;
            let radius = params.tree_radius * (1.0 - t);
            let tree_position = Vec3::new(
                radius * angle.cos(),
                -half + t * params.tree_height,
                radius * angle.sin(),
            );

            DualPose {
                id: LocketId::indexed(i),
                scatter_position: random_in_sphere(
                    &mut rng,
                    params.scatter_radius,
                ),
                tree_position,
                rotation: Vec3::new(
                    rng.random_range(-0.3..0.3),
                    rng.random_range(0.0..TAU),
                    rng.random_range(-0.3..0.3),
                ),
                scale: rng.random_range(0.6..1.0),
            }
        })
        .collect()
}

fn random_in_sphere(rng: &mut StdRng, radius: f32) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        if p.length_squared() <= 1.0 {
            return p * radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_deterministic_per_seed() {
        let params = LayoutParams::default();
        assert_eq!(spiral_layout(&params), spiral_layout(&params));

        let other = LayoutParams {
            seed: 7,
            ..LayoutParams::default()
        };
        assert_ne!(spiral_layout(&params), spiral_layout(&other));
    }

    #[test]
    fn positions_stay_inside_shapes() {
        let params = LayoutParams::default();
        for pose in spiral_layout(&params) {
            let reach = pose.scatter_position.length();
            assert!(reach <= params.scatter_radius + 1e-4);
            let y = pose.tree_position.y;
            assert!(y.abs() <= params.tree_height * 0.5);
            let r = pose.tree_position.x.hypot(pose.tree_position.z);
            assert!(r <= params.tree_radius + 1e-4);
            assert!((0.6..1.0).contains(&pose.scale));
        }
    }

    #[test]
    fn ids_are_sequential() {
        let poses = spiral_layout(&LayoutParams {
            count: 4,
            ..LayoutParams::default()
        });
        let ids: Vec<_> =
            poses.iter().map(|p| p.id.as_str().to_owned()).collect();
        assert_eq!(ids, ["locket-0", "locket-1", "locket-2", "locket-3"]);
    }
}

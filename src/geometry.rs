//! Distance and placement math on hand positions.
//!
//! Y is up. Everything here is pure so it can be tested on the host without a
//! substrate.

use crate::constants::WORLD_UP;
use glam::Vec3;
use rand::Rng;

/// Euclidean distance between `a` and `b` after dropping the vertical axis.
#[inline]
pub fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    let a = Vec3::new(a.x, 0.0, a.z);
    let b = Vec3::new(b.x, 0.0, b.z);
    (a - b).length()
}

/// Clamp without the `min <= max` assertion of `f32::clamp`.
#[inline]
pub fn clamp_val(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Uniform offset in `[0, amount)` on each axis.
#[inline]
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, amount: f32) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() * amount,
        rng.gen::<f32>() * amount,
        rng.gen::<f32>() * amount,
    )
}

/// Sideways shift that keeps the return lane off the outgoing lane's path.
///
/// Perpendicular to the A-B axis and to world up; zero when the hands coincide.
#[inline]
pub fn lateral_offset(hand_a: Vec3, hand_b: Vec3, amount: f32) -> Vec3 {
    (hand_a - hand_b).normalize_or_zero().cross(WORLD_UP) * amount
}

use crate::constants::*;
use crate::error::{ProximityError, Result};
use glam::Vec4;
use std::time::Duration;

/// Tuning parameters for a [`SoundHand`](crate::SoundHand).
///
/// - `pool_size`: number of markers created up front and recycled round-robin
/// - `spawn_interval`: lanes advance on frames where `frame % spawn_interval == 0`
/// - `max_distance`: clamp ceiling for pitch, volume cutoff and spawn cutoff
/// - `pitch_span`: pitch reached at `max_distance`
/// - `jitter`: per-axis upper bound of the uniform spawn jitter
/// - `lateral_offset`: sideways shift applied to the B -> A lane
/// - `seconds_per_distance`: move duration per unit of flat distance
/// - `expiry_grace`: visible time kept after a move's scheduled end
#[derive(Clone, Debug)]
pub struct ProximityParams {
    pub pool_size: usize,
    pub spawn_interval: u64,
    pub max_distance: f32,
    pub pitch_span: f32,
    pub jitter: f32,
    pub lateral_offset: f32,
    pub seconds_per_distance: f32,
    pub expiry_grace: Duration,
    pub lane_a_tint: Vec4,
    pub lane_b_tint: Vec4,
    pub marker_edge: f32,
}

impl Default for ProximityParams {
    fn default() -> Self {
        Self {
            pool_size: POOL_SIZE,
            spawn_interval: SPAWN_INTERVAL_FRAMES,
            max_distance: MAX_DISTANCE,
            pitch_span: PITCH_SPAN,
            jitter: JITTER,
            lateral_offset: LATERAL_OFFSET,
            seconds_per_distance: SECONDS_PER_DISTANCE,
            expiry_grace: Duration::from_millis(EXPIRY_GRACE_MS),
            lane_a_tint: Vec4::from(LANE_A_TINT),
            lane_b_tint: Vec4::from(LANE_B_TINT),
            marker_edge: MARKER_EDGE,
        }
    }
}

impl ProximityParams {
    /// Reject values the frame driver cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.pool_size < 2 {
            return Err(ProximityError::InvalidParams(
                "pool_size must cover both lanes",
            ));
        }
        if self.spawn_interval == 0 {
            return Err(ProximityError::InvalidParams("spawn_interval must be non-zero"));
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(ProximityError::InvalidParams("max_distance must be positive"));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(ProximityError::InvalidParams("jitter must be non-negative"));
        }
        if !self.seconds_per_distance.is_finite() || self.seconds_per_distance < 0.0 {
            return Err(ProximityError::InvalidParams(
                "seconds_per_distance must be non-negative",
            ));
        }
        // Longest move happens just under max_distance
        let longest = self.seconds_per_distance * self.max_distance;
        if Duration::try_from_secs_f32(longest).is_err() {
            return Err(ProximityError::InvalidParams(
                "seconds_per_distance * max_distance exceeds Duration range",
            ));
        }
        if !self.pitch_span.is_finite() || !self.lateral_offset.is_finite() {
            return Err(ProximityError::InvalidParams("non-finite tuning value"));
        }
        Ok(())
    }

    /// Move duration for the given flat distance. Also the lifetime window.
    #[inline]
    pub fn move_duration(&self, flat_distance: f32) -> Duration {
        let secs = (self.seconds_per_distance * flat_distance).max(0.0);
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    }
}

use crate::geometry::{clamp_val, flat_distance};
use crate::params::ProximityParams;
use crate::substrate::{AudioParams, LoopingSound};
use glam::Vec3;

/// Map a flat distance to loop parameters.
///
/// Pitch follows the clamped distance; the volume cutoff tests the raw one, so
/// exactly `max_distance` is still audible.
#[inline]
pub fn map_distance(distance: f32, max_distance: f32, pitch_span: f32) -> AudioParams {
    let clamped = clamp_val(distance, 0.0, max_distance);
    let pitch = (clamped / max_distance) * pitch_span;
    let volume = if distance > max_distance { 0.0 } else { 1.0 };
    AudioParams { pitch, volume }
}

/// Drives the single ambient loop from hand proximity.
///
/// Only constructible around a started sound, so `update` always has an
/// instance to write to.
pub struct DistanceAudioController<S: LoopingSound> {
    sound: S,
    max_distance: f32,
    pitch_span: f32,
    last: AudioParams,
}

impl<S: LoopingSound> DistanceAudioController<S> {
    pub fn new(sound: S, params: &ProximityParams) -> Self {
        Self {
            sound,
            max_distance: params.max_distance,
            pitch_span: params.pitch_span,
            last: AudioParams::default(),
        }
    }

    /// Recompute and apply pitch/volume for this frame's hand positions.
    pub fn update(&mut self, hand_a: Vec3, hand_b: Vec3) -> AudioParams {
        let distance = flat_distance(hand_a, hand_b);
        self.apply_distance(distance)
    }

    /// Apply parameters for an already computed flat distance.
    pub fn apply_distance(&mut self, distance: f32) -> AudioParams {
        let params = map_distance(distance, self.max_distance, self.pitch_span);
        log::trace!(
            "[audio] dist={:.3} pitch={:.2} vol={:.1}",
            distance,
            params.pitch,
            params.volume
        );
        self.sound.set_state(params);
        self.last = params;
        params
    }

    pub fn last_params(&self) -> AudioParams {
        self.last
    }
}

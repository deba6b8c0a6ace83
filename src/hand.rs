//! Per-frame driver tying the audio mapping and the marker lanes together.

use crate::audio::DistanceAudioController;
use crate::error::Result;
use crate::geometry::{flat_distance, lateral_offset};
use crate::lane::{Lane, LaneDirection, SpawnRequest};
use crate::lifetime::MarkerLifetimes;
use crate::params::ProximityParams;
use crate::pool::{MarkerId, MarkerPool};
use crate::substrate::{AudioParams, SoundOptions, Substrate, VisualMarker};
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

/// Observable lifecycle state of a pooled marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerState {
    /// Hidden, waiting in the ring, no lifetime entry.
    Idle,
    /// Visible at its spawn position; the move is deferred to the next cycle.
    Spawned,
    /// Visible and its move has been requested from the host.
    Animating,
}

/// What one call to [`SoundHand::update`] did.
#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    pub frame: u64,
    pub distance: f32,
    pub audio: AudioParams,
    /// Whether this frame advanced the lanes.
    pub spawn_cycle: bool,
    /// Markers whose deferred move was requested this frame.
    pub animated: SmallVec<[MarkerId; 2]>,
    pub spawned: SmallVec<[MarkerId; 2]>,
    pub expired: SmallVec<[MarkerId; 8]>,
}

/// Two-hand proximity effect.
///
/// Owns the looping sound controller, the marker pool, lifetime bookkeeping
/// and both lanes. Construct once with a [`Substrate`], then call
/// [`update`](Self::update) once per rendered frame with both hand positions
/// and the session time.
///
/// Jitter comes from the injected `rng`; seed it for reproducible runs.
pub struct SoundHand<P: Substrate, R: Rng> {
    params: ProximityParams,
    audio: DistanceAudioController<P::Sound>,
    pool: MarkerPool<P::Marker>,
    lifetimes: MarkerLifetimes,
    lanes: [Lane; 2],
    rng: R,
    frame_counter: u64,
}

impl<P: Substrate, R: Rng> SoundHand<P, R> {
    /// Create the marker pool and start the looping sound.
    pub fn new(substrate: &mut P, params: ProximityParams, rng: R) -> Result<Self> {
        params.validate()?;
        let pool = MarkerPool::create(substrate, params.pool_size, params.marker_edge);
        let sound = substrate.start_looping_sound(SoundOptions::default());
        let audio = DistanceAudioController::new(sound, &params);
        let lanes = [
            Lane::new(LaneDirection::AToB, params.lane_a_tint),
            Lane::new(LaneDirection::BToA, params.lane_b_tint),
        ];
        log::info!(
            "[soundhand] pool={} interval={} max_dist={:.2}",
            params.pool_size,
            params.spawn_interval,
            params.max_distance
        );
        Ok(Self {
            params,
            audio,
            pool,
            lifetimes: MarkerLifetimes::new(),
            lanes,
            rng,
            frame_counter: 0,
        })
    }

    /// Advance the effect by one frame.
    ///
    /// `now` is monotonic session time, e.g. from [`SessionClock`](crate::SessionClock).
    pub fn update(&mut self, hand_a: Vec3, hand_b: Vec3, now: Duration) -> Result<FrameReport> {
        let frame = self.frame_counter;
        self.frame_counter = self.frame_counter.wrapping_add(1);

        let distance = flat_distance(hand_a, hand_b);
        let audio = self.audio.apply_distance(distance);
        let spawn_cycle =
            frame % self.params.spawn_interval == 0 && distance < self.params.max_distance;

        let mut report = FrameReport {
            frame,
            distance,
            audio,
            spawn_cycle,
            ..Default::default()
        };
        if spawn_cycle {
            self.advance_lanes(hand_a, hand_b, distance, now, &mut report)?;
        }
        report.expired = self.sweep(now);
        Ok(report)
    }

    fn advance_lanes(
        &mut self,
        hand_a: Vec3,
        hand_b: Vec3,
        distance: f32,
        now: Duration,
        report: &mut FrameReport,
    ) -> Result<()> {
        for lane in &mut self.lanes {
            if let Some(id) = lane.flush_pending(&mut self.pool) {
                report.animated.push(id);
            }
        }

        let duration = self.params.move_duration(distance);
        let side = lateral_offset(hand_a, hand_b, self.params.lateral_offset);
        for lane in &mut self.lanes {
            let (source, target, offset) = match lane.direction {
                LaneDirection::AToB => (hand_a, hand_b, Vec3::ZERO),
                LaneDirection::BToA => (hand_b, hand_a, side),
            };
            let req = SpawnRequest {
                source,
                target,
                offset,
                jitter: self.params.jitter,
                duration,
                now,
            };
            let id = lane.spawn(&mut self.pool, &mut self.lifetimes, &mut self.rng, &req)?;
            report.spawned.push(id);
        }
        log::debug!(
            "[lanes] frame={} dist={:.3} dur={:.2}s spawned={:?} animated={:?}",
            report.frame,
            distance,
            duration.as_secs_f32(),
            report.spawned.as_slice(),
            report.animated.as_slice()
        );
        Ok(())
    }

    /// Hide every marker whose lifetime plus grace has elapsed.
    fn sweep(&mut self, now: Duration) -> SmallVec<[MarkerId; 8]> {
        let expired = self.lifetimes.sweep(now, self.params.expiry_grace);
        for id in &expired {
            if let Some(marker) = self.pool.marker_mut(*id) {
                marker.set_visible(false);
            }
        }
        if !expired.is_empty() {
            log::debug!("[sweep] expired={:?} live={}", expired.as_slice(), self.lifetimes.len());
        }
        expired
    }

    pub fn marker_state(&self, id: MarkerId) -> MarkerState {
        if !self.lifetimes.contains(id) {
            return MarkerState::Idle;
        }
        let pending = self
            .lanes
            .iter()
            .any(|lane| lane.pending().is_some_and(|p| p.marker == id));
        if pending {
            MarkerState::Spawned
        } else {
            MarkerState::Animating
        }
    }

    /// Markers currently tracked as visible.
    pub fn visible_count(&self) -> usize {
        self.lifetimes.len()
    }

    /// Number of `update` calls so far.
    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn params(&self) -> &ProximityParams {
        &self.params
    }

    pub fn audio(&self) -> &DistanceAudioController<P::Sound> {
        &self.audio
    }

    pub fn pool(&self) -> &MarkerPool<P::Marker> {
        &self.pool
    }

    pub fn lifetimes(&self) -> &MarkerLifetimes {
        &self.lifetimes
    }

    pub fn lanes(&self) -> &[Lane; 2] {
        &self.lanes
    }
}

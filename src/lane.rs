//! Directional marker streams between the two hands.
//!
//! A lane spawns one marker per cycle but only requests that marker's move on
//! the *following* cycle, giving the host a frame to register the spawn
//! position first. The deferred move lives in [`PendingMove`].

use crate::error::Result;
use crate::geometry::jitter;
use crate::lifetime::MarkerLifetimes;
use crate::pool::{MarkerId, MarkerPool};
use crate::substrate::{Easing, VisualMarker};
use glam::{Vec3, Vec4};
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaneDirection {
    AToB,
    BToA,
}

/// A spawned marker whose move has not been requested yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingMove {
    pub marker: MarkerId,
    pub target: Vec3,
    pub duration: Duration,
}

/// Everything a lane needs to place one marker.
#[derive(Clone, Copy, Debug)]
pub struct SpawnRequest {
    pub source: Vec3,
    pub target: Vec3,
    /// Added to both the spawn position and the target.
    pub offset: Vec3,
    pub jitter: f32,
    pub duration: Duration,
    pub now: Duration,
}

#[derive(Clone, Debug)]
pub struct Lane {
    pub direction: LaneDirection,
    pub tint: Vec4,
    pending: Option<PendingMove>,
}

impl Lane {
    pub fn new(direction: LaneDirection, tint: Vec4) -> Self {
        Self {
            direction,
            tint,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    /// Request the move deferred from the previous cycle, if any.
    pub fn flush_pending<M: VisualMarker>(&mut self, pool: &mut MarkerPool<M>) -> Option<MarkerId> {
        let pending = self.pending.take()?;
        let marker = pool.marker_mut(pending.marker)?;
        marker.animate_to(pending.target, pending.duration, Easing::Linear);
        Some(pending.marker)
    }

    /// Take the next pooled marker, place it at the source and queue its move.
    ///
    /// The marker is re-enqueued before returning, so the pool never shrinks.
    pub fn spawn<M, R>(
        &mut self,
        pool: &mut MarkerPool<M>,
        lifetimes: &mut MarkerLifetimes,
        rng: &mut R,
        req: &SpawnRequest,
    ) -> Result<MarkerId>
    where
        M: VisualMarker,
        R: Rng + ?Sized,
    {
        let id = pool.dequeue()?;
        let position = req.source + jitter(rng, req.jitter) + req.offset;
        // The ring only ever holds ids of this pool's slots
        if let Some(marker) = pool.marker_mut(id) {
            marker.set_app_offset(Vec3::ZERO);
            marker.set_local_position(position);
            marker.set_visible(true);
            marker.set_tint(self.tint);
        }
        pool.enqueue(id);
        lifetimes.record(id, req.now, req.duration);
        self.pending = Some(PendingMove {
            marker: id,
            target: req.target + req.offset,
            duration: req.duration,
        });
        Ok(id)
    }
}

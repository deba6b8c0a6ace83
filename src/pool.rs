//! Fixed-size round-robin pool of visual markers.
//!
//! Markers live in `slots` for the whole session and are addressed by
//! [`MarkerId`]. The ring only holds ids: the front is the next marker to hand
//! out, and a spawned marker goes back to the back straight away, so every
//! other member is cycled through before it is reused.

use crate::error::{ProximityError, Result};
use crate::substrate::{Substrate, VisualMarker};
use std::collections::VecDeque;
use std::fmt;

/// Stable slot index of a pooled marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

pub struct MarkerPool<M: VisualMarker> {
    slots: Vec<M>,
    ring: VecDeque<MarkerId>,
    dequeues: u64,
}

impl<M: VisualMarker> MarkerPool<M> {
    /// Build a pool from already created markers. All start hidden.
    pub fn from_markers(markers: Vec<M>) -> Self {
        let mut slots = markers;
        for m in &mut slots {
            m.set_visible(false);
        }
        let ring = (0..slots.len()).map(MarkerId).collect();
        Self {
            slots,
            ring,
            dequeues: 0,
        }
    }

    /// Ask the substrate for `size` markers and pool them.
    pub fn create<P>(substrate: &mut P, size: usize, edge: f32) -> Self
    where
        P: Substrate<Marker = M>,
    {
        let markers = (0..size)
            .map(|i| substrate.create_marker(i, edge))
            .collect::<Vec<_>>();
        Self::from_markers(markers)
    }

    /// Take the marker at the front of the ring.
    ///
    /// Callers must hand it back with [`enqueue`](Self::enqueue) before the
    /// next dequeue, otherwise the ring shrinks.
    pub fn dequeue(&mut self) -> Result<MarkerId> {
        let id = self.ring.pop_front().ok_or(ProximityError::PoolExhausted)?;
        self.dequeues += 1;
        Ok(id)
    }

    /// Put a marker back at the end of the ring. Ids from another pool are dropped.
    pub fn enqueue(&mut self, id: MarkerId) {
        if id.0 >= self.slots.len() {
            log::warn!("[pool] ignoring foreign {} (capacity {})", id, self.slots.len());
            return;
        }
        self.ring.push_back(id);
    }

    /// Id that the next dequeue will return.
    pub fn peek_next(&self) -> Option<MarkerId> {
        self.ring.front().copied()
    }

    pub fn marker_mut(&mut self, id: MarkerId) -> Option<&mut M> {
        self.slots.get_mut(id.0)
    }

    pub fn marker(&self, id: MarkerId) -> Option<&M> {
        self.slots.get(id.0)
    }

    /// Number of markers created for this pool.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of markers currently queued in the ring.
    pub fn queued(&self) -> usize {
        self.ring.len()
    }

    pub fn dequeues(&self) -> u64 {
        self.dequeues
    }

    /// Ring order, front first.
    pub fn order(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.ring.iter().copied()
    }
}

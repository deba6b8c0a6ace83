use crate::pool::MarkerId;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

/// When a marker was spawned and how long it is meant to stay visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifetimeEntry {
    pub created_at: Duration,
    pub visible_for: Duration,
}

impl LifetimeEntry {
    /// True once `now` is strictly past the scheduled end plus `grace`.
    #[inline]
    pub fn is_expired(&self, now: Duration, grace: Duration) -> bool {
        now.saturating_sub(self.created_at) > self.visible_for.saturating_add(grace)
    }
}

/// Lifetime bookkeeping for in-flight markers.
///
/// Holds exactly one entry per visible marker. Respawning a marker that is
/// still tracked replaces its entry.
#[derive(Debug, Default)]
pub struct MarkerLifetimes {
    entries: FnvHashMap<MarkerId, LifetimeEntry>,
}

impl MarkerLifetimes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: MarkerId, now: Duration, visible_for: Duration) {
        self.entries.insert(
            id,
            LifetimeEntry {
                created_at: now,
                visible_for,
            },
        );
    }

    /// Remove every expired entry and return the affected ids in slot order.
    pub fn sweep(&mut self, now: Duration, grace: Duration) -> SmallVec<[MarkerId; 8]> {
        let mut expired: SmallVec<[MarkerId; 8]> = self
            .entries
            .iter()
            .filter(|(_, e)| e.is_expired(now, grace))
            .map(|(id, _)| *id)
            .collect();
        expired.sort_unstable();
        for id in &expired {
            self.entries.remove(id);
        }
        expired
    }

    pub fn get(&self, id: MarkerId) -> Option<&LifetimeEntry> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: MarkerId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

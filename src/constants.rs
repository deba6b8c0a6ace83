use glam::Vec3;

// Shared tuning constants for the proximity effect.

// Marker pool
pub const POOL_SIZE: usize = 60; // markers created once at startup and reused forever
pub const MARKER_EDGE: f32 = 0.02; // cube edge length handed to the substrate

// Spawn cadence
pub const SPAWN_INTERVAL_FRAMES: u64 = 5; // lanes advance on every 5th frame

// Distance mapping
pub const MAX_DISTANCE: f32 = 2.0; // audible range and spawn cutoff
pub const PITCH_SPAN: f32 = -30.0; // pitch at the far end of the clamped range

// Marker placement
pub const JITTER: f32 = 0.005; // per-axis spawn jitter upper bound
pub const LATERAL_OFFSET: f32 = 0.04; // sideways shift of the return lane

// Lifetimes
pub const SECONDS_PER_DISTANCE: f32 = 2.0; // move duration per unit of flat distance
pub const EXPIRY_GRACE_MS: u64 = 100; // extra visible time after the move ends

// Lane tints (RGBA)
pub const LANE_A_TINT: [f32; 4] = [1.0, 0.0, 0.0, 1.0]; // red, A -> B
pub const LANE_B_TINT: [f32; 4] = [0.0, 1.0, 0.0, 1.0]; // green, B -> A

/// Vertical axis of the shared space. Flat distance discards this component.
pub const WORLD_UP: Vec3 = Vec3::Y;

//! Two-hand proximity effect.
//!
//! Every frame the flat distance between two hands drives the pitch and volume
//! of one looping sound. Every few frames two lanes of small markers are
//! spawned from a fixed pool, moved from one hand toward the other and hidden
//! again once their lifetime runs out. Scene and audio resources stay behind
//! the [`Substrate`] traits.

pub mod audio;
pub mod clock;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod hand;
pub mod lane;
pub mod lifetime;
pub mod params;
pub mod pool;
pub mod substrate;

pub use audio::*;
pub use clock::*;
pub use error::ProximityError;
pub use geometry::*;
pub use hand::*;
pub use lane::*;
pub use lifetime::*;
pub use params::*;
pub use pool::*;
pub use substrate::*;

//! Capability surface of the presentation/audio host.
//!
//! The core never creates meshes, materials or audio devices itself. It asks a
//! [`Substrate`] for marker handles and one looping sound at startup, then only
//! talks to those handles.

use glam::{Vec3, Vec4};
use std::time::Duration;

/// Interpolation curve for a marker move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
}

/// Pitch and volume of the ambient loop.
///
/// `pitch` is a semitone offset from the clip's native pitch; `volume` is a
/// linear gain in 0..1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioParams {
    pub pitch: f32,
    pub volume: f32,
}

/// Options used when starting the looping sound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundOptions {
    pub looping: bool,
    pub doppler: f32,
    pub initial: AudioParams,
}

impl Default for SoundOptions {
    fn default() -> Self {
        Self {
            looping: true,
            doppler: 0.0,
            initial: AudioParams {
                pitch: 0.0,
                volume: 0.0,
            },
        }
    }
}

/// A reusable visual marker owned by the host scene.
pub trait VisualMarker {
    /// Parent-relative (app space) offset of the marker.
    fn set_app_offset(&mut self, offset: Vec3);
    fn set_local_position(&mut self, position: Vec3);
    fn set_visible(&mut self, visible: bool);
    fn set_tint(&mut self, rgba: Vec4);
    /// Fire-and-forget tween of the local position. No completion is reported.
    fn animate_to(&mut self, target: Vec3, duration: Duration, easing: Easing);
}

/// A started, looping spatial sound.
pub trait LoopingSound {
    fn set_state(&mut self, params: AudioParams);
}

/// Factory for the handles the core drives.
pub trait Substrate {
    type Marker: VisualMarker;
    type Sound: LoopingSound;

    /// Called once per pool slot at initialization.
    fn create_marker(&mut self, index: usize, edge: f32) -> Self::Marker;
    /// Called once, before the first frame.
    fn start_looping_sound(&mut self, options: SoundOptions) -> Self::Sound;
}

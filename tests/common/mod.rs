// Recording substrate shared by the host-side tests.
// Every capability call lands in a `Recorder` the tests can inspect.

#![allow(dead_code)]

use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;
use soundhand::{
    AudioParams, Easing, LoopingSound, ProximityParams, SoundHand, SoundOptions, Substrate,
    VisualMarker,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub target: Vec3,
    pub duration: Duration,
    pub easing: Easing,
}

#[derive(Clone, Debug, Default)]
pub struct MarkerRecord {
    pub edge: f32,
    pub app_offset: Vec3,
    pub local: Vec3,
    pub visible: bool,
    pub tint: Vec4,
    pub animations: Vec<Animation>,
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub markers: Vec<MarkerRecord>,
    pub sound_options: Option<SoundOptions>,
    pub sound_updates: Vec<AudioParams>,
}

pub type Shared = Rc<RefCell<Recorder>>;

pub struct RecordingStage {
    pub shared: Shared,
}

pub struct RecMarker {
    index: usize,
    shared: Shared,
}

pub struct RecSound {
    shared: Shared,
}

impl RecordingStage {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(RefCell::new(Recorder::default())),
        }
    }
}

impl RecMarker {
    fn edit(&self, f: impl FnOnce(&mut MarkerRecord)) {
        f(&mut self.shared.borrow_mut().markers[self.index]);
    }
}

impl VisualMarker for RecMarker {
    fn set_app_offset(&mut self, offset: Vec3) {
        self.edit(|m| m.app_offset = offset);
    }
    fn set_local_position(&mut self, position: Vec3) {
        self.edit(|m| m.local = position);
    }
    fn set_visible(&mut self, visible: bool) {
        self.edit(|m| m.visible = visible);
    }
    fn set_tint(&mut self, rgba: Vec4) {
        self.edit(|m| m.tint = rgba);
    }
    fn animate_to(&mut self, target: Vec3, duration: Duration, easing: Easing) {
        self.edit(|m| {
            m.animations.push(Animation {
                target,
                duration,
                easing,
            })
        });
    }
}

impl LoopingSound for RecSound {
    fn set_state(&mut self, params: AudioParams) {
        self.shared.borrow_mut().sound_updates.push(params);
    }
}

impl Substrate for RecordingStage {
    type Marker = RecMarker;
    type Sound = RecSound;

    fn create_marker(&mut self, index: usize, edge: f32) -> RecMarker {
        let mut rec = self.shared.borrow_mut();
        assert_eq!(rec.markers.len(), index);
        rec.markers.push(MarkerRecord {
            edge,
            // Host default before the core touches it
            visible: true,
            tint: Vec4::ONE,
            ..Default::default()
        });
        RecMarker {
            index,
            shared: Rc::clone(&self.shared),
        }
    }

    fn start_looping_sound(&mut self, options: SoundOptions) -> RecSound {
        self.shared.borrow_mut().sound_options = Some(options);
        RecSound {
            shared: Rc::clone(&self.shared),
        }
    }
}

pub type TestHand = SoundHand<RecordingStage, StdRng>;

pub fn make_hand_with(params: ProximityParams) -> (TestHand, Shared) {
    let mut stage = RecordingStage::new();
    let hand = SoundHand::new(&mut stage, params, StdRng::seed_from_u64(42))
        .expect("valid params");
    (hand, stage.shared)
}

pub fn make_hand() -> (TestHand, Shared) {
    make_hand_with(ProximityParams::default())
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// `actual - base` lies in `[0, jitter)` on every axis, with float slack.
pub fn within_jitter(actual: Vec3, base: Vec3, jitter: f32) -> bool {
    let d = actual - base;
    let eps = 1e-5;
    [d.x, d.y, d.z].iter().all(|c| *c >= -eps && *c < jitter + eps)
}

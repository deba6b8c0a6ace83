use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use soundhand::{
    AudioParams, LoopingSound, ProximityParams, SessionClock, SoundHand, SoundOptions, Substrate,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

mod stage;
mod tone;

use stage::{Scene, StageMarker};
use tone::{SharedTone, ToneHandle};

const FRAME_TIME: Duration = Duration::from_micros(16_667);
const DEFAULT_RUN_SECONDS: f32 = 20.0;
const HAND_SWEEP_PERIOD_SEC: f32 = 8.0;

/// Native host: headless stage for markers plus a cpal tone for the loop.
struct NativeHost {
    scene: Rc<RefCell<Scene>>,
    tone: SharedTone,
}

impl Substrate for NativeHost {
    type Marker = StageMarker;
    type Sound = ToneHandle;

    fn create_marker(&mut self, index: usize, edge: f32) -> StageMarker {
        log::debug!("[stage] create box{} edge={}", index, edge);
        StageMarker::new(&self.scene)
    }

    fn start_looping_sound(&mut self, options: SoundOptions) -> ToneHandle {
        log::info!(
            "[stage] start loop looping={} doppler={}",
            options.looping,
            options.doppler
        );
        let mut handle = ToneHandle::new(Arc::clone(&self.tone));
        handle.set_state(options.initial);
        handle
    }
}

/// Two synthetic hands at different heights drifting together and apart.
///
/// Flat distance sweeps roughly 0.1..2.6 so both the audible range and the
/// cutoff are exercised.
fn hand_positions(t: f32) -> (Vec3, Vec3) {
    let phase = (t / HAND_SWEEP_PERIOD_SEC) * std::f32::consts::TAU;
    let spread = 1.35 - 1.25 * phase.cos();
    let wobble = 0.05 * (t * 3.1).sin();
    let hand_a = Vec3::new(-0.5 * spread, 1.1 + wobble, 0.2 * (t * 0.7).sin());
    let hand_b = Vec3::new(0.5 * spread, 1.45 - wobble, -0.2 * (t * 0.7).sin());
    (hand_a, hand_b)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let run_seconds = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_RUN_SECONDS);

    let tone: SharedTone = Arc::new(Mutex::new(AudioParams::default()));
    // Keep the stream alive for the whole run
    let stream = tone::start_output(Arc::clone(&tone));
    if stream.is_none() {
        log::warn!("no audio output available; running silently");
    }

    let scene = Scene::shared();
    let mut host = NativeHost {
        scene: Rc::clone(&scene),
        tone,
    };
    let mut effect = SoundHand::new(
        &mut host,
        ProximityParams::default(),
        StdRng::seed_from_u64(42),
    )?;

    let clock = SessionClock::start();
    let mut next_status = Duration::ZERO;
    loop {
        let now = clock.now();
        let t = now.as_secs_f32();
        if t >= run_seconds {
            break;
        }
        scene.borrow_mut().advance(now);

        let (hand_a, hand_b) = hand_positions(t);
        let report = effect.update(hand_a, hand_b, now)?;

        if now >= next_status {
            next_status += Duration::from_secs(1);
            let stats = scene.borrow().stats();
            log::info!(
                "t={:>5.1}s dist={:.2} pitch={:>6.2} ({:>6.1} Hz) vol={:.0} live={} visible={} (red={} green={}) moving={} centroid=({:.2},{:.2},{:.2})",
                t,
                report.distance,
                report.audio.pitch,
                tone::pitch_to_hz(report.audio.pitch),
                report.audio.volume,
                effect.visible_count(),
                stats.visible,
                stats.red,
                stats.green,
                stats.moving,
                stats.centroid.x,
                stats.centroid.y,
                stats.centroid.z
            );
        }
        thread::sleep(FRAME_TIME);
    }

    log::info!(
        "done: frames={} dequeues={}",
        effect.frame_counter(),
        effect.pool().dequeues()
    );
    drop(stream);
    Ok(())
}

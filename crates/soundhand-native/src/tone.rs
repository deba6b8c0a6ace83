//! Looping ambient tone on the default output device (cpal).
//!
//! The core writes pitch/volume through [`ToneHandle`]; the audio callback
//! reads them once per buffer. Pitch is a semitone offset from `BASE_HZ`.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use soundhand::{AudioParams, LoopingSound};
use std::f32::consts::TAU;
use std::sync::{Arc, Mutex};

const BASE_HZ: f32 = 440.0;
const MASTER_GAIN: f32 = 0.2;
// One-pole smoothing per sample to keep volume cuts click-free
const GAIN_SMOOTHING: f32 = 0.002;

pub type SharedTone = Arc<Mutex<AudioParams>>;

fn read_params(shared: &SharedTone) -> AudioParams {
    match shared.lock() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

#[inline]
pub fn pitch_to_hz(pitch_semitones: f32) -> f32 {
    BASE_HZ * 2.0_f32.powf(pitch_semitones / 12.0)
}

/// Sound handle given to the core.
pub struct ToneHandle {
    shared: SharedTone,
}

impl ToneHandle {
    pub fn new(shared: SharedTone) -> Self {
        Self { shared }
    }
}

impl LoopingSound for ToneHandle {
    fn set_state(&mut self, params: AudioParams) {
        match self.shared.lock() {
            Ok(mut guard) => *guard = params,
            Err(poisoned) => *poisoned.into_inner() = params,
        }
    }
}

/// Open the default output device and start rendering the tone.
///
/// Returns `None` when no usable device exists; the effect keeps running silently.
pub fn start_output(shared: SharedTone) -> Option<cpal::Stream> {
    let host = cpal::default_host();
    let device = host.default_output_device()?;
    let config = device.default_output_config().ok()?;
    log::info!(
        "[tone] device={} rate={} channels={} format={:?}",
        device.name().unwrap_or_else(|_| "unknown".into()),
        config.sample_rate().0,
        config.channels(),
        config.sample_format()
    );
    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), shared),
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), shared),
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), shared),
        other => {
            log::warn!("[tone] unsupported sample format {:?}", other);
            return None;
        }
    };
    let stream = match stream {
        Ok(s) => s,
        Err(e) => {
            log::error!("[tone] build stream error: {e}");
            return None;
        }
    };
    stream.play().ok()?;
    Some(stream)
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    shared: SharedTone,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let sample_rate = config.sample_rate.0 as f32;
    let channels = config.channels as usize;
    let mut phase = 0.0f32;
    let mut gain = 0.0f32;
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let params = read_params(&shared);
            let phase_inc = TAU * pitch_to_hz(params.pitch) / sample_rate;
            let target_gain = params.volume.clamp(0.0, 1.0) * MASTER_GAIN;
            for frame in data.chunks_mut(channels.max(1)) {
                gain += (target_gain - gain) * GAIN_SMOOTHING;
                let value = T::from_sample(phase.sin() * gain);
                for out in frame.iter_mut() {
                    *out = value;
                }
                phase += phase_inc;
                if phase > TAU {
                    phase -= TAU;
                }
            }
        },
        |err| log::error!("audio stream error: {err}"),
        None,
    )
}

//! Keystroke click playback.
//!
//! A dedicated thread owns the cpal output stream. The stream is opened on
//! the first cue; if no device is available the failure is logged once and
//! every later cue is a no-op.

use std::f32::consts::TAU;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use cpal::traits::{DeviceTrait as _, HostTrait as _, StreamTrait as _};
use thiserror::Error;

use super::AudioCue;
use crate::typewriter::Cue;

/// Minimum gap between two audible cues.
pub const CUE_DEBOUNCE: Duration = Duration::from_millis(25);

const CLICK_FREQ_HZ: f32 = 1800.0;
const CLICK_SECS: f32 = 0.012;
const CLICK_AMP: f32 = 0.15;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no default output device")]
    NoDevice,
    #[error("default output config: {0}")]
    Config(String),
    #[error("build output stream: {0}")]
    Build(String),
    #[error("play stream: {0}")]
    Play(String),
    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),
}

enum Cmd {
    Click,
}

/// Audio backed by the default cpal output device.
pub struct CpalAudio {
    tx: mpsc::Sender<Cmd>,
}

impl CpalAudio {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<Cmd>();
        thread::spawn(move || audio_thread(&rx));
        Self { tx }
    }
}

impl AudioCue for CpalAudio {
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Keystroke => {
                let _ = self.tx.send(Cmd::Click);
            }
        }
    }
}

/// Silent audio, used when sound is disabled.
pub struct NullAudio;

impl AudioCue for NullAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Drops cues that arrive within `window` of the last audible one.
pub struct Debounced<A> {
    inner: A,
    window: Duration,
    last: Option<Instant>,
}

impl<A: AudioCue> Debounced<A> {
    pub fn new(inner: A, window: Duration) -> Self {
        Self {
            inner,
            window,
            last: None,
        }
    }

    fn should_play(&mut self, now: Instant) -> bool {
        if self
            .last
            .is_some_and(|last| now.duration_since(last) < self.window)
        {
            return false;
        }
        self.last = Some(now);
        true
    }
}

impl<A: AudioCue> AudioCue for Debounced<A> {
    fn play(&mut self, cue: Cue) {
        if self.should_play(Instant::now()) {
            self.inner.play(cue);
        }
    }
}

struct SharedState {
    click_pending: AtomicBool,
}

fn audio_thread(rx: &mpsc::Receiver<Cmd>) {
    let shared = Arc::new(SharedState {
        click_pending: AtomicBool::new(false),
    });

    let mut stream: Option<cpal::Stream> = None;
    let mut init_failed = false;

    while let Ok(cmd) = rx.recv() {
        if stream.is_none() && !init_failed {
            match try_init_stream(Arc::clone(&shared)) {
                Ok(s) => stream = Some(s),
                Err(err) => {
                    init_failed = true;
                    tracing::warn!(%err, "audio unavailable, sound cues disabled");
                }
            }
        }

        match cmd {
            Cmd::Click => shared.click_pending.store(true, Ordering::Relaxed),
        }
    }
}

fn try_init_stream(shared: Arc<SharedState>) -> Result<cpal::Stream, AudioError> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

    let supported = device
        .default_output_config()
        .map_err(|err| AudioError::Config(err.to_string()))?;
    let config = supported.config();

    let channels = usize::from(config.channels);
    let sample_rate = config.sample_rate.0 as f32;

    let err_fn = |err: cpal::StreamError| tracing::warn!(%err, "audio stream error");

    macro_rules! build {
        ($sample:ty) => {{
            let mut voice = Voice::new(shared, sample_rate);
            device
                .build_output_stream(
                    &config,
                    move |data: &mut [$sample], _| voice.fill(data, channels),
                    err_fn,
                    None,
                )
                .map_err(|err| AudioError::Build(err.to_string()))?
        }};
    }

    let stream = match supported.sample_format() {
        cpal::SampleFormat::F32 => build!(f32),
        cpal::SampleFormat::I16 => build!(i16),
        cpal::SampleFormat::U16 => build!(u16),
        other => return Err(AudioError::UnsupportedFormat(format!("{other:?}"))),
    };

    stream
        .play()
        .map_err(|err| AudioError::Play(err.to_string()))?;
    Ok(stream)
}

/// Callback-side state: a decaying sine burst per click.
struct Voice {
    shared: Arc<SharedState>,
    sample_rate: f32,
    phase: f32,
    remaining: u32,
    length: u32,
}

impl Voice {
    fn new(shared: Arc<SharedState>, sample_rate: f32) -> Self {
        let length = (sample_rate * CLICK_SECS) as u32;
        Self {
            shared,
            sample_rate,
            phase: 0.0,
            remaining: 0,
            length: length.max(1),
        }
    }

    fn fill<T>(&mut self, output: &mut [T], channels: usize)
    where
        T: cpal::Sample + cpal::FromSample<f32>,
    {
        if self.shared.click_pending.swap(false, Ordering::Relaxed) {
            self.remaining = self.length;
            self.phase = 0.0;
        }

        let step = TAU * CLICK_FREQ_HZ / self.sample_rate;
        for frame in output.chunks_mut(channels.max(1)) {
            let value = if self.remaining == 0 {
                0.0
            } else {
                let envelope = self.remaining as f32 / self.length as f32;
                self.remaining -= 1;
                self.phase = (self.phase + step) % TAU;
                self.phase.sin() * CLICK_AMP * envelope
            };
            let sample = <T as cpal::FromSample<f32>>::from_sample_(value);
            for out in frame.iter_mut() {
                *out = sample;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    struct Counting(Arc<Mutex<usize>>);

    impl AudioCue for Counting {
        fn play(&mut self, _cue: Cue) {
            *self.0.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_debounce_drops_cues_inside_window() {
        let mut audio = Debounced::new(NullAudio, CUE_DEBOUNCE);
        let start = Instant::now();
        assert!(audio.should_play(start));
        assert!(!audio.should_play(start + CUE_DEBOUNCE / 2));
        assert!(audio.should_play(start + CUE_DEBOUNCE * 2));
    }

    #[test]
    fn test_config_default_matches_debounce_constant() {
        let config = termfolio_core::config::AudioConfig::default();
        assert_eq!(config.debounce(), CUE_DEBOUNCE);
    }

    #[test]
    fn test_debounce_forwards_first_cue() {
        let count = Arc::new(Mutex::new(0));
        let mut audio = Debounced::new(Counting(Arc::clone(&count)), Duration::from_secs(60));
        audio.play(Cue::Keystroke);
        audio.play(Cue::Keystroke);
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_voice_renders_click_then_silence() {
        let shared = Arc::new(SharedState {
            click_pending: AtomicBool::new(true),
        });
        let mut voice = Voice::new(shared, 1000.0);
        let mut buffer = vec![0.0f32; 64];
        voice.fill(&mut buffer, 2);
        assert!(buffer.iter().any(|sample| *sample != 0.0));
        assert_eq!(buffer[0], buffer[1], "channels carry the same sample");

        voice.fill(&mut buffer, 2);
        assert!(buffer.iter().all(|sample| *sample == 0.0));
    }
}

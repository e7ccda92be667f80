use letter_core::constants::ENVELOPE_FLOOR;
use letter_core::{AudioBackend, AudioError, AudioState, ToneRequest, Waveform};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
fn js_err(label: &str, e: JsValue) -> AudioError {
    AudioError::Tone(format!("{}: {:?}", label, e))
}

#[inline]
fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

/// WebAudio output, created on the first resume request so the browser sees
/// it come from a user gesture.
#[derive(Default)]
pub struct WebAudioBackend {
    ctx: Option<web::AudioContext>,
    failed: bool,
}

impl WebAudioBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_context(&mut self) -> Result<&web::AudioContext, AudioError> {
        if self.failed {
            return Err(AudioError::Unavailable("creation failed earlier".into()));
        }
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => {
                    log::info!("[audio] context created");
                    self.ctx = Some(ctx);
                }
                Err(e) => {
                    self.failed = true;
                    log::warn!("[audio] AudioContext error: {:?}", e);
                    return Err(AudioError::Unavailable(format!("{:?}", e)));
                }
            }
        }
        self.ctx
            .as_ref()
            .ok_or_else(|| AudioError::Unavailable("no context".into()))
    }
}

impl AudioBackend for WebAudioBackend {
    fn state(&self) -> AudioState {
        match &self.ctx {
            None if self.failed => AudioState::Unavailable,
            None => AudioState::Suspended,
            Some(ctx) => match ctx.state() {
                web::AudioContextState::Running => AudioState::Running,
                web::AudioContextState::Closed => AudioState::Unavailable,
                _ => AudioState::Suspended,
            },
        }
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        let ctx = self.ensure_context()?;
        let promise = ctx
            .resume()
            .map_err(|e| AudioError::ResumeRejected(format!("{:?}", e)))?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] resume rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn play_tone(&mut self, tone: &ToneRequest, offset_sec: f64) -> Result<(), AudioError> {
        let ctx = self
            .ctx
            .as_ref()
            .ok_or_else(|| AudioError::Unavailable("no context".into()))?;
        let src = web::OscillatorNode::new(ctx).map_err(|e| js_err("OscillatorNode", e))?;
        src.set_type(oscillator_type(tone.waveform));
        src.frequency().set_value(tone.frequency_hz);
        let g = web::GainNode::new(ctx).map_err(|e| js_err("GainNode", e))?;

        let t0 = ctx.current_time() + offset_sec.max(0.0);
        let t_end = t0 + tone.duration_sec.max(0.0) as f64;
        g.gain()
            .set_value_at_time(tone.gain.max(ENVELOPE_FLOOR), t0)
            .map_err(|e| js_err("gain onset", e))?;
        g.gain()
            .exponential_ramp_to_value_at_time(ENVELOPE_FLOOR, t_end)
            .map_err(|e| js_err("gain ramp", e))?;

        src.connect_with_audio_node(&g)
            .map_err(|e| js_err("connect osc", e))?;
        g.connect_with_audio_node(&ctx.destination())
            .map_err(|e| js_err("connect gain", e))?;
        src.start_with_when(t0).map_err(|e| js_err("start", e))?;
        src.stop_with_when(t_end).map_err(|e| js_err("stop", e))?;
        Ok(())
    }
}

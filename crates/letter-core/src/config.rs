//! Experience configuration.
//!
//! The reduced-motion preference is read once at startup and threaded through
//! every delay and the particle density. Reduced timings are near-zero but the
//! state graph stays identical.

use crate::constants::*;
use crate::error::CardError;
use crate::particles::ParticleConfig;

/// Experience variants differ in how far the seal must be dragged and how
/// quickly the ink flows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Classic,
    Keepsake,
}

impl Variant {
    pub fn drag_threshold(self) -> f32 {
        match self {
            Variant::Classic => CLASSIC_DRAG_THRESHOLD,
            Variant::Keepsake => KEEPSAKE_DRAG_THRESHOLD,
        }
    }

    pub fn char_interval_ms(self) -> f64 {
        match self {
            Variant::Classic => CLASSIC_CHAR_INTERVAL_MS,
            Variant::Keepsake => KEEPSAKE_CHAR_INTERVAL_MS,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "classic" | "Classic" => Some(Variant::Classic),
            "keepsake" | "Keepsake" => Some(Variant::Keepsake),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    #[inline]
    pub fn is_reduced(self) -> bool {
        matches!(self, MotionPreference::Reduced)
    }
}

/// Every fixed delay of the experience, in milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Timings {
    pub intro_ms: f64,
    pub seal_break_ms: f64,
    pub reveal_delay_ms: f64,
    pub char_interval_ms: f64,
    pub line_pause_ms: f64,
    pub fold_out_ms: f64,
}

impl Timings {
    pub fn standard(variant: Variant) -> Self {
        Self {
            intro_ms: 2800.0,
            seal_break_ms: 900.0,
            reveal_delay_ms: 500.0,
            char_interval_ms: variant.char_interval_ms(),
            line_pause_ms: 250.0,
            fold_out_ms: 900.0,
        }
    }

    pub fn reduced() -> Self {
        Self {
            intro_ms: 120.0,
            seal_break_ms: 80.0,
            reveal_delay_ms: 40.0,
            char_interval_ms: 0.0,
            line_pause_ms: 0.0,
            fold_out_ms: 80.0,
        }
    }

    pub fn for_motion(variant: Variant, motion: MotionPreference) -> Self {
        if motion.is_reduced() {
            Self::reduced()
        } else {
            Self::standard(variant)
        }
    }

    fn validate(&self) -> Result<(), CardError> {
        let all = [
            ("intro", self.intro_ms),
            ("seal_break", self.seal_break_ms),
            ("reveal_delay", self.reveal_delay_ms),
            ("char_interval", self.char_interval_ms),
            ("line_pause", self.line_pause_ms),
            ("fold_out", self.fold_out_ms),
        ];
        for (name, value) in all {
            if !value.is_finite() || value < 0.0 {
                return Err(CardError::InvalidTiming { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ExperienceConfig {
    pub variant: Variant,
    pub motion: MotionPreference,
    pub drag_threshold: f32,
    pub timings: Timings,
    pub particles: ParticleConfig,
    pub seed: u64,
}

impl ExperienceConfig {
    pub fn new(variant: Variant, motion: MotionPreference) -> Self {
        Self {
            variant,
            motion,
            drag_threshold: variant.drag_threshold(),
            timings: Timings::for_motion(variant, motion),
            particles: ParticleConfig::for_motion(motion),
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), CardError> {
        if !self.drag_threshold.is_finite() || self.drag_threshold <= 0.0 {
            return Err(CardError::InvalidThreshold(self.drag_threshold));
        }
        self.timings.validate()?;
        self.particles.validate()
    }
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self::new(Variant::default(), MotionPreference::default())
    }
}

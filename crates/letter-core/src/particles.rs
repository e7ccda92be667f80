//! Twinkling stars and rising hearts behind the night scene.
//!
//! `step` advances the simulation and never draws; `render` draws the current
//! state through a [`ParticleCanvas`] and never mutates it.

use crate::config::MotionPreference;
use crate::constants::*;
use crate::error::CardError;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub area_per_star: f32,
    pub heart_count_min: usize,
    pub heart_count_max: usize,
    pub heart_top_margin: f32,
    pub heart_spawn_depth: f32,
}

impl ParticleConfig {
    pub fn for_motion(motion: MotionPreference) -> Self {
        if motion.is_reduced() {
            Self {
                area_per_star: STAR_AREA_PER_STAR_REDUCED,
                heart_count_min: HEART_COUNT_MIN_REDUCED,
                heart_count_max: HEART_COUNT_MAX_REDUCED,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CardError> {
        if !(self.area_per_star.is_finite() && self.area_per_star > 0.0) {
            return Err(CardError::InvalidParticles("area_per_star must be positive"));
        }
        if self.heart_count_min > self.heart_count_max {
            return Err(CardError::InvalidParticles("heart count range is inverted"));
        }
        if self.heart_top_margin < 0.0 || self.heart_spawn_depth < 0.0 {
            return Err(CardError::InvalidParticles("heart margins must be non-negative"));
        }
        Ok(())
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            area_per_star: STAR_AREA_PER_STAR,
            heart_count_min: HEART_COUNT_MIN,
            heart_count_max: HEART_COUNT_MAX,
            heart_top_margin: HEART_TOP_MARGIN,
            heart_spawn_depth: HEART_SPAWN_DEPTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub alpha_velocity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    pub pos: Vec2,
    pub size: f32,
    pub rise_velocity: f32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn from_rgb(rgb: [f32; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
}

/// Drawing surface for the particle layer.
pub trait ParticleCanvas {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_path(&mut self, path: &[PathSegment], color: Rgba);
}

/// Heart outline with its notch at `top` (x centre, y top edge): two mirrored
/// lobes, each built from two cubic segments.
pub fn heart_path(top: Vec2, size: f32) -> [PathSegment; 5] {
    let s = size;
    let (x, y) = (top.x, top.y);
    let notch = Vec2::new(x, y + s * 0.25);
    let tip = Vec2::new(x, y + s);
    [
        PathSegment::MoveTo(notch),
        PathSegment::CubicTo {
            c1: Vec2::new(x, y),
            c2: Vec2::new(x - s * 0.5, y),
            to: Vec2::new(x - s * 0.5, y + s * 0.25),
        },
        PathSegment::CubicTo {
            c1: Vec2::new(x - s * 0.5, y + s * 0.5),
            c2: Vec2::new(x, y + s * 0.75),
            to: tip,
        },
        PathSegment::CubicTo {
            c1: Vec2::new(x, y + s * 0.75),
            c2: Vec2::new(x + s * 0.5, y + s * 0.5),
            to: Vec2::new(x + s * 0.5, y + s * 0.25),
        },
        PathSegment::CubicTo {
            c1: Vec2::new(x + s * 0.5, y),
            c2: Vec2::new(x, y),
            to: notch,
        },
    ]
}

#[derive(Debug)]
pub struct ParticleField {
    config: ParticleConfig,
    width: f32,
    height: f32,
    stars: Vec<Star>,
    hearts: Vec<Heart>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            stars: Vec::new(),
            hearts: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Resize the field to the viewport and reseed both populations.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let star_count = (self.width * self.height / self.config.area_per_star).floor() as usize;
        let (lo, hi) = (self.config.heart_count_min, self.config.heart_count_max);
        let heart_count = match (self.width > 0.0 && self.height > 0.0, lo < hi) {
            (false, _) => 0,
            (true, true) => self.rng.gen_range(lo..=hi),
            (true, false) => lo,
        };

        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.stars = (0..star_count)
            .map(|_| Star {
                pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                radius: STAR_RADIUS_MIN + rng.gen::<f32>() * STAR_RADIUS_SPAN,
                alpha: STAR_ALPHA_MIN + rng.gen::<f32>() * (STAR_ALPHA_MAX - STAR_ALPHA_MIN),
                alpha_velocity: STAR_ALPHA_VEL_MIN + rng.gen::<f32>() * STAR_ALPHA_VEL_SPAN,
            })
            .collect();
        self.hearts = (0..heart_count)
            .map(|_| {
                let mut heart = random_heart(rng, w);
                heart.pos.y = rng.gen::<f32>() * h;
                heart
            })
            .collect();
        log::debug!(
            "[particles] resized to {:.0}x{:.0}: {} stars, {} hearts",
            w,
            h,
            self.stars.len(),
            self.hearts.len()
        );
    }

    /// Advance one frame. Velocities are expressed per 60 fps frame and scaled
    /// by `dt_sec`, which is clamped so a long pause cannot teleport particles.
    pub fn step(&mut self, dt_sec: f32) {
        let frames = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC) / REFERENCE_FRAME_SEC;
        for star in &mut self.stars {
            step_star(star, frames);
        }
        let (w, h) = (self.width, self.height);
        let top = -self.config.heart_top_margin;
        let depth = self.config.heart_spawn_depth;
        for heart in &mut self.hearts {
            heart.pos.y -= heart.rise_velocity * frames;
            if heart.pos.y < top {
                *heart = random_heart(&mut self.rng, w);
                heart.pos.y = h + self.rng.gen::<f32>() * depth;
            }
        }
    }

    pub fn render(&self, canvas: &mut impl ParticleCanvas) {
        canvas.clear(self.width, self.height);
        for star in &self.stars {
            canvas.fill_circle(star.pos, star.radius, Rgba::from_rgb(STAR_COLOR, star.alpha));
        }
        for heart in &self.hearts {
            let path = heart_path(heart.pos, heart.size);
            canvas.fill_path(&path, Rgba::from_rgb(HEART_COLOR, heart.alpha));
        }
    }
}

/// Reflect alpha off `[STAR_ALPHA_MIN, STAR_ALPHA_MAX]`, flipping the velocity
/// when a bound is overshot.
#[inline]
fn step_star(star: &mut Star, frames: f32) {
    let mut a = star.alpha + star.alpha_velocity * frames;
    if a > STAR_ALPHA_MAX {
        a = STAR_ALPHA_MAX - (a - STAR_ALPHA_MAX);
        star.alpha_velocity = -star.alpha_velocity.abs();
    } else if a < STAR_ALPHA_MIN {
        a = STAR_ALPHA_MIN + (STAR_ALPHA_MIN - a);
        star.alpha_velocity = star.alpha_velocity.abs();
    }
    star.alpha = a.clamp(STAR_ALPHA_MIN, STAR_ALPHA_MAX);
}

fn random_heart(rng: &mut StdRng, width: f32) -> Heart {
    Heart {
        pos: Vec2::new(rng.gen::<f32>() * width, 0.0),
        size: HEART_SIZE_MIN + rng.gen::<f32>() * HEART_SIZE_SPAN,
        rise_velocity: HEART_RISE_MIN + rng.gen::<f32>() * HEART_RISE_SPAN,
        alpha: HEART_ALPHA_MIN + rng.gen::<f32>() * HEART_ALPHA_SPAN,
    }
}

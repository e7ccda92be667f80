//! Experience controller and generative effects engine for the sealed letter.
//!
//! Nothing in this crate touches a browser API. The web front-end feeds input
//! into [`ExperienceController`], drains the [`StageCommand`]s it emits and
//! supplies an [`AudioBackend`] and a [`ParticleCanvas`] implementation.

pub mod clock;
pub mod config;
pub mod constants;
pub mod content;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod particles;
pub mod stage;
pub mod state;
pub mod timers;
pub mod tone;
pub mod typewriter;

pub use clock::*;
pub use config::*;
pub use content::*;
pub use controller::*;
pub use error::*;
pub use gesture::*;
pub use particles::*;
pub use stage::*;
pub use state::*;
pub use timers::*;
pub use tone::*;
pub use typewriter::*;

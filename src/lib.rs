pub mod config;
pub mod core;
pub mod error;
pub mod extension;
pub mod particle;

pub use crate::core::ending::WordEnding;
pub use error::JosaError;
pub use extension::KoreanExtension;
pub use particle::{Particle, Registry, ToleranceStyle, REGISTRY};

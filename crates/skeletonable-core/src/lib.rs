pub mod config;
pub mod error;
pub mod skeleton;

pub use config::{AppConfig, SkeletonConfig};
pub use error::{Error, Result};
pub use skeleton::{EasingType, GradientDirection, SkeletonKind, TransitionKind};

//! The core module, which owns generated shapes and their configuration.

mod error;
mod generator;
mod settings;

pub use error::*;
pub use generator::*;
pub use settings::*;

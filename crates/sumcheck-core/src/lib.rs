pub mod config;
pub mod logging;

pub mod algorithm;
pub mod checksum;
pub mod error;
pub mod prompt;
pub mod render;
pub mod session;

pub use algorithm::{resolve, Algorithm};
pub use error::{Error, Result};
pub use render::{Renderer, Verdict};
pub use session::Session;

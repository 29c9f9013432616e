mod config;
mod core;
mod handle;

pub use self::config::*;
pub use self::core::*;
pub use self::handle::*;

//! Builder module for `argtree`.
//! See [documentation root](https://docs.rs/argtree/latest/argtree/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{CommandId, ConfigError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

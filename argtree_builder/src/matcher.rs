mod argument;
mod tokens;

pub(crate) use argument::*;
pub(crate) use tokens::*;

mod base;
mod command;
mod interface;
mod middleware;
mod printer;

pub use base::*;
pub use command::CommandId;
pub(crate) use command::*;
pub(crate) use interface::*;
pub(crate) use middleware::*;
pub(crate) use printer::*;

mod cli;
mod session;

pub use crate::cli::{init_logger, BitCalcCommand};
pub use crate::session::Session;

mod base;
mod batch;
mod connection;
mod sink;
mod target;

pub use base::*;
pub use batch::*;
pub use connection::*;
pub use sink::*;
pub use target::*;

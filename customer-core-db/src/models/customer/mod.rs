pub mod change_log;
pub mod conflict;
pub mod customer;

pub use change_log::*;
pub use conflict::*;
pub use customer::*;

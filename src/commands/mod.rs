pub mod build;
pub mod quote;
pub mod replay;
pub mod session;
pub mod watch;

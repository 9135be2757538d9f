pub mod panel;
pub mod replay;
pub mod session;
pub mod watch;

pub mod header;
pub mod warning;

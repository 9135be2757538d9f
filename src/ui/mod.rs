//! Terminal output for the `tally` binary.
//!
//! - `theme` - Colors, icons and borders
//! - `primitives` / `widgets` / `blocks` - Building blocks
//! - `views` - Per-command rendering

pub mod blocks;
pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

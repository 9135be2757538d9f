//! Domain Policies
//!
//! Business rules that govern pricing.
//! These are pure functions that operate on domain entities.

mod discount;

pub use discount::{DiscountPolicy, DOUBLE_BONUS_SEATS};

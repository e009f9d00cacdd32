//! Subnet calculation logic.
//!
//! This module contains the pure calculations:
//! - [`planner`] - Choosing a mask for a subnet count
//! - [`locator`] - Finding the subnet an address falls in
//! - [`enumerate`] - Listing every subnet of a plan

mod enumerate;
mod locator;
mod planner;

// Re-export public functions
pub use enumerate::{enumerate, SubnetListing};
pub use locator::{locate, usable_host_count};
pub use planner::{extra_bits_for, plan, plan_from_mask, plan_from_prefix};

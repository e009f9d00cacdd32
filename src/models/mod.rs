//! Domain models for subnet calculation.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4Cidr`] and [`AddressBytes`] - IPv4 address helpers
//! - [`SubnetMask`] and [`NetworkClass`] - masks and classful defaults
//! - [`SubnetPlan`] and [`SubnetDetails`] - planner and locator results

mod details;
mod ipv4;
mod mask;

// Re-export public types
pub use details::{SubnetDetails, SubnetPlan};
pub use ipv4::{
    cut_addr, get_cidr_mask, parse_ipv4, AddressBytes, Ipv4Cidr, MAX_LENGTH, OCTET_BITS,
};
pub use mask::{NetworkClass, SubnetMask};

//! Subnet enumeration.
//!
//! Walks every block a [`SubnetPlan`] carves out of the base address's parent network.

use super::locate;
use crate::error::SubnetError;
use crate::models::{cut_addr, Ipv4Cidr, SubnetDetails, SubnetPlan};
use serde::Serialize;
use std::net::Ipv4Addr;

/// The subnets of a plan, possibly cut short by a row limit.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetListing {
    /// Network being split, at the plan's default prefix.
    pub parent: Ipv4Cidr,
    pub subnets: Vec<SubnetDetails>,
    /// Number of subnets in the full plan.
    pub total: u64,
    /// True when `subnets` holds fewer than `total` rows.
    pub truncated: bool,
}

/// List the subnets of `plan` inside the parent network of `base`.
///
/// # Arguments
/// * `base` - Any address in the network being split
/// * `plan` - The plan to enumerate
/// * `limit` - Maximum number of rows to produce
pub fn enumerate(
    base: Ipv4Addr,
    plan: &SubnetPlan,
    limit: usize,
) -> Result<SubnetListing, SubnetError> {
    let parent = Ipv4Cidr::new(cut_addr(base, plan.default_prefix)?, plan.default_prefix);
    let start = u64::from(u32::from(parent.addr));
    let rows = plan.subnet_count.min(limit as u64);
    log::debug!(
        "enumerate {parent} into {} x /{} ({rows} rows)",
        plan.subnet_count,
        plan.prefix
    );

    let subnets = (0..rows)
        .map(|i| {
            let block = start + i * plan.addresses_per_subnet;
            locate(Ipv4Addr::from(block as u32), plan.prefix)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let truncated = rows < plan.subnet_count;
    if truncated {
        log::warn!(
            "Listing only {rows} of {} subnets of {parent}",
            plan.subnet_count
        );
    }

    Ok(SubnetListing {
        parent,
        subnets,
        total: plan.subnet_count,
        truncated,
    })
}

//! IPv4 subnet calculator.
//!
//! Plans a subnet mask from a classful network and a subnet count (or takes an explicit
//! prefix/mask), then locates the subnet a given address falls in.
//!
//! # Module Structure
//! - [`models`] - Addresses, masks and result records
//! - [`processing`] - Planner, locator and enumerator
//! - [`output`] - Text, JSON and CSV renderings
//! - [`config`] - Settings and the calculation request
//! - [`cli`] - Command line options

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use config::{CalcRequest, MaskInput};
use models::{SubnetDetails, SubnetPlan};
use processing::SubnetListing;
use serde::Serialize;
use std::net::Ipv4Addr;

pub use error::SubnetError;

/// Everything one calculation produced.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub address: Ipv4Addr,
    pub plan: SubnetPlan,
    pub details: SubnetDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<SubnetListing>,
}

/// Run the planner, the locator and (if requested) the enumerator for one request.
pub fn calculate(request: &CalcRequest) -> Result<Calculation, SubnetError> {
    let address = request.address;
    log::info!("#Start calculate() for {address}");
    if !address.is_private() {
        log::warn!("{address} is not a private (RFC 1918) address");
    }

    let plan = match &request.mask {
        MaskInput::Classful { class, subnets } => processing::plan(*class, *subnets)?,
        MaskInput::Prefix(prefix) => processing::plan_from_prefix(*prefix)?,
        MaskInput::Mask(mask) => processing::plan_from_mask(*mask)?,
    };
    log::info!(
        "New subnet mask: {mask} (/{prefix}, {count} subnets)",
        mask = plan.mask,
        prefix = plan.prefix,
        count = plan.subnet_count
    );

    let details = processing::locate(address, plan.prefix)?;
    log::debug!("Located {address} in {}", details.cidr());

    let listing = if request.list_subnets {
        Some(processing::enumerate(address, &plan, request.list_limit)?)
    } else {
        None
    };

    Ok(Calculation {
        address,
        plan,
        details,
        listing,
    })
}

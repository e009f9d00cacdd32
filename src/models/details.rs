//! Result records produced by the planner and the locator.

use super::{Ipv4Cidr, NetworkClass, SubnetMask, MAX_LENGTH};
use crate::error::SubnetError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Mask chosen to satisfy a requested subnet count.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetPlan {
    /// Class the plan started from (None for an explicit prefix or mask).
    pub class: Option<NetworkClass>,
    /// Prefix length before any bits were borrowed.
    pub default_prefix: u8,
    /// Host bits borrowed for subnetting.
    pub extra_bits: u8,
    /// Resulting prefix length.
    pub prefix: u8,
    /// Resulting mask in dotted-decimal form.
    pub mask: SubnetMask,
    /// Number of subnets the borrowed bits create.
    pub subnet_count: u64,
    /// Addresses per subnet, network and broadcast ids included.
    pub addresses_per_subnet: u64,
}

impl SubnetPlan {
    pub(crate) fn new(
        class: Option<NetworkClass>,
        default_prefix: u8,
        extra_bits: u8,
    ) -> Result<SubnetPlan, SubnetError> {
        let prefix = default_prefix + extra_bits;
        let mask = SubnetMask::from_prefix(prefix)?;
        Ok(SubnetPlan {
            class,
            default_prefix,
            extra_bits,
            prefix,
            mask,
            subnet_count: 1u64 << extra_bits,
            addresses_per_subnet: 1u64 << (MAX_LENGTH - prefix),
        })
    }
}

/// Everything known about the subnet block an address falls in.
///
/// Absent values (`None`) mark results that would need a carry across octets.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDetails {
    /// The address that was located.
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub mask: SubnetMask,
    /// `"{address}/{prefix} -- {mask_octet}"`, informational only.
    pub subnet_mask: String,
    /// 1-based index of the octet the prefix boundary falls in.
    pub octet_index: usize,
    /// Mask value at `octet_index`.
    pub mask_octet: u8,
    /// Addresses per block at `octet_index`.
    pub group_size: u16,
    /// Value of `octet_index` where the containing block starts.
    pub block_start: u8,
    pub network_id: Ipv4Addr,
    pub broadcast_id: Ipv4Addr,
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub next_network: Option<Ipv4Addr>,
    pub usable_host_count: u64,
}

impl SubnetDetails {
    /// The block as `network_id/prefix`.
    pub fn cidr(&self) -> Ipv4Cidr {
        Ipv4Cidr::new(self.network_id, self.prefix)
    }

    /// The next network, or [`SubnetError::NoNextNetwork`] at the top of the octet.
    pub fn require_next_network(&self) -> Result<Ipv4Addr, SubnetError> {
        self.next_network
            .ok_or_else(|| SubnetError::NoNextNetwork(self.cidr()))
    }
}

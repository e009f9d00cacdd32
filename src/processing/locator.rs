//! Subnet location.
//!
//! Finds the fixed-size block an address falls in by walking block boundaries in the
//! octet where the prefix ends, then derives the block's ids and host range from there.
//! Values that would need a carry into a neighbouring octet are reported as absent.

use crate::error::SubnetError;
use crate::models::{AddressBytes, SubnetDetails, SubnetMask, MAX_LENGTH, OCTET_BITS};
use std::net::Ipv4Addr;

/// Number of usable hosts for a prefix: `2^(32 - prefix) - 2`, never below 0.
pub fn usable_host_count(prefix: u8) -> u64 {
    let addresses = 1u64 << (MAX_LENGTH - prefix.min(MAX_LENGTH));
    addresses.saturating_sub(2)
}

/// Largest multiple of `group_size` that is <= `value`.
fn block_start(value: u8, group_size: u16) -> u8 {
    (0..=u16::from(u8::MAX))
        .step_by(group_size as usize)
        .take_while(|boundary| *boundary <= u16::from(value))
        .last()
        .unwrap_or(0) as u8
}

/// Address with `octets[index]` replaced and every later octet set to `fill`.
fn set_block(bytes: AddressBytes, index: usize, value: u8, fill: u8) -> AddressBytes {
    let mut block = bytes;
    block[index] = value;
    block.fill_from(index + 1, fill);
    block
}

/// Locate the subnet of `address` for a prefix length in 1..=31.
///
/// # Returns
/// * `Ok(SubnetDetails)` - Network/broadcast ids, host range and next network
/// * `Err` - `InvalidPrefixLength` for /0 and /32
pub fn locate(address: Ipv4Addr, prefix: u8) -> Result<SubnetDetails, SubnetError> {
    if !(1..MAX_LENGTH).contains(&prefix) {
        return Err(SubnetError::InvalidPrefixLength(prefix));
    }
    let mask = SubnetMask::from_prefix(prefix)?;

    let octet_index = prefix.div_ceil(OCTET_BITS) as usize;
    let index = octet_index - 1;
    let mask_octet = mask.octet(index);
    let group_size = 256 - u16::from(mask_octet);

    let bytes = AddressBytes::from(address);
    let block_start = block_start(bytes[index], group_size);
    // block_start is a multiple of group_size, so the block end stays within the octet
    let block_end = (u16::from(block_start) + group_size - 1) as u8;
    log::trace!(
        "locate({address}/{prefix}) octet {octet_index} mask {mask_octet} group {group_size} block {block_start}-{block_end}"
    );

    let network = set_block(bytes, index, block_start, 0);
    let broadcast = set_block(bytes, index, block_end, u8::MAX);

    let usable_host_count = usable_host_count(prefix);
    let (first_host, last_host) = if usable_host_count == 0 {
        (None, None)
    } else {
        (
            network
                .last()
                .checked_add(1)
                .map(|last| Ipv4Addr::from(network.with_last(last))),
            broadcast
                .last()
                .checked_sub(1)
                .map(|last| Ipv4Addr::from(broadcast.with_last(last))),
        )
    };

    let next_network = u8::try_from(u16::from(block_start) + group_size)
        .ok()
        .map(|next| Ipv4Addr::from(set_block(bytes, index, next, 0)));
    if next_network.is_none() {
        log::debug!("No next network after {address}/{prefix}: octet {octet_index} would overflow");
    }

    Ok(SubnetDetails {
        address,
        prefix,
        mask,
        subnet_mask: format!("{address}/{prefix} -- {mask_octet}"),
        octet_index,
        mask_octet,
        group_size,
        block_start,
        network_id: network.into(),
        broadcast_id: broadcast.into(),
        first_host,
        last_host,
        next_network,
        usable_host_count,
    })
}

//! Mask planning.
//!
//! Borrows host bits from a classful default mask until the requested number of
//! subnets fits, or converts an explicit prefix/mask into the same [`SubnetPlan`] shape.

use crate::error::SubnetError;
use crate::models::{NetworkClass, SubnetMask, SubnetPlan, MAX_LENGTH};

/// Bits needed to number `count` subnets, i.e. `ceil(log2(count))`.
///
/// # Examples
/// ```
/// use subnet_calc::processing::extra_bits_for;
/// assert_eq!(extra_bits_for(1), 0);
/// assert_eq!(extra_bits_for(4), 2);
/// assert_eq!(extra_bits_for(5), 3);
/// ```
pub fn extra_bits_for(count: u64) -> u8 {
    match count {
        0 | 1 => 0,
        n => (u64::BITS - (n - 1).leading_zeros()) as u8,
    }
}

/// Plan the smallest mask that splits a classful network into at least `subnet_count` subnets.
///
/// # Arguments
/// * `class` - The classful network to start from
/// * `subnet_count` - Number of subnets required, at least 1
///
/// # Returns
/// * `Ok(SubnetPlan)` - The borrowed bits, new prefix and mask
/// * `Err` - `InvalidSubnetCount` for 0, `PrefixOverflow` when the host bits run out
pub fn plan(class: NetworkClass, subnet_count: u64) -> Result<SubnetPlan, SubnetError> {
    if subnet_count < 1 {
        return Err(SubnetError::InvalidSubnetCount(subnet_count));
    }

    let default_prefix = class.default_prefix();
    let available = MAX_LENGTH - default_prefix;
    let extra_bits = extra_bits_for(subnet_count);
    log::debug!(
        "plan(class {class}, {subnet_count} subnets) -> borrow {extra_bits} of {available} host bits"
    );
    if extra_bits > available {
        return Err(SubnetError::PrefixOverflow {
            needed: extra_bits,
            available,
        });
    }

    SubnetPlan::new(Some(class), default_prefix, extra_bits)
}

/// Plan from an explicit CIDR prefix length. No bits are borrowed.
pub fn plan_from_prefix(prefix: u8) -> Result<SubnetPlan, SubnetError> {
    if prefix > MAX_LENGTH {
        return Err(SubnetError::InvalidPrefixLength(prefix));
    }
    SubnetPlan::new(None, prefix, 0)
}

/// Plan from an explicit (already contiguity-checked) mask.
pub fn plan_from_mask(mask: SubnetMask) -> Result<SubnetPlan, SubnetError> {
    plan_from_prefix(mask.prefix_len())
}

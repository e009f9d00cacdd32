//! Error type for subnet planning and location.

use crate::models::Ipv4Cidr;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Everything that can go wrong while planning or locating a subnet.
///
/// All variants are detected synchronously from the inputs; none of them is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// The default mask is not one of the classful A/B/C masks.
    #[error("'{0}' is not a classful default mask (expected 255.0.0.0, 255.255.0.0 or 255.255.255.0)")]
    InvalidMaskKind(String),

    #[error("subnet count must be at least 1, got {0}")]
    InvalidSubnetCount(u64),

    /// More host bits would have to be borrowed than the default mask leaves free.
    #[error("{needed} extra mask bits needed but only {available} host bits available")]
    PrefixOverflow { needed: u8, available: u8 },

    #[error("subnet mask {0} is not a contiguous run of 1-bits")]
    NonContiguousMask(String),

    #[error("prefix length /{0} is outside the usable range")]
    InvalidPrefixLength(u8),

    /// The block after this one would need a carry into the previous octet.
    #[error("no next network after {0}: block boundary overflows its octet")]
    NoNextNetwork(Ipv4Cidr),

    #[error("invalid IPv4 value '{0}'")]
    InvalidAddress(String),

    /// Class inference only covers the A/B/C unicast ranges.
    #[error("cannot infer a classful network for {0}")]
    UnknownClass(Ipv4Addr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubnetError::InvalidSubnetCount(0).to_string(),
            "subnet count must be at least 1, got 0"
        );
        assert_eq!(
            SubnetError::PrefixOverflow {
                needed: 9,
                available: 8
            }
            .to_string(),
            "9 extra mask bits needed but only 8 host bits available"
        );
        let cidr = Ipv4Cidr::new(Ipv4Addr::new(192, 168, 1, 192), 26);
        assert_eq!(
            SubnetError::NoNextNetwork(cidr).to_string(),
            "no next network after 192.168.1.192/26: block boundary overflows its octet"
        );
    }
}

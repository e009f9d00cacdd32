//! Subnet masks and classful networks.

use super::ipv4::{get_cidr_mask, parse_ipv4, AddressBytes, MAX_LENGTH};
use crate::error::SubnetError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A subnet mask: a contiguous run of 1-bits followed by 0-bits.
///
/// The contiguity invariant is checked on every constructor, so the prefix length
/// and the dotted-decimal form are always interchangeable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubnetMask(u32);

impl SubnetMask {
    /// Build the mask for a CIDR prefix length (0-32).
    pub fn from_prefix(prefix: u8) -> Result<SubnetMask, SubnetError> {
        Ok(SubnetMask(get_cidr_mask(prefix)?))
    }

    /// Build a mask from its raw bit pattern, rejecting a 0-bit followed by a 1-bit.
    pub fn from_bits(bits: u32) -> Result<SubnetMask, SubnetError> {
        if bits.leading_ones() + bits.trailing_zeros() != MAX_LENGTH as u32 {
            return Err(SubnetError::NonContiguousMask(
                Ipv4Addr::from(bits).to_string(),
            ));
        }
        Ok(SubnetMask(bits))
    }

    /// Number of leading 1-bits.
    pub fn prefix_len(&self) -> u8 {
        self.0.leading_ones() as u8
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Mask value at a 0-based octet index.
    pub fn octet(&self, index: usize) -> u8 {
        AddressBytes::from(self.0)[index]
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.0)
    }
}

impl FromStr for SubnetMask {
    type Err = SubnetError;

    /// Parse a dotted-decimal mask such as `255.255.255.192`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = parse_ipv4(s)?;
        SubnetMask::from_bits(u32::from(addr))
    }
}

impl std::fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_ipv4())
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Historical address class, used to pick the default mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum NetworkClass {
    A,
    B,
    C,
}

impl NetworkClass {
    /// Prefix length of the class's default mask.
    pub fn default_prefix(&self) -> u8 {
        match self {
            NetworkClass::A => 8,
            NetworkClass::B => 16,
            NetworkClass::C => 24,
        }
    }

    pub fn default_mask(&self) -> SubnetMask {
        SubnetMask(u32::MAX << (MAX_LENGTH - self.default_prefix()))
    }

    /// Classify an address by its first octet.
    ///
    /// A: 1-126, B: 128-191, C: 192-223. Anything else (0.x, loopback, multicast,
    /// reserved) has no classful default mask.
    pub fn of_address(addr: Ipv4Addr) -> Result<NetworkClass, SubnetError> {
        match addr.octets()[0] {
            1..=126 => Ok(NetworkClass::A),
            128..=191 => Ok(NetworkClass::B),
            192..=223 => Ok(NetworkClass::C),
            _ => Err(SubnetError::UnknownClass(addr)),
        }
    }
}

impl FromStr for NetworkClass {
    type Err = SubnetError;

    /// Recognise one of the three classful default masks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "255.0.0.0" => Ok(NetworkClass::A),
            "255.255.0.0" => Ok(NetworkClass::B),
            "255.255.255.0" => Ok(NetworkClass::C),
            other => Err(SubnetError::InvalidMaskKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            NetworkClass::A => "A",
            NetworkClass::B => "B",
            NetworkClass::C => "C",
        };
        write!(f, "{name}")
    }
}

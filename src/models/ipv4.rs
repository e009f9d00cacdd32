//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4Cidr`] for an address paired with a prefix length, [`AddressBytes`] for
//! octet-indexed address arithmetic, and the bit helpers shared by the planner and locator.

use crate::error::SubnetError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of bits in one octet.
pub const OCTET_BITS: u8 = 8;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefixLength(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Parse a dotted-decimal IPv4 value, mapping failures to [`SubnetError::InvalidAddress`].
pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr, SubnetError> {
    let s = s.trim();
    Ipv4Addr::from_str(s).map_err(|_| SubnetError::InvalidAddress(s.to_string()))
}

/// The four octets of an IPv4 address with indexed access.
///
/// Index 0 is the leftmost octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddressBytes([u8; 4]);

impl AddressBytes {
    /// Number of octets held.
    pub const LEN: usize = 4;

    /// Set every octet from `start` (inclusive) to the end.
    pub fn fill_from(&mut self, start: usize, value: u8) {
        for octet in self.0.iter_mut().skip(start) {
            *octet = value;
        }
    }

    /// The rightmost octet.
    pub fn last(&self) -> u8 {
        self.0[Self::LEN - 1]
    }

    /// Replace the rightmost octet, returning the new address.
    pub fn with_last(mut self, value: u8) -> Self {
        self.0[Self::LEN - 1] = value;
        self
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0
    }
}

impl From<Ipv4Addr> for AddressBytes {
    fn from(addr: Ipv4Addr) -> Self {
        AddressBytes(addr.octets())
    }
}

impl From<u32> for AddressBytes {
    fn from(bits: u32) -> Self {
        AddressBytes(bits.to_be_bytes())
    }
}

impl From<AddressBytes> for Ipv4Addr {
    fn from(bytes: AddressBytes) -> Self {
        Ipv4Addr::from(bytes.0)
    }
}

impl Index<usize> for AddressBytes {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl IndexMut<usize> for AddressBytes {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.0[index]
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Ipv4Cidr {
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Ipv4Cidr {
        Ipv4Cidr { addr, prefix }
    }
}

impl FromStr for Ipv4Cidr {
    type Err = SubnetError;

    /// Parse a CIDR string (e.g., "10.0.0.0/24").
    fn from_str(addr_cidr: &str) -> Result<Self, Self::Err> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = addr_cidr
            .split_once('/')
            .ok_or_else(|| SubnetError::InvalidAddress(addr_cidr.to_string()))?;
        let addr = parse_ipv4(addr)?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| SubnetError::InvalidAddress(addr_cidr.to_string()))?;
        if prefix > MAX_LENGTH {
            return Err(SubnetError::InvalidPrefixLength(prefix));
        }
        Ok(Ipv4Cidr { addr, prefix })
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv4Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Cidr::from_str(&s).map_err(de::Error::custom)
    }
}

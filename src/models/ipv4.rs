//! IPv4 network blocks and 32-bit address arithmetic.
//!
//! All arithmetic works on the `u32` form of an address. Octets only show up
//! when an address is printed.

use crate::error::SubnetError;
use crate::processing::{enumerate_subnets, parse_cidr, subnet_details, SubnetIter};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::SubnetDetails;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::parse(&len.to_string(), "prefix length"))
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

/// The address one above `addr`, carrying across octets.
pub fn next_addr(addr: Ipv4Addr) -> Result<Ipv4Addr, SubnetError> {
    u32::from(addr)
        .checked_add(1)
        .map(Ipv4Addr::from)
        .ok_or_else(|| SubnetError::AddressSpaceOverflow(format!("{addr} + 1")))
}

/// The address one below `addr`, borrowing across octets.
pub fn prev_addr(addr: Ipv4Addr) -> Result<Ipv4Addr, SubnetError> {
    u32::from(addr)
        .checked_sub(1)
        .map(Ipv4Addr::from)
        .ok_or_else(|| SubnetError::AddressSpaceOverflow(format!("{addr} - 1")))
}

/// Number of usable host addresses for a prefix length.
///
/// Network and broadcast are excluded, so /31 and /32 have none.
pub fn num_usable_hosts(len: u8) -> u64 {
    match MAX_LENGTH.checked_sub(len) {
        Some(host_bits) => (1u64 << host_bits).saturating_sub(2),
        None => 0,
    }
}

/// An IPv4 network: base address plus prefix length.
///
/// The base never has host bits set; every constructor masks them off.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    base: Ipv4Addr,
    prefix: u8,
}

impl NetworkBlock {
    /// Build the block containing `addr` with the given prefix length.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<NetworkBlock, SubnetError> {
        let base = cut_addr(addr, prefix)?;
        Ok(NetworkBlock { base, prefix })
    }

    /// Network (base) address.
    pub fn base(&self) -> Ipv4Addr {
        self.base
    }

    /// Prefix length, 0..=32.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Subnet mask as u32.
    pub fn mask(&self) -> u32 {
        // prefix is validated on construction
        get_cidr_mask(self.prefix).unwrap_or(u32::MAX)
    }

    /// Subnet mask in dotted-decimal form, e.g. 255.255.255.192.
    pub fn dotted_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        self.base
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.base) | !self.mask())
    }

    /// Number of addresses in the block, network and broadcast included.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Network, broadcast and usable range for this block.
    pub fn details(&self) -> SubnetDetails {
        subnet_details(self)
    }

    /// Lazily split this block into equal `/prefix` children.
    pub fn subnets(&self, prefix: u8) -> Result<SubnetIter, SubnetError> {
        enumerate_subnets(self, prefix)
    }
}

impl FromStr for NetworkBlock {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cidr(s)
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_cidr(&s).map_err(de::Error::custom)
    }
}

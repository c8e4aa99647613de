//! Derived view over a [`NetworkBlock`](super::NetworkBlock).

use serde::Serialize;
use std::net::Ipv4Addr;

/// Network, broadcast and usable range of one block.
///
/// `first_usable` and `last_usable` are `None` for /31 and /32.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetDetails {
    /// Lowest address, host bits zero.
    pub network: Ipv4Addr,
    /// Highest address, host bits one.
    pub broadcast: Ipv4Addr,
    pub first_usable: Option<Ipv4Addr>,
    pub last_usable: Option<Ipv4Addr>,
    /// Addresses excluding network and broadcast.
    pub usable_hosts: u64,
    pub prefix: u8,
    pub dotted_mask: Ipv4Addr,
}

impl SubnetDetails {
    /// First and last usable address, if the block has any.
    pub fn usable_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        self.first_usable.zip(self.last_usable)
    }
}

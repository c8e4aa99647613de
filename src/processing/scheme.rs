//! Addressing scheme for a required host count.

use crate::error::SubnetError;
use crate::models::{NetworkBlock, SubnetDetails};
use std::net::Ipv4Addr;

use super::{enumerate_subnets, minimal_mask_for_hosts, SubnetIter};

/// Result of sizing a block for a host count.
#[derive(Debug, Clone)]
pub struct Scheme {
    /// Address the scheme was requested for.
    pub ip: Ipv4Addr,
    /// Smallest block containing `ip` that fits the hosts.
    pub block: NetworkBlock,
    pub details: SubnetDetails,
    /// Enclosing block the siblings are listed in.
    pub parent: NetworkBlock,
    /// Every block of the chosen size inside `parent`, `block` included.
    pub siblings: SubnetIter,
}

/// Pick the smallest block for `required_hosts` around `ip` and list its
/// siblings inside the enclosing `/parent_prefix`.
///
/// When the chosen block is wider than `/parent_prefix`, the block is its
/// own parent.
pub fn generate_scheme(
    ip: Ipv4Addr,
    required_hosts: u64,
    parent_prefix: u8,
) -> Result<Scheme, SubnetError> {
    let prefix = minimal_mask_for_hosts(required_hosts)?;
    let block = NetworkBlock::new(ip, prefix)?;
    let parent = NetworkBlock::new(ip, parent_prefix.min(prefix))?;
    let siblings = enumerate_subnets(&parent, prefix)?;
    log::info!("generate_scheme({ip}, {required_hosts}) -> {block} in {parent}");

    Ok(Scheme {
        ip,
        block,
        details: block.details(),
        parent,
        siblings,
    })
}

//! Smallest block that fits a host count.

use crate::error::SubnetError;
use crate::models::{num_usable_hosts, MAX_LENGTH};

/// Largest prefix length (smallest block) with at least `required_hosts`
/// usable addresses.
///
/// Scans /30 down to /0. /31 and /32 are never returned since they have no
/// usable hosts.
pub fn minimal_mask_for_hosts(required_hosts: u64) -> Result<u8, SubnetError> {
    let prefix = (0..=MAX_LENGTH - 2)
        .rev()
        .find(|&prefix| num_usable_hosts(prefix) >= required_hosts)
        .ok_or(SubnetError::NoFeasibleMask {
            hosts: required_hosts,
        })?;
    log::debug!(
        "minimal_mask_for_hosts({required_hosts}) -> /{prefix} ({} usable)",
        num_usable_hosts(prefix)
    );
    Ok(prefix)
}

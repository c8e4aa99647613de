//! Value types for the subnet engine.
//!
//! - [`NetworkBlock`] - IPv4 network in CIDR form, plus 32-bit address helpers
//! - [`SubnetDetails`] - derived network/broadcast/usable range of a block

mod details;
mod ipv4;

// Re-export public types
pub use details::SubnetDetails;
pub use ipv4::{
    cut_addr, get_cidr_mask, next_addr, num_usable_hosts, prev_addr, NetworkBlock, MAX_LENGTH,
};

//! Subnet arithmetic engine.
//!
//! Pure functions over [`NetworkBlock`](crate::models::NetworkBlock):
//! - [`parse`] - `A.B.C.D/N` parsing
//! - [`details`] - network/broadcast/usable range
//! - [`mask`] - smallest block for a host count
//! - [`enumerate`] - equal-sized child blocks
//! - [`scheme`] - sizing a block for a host count, with its siblings

mod details;
mod enumerate;
mod mask;
mod parse;
mod scheme;

// Re-export public functions
pub use details::subnet_details;
pub use enumerate::{enumerate_subnets, SubnetIter};
pub use mask::minimal_mask_for_hosts;
pub use parse::{parse_cidr, parse_ipv4_addr, parse_prefix_len};
pub use scheme::{generate_scheme, Scheme};

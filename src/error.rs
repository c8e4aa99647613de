//! Error taxonomy for the subnet engine.
//!
//! Every variant is recoverable: the caller decides whether to re-prompt.

use thiserror::Error;

/// Errors returned by the subnet arithmetic engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Malformed address or CIDR string.
    #[error("invalid {reason}: {token:?}")]
    Parse { token: String, reason: &'static str },
    /// No prefix length can hold the requested number of hosts.
    #[error("no subnet mask can hold {hosts} usable hosts")]
    NoFeasibleMask { hosts: u64 },
    /// Child prefix is shorter than the parent prefix, or longer than /32.
    #[error("cannot split a /{parent} into /{child} subnets")]
    InvalidSubdivision { parent: u8, child: u8 },
    /// Arithmetic would leave the 32-bit address space.
    #[error("address arithmetic overflowed: {0}")]
    AddressSpaceOverflow(String),
}

impl SubnetError {
    pub(crate) fn parse(token: &str, reason: &'static str) -> Self {
        SubnetError::Parse {
            token: token.to_string(),
            reason,
        }
    }
}

//! Splitting a block into equal-sized children.

use crate::error::SubnetError;
use crate::models::{NetworkBlock, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Lazy, restartable sequence of equal-sized child blocks in ascending order.
///
/// Clone it to walk the same children again.
#[derive(Debug, Clone)]
pub struct SubnetIter {
    next: u64,
    end: u64,
    step: u64,
    prefix: u8,
}

impl SubnetIter {
    /// Children not yet yielded.
    pub fn remaining(&self) -> u64 {
        (self.end - self.next) / self.step
    }

    /// Prefix length of every child.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl Iterator for SubnetIter {
    type Item = NetworkBlock;

    fn next(&mut self) -> Option<NetworkBlock> {
        if self.next >= self.end {
            return None;
        }
        let base = u32::try_from(self.next).ok()?;
        self.next += self.step;
        NetworkBlock::new(Ipv4Addr::from(base), self.prefix).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Split `parent` into `2^(child_prefix - parent.prefix())` blocks of
/// `/child_prefix`, contiguous and covering exactly the parent's range.
///
/// # Examples
/// ```
/// use ip_subnet_calc::processing::{enumerate_subnets, parse_cidr};
/// let parent = parse_cidr("192.168.1.0/24").unwrap();
/// let children: Vec<String> = enumerate_subnets(&parent, 25)
///     .unwrap()
///     .map(|b| b.to_string())
///     .collect();
/// assert_eq!(children, vec!["192.168.1.0/25", "192.168.1.128/25"]);
/// ```
pub fn enumerate_subnets(
    parent: &NetworkBlock,
    child_prefix: u8,
) -> Result<SubnetIter, SubnetError> {
    if child_prefix < parent.prefix() || child_prefix > MAX_LENGTH {
        return Err(SubnetError::InvalidSubdivision {
            parent: parent.prefix(),
            child: child_prefix,
        });
    }

    let count = 1u64 << (child_prefix - parent.prefix());
    let step = 1u64 << (MAX_LENGTH - child_prefix);
    let start = u32::from(parent.base()) as u64;
    let end = start + parent.size();
    if end - 1 > u32::MAX as u64 {
        return Err(SubnetError::AddressSpaceOverflow(format!(
            "{count} x /{child_prefix} from {}",
            parent.base()
        )));
    }

    log::debug!("enumerate_subnets({parent}, /{child_prefix}) -> {count} subnets");
    Ok(SubnetIter {
        next: start,
        end,
        step,
        prefix: child_prefix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse_cidr;

    #[test]
    fn test_enumerate_24_into_26() {
        let parent = parse_cidr("192.168.1.0/24").unwrap();
        let children: Vec<NetworkBlock> = enumerate_subnets(&parent, 26).unwrap().collect();
        let expected: Vec<NetworkBlock> = [
            "192.168.1.0/26",
            "192.168.1.64/26",
            "192.168.1.128/26",
            "192.168.1.192/26",
        ]
        .iter()
        .map(|s| parse_cidr(s).unwrap())
        .collect();
        assert_eq!(children, expected);
    }

    #[test]
    fn test_enumerate_same_prefix_is_parent() {
        let parent = parse_cidr("10.20.0.0/16").unwrap();
        let children: Vec<NetworkBlock> = enumerate_subnets(&parent, 16).unwrap().collect();
        assert_eq!(children, vec![parent]);
    }

    #[test]
    fn test_enumerate_crosses_octets() {
        let parent = parse_cidr("10.0.0.0/22").unwrap();
        let children: Vec<String> = enumerate_subnets(&parent, 24)
            .unwrap()
            .map(|b| b.to_string())
            .collect();
        assert_eq!(
            children,
            vec!["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24", "10.0.3.0/24"]
        );
    }

    #[test]
    fn test_enumerate_top_of_address_space() {
        let parent = parse_cidr("255.255.255.0/24").unwrap();
        let iter = enumerate_subnets(&parent, 32).unwrap();
        assert_eq!(iter.remaining(), 256);
        let last = iter.last().unwrap();
        assert_eq!(last.to_string(), "255.255.255.255/32");
    }

    #[test]
    fn test_enumerate_is_lazy_and_restartable() {
        let parent = parse_cidr("0.0.0.0/0").unwrap();
        let iter = enumerate_subnets(&parent, 32).unwrap();
        assert_eq!(iter.remaining(), 1u64 << 32);
        let first: Vec<NetworkBlock> = iter.clone().take(2).collect();
        let again: Vec<NetworkBlock> = iter.take(2).collect();
        assert_eq!(first, again);
        assert_eq!(first[1].to_string(), "0.0.0.1/32");
    }

    #[test]
    fn test_enumerate_rejects_wider_child() {
        let parent = parse_cidr("192.168.1.0/24").unwrap();
        assert_eq!(
            enumerate_subnets(&parent, 16).unwrap_err(),
            SubnetError::InvalidSubdivision {
                parent: 24,
                child: 16
            }
        );
        assert!(enumerate_subnets(&parent, 33).is_err());
    }
}

//! Network/broadcast/usable-range calculation.

use crate::models::{next_addr, num_usable_hosts, prev_addr, NetworkBlock, SubnetDetails};
use std::net::Ipv4Addr;

/// Calculate the details of a block.
///
/// /31 and /32 have no usable range: `first_usable`/`last_usable` are `None`
/// and `usable_hosts` is 0.
pub fn subnet_details(block: &NetworkBlock) -> SubnetDetails {
    let mask = block.mask();
    let network = Ipv4Addr::from(u32::from(block.base()) & mask);
    let broadcast = Ipv4Addr::from(u32::from(network) | !mask);

    let (first_usable, last_usable) = if block.prefix() >= 31 {
        (None, None)
    } else {
        // cannot overflow below /31: network < broadcast
        (next_addr(network).ok(), prev_addr(broadcast).ok())
    };

    let details = SubnetDetails {
        network,
        broadcast,
        first_usable,
        last_usable,
        usable_hosts: num_usable_hosts(block.prefix()),
        prefix: block.prefix(),
        dotted_mask: block.dotted_mask(),
    };
    log::trace!(
        "subnet_details({block}) = {}",
        serde_json::to_string(&details).unwrap_or_default()
    );
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse_cidr;

    #[test]
    fn test_subnet_details_24() {
        let d = subnet_details(&parse_cidr("192.168.1.0/24").unwrap());
        assert_eq!(d.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(d.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(d.first_usable, Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(d.last_usable, Some(Ipv4Addr::new(192, 168, 1, 254)));
        assert_eq!(d.usable_hosts, 254);
        assert_eq!(d.prefix, 24);
        assert_eq!(d.dotted_mask, Ipv4Addr::new(255, 255, 255, 0));
    }

    #[test]
    fn test_subnet_details_crosses_octets() {
        // usable range spans several octets, naive last-octet math breaks here
        let d = subnet_details(&parse_cidr("10.0.0.0/22").unwrap());
        assert_eq!(d.first_usable, Some(Ipv4Addr::new(10, 0, 0, 1)));
        assert_eq!(d.last_usable, Some(Ipv4Addr::new(10, 0, 3, 254)));
        assert_eq!(d.broadcast, Ipv4Addr::new(10, 0, 3, 255));
        assert_eq!(d.usable_hosts, 1022);
    }

    #[test]
    fn test_subnet_details_no_usable_range() {
        let d = subnet_details(&parse_cidr("10.0.0.0/31").unwrap());
        assert_eq!(d.usable_hosts, 0);
        assert_eq!(d.first_usable, None);
        assert_eq!(d.last_usable, None);
        assert_eq!(d.broadcast, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(d.usable_range(), None);

        let d = subnet_details(&parse_cidr("255.255.255.255/32").unwrap());
        assert_eq!(d.network, d.broadcast);
        assert_eq!(d.usable_hosts, 0);
        assert_eq!(d.first_usable, None);
    }

    #[test]
    fn test_subnet_details_30_and_0() {
        let d = subnet_details(&parse_cidr("255.255.255.252/30").unwrap());
        assert_eq!(
            d.usable_range(),
            Some((
                Ipv4Addr::new(255, 255, 255, 253),
                Ipv4Addr::new(255, 255, 255, 254)
            ))
        );
        assert_eq!(d.usable_hosts, 2);

        let d = subnet_details(&parse_cidr("0.0.0.0/0").unwrap());
        assert_eq!(d.first_usable, Some(Ipv4Addr::new(0, 0, 0, 1)));
        assert_eq!(d.last_usable, Some(Ipv4Addr::new(255, 255, 255, 254)));
        assert_eq!(d.usable_hosts, 4294967294);
    }

    #[test]
    fn test_subnet_details_masking_is_idempotent() {
        for prefix in 0..=32u8 {
            let block = NetworkBlock::new(Ipv4Addr::new(172, 31, 200, 77), prefix).unwrap();
            let d = subnet_details(&block);
            assert_eq!(u32::from(d.network) & block.mask(), u32::from(d.network));
            assert_eq!(d.network, block.lo());
            assert_eq!(d.broadcast, block.hi());
            if let Some((first, last)) = d.usable_range() {
                assert_eq!(u32::from(first), u32::from(d.network) + 1);
                assert_eq!(u32::from(last), u32::from(d.broadcast) - 1);
                assert!(first <= last);
            }
        }
    }
}

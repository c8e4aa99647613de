//! Strict parsing of `A.B.C.D` addresses and `A.B.C.D/N` blocks.

use crate::error::SubnetError;
use crate::models::{NetworkBlock, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    // u8::from_str accepts '+1' and '010', so token shape is checked first.
    static ref OCTET_RE: Regex = Regex::new(r"^(0|[1-9][0-9]{0,2})$").expect("Invalid Regex?");
    static ref PREFIX_RE: Regex = Regex::new(r"^(0|[1-9][0-9]?)$").expect("Invalid Regex?");
}

/// Parse a dotted-decimal IPv4 address such as `192.168.1.10`.
pub fn parse_ipv4_addr(input: &str) -> Result<Ipv4Addr, SubnetError> {
    let input = input.trim();
    let tokens: Vec<&str> = input.split('.').collect();
    if tokens.len() != 4 {
        return Err(SubnetError::parse(input, "address, expected 4 octets"));
    }

    let mut octets = [0u8; 4];
    for (octet, token) in octets.iter_mut().zip(tokens) {
        if !OCTET_RE.is_match(token) {
            return Err(SubnetError::parse(token, "octet"));
        }
        *octet = token
            .parse()
            .map_err(|_| SubnetError::parse(token, "octet"))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parse a prefix length `0`..=`32`, with or without a leading `/`.
pub fn parse_prefix_len(input: &str) -> Result<u8, SubnetError> {
    let token = input.trim();
    prefix_token(token.strip_prefix('/').unwrap_or(token))
}

fn prefix_token(token: &str) -> Result<u8, SubnetError> {
    if !PREFIX_RE.is_match(token) {
        return Err(SubnetError::parse(token, "prefix length"));
    }
    match token.parse::<u8>() {
        Ok(prefix) if prefix <= MAX_LENGTH => Ok(prefix),
        _ => Err(SubnetError::parse(token, "prefix length")),
    }
}

/// Parse `A.B.C.D/N` into a [`NetworkBlock`], zeroing any host bits.
///
/// # Examples
/// ```
/// use ip_subnet_calc::processing::parse_cidr;
/// let block = parse_cidr("192.168.1.77/24").unwrap();
/// assert_eq!(block.to_string(), "192.168.1.0/24");
/// ```
pub fn parse_cidr(input: &str) -> Result<NetworkBlock, SubnetError> {
    let input = input.trim();
    let (addr, prefix) = input
        .split_once('/')
        .ok_or_else(|| SubnetError::parse(input, "CIDR, expected A.B.C.D/N"))?;

    let addr = parse_ipv4_addr(addr)?;
    let prefix = prefix_token(prefix)?;

    let block = NetworkBlock::new(addr, prefix)?;
    log::debug!("parse_cidr({input}) -> {block}");
    Ok(block)
}

//! Human-readable subnet reports: summary block and subnet table.

use crate::models::{NetworkBlock, SubnetDetails};
use crate::processing::SubnetIter;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

use super::terminal::{format_field, heading};

const NETWORK_WIDTH: usize = 20;
const RANGE_WIDTH: usize = 34;
const LABEL_WIDTH: usize = 20;

/// Print the summary block for one block.
///
/// `ip` is the address as the user entered it.
pub fn write_summary<W: Write>(
    out: &mut W,
    title: &str,
    ip: impl Display,
    details: &SubnetDetails,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heading(title))?;
    write_line(out, "IP Address:", ip)?;
    write_line(out, "Network Address:", details.network)?;
    write_line(out, "Broadcast Address:", details.broadcast)?;
    write_line(out, "Subnet Mask:", details.dotted_mask)?;
    write_line(out, "CIDR Notation:", format!("/{}", details.prefix))?;
    write_line(out, "First Usable IP:", or_none(details.first_usable))?;
    write_line(out, "Last Usable IP:", or_none(details.last_usable))?;
    write_line(out, "Total Hosts:", details.usable_hosts)?;
    Ok(())
}

/// Print every child of `parent` as a table, at most `max_rows` rows.
pub fn write_subnet_table<W: Write>(
    out: &mut W,
    parent: &NetworkBlock,
    subnets: SubnetIter,
    max_rows: usize,
) -> io::Result<()> {
    let total = subnets.remaining();
    log::debug!("write_subnet_table({parent}, /{}) rows={total}", subnets.prefix());

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        heading(&format!(
            "All Possible /{} Networks for {parent}",
            subnets.prefix()
        ))
    )?;
    writeln!(
        out,
        "{}",
        format!(
            "{}{}{}",
            format_field("Network Address", NETWORK_WIDTH),
            format_field("Usable Host Range", RANGE_WIDTH),
            "Broadcast Address"
        )
        .bold()
    )?;

    for block in subnets.take(max_rows) {
        let details = block.details();
        writeln!(
            out,
            "{}{}{}",
            format_field(details.network, NETWORK_WIDTH),
            format_field(usable_range(&details), RANGE_WIDTH),
            details.broadcast
        )?;
    }

    let shown = total.min(max_rows as u64);
    if shown < total {
        writeln!(
            out,
            "{}",
            format!("... {} more subnets not shown", total - shown).yellow()
        )?;
    }
    Ok(())
}

/// `first - last`, or `none` for /31 and /32.
pub fn usable_range(details: &SubnetDetails) -> String {
    match details.usable_range() {
        Some((first, last)) => format!("{first} - {last}"),
        None => "none".to_string(),
    }
}

fn write_line<W: Write>(out: &mut W, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(out, "{}{value}", format_field(label, LABEL_WIDTH))
}

fn or_none<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "none".to_string())
}

//! Interactive request/response loop around the subnet engine.
//!
//! Generic over input and output so a session can be scripted in tests.

use crate::config::Config;
use crate::error::SubnetError;
use crate::output::{write_subnet_table, write_summary};
use crate::processing::{
    enumerate_subnets, generate_scheme, parse_cidr, parse_ipv4_addr, parse_prefix_len,
};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// The three menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SubnetDetails,
    GenerateScheme,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::SubnetDetails),
            "2" => Ok(MenuChoice::GenerateScheme),
            "3" => Ok(MenuChoice::Exit),
            other => Err(SubnetError::parse(other, "menu choice")),
        }
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Shell {
            input,
            output,
            config,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\n{}",
            "Welcome to the IP Subnet Calculator!".bold()
        )?;

        loop {
            self.write_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    log::info!("menu: exit");
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Ok(MenuChoice::SubnetDetails) => {
                    log::info!("menu: subnet details");
                    self.subnet_details_action()?;
                }
                Ok(MenuChoice::GenerateScheme) => {
                    log::info!("menu: generate scheme");
                    self.generate_scheme_action()?;
                }
                Err(_) => {
                    log::debug!("invalid menu choice {line:?}");
                    writeln!(
                        self.output,
                        "{}",
                        "Invalid choice. Please enter a number between 1 and 3.".red()
                    )?;
                }
            }

            let again = self.prompt("\nWould you like to perform another calculation? (y/n): ")?;
            if !matches!(again.as_deref(), Some(answer) if answer.eq_ignore_ascii_case("y")) {
                break;
            }
        }

        writeln!(self.output, "Exiting program. Goodbye!")?;
        Ok(())
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-----Options:-----")?;
        writeln!(self.output, "1. Calculate subnet details from CIDR")?;
        writeln!(self.output, "2. Generate IP scheme based on required hosts")?;
        writeln!(self.output, "3. Exit")?;
        write!(self.output, "Choose an option (1-3): ")?;
        self.output.flush()
    }

    fn subnet_details_action(&mut self) -> io::Result<()> {
        let Some((raw, block)) = self.ask(
            "Enter IP address in CIDR notation (e.g., 192.168.1.1/24): ",
            |line| parse_cidr(line).map(|block| (line.to_string(), block)),
        )?
        else {
            return Ok(());
        };

        // the summary shows the address as typed, not the masked base
        let ip = raw.split('/').next().unwrap_or(&raw).trim().to_string();
        write_summary(&mut self.output, "Subnet Details", ip, &block.details())?;

        let question = format!(
            "\nSplit {block} into subnets of prefix length (/{}-/32, blank to skip): ",
            block.prefix()
        );
        let Some(subnets) = self.ask(&question, |line| {
            let prefix = parse_prefix_len(line)?;
            enumerate_subnets(&block, prefix)
        })?
        else {
            return Ok(());
        };
        write_subnet_table(&mut self.output, &block, subnets, self.config.max_rows)
    }

    fn generate_scheme_action(&mut self) -> io::Result<()> {
        let Some(ip) = self.ask(
            "Enter base IP address (e.g., 192.168.1.0): ",
            parse_ipv4_addr,
        )?
        else {
            return Ok(());
        };
        let Some(hosts) = self.ask("Enter the number of required hosts: ", parse_host_count)?
        else {
            return Ok(());
        };

        match generate_scheme(ip, hosts, self.config.scheme_parent_prefix) {
            Ok(scheme) => {
                write_summary(&mut self.output, "IP Scheme", scheme.ip, &scheme.details)?;
                write_subnet_table(
                    &mut self.output,
                    &scheme.parent,
                    scheme.siblings,
                    self.config.max_rows,
                )
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Prompt until `parse` accepts the answer. A blank line or end of input
    /// cancels with `None`.
    fn ask<T, F>(&mut self, question: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, SubnetError>,
    {
        loop {
            let Some(line) = self.prompt(question)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(None);
            }
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.report_error(&e)?,
            }
        }
    }

    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next trimmed input line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report_error(&mut self, e: &SubnetError) -> io::Result<()> {
        log::warn!("{e}");
        writeln!(self.output, "{} {e}", "Error:".red().bold())
    }
}

fn parse_host_count(line: &str) -> Result<u64, SubnetError> {
    line.trim()
        .parse()
        .map_err(|_| SubnetError::parse(line, "host count"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Shell::new(Cursor::new(input.as_bytes()), &mut out, Config::default())
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_choice_from_str() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::SubnetDetails);
        assert_eq!(" 2 ".parse::<MenuChoice>().unwrap(), MenuChoice::GenerateScheme);
        assert_eq!("3".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert!("4".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_exit_immediately() {
        let text = session("3\n");
        assert!(text.contains("Welcome to the IP Subnet Calculator!"));
        assert!(text.contains("Exiting..."));
        assert!(!text.contains("Goodbye"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let text = session("");
        assert!(text.contains("Exiting program. Goodbye!"));
    }

    #[test]
    fn test_invalid_choice_then_quit() {
        let text = session("9\nn\n");
        assert!(text.contains("Invalid choice. Please enter a number between 1 and 3."));
        assert!(text.contains("Exiting program. Goodbye!"));
    }

    #[test]
    fn test_subnet_details_reprompts_on_parse_error() {
        let text = session("1\n10.0.0.0/33\n192.168.1.10/24\n\nn\n");
        assert!(text.contains("Error: invalid prefix length: \"33\""));
        assert!(text.contains("IP Address:         192.168.1.10\n"));
        assert!(text.contains("Total Hosts:        254\n"));
        assert!(!text.contains("All Possible"));
    }

    #[test]
    fn test_subnet_details_with_split() {
        let text = session("1\n192.168.1.0/24\n16\n/26\nn\n");
        assert!(text.contains("Error: cannot split a /24 into /16 subnets"));
        assert!(text.contains("----- All Possible /26 Networks for 192.168.1.0/24 -----"));
        assert!(text.contains("192.168.1.192       192.168.1.193 - 192.168.1.254     192.168.1.255"));
    }

    #[test]
    fn test_generate_scheme_session() {
        let text = session("2\n192.168.1.0\nfifty\n50\ny\n3\n");
        assert!(text.contains("Error: invalid host count: \"fifty\""));
        assert!(text.contains("----- IP Scheme -----"));
        assert!(text.contains("CIDR Notation:      /26\n"));
        assert!(text.contains("Subnet Mask:        255.255.255.192\n"));
        assert!(text.contains("Total Hosts:        62\n"));
        assert!(text.contains("All Possible /26 Networks for 192.168.1.0/24"));
        assert!(text.contains("Exiting..."));
    }
}

//! Command line options.
//!
//! Parses the arguments with clap and turns them into a [`CalcRequest`].

use crate::config::{CalcRequest, MaskInput, Settings};
use crate::error::SubnetError;
use crate::models::{parse_ipv4, NetworkClass, SubnetMask, MAX_LENGTH};
use clap::{Parser, ValueEnum};
use regex::Regex;
use std::sync::OnceLock;

const EXAMPLES: &str = "\
Examples:
  subnet-calc -i 192.168.1.0 -d 255.255.255.0 -s 4        # Calculate 4 subnets for 192.168.1.0
  subnet-calc --ip 10.1.0.0 --default-mask 255.0.0.0 -s 8 # Calculate 8 subnets for 10.1.0.0
  subnet-calc -i 10.1.0.5 -c 8                            # Locate 10.1.0.5 in a /8
  subnet-calc -i 172.16.77.9 -m 255.255.240.0 -f json     # Explicit mask, JSON output";

/// Regex for `--cidr` values: `26`, `/26` or `a.b.c.d/26`.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^(?:(?P<addr>[0-9.]+)/|/)?(?P<prefix>[0-9]{1,2})$").expect("Invalid Regex")
    })
}

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored report
    #[default]
    Text,
    Json,
    Csv,
}

/// Subnet Calculation Tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Opts {
    /// Starting IP address
    #[arg(short = 'i', long = "ip", visible_alias = "ipAddress", value_name = "IP_ADDRESS")]
    pub ip_address: String,

    /// Default subnet mask (255.0.0.0, 255.255.0.0 or 255.255.255.0), inferred from the address class if omitted
    #[arg(short, long, value_name = "MASK")]
    pub default_mask: Option<String>,

    /// Number of subnets required
    #[arg(short, long, value_name = "N")]
    pub subnets: Option<u64>,

    /// Explicit CIDR prefix length: 26, /26 or a.b.c.d/26
    #[arg(
        short,
        long,
        value_name = "PREFIX",
        conflicts_with_all = ["default_mask", "subnets", "mask"]
    )]
    pub cidr: Option<String>,

    /// Explicit subnet mask, e.g. 255.255.255.192
    #[arg(short, long, value_name = "MASK", conflicts_with_all = ["default_mask", "subnets"])]
    pub mask: Option<String>,

    /// Also list every subnet of the plan
    #[arg(short, long)]
    pub list: bool,

    /// Maximum number of subnets to list
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Parse a `--cidr` value into a prefix length.
///
/// An address part, when present, must be a valid IPv4 address but is otherwise ignored.
pub fn parse_prefix(value: &str) -> Result<u8, SubnetError> {
    let value = value.trim();
    let caps = get_cidr_regex()
        .captures(value)
        .ok_or_else(|| SubnetError::InvalidAddress(value.to_string()))?;
    if let Some(addr) = caps.name("addr") {
        parse_ipv4(addr.as_str())?;
    }
    let prefix: u8 = caps["prefix"]
        .parse()
        .map_err(|_| SubnetError::InvalidAddress(value.to_string()))?;
    if prefix > MAX_LENGTH {
        return Err(SubnetError::InvalidPrefixLength(prefix));
    }
    Ok(prefix)
}

impl Opts {
    /// Build the calculation request, validating addresses and masks.
    pub fn to_request(&self, settings: &Settings) -> Result<CalcRequest, SubnetError> {
        let address = parse_ipv4(&self.ip_address)?;

        let mask = if let Some(cidr) = &self.cidr {
            MaskInput::Prefix(parse_prefix(cidr)?)
        } else if let Some(mask) = &self.mask {
            MaskInput::Mask(mask.parse::<SubnetMask>()?)
        } else {
            let class = match &self.default_mask {
                Some(default_mask) => default_mask.parse::<NetworkClass>()?,
                None => {
                    let class = NetworkClass::of_address(address)?;
                    log::info!("No default mask given, using class {class} for {address}");
                    class
                }
            };
            MaskInput::Classful {
                class,
                subnets: self.subnets.unwrap_or(1),
            }
        };
        log::debug!("Mask input: {mask:?}");

        let request = CalcRequest::new(address, mask);
        if self.list {
            Ok(request.with_listing(self.limit.unwrap_or(settings.list_limit)))
        } else {
            Ok(request)
        }
    }
}

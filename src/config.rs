//! Run configuration.
//!
//! [`Settings`] come from the environment (a `.env` file is loaded by `main`), and
//! [`CalcRequest`] is the explicit input handed to [`crate::calculate`].

use crate::models::{NetworkClass, SubnetMask};
use std::env;
use std::net::Ipv4Addr;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Default maximum number of rows for a subnet listing.
pub const DEFAULT_LIST_LIMIT: usize = 64;

const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
const ENV_LIST_LIMIT: &str = "SUBNET_CALC_LIST_LIMIT";

/// Process-wide settings read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// Row limit used when `--limit` is not given.
    pub list_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl Settings {
    /// Read settings from environment variables, falling back to defaults.
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let log_config = lookup(ENV_LOG_CONFIG).unwrap_or(defaults.log_config);
        let list_limit = match lookup(ENV_LIST_LIMIT) {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring {ENV_LIST_LIMIT}={value}: not a number");
                defaults.list_limit
            }),
            None => defaults.list_limit,
        };
        Settings {
            log_config,
            list_limit,
        }
    }
}

/// How the subnet mask is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskInput {
    /// Borrow bits from a classful default mask until `subnets` fit.
    Classful { class: NetworkClass, subnets: u64 },
    /// Explicit CIDR prefix length.
    Prefix(u8),
    /// Explicit dotted-decimal mask.
    Mask(SubnetMask),
}

/// One calculation's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcRequest {
    pub address: Ipv4Addr,
    pub mask: MaskInput,
    /// Also list every subnet of the plan.
    pub list_subnets: bool,
    pub list_limit: usize,
}

impl CalcRequest {
    pub fn new(address: Ipv4Addr, mask: MaskInput) -> CalcRequest {
        CalcRequest {
            address,
            mask,
            list_subnets: false,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Enable subnet listing with a row limit.
    pub fn with_listing(mut self, limit: usize) -> CalcRequest {
        self.list_subnets = true;
        self.list_limit = limit;
        self
    }
}

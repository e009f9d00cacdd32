//! Terminal output utilities.
//!
//! Provides the colored text report and the formatting helpers it shares with CSV output.

use crate::models::SubnetDetails;
use crate::Calculation;
use colored::{ColoredString, Colorize};
use std::fmt::Write;
use std::net::Ipv4Addr;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Format an integer with `,` thousands separators.
///
/// # Examples
/// ```
/// use subnet_calc::output::format_thousands;
/// assert_eq!(format_thousands(16777214), "16,777,214");
/// ```
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// An address, or a dimmed `n/a` when absent.
fn show_addr(addr: Option<Ipv4Addr>) -> ColoredString {
    match addr {
        Some(addr) => addr.to_string().green(),
        None => "n/a".dimmed(),
    }
}

fn write_details(out: &mut String, details: &SubnetDetails) -> std::fmt::Result {
    writeln!(out, "Subnet mask:      {}", details.subnet_mask)?;
    writeln!(
        out,
        "Network ID:       {}",
        details.network_id.to_string().green()
    )?;
    writeln!(
        out,
        "Broadcast ID:     {}",
        details.broadcast_id.to_string().green()
    )?;
    writeln!(out, "First host:       {}", show_addr(details.first_host))?;
    writeln!(out, "Last host:        {}", show_addr(details.last_host))?;
    writeln!(out, "Next network:     {}", show_addr(details.next_network))?;
    writeln!(
        out,
        "Usable hosts:     {}",
        format_thousands(details.usable_host_count).yellow()
    )
}

/// Render the full text report for one calculation.
pub fn report(calc: &Calculation) -> Result<String, std::fmt::Error> {
    let plan = &calc.plan;
    let mut out = String::new();

    writeln!(
        out,
        "New subnet mask:  {} (/{})",
        plan.mask.to_string().bold().cyan(),
        plan.prefix
    )?;
    match plan.class {
        Some(class) => writeln!(
            out,
            "Subnets:          {} x {} addresses ({} bits borrowed from class {class})",
            format_thousands(plan.subnet_count),
            format_thousands(plan.addresses_per_subnet),
            plan.extra_bits
        )?,
        None => writeln!(
            out,
            "Subnet size:      {} addresses",
            format_thousands(plan.addresses_per_subnet)
        )?,
    }
    write_details(&mut out, &calc.details)?;

    if let Some(listing) = &calc.listing {
        writeln!(out)?;
        writeln!(out, "Subnets of {}:", listing.parent.to_string().bold())?;
        for (i, subnet) in listing.subnets.iter().enumerate() {
            writeln!(
                out,
                "{:>6}  {:<18} {} - {}  broadcast {}",
                i + 1,
                subnet.cidr().to_string(),
                show_addr(subnet.first_host),
                show_addr(subnet.last_host),
                subnet.broadcast_id
            )?;
        }
        if listing.truncated {
            writeln!(
                out,
                "{} showing {} of {} subnets",
                "NOTE".on_red(),
                listing.subnets.len(),
                format_thousands(listing.total)
            )?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalcRequest, MaskInput};
    use crate::models::NetworkClass;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(62), "62");
        assert_eq!(format_thousands(254), "254");
        assert_eq!(format_thousands(4094), "4,094");
        assert_eq!(format_thousands(65534), "65,534");
        assert_eq!(format_thousands(16777214), "16,777,214");
        assert_eq!(format_thousands(4294967294), "4,294,967,294");
    }

    #[test]
    fn test_report_contents() {
        let request = CalcRequest::new(
            Ipv4Addr::new(192, 168, 1, 200),
            MaskInput::Classful {
                class: NetworkClass::C,
                subnets: 4,
            },
        )
        .with_listing(2);
        let calc = crate::calculate(&request).unwrap();
        let text = report(&calc).unwrap();
        assert!(text.contains("255.255.255.192"));
        assert!(text.contains("2 bits borrowed from class C"));
        assert!(text.contains("192.168.1.200/26 -- 192"));
        assert!(text.contains("192.168.1.193"));
        assert!(text.contains("n/a"), "missing next network should show n/a");
        assert!(text.contains("192.168.1.64/26"));
        assert!(text.contains("showing 2 of 4 subnets"));
    }
}

//! CSV output formatting for subnet data.

use super::terminal::format_field;
use crate::models::SubnetDetails;
use crate::Calculation;
use std::net::Ipv4Addr;

const HEADER: &str = r#" "cnt",       "subnet_cidr",      "network_id",    "broadcast_id",      "first_host",       "last_host",    "next_network", "usable_hosts""#;

fn addr_field(addr: Option<Ipv4Addr>) -> String {
    addr.map(|a| a.to_string()).unwrap_or_else(|| "None".to_string())
}

/// Format one subnet as a CSV row.
fn csv_row(cnt: usize, subnet: &SubnetDetails) -> String {
    [
        format_field(cnt, 6),
        format_field(subnet.cidr(), 20),
        format_field(subnet.network_id, 17),
        format_field(subnet.broadcast_id, 17),
        format_field(addr_field(subnet.first_host), 17),
        format_field(addr_field(subnet.last_host), 17),
        format_field(addr_field(subnet.next_network), 17),
        format_field(subnet.usable_host_count, 14),
    ]
    .join(",")
}

/// Render a calculation as CSV: one row per listed subnet, or the located subnet alone.
pub fn subnet_csv(calc: &Calculation) -> String {
    let rows: Vec<&SubnetDetails> = match &calc.listing {
        Some(listing) => listing.subnets.iter().collect(),
        None => vec![&calc.details],
    };
    log::debug!("subnet_csv() {} rows", rows.len());

    let mut lines = vec![HEADER.to_string()];
    lines.extend(rows.iter().enumerate().map(|(i, s)| csv_row(i + 1, s)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalcRequest, MaskInput};

    #[test]
    fn test_csv_row() {
        let subnet = crate::processing::locate(Ipv4Addr::new(192, 168, 1, 200), 26).unwrap();
        let row = csv_row(4, &subnet);
        let fields: Vec<&str> = row.split(',').map(|f| f.trim()).collect();
        assert_eq!(
            fields,
            vec![
                "\"4\"",
                "\"192.168.1.192/26\"",
                "\"192.168.1.192\"",
                "\"192.168.1.255\"",
                "\"192.168.1.193\"",
                "\"192.168.1.254\"",
                "\"None\"",
                "\"62\"",
            ]
        );
    }

    #[test]
    fn test_subnet_csv_single_row() {
        let request = CalcRequest::new(Ipv4Addr::new(10, 1, 0, 5), MaskInput::Prefix(8));
        let calc = crate::calculate(&request).unwrap();
        let csv = subnet_csv(&calc);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"usable_hosts\""));
        assert!(lines[1].contains("\"10.0.0.0/8\""));
        assert!(lines[1].contains("\"11.0.0.0\""));
        assert!(lines[1].contains("\"16777214\""));
    }

    #[test]
    fn test_subnet_csv_listing() {
        let request = CalcRequest::new(
            Ipv4Addr::new(192, 168, 1, 0),
            MaskInput::Classful {
                class: crate::models::NetworkClass::C,
                subnets: 4,
            },
        )
        .with_listing(64);
        let calc = crate::calculate(&request).unwrap();
        let csv = subnet_csv(&calc);
        assert_eq!(csv.lines().count(), 5);
        assert!(csv.lines().last().unwrap().contains("\"192.168.1.192/26\""));
    }
}

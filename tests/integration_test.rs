//! Integration tests for subnet-calc
//!
//! These tests verify the complete workflow from parsed arguments to rendered output.

use clap::Parser;
use std::net::Ipv4Addr;
use subnet_calc::{
    calculate,
    cli::{OutputFormat, Opts},
    config::Settings,
    models::NetworkClass,
    output::render,
    processing::{locate, plan, plan_from_prefix},
    SubnetError,
};

fn run(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let opts = Opts::try_parse_from(std::iter::once("subnet-calc").chain(args.iter().copied()))?;
    let request = opts.to_request(&Settings::default())?;
    let calc = calculate(&request)?;
    render(&calc, opts.format)
}

#[test]
fn test_full_workflow_json() {
    let out = run(&[
        "-i", "192.168.1.0", "-d", "255.255.255.0", "-s", "4", "--list", "-f", "json",
    ])
    .expect("calculation should succeed");
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");

    assert_eq!(value["plan"]["mask"], "255.255.255.192");
    assert_eq!(value["plan"]["prefix"], 26);
    assert_eq!(value["plan"]["class"], "C");
    assert_eq!(value["details"]["broadcast_id"], "192.168.1.63");
    assert_eq!(value["details"]["next_network"], "192.168.1.64");

    let subnets = value["listing"]["subnets"].as_array().expect("listing rows");
    assert_eq!(subnets.len(), 4);
    assert_eq!(subnets[3]["network_id"], "192.168.1.192");
    assert_eq!(subnets[3]["next_network"], serde_json::Value::Null);
    assert_eq!(value["listing"]["truncated"], false);
}

#[test]
fn test_class_a_eight_subnets() {
    let out = run(&[
        "--ip", "10.1.0.0", "--default-mask", "255.0.0.0", "--subnets", "8", "-f", "json",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["plan"]["mask"], "255.224.0.0");
    assert_eq!(value["details"]["network_id"], "10.0.0.0");
    assert_eq!(value["details"]["broadcast_id"], "10.31.255.255");
}

#[test]
fn test_csv_listing_truncated() {
    let out = run(&["-i", "172.16.0.0", "-s", "100", "-l", "--limit", "3", "-f", "csv"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4, "header plus three rows");
    assert!(lines[3].contains("\"172.16.4.0/23\""));
}

#[test]
fn test_text_report() {
    let out = run(&["-i", "10.1.0.5", "-c", "8"]).unwrap();
    assert!(out.contains("255.0.0.0"));
    assert!(out.contains("11.0.0.0"));
    assert!(out.contains("16,777,214"));
    assert_eq!(
        run(&["-i", "10.1.0.5", "-c", "8", "-f", "text"]).unwrap(),
        out
    );
    let opts = Opts::try_parse_from(["subnet-calc", "-i", "10.1.0.5"]).unwrap();
    assert_eq!(opts.format, OutputFormat::Text);
}

#[test]
fn test_errors_surface() {
    let err = run(&["-i", "192.168.1.0", "-d", "255.255.255.0", "-s", "0"]).unwrap_err();
    assert_eq!(err.to_string(), "subnet count must be at least 1, got 0");

    let err = run(&["-i", "192.168.1.0", "-d", "255.255.255.0", "-s", "512"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "9 extra mask bits needed but only 8 host bits available"
    );

    let err = run(&["-i", "192.168.1.0", "-d", "255.255.128.0"]).unwrap_err();
    assert!(err.to_string().contains("not a classful default mask"));

    assert!(run(&["-i", "192.168.1.0", "-c", "32"]).is_err());
}

#[test]
fn test_plan_then_locate_properties() {
    for (class, count, mask) in [
        (NetworkClass::A, 1, "255.0.0.0"),
        (NetworkClass::B, 1, "255.255.0.0"),
        (NetworkClass::C, 1, "255.255.255.0"),
        (NetworkClass::C, 4, "255.255.255.192"),
        (NetworkClass::A, 8, "255.224.0.0"),
    ] {
        assert_eq!(plan(class, count).unwrap().mask.to_string(), mask);
    }

    for prefix in 0..=32 {
        assert_eq!(plan_from_prefix(prefix).unwrap().mask.prefix_len(), prefix);
    }

    let details = locate(Ipv4Addr::new(192, 168, 1, 0), 24).unwrap();
    assert_eq!(details.first_host, Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(details.last_host, Some(Ipv4Addr::new(192, 168, 1, 254)));
    assert_eq!(details.usable_host_count, 254);

    let details = locate(Ipv4Addr::new(192, 168, 1, 0), 31).unwrap();
    assert_eq!(details.usable_host_count, 0);

    let details = locate(Ipv4Addr::new(192, 168, 1, 255), 25).unwrap();
    assert!(matches!(
        details.require_next_network(),
        Err(SubnetError::NoNextNetwork(_))
    ));
}

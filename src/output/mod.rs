//! Output formatting for calculation results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors
//!
//! JSON output is the serde rendering of [`Calculation`].

mod csv;
mod terminal;

use crate::cli::OutputFormat;
use crate::Calculation;
use std::error::Error;

pub use csv::subnet_csv;
pub use terminal::{format_field, format_thousands, report};

/// Render a calculation in the requested format.
pub fn render(calc: &Calculation, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let out = match format {
        OutputFormat::Text => report(calc)?,
        OutputFormat::Json => serde_json::to_string_pretty(calc)
            .map_err(|e| format!("Error serializing JSON: {e}"))?,
        OutputFormat::Csv => subnet_csv(calc),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalcRequest, MaskInput};
    use std::net::Ipv4Addr;

    #[test]
    fn test_render_json() {
        let request = CalcRequest::new(Ipv4Addr::new(192, 168, 1, 200), MaskInput::Prefix(26));
        let calc = crate::calculate(&request).unwrap();
        let json = render(&calc, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["plan"]["mask"], "255.255.255.192");
        assert_eq!(value["plan"]["class"], serde_json::Value::Null);
        assert_eq!(value["details"]["network_id"], "192.168.1.192");
        assert_eq!(value["details"]["next_network"], serde_json::Value::Null);
        assert_eq!(value["details"]["usable_host_count"], 62);
        assert_eq!(value["details"]["subnet_mask"], "192.168.1.200/26 -- 192");
        assert!(value.get("listing").is_none());
    }

    #[test]
    fn test_render_text_and_csv() {
        let request = CalcRequest::new(Ipv4Addr::new(10, 1, 0, 5), MaskInput::Prefix(8));
        let calc = crate::calculate(&request).unwrap();
        assert!(render(&calc, OutputFormat::Text)
            .unwrap()
            .contains("16,777,214"));
        assert!(render(&calc, OutputFormat::Csv)
            .unwrap()
            .starts_with(r#" "cnt","#));
    }
}

//! Bomb facts loading utilities
//!
//! Facts files are JSON documents matching [`BombFacts`].

use super::BombFacts;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load bomb facts from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds an
/// invalid serial number.
///
/// # Examples
/// ```no_run
/// use alphabet_buttons::facts::loader::load_from_file;
///
/// let facts = load_from_file("bombs/sig_lit.json").unwrap();
/// println!("Serial: {}", facts.serial_number);
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<BombFacts> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read facts file {}", path.display()))?;

    from_json_str(&content).with_context(|| format!("Invalid facts file {}", path.display()))
}

/// Parse bomb facts from a JSON string
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the serial number is invalid.
///
/// # Examples
/// ```
/// use alphabet_buttons::facts::BombInfo;
/// use alphabet_buttons::facts::loader::from_json_str;
///
/// let facts = from_json_str(r#"{ "serial_number": "AB3CD9", "batteries": 4 }"#).unwrap();
/// assert_eq!(facts.battery_count(), 4);
/// ```
pub fn from_json_str(json: &str) -> Result<BombFacts> {
    let facts = serde_json::from_str(json)?;
    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{BombInfo, Port};
    use std::io::Write;

    #[test]
    fn minimal_document_defaults_widgets() {
        let facts = from_json_str(r#"{ "serial_number": "XN4AB2" }"#).unwrap();

        assert_eq!(facts.serial_number.as_str(), "XN4AB2");
        assert_eq!(facts.battery_count(), 0);
        assert!(facts.indicators.is_empty());
        assert!(facts.port_plates.is_empty());
    }

    #[test]
    fn invalid_serial_rejected() {
        assert!(from_json_str(r#"{ "serial_number": "ABCDEF" }"#).is_err());
    }

    #[test]
    fn missing_serial_rejected() {
        assert!(from_json_str(r#"{ "batteries": 2 }"#).is_err());
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "alphabet_buttons_facts_{}.json",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "serial_number": "AB1CD2", "port_plates": [["Parallel", "Serial"]] }}"#
        )
        .unwrap();
        drop(file);

        let facts = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(facts.is_port_present(Port::Parallel));
        assert!(facts.is_port_present(Port::Serial));
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = load_from_file("/definitely/not/here.json");
        assert!(result.is_err());
    }
}

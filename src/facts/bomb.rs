//! Concrete bomb state
//!
//! `BombFacts` is a plain snapshot of the widgets on a bomb casing. It is the
//! crate's own implementation of [`BombInfo`](super::BombInfo) and the shape of
//! the JSON facts files.

use super::{BombInfo, SerialNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Port types that can appear on a port plate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Port {
    #[serde(rename = "DVI", alias = "DVI-D")]
    DviD,
    Parallel,
    #[serde(rename = "PS2", alias = "PS/2")]
    Ps2,
    #[serde(rename = "RJ45", alias = "RJ-45")]
    Rj45,
    Serial,
    #[serde(rename = "StereoRCA")]
    StereoRca,
}

impl Port {
    pub const ALL: [Self; 6] = [
        Self::DviD,
        Self::Parallel,
        Self::Ps2,
        Self::Rj45,
        Self::Serial,
        Self::StereoRca,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DviD => "DVI-D",
            Self::Parallel => "Parallel",
            Self::Ps2 => "PS/2",
            Self::Rj45 => "RJ-45",
            Self::Serial => "Serial",
            Self::StereoRca => "Stereo RCA",
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A plate of ports. Plates may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Port>", into = "Vec<Port>")]
pub struct PortPlate(Vec<Port>);

impl From<Vec<Port>> for PortPlate {
    fn from(ports: Vec<Port>) -> Self {
        Self::new(ports)
    }
}

impl From<PortPlate> for Vec<Port> {
    fn from(plate: PortPlate) -> Self {
        plate.0
    }
}

impl PortPlate {
    #[must_use]
    pub fn new(ports: impl IntoIterator<Item = Port>) -> Self {
        let mut plate: Vec<Port> = Vec::new();
        for port in ports {
            if !plate.contains(&port) {
                plate.push(port);
            }
        }
        Self(plate)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, port: Port) -> bool {
        self.0.contains(&port)
    }

    #[must_use]
    pub fn ports(&self) -> &[Port] {
        &self.0
    }
}

/// A labeled indicator light
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndicatorDocument")]
pub struct Indicator {
    pub label: String,
    pub lit: bool,
}

#[derive(Deserialize)]
struct IndicatorDocument {
    label: String,
    #[serde(default)]
    lit: bool,
}

impl From<IndicatorDocument> for Indicator {
    fn from(doc: IndicatorDocument) -> Self {
        Self::new(doc.label, doc.lit)
    }
}

impl Indicator {
    #[must_use]
    pub fn new(label: impl Into<String>, lit: bool) -> Self {
        Self {
            label: label.into().to_ascii_uppercase(),
            lit,
        }
    }
}

/// Snapshot of everything the module may ask about the bomb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombFacts {
    pub serial_number: SerialNumber,
    #[serde(default)]
    pub batteries: u32,
    #[serde(default)]
    pub battery_holders: u32,
    #[serde(default)]
    pub indicators: Vec<Indicator>,
    #[serde(default)]
    pub port_plates: Vec<PortPlate>,
}

impl BombFacts {
    /// A bare bomb: the given serial number and no other widgets
    #[must_use]
    pub const fn new(serial_number: SerialNumber) -> Self {
        Self {
            serial_number,
            batteries: 0,
            battery_holders: 0,
            indicators: Vec::new(),
            port_plates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_batteries(mut self, batteries: u32, holders: u32) -> Self {
        self.batteries = batteries;
        self.battery_holders = holders;
        self
    }

    #[must_use]
    pub fn with_indicator(mut self, label: &str, lit: bool) -> Self {
        self.indicators.push(Indicator::new(label, lit));
        self
    }

    #[must_use]
    pub fn with_port_plate(mut self, ports: impl IntoIterator<Item = Port>) -> Self {
        self.port_plates.push(PortPlate::new(ports));
        self
    }

    fn indicators_labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Indicator> {
        self.indicators
            .iter()
            .filter(move |i| i.label.eq_ignore_ascii_case(label))
    }
}

impl BombInfo for BombFacts {
    fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }

    fn battery_count(&self) -> u32 {
        self.batteries
    }

    fn battery_holder_count(&self) -> u32 {
        self.battery_holders
    }

    fn is_indicator_present(&self, label: &str) -> bool {
        self.indicators_labeled(label).next().is_some()
    }

    fn is_indicator_lit(&self, label: &str) -> bool {
        // Labels may repeat; any lit one counts
        self.indicators_labeled(label).any(|i| i.lit)
    }

    fn port_plates(&self) -> &[PortPlate] {
        &self.port_plates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serial() -> SerialNumber {
        SerialNumber::new("AB1CD2").unwrap()
    }

    #[test]
    fn bare_bomb_has_nothing() {
        let bomb = BombFacts::new(serial());
        assert_eq!(bomb.battery_count(), 0);
        assert_eq!(bomb.battery_holder_count(), 0);
        assert!(!bomb.is_indicator_present("CAR"));
        assert!(Port::ALL.iter().all(|&p| !bomb.is_port_present(p)));
        assert!(bomb.port_plates().is_empty());
    }

    #[test]
    fn indicators_present_and_lit() {
        let bomb = BombFacts::new(serial())
            .with_indicator("car", false)
            .with_indicator("SIG", true);

        assert!(bomb.is_indicator_present("CAR"));
        assert!(!bomb.is_indicator_lit("CAR"));
        assert!(bomb.is_indicator_present("SIG"));
        assert!(bomb.is_indicator_lit("SIG"));
        assert!(!bomb.is_indicator_lit("FRK"));
    }

    #[test]
    fn repeated_label_is_lit_if_any_copy_is() {
        let bomb = BombFacts::new(serial())
            .with_indicator("SIG", false)
            .with_indicator("SIG", true)
            .with_indicator("FRK", false)
            .with_indicator("frk", false);

        assert!(bomb.is_indicator_present("SIG"));
        assert!(bomb.is_indicator_lit("sig"));
        assert!(bomb.is_indicator_present("FRK"));
        assert!(!bomb.is_indicator_lit("FRK"));
    }

    #[test]
    fn json_goes_through_constructors() {
        let json = r#"{
            "serial_number": "AB1CD2",
            "indicators": [{ "label": "sig" }, { "label": "car", "lit": true }],
            "port_plates": [["Serial", "Serial", "Parallel"]]
        }"#;
        let bomb: BombFacts = serde_json::from_str(json).unwrap();

        assert_eq!(bomb.indicators[0], Indicator::new("SIG", false));
        assert_eq!(bomb.indicators[1].label, "CAR");
        assert!(bomb.is_indicator_lit("CAR"));
        assert_eq!(bomb.port_plates[0].ports(), &[Port::Serial, Port::Parallel]);

        let written = serde_json::to_string(&bomb.port_plates[0]).unwrap();
        assert_eq!(written, r#"["Serial","Parallel"]"#);
    }

    #[test]
    fn ports_found_across_plates() {
        let bomb = BombFacts::new(serial())
            .with_port_plate([Port::Parallel])
            .with_port_plate([Port::Ps2, Port::DviD]);

        assert!(bomb.is_port_present(Port::Parallel));
        assert!(bomb.is_port_present(Port::Ps2));
        assert!(bomb.is_port_present(Port::DviD));
        assert!(!bomb.is_port_present(Port::Serial));
    }

    #[test]
    fn port_plate_deduplicates() {
        let plate = PortPlate::new([Port::Serial, Port::Serial, Port::Parallel]);
        assert_eq!(plate.ports(), &[Port::Serial, Port::Parallel]);
    }

    #[test]
    fn facts_json_shape() {
        let json = r#"{
            "serial_number": "ab1cd2",
            "batteries": 3,
            "battery_holders": 2,
            "indicators": [{ "label": "SIG", "lit": true }],
            "port_plates": [["RJ45", "PS/2"], []]
        }"#;
        let bomb: BombFacts = serde_json::from_str(json).unwrap();

        assert_eq!(bomb.serial_number.as_str(), "AB1CD2");
        assert_eq!(bomb.battery_count(), 3);
        assert!(bomb.is_indicator_lit("SIG"));
        assert!(bomb.is_port_present(Port::Rj45));
        assert!(bomb.is_port_present(Port::Ps2));
        assert!(bomb.port_plates()[1].is_empty());
    }
}

//! Bomb facts
//!
//! The puzzle reads the state of the bomb (serial number, batteries,
//! indicators, ports) through the read-only [`BombInfo`] oracle. [`BombFacts`]
//! is the concrete snapshot used by the binary, loaded from JSON or generated
//! at random.

mod bomb;
pub mod generator;
pub mod loader;
mod serial;

pub use bomb::{BombFacts, Indicator, Port, PortPlate};
pub use serial::{SERIAL_MAX_LEN, SERIAL_MIN_LEN, SerialError, SerialNumber};

/// Read-only queries about the bomb a module is mounted on
///
/// Implementations must answer consistently for the lifetime of a puzzle.
pub trait BombInfo {
    fn serial_number(&self) -> &SerialNumber;

    fn battery_count(&self) -> u32;

    fn battery_holder_count(&self) -> u32;

    /// Whether an indicator with this label exists, lit or not
    fn is_indicator_present(&self, label: &str) -> bool;

    fn is_indicator_lit(&self, label: &str) -> bool;

    fn port_plates(&self) -> &[PortPlate];

    /// Whether any plate carries this port
    fn is_port_present(&self, port: Port) -> bool {
        self.port_plates().iter().any(|plate| plate.contains(port))
    }
}

//! Random bomb generation
//!
//! Produces bombs shaped like the ones the host game builds, so the binary can
//! run without a facts file.

use super::{BombFacts, Indicator, Port, PortPlate, SerialNumber};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Standard indicator labels
pub const INDICATOR_LABELS: [&str; 11] = [
    "SND", "CLR", "CAR", "IND", "FRQ", "SIG", "NSA", "MSA", "TRN", "BOB", "FRK",
];

// O and Y are never printed on serial numbers.
const SERIAL_LETTERS: &[u8] = b"ABCDEFGHIJKLMNPQRSTUVWXZ";
const SERIAL_DIGITS: &[u8] = b"0123456789";

const MAX_BATTERY_HOLDERS: u32 = 5;
const MAX_INDICATORS: usize = 5;
const MAX_PORT_PLATES: usize = 4;

/// Ports that can share a plate
const PLATE_GROUPS: [&[Port]; 2] = [
    &[Port::Parallel, Port::Serial],
    &[Port::DviD, Port::Ps2, Port::Rj45, Port::StereoRca],
];

/// Generate a random bomb
///
/// # Panics
/// Will not panic - generated serial numbers always contain letters and digits.
pub fn random_bomb<R: Rng + ?Sized>(rng: &mut R) -> BombFacts {
    let serial_number = random_serial(rng);

    let battery_holders = rng.random_range(0..=MAX_BATTERY_HOLDERS);
    let batteries = (0..battery_holders)
        .map(|_| rng.random_range(1..=2))
        .sum();

    let mut labels = INDICATOR_LABELS.to_vec();
    labels.shuffle(rng);
    labels.truncate(rng.random_range(0..=MAX_INDICATORS));
    let indicators = labels
        .into_iter()
        .map(|label| Indicator::new(label, rng.random_bool(0.5)))
        .collect();

    let plate_count = rng.random_range(0..=MAX_PORT_PLATES);
    let port_plates = (0..plate_count).map(|_| random_plate(rng)).collect();

    BombFacts {
        serial_number,
        batteries,
        battery_holders,
        indicators,
        port_plates,
    }
}

/// Serial layout: two alphanumerics, a digit, two letters, a digit
fn random_serial<R: Rng + ?Sized>(rng: &mut R) -> SerialNumber {
    let alphanumerics: Vec<u8> = SERIAL_LETTERS
        .iter()
        .chain(SERIAL_DIGITS)
        .copied()
        .collect();

    let pools: [&[u8]; 6] = [
        &alphanumerics,
        &alphanumerics,
        SERIAL_DIGITS,
        SERIAL_LETTERS,
        SERIAL_LETTERS,
        SERIAL_DIGITS,
    ];

    let text: String = pools
        .iter()
        .filter_map(|pool| pool.choose(rng).map(|&b| b as char))
        .collect();

    SerialNumber::new(text).expect("generated serial layout is always valid")
}

fn random_plate<R: Rng + ?Sized>(rng: &mut R) -> PortPlate {
    let group = PLATE_GROUPS[rng.random_range(0..PLATE_GROUPS.len())];
    PortPlate::new(group.iter().copied().filter(|_| rng.random_bool(0.5)))
}

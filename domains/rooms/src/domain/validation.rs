//! Validation helpers and constants for room input

use regex::Regex;

lazy_static::lazy_static! {
    /// Room number validation regex
    /// ASCII letters, digits and hyphens, 1-10 characters
    pub static ref ROOM_NUMBER_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9-]{1,10}$").unwrap();
}

/// Validate a room number as printed on the door and in the rooms table
pub fn validate_room_number(number: &str) -> bool {
    ROOM_NUMBER_REGEX.is_match(number)
}

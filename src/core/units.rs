//! Unit conversion helpers
//!
//! All stored quantities are inch-first and gram-first; millimeter, ounce,
//! and pound fields are denormalized caches derived from the primary field.
//! These helpers keep those caches consistent when a caller chooses to
//! populate them.

pub const MM_PER_INCH: f64 = 25.4;
pub const GRAMS_PER_OUNCE: f64 = 28.349_523_125;
pub const GRAMS_PER_POUND: f64 = 453.592_37;

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

pub fn grams_to_ounces(grams: f64) -> f64 {
    grams / GRAMS_PER_OUNCE
}

pub fn grams_to_pounds(grams: f64) -> f64 {
    grams / GRAMS_PER_POUND
}

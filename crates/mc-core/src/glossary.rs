//! Static glossary of spec-sheet abbreviations
//!
//! Loaded verbatim into the `terms` table on every run.

/// (abbreviation, full name) pairs for the terms table.
pub const TERMS: &[(&str, &str)] = &[
    ("ABS", "anti-lock brake system"),
    ("AT", "automatic transmission"),
    ("MT", "manual transmission"),
    ("CVT", "continuously variable transmission"),
    ("4WD", "four-wheel drive"),
    ("FF", "front-engine front-wheel drive"),
    ("FR", "front-engine rear-wheel drive"),
    ("EV", "electric vehicle"),
    ("HV", "hybrid vehicle"),
    ("PS", "power steering"),
];

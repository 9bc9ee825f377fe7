//! The fixed CSV column dictionary
//!
//! Manufacturer spec sheets carry no usable header names: the header line
//! is recognized by its literal first cell, and every data row is mapped
//! to field names purely by column position.

/// First cell of the header line in every manufacturer CSV file.
pub const HEADER_MARKER: &str = "車両形式";

/// Field holding the model type designation (e.g. "DBA-NZE161").
pub const CAR_TYPE: &str = "car_type";

/// Field holding the model name.
pub const CAR_NAME: &str = "car_name";

/// Field holding the trim grade.
pub const GRADE: &str = "grade";

/// Field holding the seating capacity.
pub const CAPACITY: &str = "capacity";

/// Ordered field names, one per CSV column.
pub const DICTIONARY: &[&str] = &[
    CAR_TYPE,
    CAR_NAME,
    GRADE,
    CAPACITY,
    "length",
    "width",
    "height",
    "weight",
    "displacement",
    "mileage",
    "price",
];

/// Resolve a field name to its column position.
pub fn field_index(field: &str) -> Option<usize> {
    DICTIONARY.iter().position(|f| *f == field)
}

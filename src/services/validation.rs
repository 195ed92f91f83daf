//! Field rules checked before any camper or signup reaches the database.

use std::ops::RangeInclusive;

use crate::error::ValidationError;

pub const CAMPER_AGE_RANGE: RangeInclusive<i64> = 8..=18;
pub const SIGNUP_HOUR_RANGE: RangeInclusive<i64> = 0..=23;

pub fn validate_camper(
    name: Option<&str>,
    age: Option<i64>,
) -> Result<(&str, i64), ValidationError> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ValidationError::new("name", "must not be empty")),
    };
    let age = require("age", age)?;
    check_range("age", age, &CAMPER_AGE_RANGE)?;
    Ok((name, age))
}

pub fn validate_signup(time: Option<i64>) -> Result<i64, ValidationError> {
    let time = require("time", time)?;
    check_range("time", time, &SIGNUP_HOUR_RANGE)?;
    Ok(time)
}

pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, "is required"))
}

fn check_range(
    field: &'static str,
    value: i64,
    range: &RangeInclusive<i64>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new(
        field,
        format!("must be between {} and {}", range.start(), range.end()),
    ))
}

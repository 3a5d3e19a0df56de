//! Field checks for the add/edit form.
//!
//! Rules run in a fixed order and stop at the first failure, so the user only ever sees
//! one message at a time. Nothing here touches the store.

use crate::form::FormFields;
use crate::model::CoffeeDraft;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("variety is empty")]
    EmptyVariety,

    #[error("taste description is empty")]
    EmptyTasteDescription,

    #[error("price must be a non-negative integer")]
    InvalidPrice,

    #[error("volume must be a positive integer")]
    InvalidVolume,
}

/// Checks raw form input and converts it into a draft ready for the store.
///
/// Text fields are trimmed before both the emptiness check and storage.
pub fn validate(fields: &FormFields) -> Result<CoffeeDraft, ValidationError> {
    let variety = fields.variety.trim();
    if variety.is_empty() {
        return Err(ValidationError::EmptyVariety);
    }

    let taste_description = fields.taste_description.trim();
    if taste_description.is_empty() {
        return Err(ValidationError::EmptyTasteDescription);
    }

    let price = parse_unsigned(&fields.price).ok_or(ValidationError::InvalidPrice)?;

    let package_volume = parse_unsigned(&fields.package_volume)
        .filter(|v| *v > 0)
        .ok_or(ValidationError::InvalidVolume)?;

    Ok(CoffeeDraft {
        variety: variety.to_string(),
        roast_degree: fields.roast_degree,
        ground_or_bean: fields.ground_or_bean,
        taste_description: taste_description.to_string(),
        price,
        package_volume,
    })
}

// Digits only: signs, spaces inside the number and decimal points are all rejected.
fn parse_unsigned(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

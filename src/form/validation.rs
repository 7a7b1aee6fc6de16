use crate::domain::FieldSet;

use super::error::ValidationError;

/// The leading column (conventionally a serial number) may be left empty.
pub const EXEMPT_FIELD_INDEX: usize = 0;

/// Check that every non-exempt value is non-empty, stopping at the first
/// offending field in label order.
pub fn validate_row<'a>(
    fields: &FieldSet,
    values: &'a [String],
) -> Result<&'a [String], ValidationError> {
    debug_assert_eq!(fields.len(), values.len());
    for (field, value) in fields.iter().zip(values) {
        if value.is_empty() && field.index != EXEMPT_FIELD_INDEX {
            return Err(ValidationError {
                index: field.index,
                label: field.label.clone(),
            });
        }
    }
    Ok(values)
}

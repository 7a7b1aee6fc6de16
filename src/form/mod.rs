mod error;
mod field;
mod state;
mod validation;

pub use error::{SaveError, ValidationError};
pub use field::FieldState;
pub use state::{Focus, FormState};
pub use validation::{EXEMPT_FIELD_INDEX, validate_row};

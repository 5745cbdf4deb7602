//! Shape check for model output before it is forwarded to callers.
//!
//! Only the top-level shape is enforced: a numeric `overallScore` and array-typed
//! `sections`, `bulletsRewrite` and `checklist`. Anything else the model adds is
//! passed through untouched.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("expected a JSON object")]
    NotAnObject,

    #[error("field `{0}` must be a number")]
    NotANumber(&'static str),

    #[error("field `{0}` must be an array")]
    NotAnArray(&'static str),
}

const ARRAY_FIELDS: [&str; 3] = ["sections", "bulletsRewrite", "checklist"];

pub fn validate_review_shape(value: &Value) -> Result<(), SchemaError> {
    let object = value.as_object().ok_or(SchemaError::NotAnObject)?;

    if !object.get("overallScore").is_some_and(Value::is_number) {
        return Err(SchemaError::NotANumber("overallScore"));
    }

    for field in ARRAY_FIELDS {
        if !object.get(field).is_some_and(Value::is_array) {
            return Err(SchemaError::NotAnArray(field));
        }
    }

    Ok(())
}

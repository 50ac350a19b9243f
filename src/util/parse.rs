use serde_json::Value;

use crate::error::{internal::InternalError, AppError};

/// Parses an i64 identifier from a String.
///
/// Surrounding whitespace is ignored so ids read from query strings and
/// hand-edited files compare equal to their numeric form.
///
/// # Arguments
/// - `value` - The string to attempt to parse
///
/// # Returns
/// - `Ok(i64)` - Successfully parsed identifier
/// - `Err(AppError::InternalErr(ParseId))` - The string is not a decimal integer
pub fn parse_i64_from_string(value: &str) -> Result<i64, AppError> {
    let result = value
        .trim()
        .parse::<i64>()
        .map_err(|e| InternalError::ParseId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

/// Best-effort integer coercion for loosely typed record fields.
///
/// Integers are taken as-is, floats are truncated toward zero, and strings are
/// parsed as integers (then as floats). Anything else, including a missing
/// field, yields 0.
pub fn lenient_i64(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
                .unwrap_or(0)
        }
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_padded_identifier() {
        assert_eq!(parse_i64_from_string(" 42 ").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_identifier() {
        let err = parse_i64_from_string("abc").unwrap_err();
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn coerces_loose_numbers() {
        assert_eq!(lenient_i64(Some(&json!(3))), 3);
        assert_eq!(lenient_i64(Some(&json!(2.9))), 2);
        assert_eq!(lenient_i64(Some(&json!("7"))), 7);
        assert_eq!(lenient_i64(Some(&json!("-1.5"))), -1);
        assert_eq!(lenient_i64(Some(&json!(true))), 1);
        assert_eq!(lenient_i64(Some(&json!("three"))), 0);
        assert_eq!(lenient_i64(Some(&json!([1]))), 0);
        assert_eq!(lenient_i64(None), 0);
    }
}

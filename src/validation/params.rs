//! Query-string validation for range queries

use chrono::NaiveDate;

use super::{parse_date, ValidationError, ValidationResult};

/// Typed `user_id` + `date` query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeParams {
    pub user_id: i64,
    pub date: NaiveDate,
}

/// The value of `key`, which must appear exactly once
fn single_value<'a>(
    pairs: &'a [(String, String)],
    key: &'static str,
) -> ValidationResult<&'a str> {
    let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str());
    match (values.next(), values.next()) {
        (Some(value), None) => Ok(value),
        (Some(_), Some(_)) => Err(ValidationError::invalid(
            "params",
            format!("{key} given more than once"),
        )),
        (None, _) => Err(ValidationError::invalid(key, "is required")),
    }
}

/// Validate range query parameters given as raw `(key, value)` pairs.
///
/// Exactly one `user_id` and one `date` must be present; repeated keys or
/// any other key are rejected.
pub fn parse_range_params(pairs: &[(String, String)]) -> ValidationResult<RangeParams> {
    if pairs.len() != 2 {
        return Err(ValidationError::invalid(
            "params",
            format!("expected user_id and date, got {} parameters", pairs.len()),
        ));
    }

    let user_id = single_value(pairs, "user_id")?;
    let date = single_value(pairs, "date")?;

    let user_id: i64 = user_id.trim().parse().map_err(|_| {
        ValidationError::invalid("user_id", format!("'{user_id}' is not an integer"))
    })?;
    if user_id < 0 {
        return Err(ValidationError::invalid(
            "user_id",
            format!("must be non-negative, got {user_id}"),
        ));
    }

    Ok(RangeParams {
        user_id,
        date: parse_date("date", date)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn field_of(pairs: &[(&str, &str)]) -> Option<&'static str> {
        parse_range_params(&params(pairs)).unwrap_err().field()
    }

    #[test]
    fn test_valid_params() {
        let parsed = parse_range_params(&params(&[("date", "2024-03-04"), ("user_id", "5")]))
            .unwrap();
        assert_eq!(parsed.user_id, 5);
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    }

    #[test]
    fn test_wrong_parameter_count() {
        assert_eq!(field_of(&[("user_id", "5")]), Some("params"));
        assert_eq!(
            field_of(&[("user_id", "5"), ("date", "2024-03-04"), ("extra", "1")]),
            Some("params")
        );
    }

    #[test]
    fn test_repeated_key_rejected() {
        assert_eq!(field_of(&[("user_id", "5"), ("user_id", "6")]), Some("params"));
        assert_eq!(
            field_of(&[("user_id", "5"), ("user_id", "6"), ("date", "2024-03-04")]),
            Some("params")
        );
    }

    #[test]
    fn test_missing_required_key() {
        assert_eq!(field_of(&[("uid", "5"), ("date", "2024-03-04")]), Some("user_id"));
        assert_eq!(field_of(&[("user_id", "5"), ("day", "2024-03-04")]), Some("date"));
    }

    #[test]
    fn test_unparsable_values() {
        assert_eq!(
            field_of(&[("user_id", "five"), ("date", "2024-03-04")]),
            Some("user_id")
        );
        assert_eq!(
            field_of(&[("user_id", "-1"), ("date", "2024-03-04")]),
            Some("user_id")
        );
        assert_eq!(field_of(&[("user_id", "5"), ("date", "March 4")]), Some("date"));
    }
}

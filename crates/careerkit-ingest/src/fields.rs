//! Typed extraction from untyped JSON, tracking the path of every field read.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::error::ValidationError;

type Parsed<T> = Result<T, ValidationError>;

/// A JSON object being read field by field.
pub(crate) struct Fields<'a> {
    obj: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    pub fn root(value: &'a Value) -> Parsed<Self> {
        match value.as_object() {
            Some(obj) => Ok(Self {
                obj,
                path: String::new(),
            }),
            None => Err(ValidationError::wrong_type("$", "object", value)),
        }
    }

    pub fn object(value: &'a Value, path: &str) -> Parsed<Self> {
        match value.as_object() {
            Some(obj) => Ok(Self {
                obj,
                path: path.to_string(),
            }),
            None => Err(ValidationError::wrong_type(path, "object", value)),
        }
    }

    fn child(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// `null` counts as not provided.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key).filter(|v| !v.is_null())
    }

    pub fn opt<T>(&self, key: &str, parse: impl FnOnce(&Value, &str) -> Parsed<T>) -> Parsed<Option<T>> {
        match self.get(key) {
            Some(v) => parse(v, &self.child(key)).map(Some),
            None => Ok(None),
        }
    }

    pub fn req<T>(&self, key: &str, parse: impl FnOnce(&Value, &str) -> Parsed<T>) -> Parsed<T> {
        match self.get(key) {
            Some(v) => parse(v, &self.child(key)),
            None => Err(ValidationError::Missing {
                path: self.child(key),
            }),
        }
    }

    pub fn text(&self, key: &str) -> Parsed<String> {
        self.req(key, text)
    }

    /// Absent lists read as empty.
    pub fn text_list(&self, key: &str) -> Parsed<Vec<String>> {
        Ok(self.opt(key, text_list)?.unwrap_or_default())
    }

    pub fn list<T>(&self, key: &str, item: fn(&Value, &str) -> Parsed<T>) -> Parsed<Vec<T>> {
        Ok(self.opt(key, |v, p| list(v, p, item))?.unwrap_or_default())
    }
}

pub(crate) fn text(value: &Value, path: &str) -> Parsed<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ValidationError::wrong_type(path, "string", value))
}

pub(crate) fn text_list(value: &Value, path: &str) -> Parsed<Vec<String>> {
    list(value, path, text)
}

pub(crate) fn list<T>(value: &Value, path: &str, item: fn(&Value, &str) -> Parsed<T>) -> Parsed<Vec<T>> {
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::wrong_type(path, "array", value))?;
    items
        .iter()
        .enumerate()
        .map(|(i, v)| item(v, &format!("{path}[{i}]")))
        .collect()
}

pub(crate) fn count(value: &Value, path: &str) -> Parsed<u64> {
    value
        .as_u64()
        .ok_or_else(|| ValidationError::wrong_type(path, "non-negative integer", value))
}

pub(crate) fn number(value: &Value, path: &str) -> Parsed<f64> {
    value
        .as_f64()
        .ok_or_else(|| ValidationError::wrong_type(path, "number", value))
}

pub(crate) fn non_negative(value: &Value, path: &str) -> Parsed<f64> {
    let n = number(value, path)?;
    if n < 0.0 {
        return Err(ValidationError::InvalidValue {
            path: path.to_string(),
            reason: format!("must not be negative, got {n}"),
        });
    }
    Ok(n)
}

/// Accepts `YYYY-MM-DD`, RFC 3339, or a naive ISO-8601 datetime; keeps the calendar date.
pub(crate) fn date(value: &Value, path: &str) -> Parsed<NaiveDate> {
    let s = text(value, path)?;
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .ok_or_else(|| ValidationError::InvalidValue {
            path: path.to_string(),
            reason: format!("expected a calendar date (YYYY-MM-DD), got {s:?}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dates_accept_plain_and_timestamped_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        for raw in [
            "2024-03-15",
            "2024-03-15T00:00:00",
            "2024-03-15T10:30:00.123456",
            "2024-03-15T10:30:00Z",
            "2024-03-15T23:00:00+02:00",
        ] {
            assert_eq!(date(&json!(raw), "d").unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn bad_dates_report_the_path() {
        let err = date(&json!("15/03/2024"), "layoff_statistics[0].date").unwrap_err();
        assert_eq!(err.path(), "layoff_statistics[0].date");
        assert!(matches!(err, ValidationError::InvalidValue { .. }));

        let err = date(&json!(20240315), "d").unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { expected: "string", .. }));
    }

    #[test]
    fn counts_must_be_non_negative_integers() {
        assert_eq!(count(&json!(12), "n").unwrap(), 12);
        for (raw, found) in [
            (json!(-1), "negative integer"),
            (json!(12.5), "non-integer number"),
            (json!("12"), "string"),
        ] {
            assert_eq!(
                count(&raw, "n").unwrap_err(),
                ValidationError::WrongType {
                    path: "n".to_string(),
                    expected: "non-negative integer",
                    found,
                }
            );
        }
    }

    #[test]
    fn list_items_carry_their_index() {
        let err = text_list(&json!(["a", 2, "c"]), "skills").unwrap_err();
        assert_eq!(err.path(), "skills[1]");
    }

    #[test]
    fn null_fields_count_as_absent() {
        let value = json!({"a": null});
        let fields = Fields::root(&value).unwrap();
        assert_eq!(fields.opt("a", text).unwrap(), None);
        assert_eq!(fields.text_list("a").unwrap(), Vec::<String>::new());
        assert_eq!(
            fields.text("a").unwrap_err(),
            ValidationError::Missing { path: "a".to_string() }
        );
    }
}

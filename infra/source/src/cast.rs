//! Value coercion toward schema field kinds.
//!
//! Coercion is lenient: a value that cannot be represented in the target
//! kind is passed through unchanged rather than rejected, matching the
//! loose typing of the record layer.

use crate::types::FieldKind;
use chrono::DateTime;
use serde_json::Value;

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn cast_value(kind: FieldKind, value: Value) -> Value {
    match kind {
        FieldKind::Id | FieldKind::String => match value {
            Value::Number(n) => Value::String(n.to_string()),
            Value::Bool(b) => Value::String(b.to_string()),
            other => other,
        },
        FieldKind::Integer => match value {
            Value::Number(n) => {
                if n.is_f64() {
                    match n.as_f64() {
                        Some(f) => Value::from(f.trunc() as i64),
                        None => Value::Number(n),
                    }
                } else {
                    Value::Number(n)
                }
            }
            Value::String(s) => match s.trim().parse::<i64>() {
                Ok(i) => Value::from(i),
                Err(_) => Value::String(s),
            },
            Value::Bool(b) => Value::from(i64::from(b)),
            other => other,
        },
        FieldKind::Float => match value {
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(f) => serde_json::Number::from_f64(f)
                    .map_or_else(|| Value::String(s), Value::Number),
                Err(_) => Value::String(s),
            },
            other => other,
        },
        FieldKind::Boolean => match value {
            Value::String(s) => match s.trim() {
                "true" | "1" => Value::Bool(true),
                "false" | "0" | "" => Value::Bool(false),
                _ => Value::String(s),
            },
            Value::Number(n) => Value::Bool(n.as_f64().is_some_and(|f| f != 0.0)),
            other => other,
        },
        FieldKind::DateTime => match value {
            Value::String(s) => match DateTime::parse_from_rfc3339(&s) {
                Ok(dt) => Value::String(dt.to_rfc3339()),
                Err(_) => Value::String(s),
            },
            Value::Number(n) => {
                match n.as_i64().and_then(|secs| DateTime::from_timestamp(secs, 0)) {
                    Some(dt) => Value::String(dt.to_rfc3339()),
                    None => Value::Number(n),
                }
            }
            other => other,
        },
    }
}

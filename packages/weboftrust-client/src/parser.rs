//! Translation of decoded lookup responses into [`Website`] models.
//!
//! A lookup response maps each requested host to a result record:
//!
//! ```json
//! {
//!   "example.com": {
//!     "target": "example.com",
//!     "0": [94, 88],
//!     "4": [93, 86],
//!     "categories": { "501": 99, "301": 48 },
//!     "blacklists": { "malware": 1412412000 }
//!   }
//! }
//! ```
//!
//! Axes are keyed by position (see [`Axis::wire_key`]); blacklist timestamps
//! are dropped and only the list names are kept.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::models::{Axis, Component, Website};

/// Parsed websites keyed by the response's per-host key, in response order.
pub type WebsiteMap = IndexMap<String, Website>;

type Record = Map<String, Value>;

/// Stateless interpreter for lookup responses.
pub struct ResponseParser;

impl ResponseParser {
    /// Decode a raw response body and parse it.
    pub fn parse_str(body: &str) -> Result<WebsiteMap, ParseError> {
        let value: Value = serde_json::from_str(body)?;
        Self::parse(&value)
    }

    /// Parse a decoded response into one [`Website`] per result record.
    ///
    /// Keys and their order are preserved. An array response is keyed by
    /// element index. Scores may be integers or whole-valued floats. Any
    /// structurally invalid record fails the whole call.
    pub fn parse(response: &Value) -> Result<WebsiteMap, ParseError> {
        let websites = match response {
            Value::Object(results) => results
                .iter()
                .map(|(key, row)| -> Result<(String, Website), ParseError> {
                    Ok((key.clone(), parse_record(key, row)?))
                })
                .collect::<Result<WebsiteMap, ParseError>>()?,
            Value::Array(results) => results
                .iter()
                .enumerate()
                .map(|(index, row)| -> Result<(String, Website), ParseError> {
                    let key = index.to_string();
                    let website = parse_record(&key, row)?;
                    Ok((key, website))
                })
                .collect::<Result<WebsiteMap, ParseError>>()?,
            other => {
                return Err(ParseError::MalformedResponse {
                    reason: format!("expected an object of results, got {}", type_name(other)),
                })
            }
        };

        tracing::debug!(count = websites.len(), "Parsed Web of Trust lookup response");
        Ok(websites)
    }
}

fn parse_record(key: &str, row: &Value) -> Result<Website, ParseError> {
    let record = row.as_object().ok_or_else(|| malformed(key, "result is not an object"))?;

    let target = match present(record, "target") {
        Some(Value::String(target)) => target,
        Some(_) => return Err(malformed(key, "target is not a string")),
        None => {
            return Err(ParseError::MissingTarget {
                key: key.to_string(),
            })
        }
    };

    let mut website = Website::new(target.as_str());

    for (axis, component) in read_axes(key, record)? {
        website.set_component(axis, component);
    }

    if let Some(categories) = present(record, "categories") {
        website.set_categories(read_categories(key, categories)?);
    }

    if let Some(blacklists) = present(record, "blacklists") {
        let lists = blacklists
            .as_object()
            .ok_or_else(|| malformed(key, "blacklists is not an object"))?;
        website.set_blacklists(lists.keys().cloned());
    }

    Ok(website)
}

/// The only place that knows which positional keys carry which axis.
///
/// Keys without an [`Axis`] (the deprecated `1` and `2`, or anything newer)
/// are skipped.
fn read_axes(key: &str, record: &Record) -> Result<Vec<(Axis, Component)>, ParseError> {
    let mut axes = Vec::with_capacity(Axis::ALL.len());

    for axis in Axis::ALL {
        if let Some(value) = present(record, axis.wire_key()) {
            axes.push((axis, read_component(key, axis, value)?));
        }
    }

    if tracing::enabled!(tracing::Level::TRACE) {
        for field in record.keys() {
            if field.parse::<u32>().is_ok() && Axis::from_wire_key(field).is_none() {
                tracing::trace!(key, axis = %field, "Skipping unsupported axis");
            }
        }
    }

    Ok(axes)
}

fn read_component(key: &str, axis: Axis, value: &Value) -> Result<Component, ParseError> {
    let pair = match value.as_array() {
        Some(pair) if pair.len() >= 2 => pair,
        _ => {
            return Err(malformed(
                key,
                &format!("{} axis is not a [reputation, confidence] pair", axis),
            ))
        }
    };

    let reputation = read_int(&pair[0])
        .ok_or_else(|| malformed(key, &format!("{} reputation is not an integer", axis)))?;
    let confidence = read_int(&pair[1])
        .ok_or_else(|| malformed(key, &format!("{} confidence is not an integer", axis)))?;

    Ok(Component::new(reputation, confidence))
}

fn read_categories(key: &str, value: &Value) -> Result<Vec<(u32, i32)>, ParseError> {
    let categories = value
        .as_object()
        .ok_or_else(|| malformed(key, "categories is not an object"))?;

    categories
        .iter()
        .map(|(code, confidence)| -> Result<(u32, i32), ParseError> {
            let code = code
                .parse::<u32>()
                .map_err(|_| malformed(key, &format!("category code {:?} is not an integer", code)))?;
            let confidence = read_int(confidence).ok_or_else(|| {
                malformed(key, &format!("confidence for category {} is not an integer", code))
            })?;
            Ok((code, confidence))
        })
        .collect()
}

/// A field that exists and is not `null`.
fn present<'a>(record: &'a Record, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|value| !value.is_null())
}

/// An `i32`, or a whole-valued float such as `94.0`.
fn read_int(value: &Value) -> Option<i32> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= f64::from(i32::MIN) && *n <= f64::from(i32::MAX))
        .map(|n| n as i32)
}

fn malformed(key: &str, reason: &str) -> ParseError {
    ParseError::MalformedRecord {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

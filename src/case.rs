//! Key-case conversion between the library's camelCase field names and the
//! snake_case names used on the wire.
//!
//! Only top-level keys of a flat JSON object are rewritten. Values are never
//! touched, so nested objects keep whatever keys the service sent.

use serde_json::{Map, Value};

/// Convert a wire (snake_case) key to internal (camelCase) form.
///
/// An underscore is consumed only when it precedes an ASCII lowercase letter,
/// which keeps the conversion reversible by [`to_wire`].
///
/// ```rust
/// assert_eq!(pxshot::from_wire("full_page"), "fullPage");
/// assert_eq!(pxshot::from_wire("url"), "url");
/// ```
pub fn from_wire(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

/// Convert an internal (camelCase) key to wire (snake_case) form.
///
/// ```rust
/// assert_eq!(pxshot::to_wire("waitForSelector"), "wait_for_selector");
/// ```
pub fn to_wire(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);

    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Rewrite every top-level key of `map` with `convert`.
pub fn transform_keys<F>(map: Map<String, Value>, convert: F) -> Map<String, Value>
where
    F: Fn(&str) -> String,
{
    map.into_iter()
        .map(|(key, value)| (convert(&key), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_wire() {
        assert_eq!(from_wire("full_page"), "fullPage");
        assert_eq!(from_wire("wait_for_timeout_ms"), "waitForTimeoutMs");
        assert_eq!(from_wire("url"), "url");
        assert_eq!(from_wire(""), "");
    }

    #[test]
    fn test_to_wire() {
        assert_eq!(to_wire("waitForSelector"), "wait_for_selector");
        assert_eq!(to_wire("deviceScaleFactor"), "device_scale_factor");
        assert_eq!(to_wire("url"), "url");
    }

    #[test]
    fn test_underscore_before_non_letter_is_kept() {
        assert_eq!(from_wire("plan_2024"), "plan_2024");
        assert_eq!(from_wire("trailing_"), "trailing_");
        assert_eq!(to_wire(&from_wire("plan_2024")), "plan_2024");
    }

    #[test]
    fn test_round_trip_lowercase_words() {
        let wire_keys = [
            "url",
            "full_page",
            "expires_at",
            "size_bytes",
            "wait_for_selector",
            "screenshots_used_this_month",
            "a_b_c",
        ];

        for key in wire_keys {
            assert_eq!(to_wire(&from_wire(key)), key);
        }

        let internal_keys = ["url", "fullPage", "sizeBytes", "waitForTimeoutMs", "aBC"];
        for key in internal_keys {
            assert_eq!(from_wire(&to_wire(key)), key);
        }
    }

    #[test]
    fn test_transform_keys_top_level_only() {
        let input = json!({ "full_page": true, "url": "test" });
        let Value::Object(map) = input else { unreachable!() };

        let converted = transform_keys(map, from_wire);
        assert_eq!(Value::Object(converted), json!({ "fullPage": true, "url": "test" }));

        let nested = json!({ "plan_details": { "max_requests": 10 } });
        let Value::Object(map) = nested else { unreachable!() };

        let converted = transform_keys(map, from_wire);
        assert_eq!(
            Value::Object(converted),
            json!({ "planDetails": { "max_requests": 10 } })
        );
    }
}

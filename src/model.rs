use crate::KeyValuePairs;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// One HTTP request captured by a RequestBin bin
///
/// Header and query parameter order is the order the API listed them in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredRequest {
    pub method: String,
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub headers: KeyValuePairs,
    /// Raw request body, verbatim
    #[serde(default, deserialize_with = "loose_string")]
    pub raw: String,
    /// Query parameters, already percent-decoded by RequestBin
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub query_string: KeyValuePairs,
    /// Receipt timestamp in seconds since the epoch
    #[serde(default)]
    pub time: Option<f64>,
}

impl StoredRequest {
    pub fn from_json(value: &Value) -> Result<Self, serde_json::Error> {
        StoredRequest::deserialize(value)
    }
}

/// Render a JSON value the way JavaScript string concatenation would
///
/// RequestBin is not strict about value types, so non-string header and
/// query values still need a stable textual form.
pub fn loose_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => js_number(f),
            None => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => loose_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// `Number.prototype.toString()` for finite values
///
/// Plain notation for magnitudes in `[1e-6, 1e21)`, otherwise `d.ddde±x`.
/// Digits are the shortest round-trip form, which `{:e}` already yields.
fn js_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:e}", f.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exp + 1;

    let text = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if exp >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", exp.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", exp.abs())
        }
    };

    if f < 0.0 {
        format!("-{text}")
    } else {
        text
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(value) => loose_text(&value),
    })
}

fn ordered_pairs<'de, D>(deserializer: D) -> Result<KeyValuePairs, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = KeyValuePairs;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of names to values")
        }

        fn visit_map<A>(self, mut map: A) -> Result<KeyValuePairs, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, value)) = map.next_entry::<String, Value>()? {
                pairs.push((name, loose_text(&value)));
            }
            Ok(pairs)
        }

        fn visit_unit<E: de::Error>(self) -> Result<KeyValuePairs, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<KeyValuePairs, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(PairsVisitor)
}

/*!
Provides the [Value](enum.Value.html) enum, the scalar held in every table cell and series slot,
along with numeric coercion and the ingestion parsing policy.
*/

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use num_traits::ToPrimitive;
#[cfg(feature = "serialize")]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serialize")]
use serde::ser::{Serialize, Serializer};

use error::*;

/// Largest digit count accepted by [to_fixed](enum.Value.html#method.to_fixed).
pub(crate) const MAX_FIXED_DIGITS: usize = 100;

/// (Possibly missing) scalar data value.
#[derive(Debug, Clone)]
pub enum Value {
    /// Indicates a missing (NA) value.
    Na,
    /// Boolean value.
    Boolean(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

impl Default for Value {
    fn default() -> Value {
        Value::Na
    }
}

impl Value {
    /// Create a numeric `Value` from any primitive number. Results in `Value::Na` if the number
    /// cannot be represented as an `f64`.
    pub fn from_primitive<T: ToPrimitive>(n: T) -> Value {
        n.to_f64().map(Value::Number).unwrap_or(Value::Na)
    }

    /// Test if this `Value` is NA.
    pub fn is_na(&self) -> bool {
        match *self {
            Value::Na => true,
            _ => false,
        }
    }
    /// Test if this `Value` exists (is not NA).
    pub fn exists(&self) -> bool {
        !self.is_na()
    }

    /// Whether this value is "falsy": NA, zero, NaN, `false`, or the empty string.
    pub fn is_falsy(&self) -> bool {
        match *self {
            Value::Na => true,
            Value::Boolean(b) => !b,
            Value::Number(n) => n == 0.0 || n.is_nan(),
            Value::Text(ref s) => s.is_empty(),
        }
    }

    /// Returns the contained text, if this is a `Value::Text`.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::Text(ref s) => Some(s),
            _ => None,
        }
    }

    /// Coerce this value to a number. Numbers (other than NaN) coerce to themselves, booleans to
    /// `1` or `0`, and text which parses cleanly as a finite number to that number. NA, empty
    /// text, and any other text do not coerce.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Na => None,
            Value::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
            Value::Number(n) => {
                if n.is_nan() {
                    None
                } else {
                    Some(n)
                }
            }
            Value::Text(ref s) => parse_number(s),
        }
    }

    /// Coerce this value to a number, failing with a `NumericCoercion` error naming `operation`
    /// if coercion is impossible.
    pub fn coerce_number(&self, operation: &str) -> Result<f64> {
        self.as_number()
            .ok_or_else(|| TabulaError::coercion(operation, self))
    }

    /// Ingestion policy: text which parses cleanly as a finite number becomes a `Value::Number`;
    /// every other value is returned untouched.
    pub fn ingest(self) -> Value {
        match self {
            Value::Text(s) => match parse_number(&s) {
                Some(n) => Value::Number(n),
                None => Value::Text(s),
            },
            other => other,
        }
    }

    /// Format this value as text with a fixed number of digits after the decimal point. Fails
    /// if `digits` exceeds 100 or the value cannot be coerced to a number.
    pub fn to_fixed(&self, digits: usize) -> Result<Value> {
        if digits > MAX_FIXED_DIGITS {
            return Err(TabulaError::invalid(format!(
                "round: digits {} out of range (0..={})",
                digits, MAX_FIXED_DIGITS
            )));
        }
        let n = self.coerce_number("round")?;
        Ok(Value::Text(format!("{:.*}", digits, n)))
    }

    fn class_rank(&self) -> u8 {
        match *self {
            Value::Na => 0,
            Value::Boolean(_) => 1,
            Value::Number(_) => 2,
            Value::Text(_) => 3,
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

fn cmp_numbers(left: f64, right: f64) -> Ordering {
    left.partial_cmp(&right)
        .unwrap_or_else(|| left.is_nan().cmp(&right.is_nan()))
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (&Value::Na, &Value::Na) => true,
            (&Value::Boolean(l), &Value::Boolean(r)) => l == r,
            (&Value::Number(l), &Value::Number(r)) => l == r || (l.is_nan() && r.is_nan()),
            (&Value::Text(ref l), &Value::Text(ref r)) => l == r,
            _ => false,
        }
    }
}
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match *self {
            Value::Na => {}
            Value::Boolean(b) => b.hash(state),
            Value::Number(n) => {
                // equal numbers must hash equally: fold -0.0 into 0.0 and all NaNs together
                let bits = if n == 0.0 {
                    0.0f64.to_bits()
                } else if n.is_nan() {
                    ::std::f64::NAN.to_bits()
                } else {
                    n.to_bits()
                };
                bits.hash(state);
            }
            Value::Text(ref s) => s.hash(state),
        }
    }
}

/// Values are totally ordered: NA first, then booleans, numbers (NaN last), and text.
impl Ord for Value {
    fn cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (&Value::Boolean(l), &Value::Boolean(r)) => l.cmp(&r),
            (&Value::Number(l), &Value::Number(r)) => cmp_numbers(l, r),
            (&Value::Text(ref l), &Value::Text(ref r)) => l.cmp(r),
            _ => self.class_rank().cmp(&other.class_rank()),
        }
    }
}
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Na => write!(f, "NA"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Text(ref s) => write!(f, "{}", s),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty)*) => {$(
        impl From<$t> for Value {
            fn from(orig: $t) -> Value {
                Value::from_primitive(orig)
            }
        }
    )*}
}
impl_from_primitive![u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64];

impl From<bool> for Value {
    fn from(orig: bool) -> Value {
        Value::Boolean(orig)
    }
}
impl<'a> From<&'a str> for Value {
    fn from(orig: &'a str) -> Value {
        Value::Text(orig.to_string())
    }
}
impl From<String> for Value {
    fn from(orig: String) -> Value {
        Value::Text(orig)
    }
}
impl<'a> From<&'a Value> for Value {
    fn from(orig: &'a Value) -> Value {
        orig.clone()
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(orig: Option<T>) -> Value {
        match orig {
            Some(value) => value.into(),
            None => Value::Na,
        }
    }
}

#[cfg(feature = "serialize")]
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Value::Na => serializer.serialize_none(),
            Value::Boolean(b) => serializer.serialize_bool(b),
            Value::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 9007199254740992.0 {
                    serializer.serialize_i64(n as i64)
                } else {
                    serializer.serialize_f64(n)
                }
            }
            Value::Text(ref s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(feature = "serialize")]
struct ValueVisitor;

#[cfg(feature = "serialize")]
impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a scalar value (null, boolean, number, or string)")
    }

    fn visit_unit<E: de::Error>(self) -> ::std::result::Result<Value, E> {
        Ok(Value::Na)
    }
    fn visit_none<E: de::Error>(self) -> ::std::result::Result<Value, E> {
        Ok(Value::Na)
    }
    fn visit_some<D>(self, deserializer: D) -> ::std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }
    fn visit_bool<E: de::Error>(self, v: bool) -> ::std::result::Result<Value, E> {
        Ok(Value::Boolean(v))
    }
    fn visit_i64<E: de::Error>(self, v: i64) -> ::std::result::Result<Value, E> {
        Ok(Value::Number(v as f64))
    }
    fn visit_u64<E: de::Error>(self, v: u64) -> ::std::result::Result<Value, E> {
        Ok(Value::Number(v as f64))
    }
    fn visit_f64<E: de::Error>(self, v: f64) -> ::std::result::Result<Value, E> {
        Ok(Value::Number(v))
    }
    fn visit_str<E: de::Error>(self, v: &str) -> ::std::result::Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }
    fn visit_string<E: de::Error>(self, v: String) -> ::std::result::Result<Value, E> {
        Ok(Value::Text(v))
    }
}

#[cfg(feature = "serialize")]
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

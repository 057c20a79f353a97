//! Number serialization for the widget wire format
//!
//! Widget consumers were written against a JavaScript host, so numbers are
//! emitted the way `JSON.stringify` emits them: whole values without a
//! fractional part, non-finite values as `null`.

use serde::Serializer;

/// Largest float that still maps onto an exact integer (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// `serialize_with` helper for `f64` wire fields.
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Sample {
///     #[serde(serialize_with = "amuse_common::wire::js_number")]
///     value: f64,
/// }
///
/// let json = serde_json::to_string(&Sample { value: 50.0 }).unwrap();
/// assert_eq!(json, r#"{"value":50}"#);
/// ```
pub fn js_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = *value;
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

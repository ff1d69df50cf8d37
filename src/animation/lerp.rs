//! Dynamic linear interpolation.
//!
//! [`lerp`] interpolates values whose shape is only known at runtime, the
//! form used when driving a whole flat scene field by field from generic
//! code. Statically typed fields go through [`Interpolatable`] instead.

use serde::{Deserialize, Serialize};

use crate::errors::{FlyoverError, Result};

/// A runtime-shaped interpolatable value: a plain scalar or a sequence of
/// numeric channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(f64),
    Channels(Vec<f64>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Channels(v)
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(v: [f64; N]) -> Self {
        Self::Channels(v.to_vec())
    }
}

/// Linearly interpolates between two values of the same shape.
///
/// For two channel sequences the interpolation is element-wise up to the
/// shorter length: `result[i] = a[i] * (1 - t) + b[i] * t`, and the output
/// length is `min(a.len(), b.len())`. This truncation is deliberate; callers
/// are expected to pass matching lengths, and trailing elements of the longer
/// sequence are silently dropped.
///
/// # Errors
///
/// Returns [`FlyoverError::ShapeMismatch`] when a scalar is paired with a
/// sequence. The shapes carry different meanings, so coercing one into the
/// other would hide a caller bug.
pub fn lerp(a: &Value, b: &Value, t: f64) -> Result<Value> {
    match (a, b) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a * (1.0 - t) + b * t)),
        (Value::Channels(a), Value::Channels(b)) => {
            // zip stops at the shorter sequence, which is the truncation
            // contract.
            let result = a
                .iter()
                .zip(b)
                .map(|(a, b)| a * (1.0 - t) + b * t)
                .collect();
            Ok(Value::Channels(result))
        }
        _ => Err(FlyoverError::ShapeMismatch),
    }
}

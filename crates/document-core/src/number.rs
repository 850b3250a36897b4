//! Sized numbers: one payload type tagged with the width it was stored at.
//!
//! JSON carries no width information, so the width comes from the host type a
//! value was absorbed from (an `i8` field yields [`Width::Int8`]). The payload
//! is kept as `i64` or `f64` and is guaranteed to fit its width.

use crate::error::{Result, SectionError};
use crate::kind::Kind;
use std::fmt;

/// Width and signedness of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// Platform-sized integer (`isize`).
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl Width {
    pub fn kind(self) -> Kind {
        match self {
            Width::Int => Kind::Int,
            Width::Int8 => Kind::Int8,
            Width::Int16 => Kind::Int16,
            Width::Int32 => Kind::Int32,
            Width::Int64 => Kind::Int64,
            Width::Float32 => Kind::Float32,
            Width::Float64 => Kind::Float64,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Width::Float32 | Width::Float64)
    }

    /// Inclusive bounds of an integer width; `None` for floats.
    fn int_bounds(self) -> Option<(i64, i64)> {
        match self {
            Width::Int => Some((isize::MIN as i64, isize::MAX as i64)),
            Width::Int8 => Some((i8::MIN.into(), i8::MAX.into())),
            Width::Int16 => Some((i16::MIN.into(), i16::MAX.into())),
            Width::Int32 => Some((i32::MIN.into(), i32::MAX.into())),
            Width::Int64 => Some((i64::MIN, i64::MAX)),
            Width::Float32 | Width::Float64 => None,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Payload {
    Int(i64),
    Float(f64),
}

/// A number stored at an exact width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    width: Width,
    payload: Payload,
}

impl Number {
    /// Store `value` at an integer width, failing if it does not fit.
    pub fn new_int(width: Width, value: i64) -> Result<Self> {
        let (min, max) = width.int_bounds().ok_or(SectionError::KindMismatch {
            expected: width.kind(),
            found: Kind::Int64,
        })?;
        if value < min || value > max {
            return Err(SectionError::OutOfRange {
                value: value.to_string(),
                width,
            });
        }
        Ok(Self {
            width,
            payload: Payload::Int(value),
        })
    }

    pub fn float32(value: f32) -> Result<Self> {
        if !value.is_finite() {
            return Err(SectionError::NonFinite(value.into()));
        }
        Ok(Self {
            width: Width::Float32,
            payload: Payload::Float(value.into()),
        })
    }

    pub fn float64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(SectionError::NonFinite(value));
        }
        Ok(Self {
            width: Width::Float64,
            payload: Payload::Float(value),
        })
    }

    /// Unsigned values land in `Int64`, the widest signed width. Values above
    /// `i64::MAX` fall back to `Float64`, as serde_json does for oversize
    /// integers.
    pub fn from_u64(value: u64) -> Self {
        Self::from_i128(value.into())
    }

    /// `Int64` when the value fits, otherwise the nearest `Float64`.
    pub fn from_i128(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(v) => v.into(),
            Err(_) => Self::wide(value as f64),
        }
    }

    pub fn from_u128(value: u128) -> Self {
        match i128::try_from(value) {
            Ok(v) => Self::from_i128(v),
            Err(_) => Self::wide(value as f64),
        }
    }

    // Any 128-bit integer converts to a finite f64.
    fn wide(value: f64) -> Self {
        Self {
            width: Width::Float64,
            payload: Payload::Float(value),
        }
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn kind(&self) -> Kind {
        self.width.kind()
    }

    /// Integer payload, or `None` for float widths.
    pub fn as_i64(&self) -> Option<i64> {
        match self.payload {
            Payload::Int(v) => Some(v),
            Payload::Float(_) => None,
        }
    }

    /// The value as an `f64`. `Float32` payloads come back as the shortest
    /// decimal that round-trips to the same `f32`, so `0.1f32` reads as `0.1`.
    pub fn as_f64(&self) -> f64 {
        match (self.width, self.payload) {
            (_, Payload::Int(v)) => v as f64,
            (Width::Float32, Payload::Float(v)) => widen_f32(v as f32),
            (_, Payload::Float(v)) => v,
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number {
                        width: Width::$width,
                        payload: Payload::Int(value as i64),
                    }
                }
            }
        )*
    };
}

impl_from_int! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Int,
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.width, self.payload) {
            (_, Payload::Int(v)) => write!(f, "{v}"),
            (Width::Float32, Payload::Float(v)) => write!(f, "{}", v as f32),
            (_, Payload::Float(v)) => write!(f, "{v}"),
        }
    }
}

/// Widen an `f32` to the shortest `f64` decimal that reads back as the same
/// `f32`. A plain `as` cast would turn `0.1f32` into `0.10000000149011612`.
pub fn widen_f32(value: f32) -> f64 {
    value
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(value))
}

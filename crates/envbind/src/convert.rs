//! String-to-value conversion for leaf fields.
//!
//! Every bindable leaf type implements [`FromEnv`]. The implementation is
//! picked by the compiler from the field's declared type, and each type
//! carries its [`Target`] tag as an associated constant, so the conversion
//! route of a field is fixed when the struct is compiled rather than looked up
//! on every bind.
//!
//! # Supported Types
//!
//! | Target | Rust Types | Syntax |
//! |--------|------------|--------|
//! | signed integers | `i8` - `i64`, `isize` | decimal, optional sign |
//! | unsigned integers | `u8` - `u64` | decimal, no sign |
//! | `usize` | `usize` | decimal, no sign, limited to the `u32` range |
//! | floats | `f32`, `f64` | decimal, exponent, `inf`, `nan` |
//! | `bool` | `bool` | `1 t T TRUE true True 0 f F FALSE false False` |
//! | `String` | `String` | taken verbatim |
//! | duration | [`std::time::Duration`] | see [`crate::duration`] |

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use num_traits::Num;
use thiserror::Error as ThisError;

use crate::duration::parse_duration;
use crate::error::BoxError;

/// The conversion target of a [`FromEnv`] type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Target {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`, parsed within the `u32` range.
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `bool`
    Bool,
    /// `String`
    String,
    /// [`Duration`], parsed from the compact duration syntax.
    Duration,
    /// A user type implementing [`FromEnv`], named for diagnostics.
    Custom(&'static str),
}

impl Target {
    /// Returns the type name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::String => "String",
            Self::Duration => "Duration",
            Self::Custom(name) => name,
        }
    }

    /// Short description of the accepted syntax, used in help text.
    pub(crate) fn syntax_hint(self) -> String {
        match self {
            Self::Bool => "a boolean (true/false, 1/0, t/f)".to_string(),
            Self::Duration => "a duration such as \"300ms\", \"9s\" or \"1h30m\"".to_string(),
            Self::F32 | Self::F64 => format!("a valid {} floating point number", self.name()),
            Self::String | Self::Custom(_) => format!("a valid {}", self.name()),
            _ => format!("a valid {} decimal integer", self.name()),
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conversion from an environment string into a typed field value.
///
/// Implement this for your own types and mark the field with
/// `#[env(var = "...", from_env)]` to bind it through the derive.
///
/// ```rust,ignore
/// struct Level(u8);
///
/// impl envbind::FromEnv for Level {
///     const TARGET: envbind::Target = envbind::Target::Custom("Level");
///
///     fn from_env(raw: &str) -> Result<Self, envbind::BoxError> {
///         Ok(Self(raw.parse()?))
///     }
/// }
/// ```
pub trait FromEnv: Sized {
    /// The conversion target of this type.
    const TARGET: Target;

    /// Converts the raw string.
    ///
    /// # Errors
    ///
    /// Returns the converter's error when `raw` is not valid for this type.
    fn from_env(raw: &str) -> Result<Self, BoxError>;
}

/// A boolean literal outside the accepted set.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid boolean literal {value:?}")]
pub struct ParseBoolError {
    /// The rejected input.
    pub value: String,
}

/// A syntactically valid number that does not fit the target type.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("value {value:?} out of range for {target}")]
pub struct RangeError {
    /// The rejected input.
    pub value: String,

    /// The type it was converted to.
    pub target: Target,
}

/// An unsigned integer written with a sign prefix.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unsigned integer {value:?} must not carry a sign")]
pub struct SignedUnsignedError {
    /// The rejected input.
    pub value: String,

    /// The type it was converted to.
    pub target: Target,
}

/// Parses the boolean literals `1 t T TRUE true True` and `0 f F FALSE false False`.
///
/// # Errors
///
/// Returns [`ParseBoolError`] for anything else, including other casings.
pub fn parse_bool(raw: &str) -> Result<bool, ParseBoolError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError {
            value: raw.to_string(),
        }),
    }
}

/// Generates `FromEnv` for signed integer types via `num_traits::Num`.
macro_rules! impl_from_env_signed {
    ($($t:ty => $target:ident),+ $(,)?) => {
        $(
            impl FromEnv for $t {
                const TARGET: Target = Target::$target;

                fn from_env(raw: &str) -> Result<Self, BoxError> {
                    <$t as Num>::from_str_radix(raw, 10).map_err(Into::into)
                }
            }
        )+
    };
}

impl_from_env_signed! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
}

/// Rejects a leading sign, which `from_str_radix` would accept as `+`.
fn reject_sign(raw: &str, target: Target) -> Result<(), BoxError> {
    if raw.starts_with(['+', '-']) {
        return Err(SignedUnsignedError {
            value: raw.to_string(),
            target,
        }
        .into());
    }

    Ok(())
}

/// Generates `FromEnv` for unsigned integer types via `num_traits::Num`.
macro_rules! impl_from_env_unsigned {
    ($($t:ty => $target:ident),+ $(,)?) => {
        $(
            impl FromEnv for $t {
                const TARGET: Target = Target::$target;

                fn from_env(raw: &str) -> Result<Self, BoxError> {
                    reject_sign(raw, Self::TARGET)?;
                    <$t as Num>::from_str_radix(raw, 10).map_err(Into::into)
                }
            }
        )+
    };
}

impl_from_env_unsigned! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl FromEnv for usize {
    const TARGET: Target = Target::Usize;

    fn from_env(raw: &str) -> Result<Self, BoxError> {
        reject_sign(raw, Self::TARGET)?;
        let value = <u32 as Num>::from_str_radix(raw, 10)?;

        num_traits::cast::<u32, Self>(value).ok_or_else(|| {
            RangeError {
                value: raw.to_string(),
                target: Self::TARGET,
            }
            .into()
        })
    }
}

/// Generates `FromEnv` for float types, rejecting finite literals that
/// overflow to infinity.
macro_rules! impl_from_env_float {
    ($($t:ty => $target:ident),+ $(,)?) => {
        $(
            impl FromEnv for $t {
                const TARGET: Target = Target::$target;

                fn from_env(raw: &str) -> Result<Self, BoxError> {
                    let value: $t = raw.parse()?;

                    if value.is_infinite() && !is_infinity_literal(raw) {
                        return Err(RangeError {
                            value: raw.to_string(),
                            target: Self::TARGET,
                        }
                        .into());
                    }

                    Ok(value)
                }
            }
        )+
    };
}

impl_from_env_float! {
    f32 => F32,
    f64 => F64,
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl FromEnv for bool {
    const TARGET: Target = Target::Bool;

    fn from_env(raw: &str) -> Result<Self, BoxError> {
        parse_bool(raw).map_err(Into::into)
    }
}

impl FromEnv for String {
    const TARGET: Target = Target::String;

    fn from_env(raw: &str) -> Result<Self, BoxError> {
        Ok(raw.to_string())
    }
}

impl FromEnv for Duration {
    const TARGET: Target = Target::Duration;

    fn from_env(raw: &str) -> Result<Self, BoxError> {
        parse_duration(raw).map_err(Into::into)
    }
}

pub use crate::aliases::*;
pub use crate::error::NullableError;
pub use crate::mode::{build_mode, BuildMode};
pub use crate::nullable::Nullable;

#[inline]
pub fn present<T>(value: T) -> Nullable<T> {
    Nullable::present(value)
}

#[inline]
pub fn absent<T>() -> Nullable<T> {
    Default::default()
}

pub fn null<T>() -> Nullable<T> {
    absent()
}

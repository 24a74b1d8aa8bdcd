//! Error types for checked payload access

use thiserror::Error;

/// Errors raised when reading the payload of a [`Nullable`](crate::Nullable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NullableError {
    #[error("accessed Nullable<{type_name}> holding no value")]
    AbsentValueAccess { type_name: &'static str },
}

impl NullableError {
    pub(crate) fn absent<T>() -> Self {
        Self::AbsentValueAccess {
            type_name: std::any::type_name::<T>(),
        }
    }
}

use std::fmt;

use crate::error::NullableError;
use crate::mode::BuildMode;

/// A value that is either present or absent.
///
/// The absent state stores nothing beyond the discriminant, and payloads with
/// a niche (references, `Box`, `NonZero*`) need no discriminant at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    Present(T),
    Absent,
}

impl<T> Nullable<T> {
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }
}

impl<T> std::default::Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Nullable<T> {
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.has_value()
    }

    /// Takes the payload out.
    ///
    /// # Errors
    /// [`NullableError::AbsentValueAccess`] if there is no payload.
    #[inline]
    pub fn value(self) -> Result<T, NullableError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(absent_access::<T>()),
        }
    }

    /// Borrows the payload.
    ///
    /// # Errors
    /// [`NullableError::AbsentValueAccess`] if there is no payload.
    #[inline]
    pub fn value_ref(&self) -> Result<&T, NullableError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(absent_access::<T>()),
        }
    }

    /// Takes the payload out without the `Result` wrapper.
    ///
    /// Under [`BuildMode::Checked`] an absent receiver panics with the
    /// [`NullableError::AbsentValueAccess`] message.
    ///
    /// # Safety
    /// The receiver must be present. Under [`BuildMode::Unchecked`] an absent
    /// receiver is undefined behaviour.
    #[inline]
    #[track_caller]
    pub unsafe fn value_unchecked(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => {
                if BuildMode::ACTIVE.is_checked() {
                    panic!("{}", absent_access::<T>());
                }
                // SAFETY: the caller guarantees the receiver is present.
                unsafe { std::hint::unreachable_unchecked() }
            }
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Nullable::Present(f(value)),
            Self::Absent => Nullable::Absent,
        }
    }

    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Nullable<U>
    where
        F: FnOnce(T) -> Nullable<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Nullable::Absent,
        }
    }

    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Like [`get_or_else`](Self::get_or_else), but only builds the fallback
    /// when it is needed.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Present(value) => Nullable::Present(value),
            Self::Absent => Nullable::Absent,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T: fmt::Display> Nullable<T> {
    /// Renders as `Some(<payload>)` or `None`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

#[cold]
fn absent_access<T>() -> NullableError {
    let err = NullableError::absent::<T>();
    tracing::debug!(target: "nullable", error = %err, "checked access on absent value");
    err
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "Some({value})"),
            Self::Absent => f.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        match value {
            Nullable::Present(value) => Some(value),
            Nullable::Absent => None,
        }
    }
}

impl<T> IntoIterator for Nullable<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Nullable<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

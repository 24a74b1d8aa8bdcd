//! Access policy for [`Nullable::value_unchecked`](crate::Nullable::value_unchecked).
//!
//! Debug builds always check. Release builds skip the check unless the
//! `checked-release` feature is enabled.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// Absent access is reported as [`NullableError::AbsentValueAccess`](crate::NullableError).
    Checked,
    /// Absent access is undefined behaviour.
    Unchecked,
}

impl BuildMode {
    pub const ACTIVE: BuildMode = if cfg!(any(debug_assertions, feature = "checked-release")) {
        BuildMode::Checked
    } else {
        BuildMode::Unchecked
    };

    #[inline]
    pub const fn is_checked(self) -> bool {
        matches!(self, BuildMode::Checked)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Checked => f.write_str("checked"),
            BuildMode::Unchecked => f.write_str("unchecked"),
        }
    }
}

/// The access policy this crate was compiled with.
#[inline]
pub const fn build_mode() -> BuildMode {
    BuildMode::ACTIVE
}

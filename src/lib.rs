//! A present-or-absent container with the same footprint as an `Option`.
//!
//! ```
//! use nullable::prelude::*;
//!
//! let n = present(10).map(|x| x * 2).map(|x| format!("value:{x}"));
//! assert_eq!(n.to_string(), "Some(value:20)");
//! assert_eq!(absent::<i32>().get_or_else(0), 0);
//! ```

pub mod aliases;
pub mod error;
pub mod mode;
pub mod nullable;
pub mod prelude;

pub use error::NullableError;
pub use mode::{build_mode, BuildMode};
pub use nullable::Nullable;

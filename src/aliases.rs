//! Named instantiations for common payload types.

use crate::error::NullableError;
use crate::nullable::Nullable;

pub type NullableInt = Nullable<i32>;
pub type NullableString = Nullable<String>;
pub type NullableDouble = Nullable<f64>;
pub type NullableBool = Nullable<bool>;

macro_rules! named_nullable {
    ($alias:ident, $ty:ty, $create:ident, $create_null:ident, $get:ident) => {
        #[inline]
        pub fn $create(value: $ty) -> $alias {
            Nullable::present(value)
        }

        #[inline]
        pub fn $create_null() -> $alias {
            Nullable::absent()
        }

        #[inline]
        pub fn $get(value: $alias) -> Result<$ty, NullableError> {
            value.value()
        }
    };
}

named_nullable!(NullableInt, i32, create_int, create_null_int, get_int_value);
named_nullable!(NullableString, String, create_string, create_null_string, get_string_value);
named_nullable!(NullableDouble, f64, create_double, create_null_double, get_double_value);
named_nullable!(NullableBool, bool, create_bool, create_null_bool, get_bool_value);

use std::any::{self, Any};
use std::fmt::{self, Debug, Formatter};

use super::map_values;
use crate::collections::contiguous::Array;
use crate::outcome::{self, TypeMismatch};

/// A value whose type is only known at runtime, along with the name of that type.
///
/// This is only meant for boundaries that are dynamically typed by nature. Where the set of types
/// is known, an enum should be matched instead.
pub struct Dynamic {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl Dynamic {
    pub fn new<T: Any>(value: T) -> Dynamic {
        Dynamic {
            value: Box::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    /// Returns the name of the contained type.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true if the contained value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Returns a reference to the contained value if it is a `T`, or a
    /// [`TypeMismatch`](outcome::TypeMismatch) naming both types.
    pub fn downcast_ref<T: Any>(&self) -> outcome::Result<&T> {
        match self.value.downcast_ref::<T>() {
            Some(value) => outcome::Result::ok(value),
            None => outcome::Result::from_error(self.mismatch::<T>()),
        }
    }

    fn mismatch<T>(&self) -> TypeMismatch {
        TypeMismatch {
            from: self.type_name,
            to: any::type_name::<T>(),
        }
    }
}

impl Debug for Dynamic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dynamic({})", self.type_name)
    }
}

/// Moves the contained value out of `value` if it is a `T`, or fails with a
/// [`TypeMismatch`](outcome::TypeMismatch) naming both types.
///
/// # Examples
/// ```
/// # use sx::algorithm::{type_cast, Dynamic};
/// assert_eq!(type_cast::<u32>(Dynamic::new(7_u32)).value(), 7);
///
/// let failed = type_cast::<bool>(Dynamic::new(7_u32));
/// assert_eq!(failed.error().to_string(), "Cannot typecast from 'u32' to 'bool'!");
/// ```
pub fn type_cast<T: Any>(value: Dynamic) -> outcome::Result<T> {
    let mismatch = value.mismatch::<T>();

    match value.value.downcast::<T>() {
        Ok(boxed) => outcome::Result::ok(*boxed),
        Err(_) => outcome::Result::from_error(mismatch),
    }
}

/// Copies every value of `arr` that is a `T` into a new Array, skipping the rest.
pub fn type_cast_array<T: Any + Clone>(arr: &Array<Dynamic>) -> Array<T> {
    map_values(arr.cursor(), |_, value| value.downcast_ref::<T>().map(T::clone).to_optional())
}

use std::fmt::Display;

pub(crate) trait ResultExtension<T, E: Display> {
    /// A method similar to [`Result::unwrap`], except that it panics with the message of the error
    /// itself rather than its [`Debug`](std::fmt::Debug) representation.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Display> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}

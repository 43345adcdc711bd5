use std::any::Any;
use std::panic::{self, UnwindSafe};
use std::process::ExitCode;
use std::result::Result as StdResult;

use super::{Error, Failure, Result};

/// Aborts the current logical operation by panicking with the message of `error`.
///
/// The panic can be recovered into a [`Result`] with [`catch`], or turned into an exit code at
/// the top of a program with [`run`].
///
/// # Panics
/// Always.
pub fn throw(error: impl Into<Error>) -> ! {
    panic!("{}", error.into())
}

/// Calls [`throw`] with an [`Error::Failure`] carrying `message` if `condition` is true.
///
/// # Panics
/// Panics if `condition` is true.
pub fn throw_if(condition: bool, message: &str) {
    if condition {
        throw(Error::failure(message))
    }
}

/// Runs `f`, converting a panic raised inside of it into a failed [`Result`] that carries the
/// panic message.
///
/// This is the scoped boundary for code that [`throw`]s. Panics with a payload other than a
/// string are also caught and reported with a generic message.
///
/// # Examples
/// ```
/// # use sx::outcome::{self, Result};
/// let caught: Result<i32> = outcome::catch(|| {
///     outcome::throw_if(true, "no answer today");
///     42
/// });
/// assert_eq!(caught.error().to_string(), "no answer today");
/// assert_eq!(outcome::catch(|| 42).value(), 42);
/// ```
pub fn catch<T, F: FnOnce() -> T + UnwindSafe>(f: F) -> Result<T> {
    match panic::catch_unwind(f) {
        Ok(value) => Result::ok(value),
        Err(payload) => {
            let failure = Failure::new(panic_message(payload.as_ref()));
            log::debug!("Caught fault: {failure}");
            Result::from_error(failure)
        },
    }
}

/// The top level boundary of a program. Runs `f`, reporting any error it returns (or any panic
/// that escapes it) and converting the outcome into an [`ExitCode`].
///
/// Errors are written to the `log` facade at error level and to stderr, so that they are visible
/// whether or not a logger has been installed.
pub fn run<F>(f: F) -> ExitCode
where
    F: FnOnce() -> StdResult<(), Error> + UnwindSafe,
{
    match catch(f).try_value() {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(error)) | Err(error) => {
            log::error!("{error}");
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_owned()
    } else {
        "Unknown fault!".to_owned()
    }
}

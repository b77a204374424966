//! Fatal-error reporting to the driver's caller.
//!
//! These errors carry no source span to render, so reporting is a
//! plain `path: message` line to stderr instead of a rendered source
//! excerpt.

use crate::driver::CompileErrorWithContext;

/// Prints one compile error to stderr as `path: message`.
pub(crate) fn report_error(error: &CompileErrorWithContext) {
    eprintln!("{}: {}", error.path().display(), error.error());
}

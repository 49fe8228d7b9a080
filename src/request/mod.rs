//! Validation of the command-line argument and derivation of the target.
//!
//! An [`InvocationRequest`] is only constructed once both preconditions hold:
//! exactly one argument was supplied, and it carries the scheme prefix.
//! Resolving the request against a working directory yields a
//! [`ShowTarget`] with every value the launcher needs.

use std::convert::Infallible;

use camino::{Utf8Path, Utf8PathBuf};
use shell_escape::unix::escape;
use thiserror::Error;

use crate::path::{resolve_directory, split};
use crate::uri::{SCHEME_PREFIX, decode_argument, has_scheme};

/// Reasons an invocation is rejected before any side effect takes place.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RequestError {
    /// Raised when the handler is not given exactly one argument.
    #[error("expected exactly one argument, got {count}")]
    ArgumentCount {
        /// Number of user-supplied arguments.
        count: usize,
    },
    /// Raised when the argument does not begin with the scheme prefix.
    #[error("argument does not start with {prefix}: {argument}", prefix = SCHEME_PREFIX)]
    MissingScheme {
        /// Argument as received.
        argument: String,
    },
}

/// A validated `aperi-show-items://` argument.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvocationRequest {
    raw_argument: String,
}

impl InvocationRequest {
    /// Validates user-supplied arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::ArgumentCount`] unless exactly one argument is
    /// present, or [`RequestError::MissingScheme`] when it lacks the prefix.
    pub fn from_args(args: &[String]) -> Result<Self, RequestError> {
        let argument = check_argument_count(args)?;
        check_scheme(argument)?;
        Ok(Self {
            raw_argument: argument.clone(),
        })
    }

    /// Returns the argument exactly as received.
    #[must_use]
    pub fn raw_argument(&self) -> &str {
        &self.raw_argument
    }

    /// Returns the percent-decoded path carried by the URI.
    #[must_use]
    pub fn decoded_path(&self) -> String {
        decode_argument(&self.raw_argument)
    }

    /// Derives the directory, base name, and quoted base name against `cwd`.
    #[must_use]
    pub fn resolve(&self, cwd: &Utf8Path) -> ShowTarget {
        match self.resolve_with(|| Ok::<_, Infallible>(cwd.to_owned())) {
            Ok(target) => target,
            Err(never) => match never {},
        }
    }

    /// Derives the target, calling `cwd` only when the decoded path is
    /// relative.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `cwd` when it is needed and fails.
    pub fn resolve_with<F, E>(&self, cwd: F) -> Result<ShowTarget, E>
    where
        F: FnOnce() -> Result<Utf8PathBuf, E>,
    {
        let decoded_path = self.decoded_path();
        let (head, tail) = split(&decoded_path);
        let directory = resolve_directory(head, cwd)?;
        let file_name = tail.to_owned();
        let quoted_file_name = escape(file_name.as_str().into()).into_owned();

        Ok(ShowTarget {
            directory,
            file_name,
            quoted_file_name,
            decoded_path,
        })
    }
}

/// Returns the single argument, or an error naming how many were supplied.
///
/// # Errors
///
/// Returns [`RequestError::ArgumentCount`] when `args` does not hold exactly
/// one element.
pub fn check_argument_count(args: &[String]) -> Result<&String, RequestError> {
    match args {
        [argument] => Ok(argument),
        _ => Err(RequestError::ArgumentCount { count: args.len() }),
    }
}

/// Ensures `argument` begins with [`SCHEME_PREFIX`].
///
/// # Errors
///
/// Returns [`RequestError::MissingScheme`] when the prefix is absent.
pub fn check_scheme(argument: &str) -> Result<(), RequestError> {
    if has_scheme(argument) {
        Ok(())
    } else {
        Err(RequestError::MissingScheme {
            argument: argument.to_owned(),
        })
    }
}

/// File selected by a request, resolved against a working directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShowTarget {
    /// Percent-decoded path carried by the URI.
    pub decoded_path: String,
    /// Absolute, lexically normalised parent directory.
    pub directory: Utf8PathBuf,
    /// Final path segment of the decoded path.
    pub file_name: String,
    /// File name escaped as a single POSIX shell word.
    pub quoted_file_name: String,
}

//! Lexical path helpers for deriving the directory and base name.
//!
//! The helpers operate on strings and never touch the filesystem: symlinks
//! are not resolved and the decoded path does not need to exist.

use std::convert::Infallible;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Splits `path` into a directory head and a base name at the last `/`.
///
/// Trailing separators are removed from the head unless it consists solely
/// of separators. A path ending in `/` has an empty base name and a path
/// without any separator has an empty head.
///
/// # Examples
///
/// ```
/// use aperi_show_items::path::split;
///
/// assert_eq!(split("/tmp/example file.txt"), ("/tmp", "example file.txt"));
/// assert_eq!(split("name.txt"), ("", "name.txt"));
/// assert_eq!(split("/srv/data/"), ("/srv/data", ""));
/// ```
#[must_use]
pub fn split(path: &str) -> (&str, &str) {
    let index = path.rfind('/').map_or(0, |found| found + 1);
    let (head, tail) = path.split_at(index);
    let trimmed = head.trim_end_matches('/');
    if trimmed.is_empty() {
        (head, tail)
    } else {
        (trimmed, tail)
    }
}

/// Resolves `head` against `cwd` and normalises the result lexically.
///
/// An empty head resolves to `cwd` itself.
#[must_use]
pub fn absolute_directory(head: &str, cwd: &Utf8Path) -> Utf8PathBuf {
    match resolve_directory(head, || Ok::<_, Infallible>(cwd.to_owned())) {
        Ok(directory) => directory,
        Err(never) => match never {},
    }
}

/// Like [`absolute_directory`], but only asks for the working directory when
/// `head` is relative.
///
/// # Errors
///
/// Returns whatever `cwd` returns when it is called and fails.
pub fn resolve_directory<F, E>(head: &str, cwd: F) -> Result<Utf8PathBuf, E>
where
    F: FnOnce() -> Result<Utf8PathBuf, E>,
{
    let candidate = Utf8Path::new(head);
    if candidate.is_absolute() {
        return Ok(normalise(candidate));
    }
    Ok(normalise(&cwd()?.join(head)))
}

/// Collapses `.`, `..` and repeated separators without consulting the
/// filesystem. `..` at the root stays at the root.
#[must_use]
pub fn normalise(path: &Utf8Path) -> Utf8PathBuf {
    let mut normalised = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => {
                normalised.push(component.as_str());
            }
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                if normalised.file_name().is_some() {
                    normalised.pop();
                } else if !normalised.has_root() {
                    normalised.push("..");
                }
            }
            Utf8Component::Normal(segment) => normalised.push(segment),
        }
    }

    if normalised.as_str().is_empty() {
        normalised.push(".");
    }
    normalised
}

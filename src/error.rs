use std::{io, path::{Path, PathBuf}};

use displaydoc::Display;

/// Errors that can occur while converting between images and mem files.
#[derive(Debug, Display)]
pub enum Error {
  /// I/O error on {path:?}: {source}
  Io { path: PathBuf, source: io::Error },
  /// Image error on {path:?}: {source}
  Image { path: PathBuf, source: image::ImageError },
  /// Line {line}: `{text}` is not a 3-digit hex word.
  BadWord { line: usize, text: String },
  /// Expected {expected} lines in the mem file but found {found}.
  LineCount { expected: usize, found: usize },
  /// Width and height must both be non-zero.
  ZeroDimensions,
  /// {width}x{height} is too large for a mem file.
  TooLarge { width: u32, height: u32 },
}

impl Error {
  pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
    move |source| Error::Io { path: path.to_owned(), source }
  }

  pub(crate) fn image(path: &Path) -> impl FnOnce(image::ImageError) -> Self + '_ {
    move |source| Error::Image { path: path.to_owned(), source }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Io { source, .. } => Some(source),
      Error::Image { source, .. } => Some(source),
      _ => None,
    }
  }
}

/// Result of every fallible conversion step.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use std::error::Error as _;

  use super::*;

  #[test]
  fn io_source_is_chained() {
    let err = Error::io(Path::new("sprite.mem"))(io::Error::from(io::ErrorKind::NotFound));

    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("I/O error on \"sprite.mem\""));
  }

  #[test]
  fn messages() {
    assert!(Error::ZeroDimensions.source().is_none());
    assert_eq!(
      Error::TooLarge { width: 9000, height: 9000 }.to_string(),
      "9000x9000 is too large for a mem file.",
    );
  }
}

//! .
//!
//! All failure conditions of the core are deterministic functions of the input, so there is
//! nothing to retry: an [`Error`] is returned up to the caller, which decides whether to abort
//! or, on [`ErrorKind::ResourceExhaustion`], fall back to [`Strategy::Streaming`].
//!
//! [`Strategy::Streaming`]: crate::compositor::Strategy::Streaming

use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub struct Error(pub ErrorKind);

#[derive(Debug)]
pub enum ErrorKind {
  /// Rejected before any computation started.
  InvalidInput(String),
  /// An output pixel belongs to a region that accumulated no pixels.
  DegenerateRegion { label: usize },
  /// A working buffer (bulk distance table, sampling grid) needs `required` bytes.
  ResourceExhaustion { required: usize, budget: usize },
  #[cfg(feature = "image")]
  ImageError(image::ImageError),
}

impl Error {
  pub fn kind(&self) -> &ErrorKind {
    &self.0
  }

  pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
    ErrorKind::InvalidInput(msg.into()).into()
  }
}

fn human(bytes: usize) -> String {
  use humansize::{FileSize, file_size_opts as options};
  bytes.file_size(options::BINARY).unwrap_or_else(|e| e)
}

impl Display for ErrorKind {
  fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
    use ErrorKind::*;
    match self {
      InvalidInput(msg) => write!(fmt, "invalid input: {}", msg),
      DegenerateRegion { label } =>
        write!(fmt, "region {} has no pixels assigned to it", label),
      ResourceExhaustion { required, budget } => write!(fmt,
        "working memory of {} required, {} available",
        human(*required), human(*budget)
      ),
      #[cfg(feature = "image")]
      ImageError(err) => Display::fmt(err, fmt),
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    Display::fmt(&self.0, f)
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.0 {
      #[cfg(feature = "image")]
      ErrorKind::ImageError(err) => Some(err),
      _ => None
    }
  }
}

impl From<ErrorKind> for Error {
  fn from(e: ErrorKind) -> Self {
    Error(e)
  }
}

impl From<Error> for ErrorKind {
  fn from(e: Error) -> Self {
    e.0
  }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    ErrorKind::ImageError(e).into()
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = ::std::result::Result<T, Error>;

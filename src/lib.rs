pub mod consts;
pub mod decode;
pub mod encode;
pub mod pixel;

mod error;

pub use decode::{decode_file, decode_words, parse_mem, save_image, DecodeOptions, LineCountPolicy};
pub use encode::{encode_file, encode_image, write_mem, EncodeOptions};
pub use error::{Error, Result};

use consts::{HEIGHT, MAX_PIXELS, WIDTH};

/// Image size agreed on by both sides; mem files carry no header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
  pub width: u32,
  pub height: u32,
}

impl Dimensions {
  pub fn new(width: u32, height: u32) -> Self {
    Dimensions { width, height }
  }

  /// Number of words, and so lines, in a matching mem file. `None` if it
  /// does not fit in `usize`.
  pub fn pixels(&self) -> Option<usize> {
    (self.width as usize).checked_mul(self.height as usize)
  }

  /// Rejects sizes no RGB buffer can be allocated for, returns the pixel count.
  pub(crate) fn check(self) -> Result<usize> {
    let Dimensions { width, height } = self;

    if width == 0 || height == 0 {
      return Err(Error::ZeroDimensions);
    }

    self
      .pixels()
      .filter(|&pixels| pixels <= MAX_PIXELS && pixels.checked_mul(3).is_some())
      .ok_or(Error::TooLarge { width, height })
  }
}

impl Default for Dimensions {
  fn default() -> Self {
    Dimensions::new(WIDTH, HEIGHT)
  }
}

impl From<(u32, u32)> for Dimensions {
  fn from((width, height): (u32, u32)) -> Self {
    Dimensions::new(width, height)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pixel_count() {
    assert_eq!(Dimensions::default().pixels(), Some(64 * 48));
    assert_eq!(Dimensions::default().check().unwrap(), 3072);
  }

  #[test]
  fn rejects_zero() {
    assert!(matches!(Dimensions::new(0, 48).check(), Err(Error::ZeroDimensions)));
    assert!(matches!(Dimensions::new(64, 0).check(), Err(Error::ZeroDimensions)));
  }

  #[test]
  fn rejects_oversized() {
    let err = Dimensions::new(u32::MAX, u32::MAX).check().unwrap_err();
    assert!(matches!(err, Error::TooLarge { width: u32::MAX, height: u32::MAX }));

    assert!(matches!(Dimensions::new(1 << 13, 1 << 12).check(), Ok(MAX_PIXELS)));
    assert!(matches!(
      Dimensions::new((1 << 13) + 1, 1 << 12).check(),
      Err(Error::TooLarge { .. }),
    ));
  }
}

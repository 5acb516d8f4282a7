use std::path::Path;

use image::{Rgb, RgbImage};

use crate::{
  pixel::{hex_to_word, unpack, Word},
  Dimensions, Error, Result,
};

/// What to do when the mem file does not hold exactly width × height lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCountPolicy {
  /// Ignore extra lines and leave missing pixels black.
  #[default]
  Lenient,
  /// Fail with [`Error::LineCount`].
  Strict,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
  pub dimensions: Dimensions,
  pub policy: LineCountPolicy,
}

/// Parses every line of a mem file. Trailing blank lines are ignored, any
/// other line must be a 3-digit hex word.
pub fn parse_mem(text: &str) -> Result<Vec<Word>> {
  text
    .trim_end()
    .lines()
    .enumerate()
    .map(|(idx, line)| {
      hex_to_word(line).ok_or_else(|| Error::BadWord {
        line: idx + 1,
        text: line.trim().to_owned(),
      })
    })
    .collect()
}

/// Lays the words out row-major from the top-left corner.
pub fn decode_words(words: &[Word], opts: &DecodeOptions) -> Result<RgbImage> {
  let expected = opts.dimensions.check()?;
  let Dimensions { width, height } = opts.dimensions;
  let found = words.len();

  if found != expected {
    match opts.policy {
      LineCountPolicy::Strict => return Err(Error::LineCount { expected, found }),
      LineCountPolicy::Lenient => tracing::warn!(
        expected,
        found,
        "Line count mismatch, extra lines dropped and missing pixels left black",
      ),
    }
  }

  let mut img = RgbImage::new(width, height);

  for (pixel, &word) in img.pixels_mut().zip(words) {
    *pixel = Rgb(unpack(word));
  }

  Ok(img)
}

#[tracing::instrument(name = "decode", skip_all, fields(input = %input.display()))]
pub fn decode_file(input: &Path, opts: &DecodeOptions) -> Result<RgbImage> {
  let text = std::fs::read_to_string(input).map_err(Error::io(input))?;
  let words = parse_mem(&text)?;
  let img = decode_words(&words, opts)?;

  tracing::info!(
    width = img.width(),
    height = img.height(),
    lines = words.len(),
    "Mem file decoded.",
  );

  Ok(img)
}

/// Saves the image, the format is picked from the file extension.
pub fn save_image(img: &RgbImage, output: &Path) -> Result<()> {
  img.save(output).map_err(Error::image(output))?;

  tracing::info!(output = %output.display(), "Image saved.");

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn opts(width: u32, height: u32, policy: LineCountPolicy) -> DecodeOptions {
    DecodeOptions {
      dimensions: Dimensions::new(width, height),
      policy,
    }
  }

  #[test]
  fn parse_accepts_crlf_and_trailing_newlines() {
    assert_eq!(parse_mem("f80\r\n000\r\nFFF\n\n").unwrap(), vec![0xf80, 0x000, 0xfff]);
    assert_eq!(parse_mem("").unwrap(), vec![]);
  }

  #[test]
  fn parse_reports_offending_line() {
    let err = parse_mem("000\n0g0\n000\n").unwrap_err();
    assert!(matches!(err, Error::BadWord { line: 2, ref text } if text == "0g0"));

    let err = parse_mem("000\nf\n").unwrap_err();
    assert!(matches!(err, Error::BadWord { line: 2, .. }));

    let err = parse_mem("000\n\n000\n").unwrap_err();
    assert!(matches!(err, Error::BadWord { line: 2, .. }));
  }

  #[test]
  fn decode_places_pixels_row_major() {
    let img = decode_words(
      &[0xf00, 0x0f0, 0x00f, 0xf80],
      &opts(2, 2, LineCountPolicy::Strict),
    ).unwrap();

    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0]);
    assert_eq!(img.get_pixel(0, 1).0, [0, 0, 255]);
    assert_eq!(img.get_pixel(1, 1).0, [255, 136, 0]);
  }

  #[test]
  fn lenient_fills_missing_with_black() {
    let img = decode_words(&[0xfff], &opts(2, 2, LineCountPolicy::Lenient)).unwrap();

    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0]);
    assert_eq!(img.get_pixel(1, 1).0, [0, 0, 0]);
  }

  #[test]
  fn lenient_drops_extra_lines() {
    let img = decode_words(&[0xfff, 0x000, 0xf80], &opts(2, 1, LineCountPolicy::Lenient)).unwrap();

    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0]);
  }

  #[test]
  fn strict_rejects_mismatch() {
    let err = decode_words(&[0xfff], &opts(2, 2, LineCountPolicy::Strict)).unwrap_err();
    assert!(matches!(err, Error::LineCount { expected: 4, found: 1 }));

    let err = decode_words(&[0; 5], &opts(2, 2, LineCountPolicy::Strict)).unwrap_err();
    assert!(matches!(err, Error::LineCount { expected: 4, found: 5 }));
  }

  #[test]
  fn zero_dimensions_rejected() {
    let err = decode_words(&[], &opts(0, 0, LineCountPolicy::Lenient)).unwrap_err();
    assert!(matches!(err, Error::ZeroDimensions));
  }

  #[test]
  fn oversized_dimensions_rejected() {
    let err = decode_words(&[0xfff], &opts(u32::MAX, u32::MAX, LineCountPolicy::Lenient)).unwrap_err();
    assert!(matches!(err, Error::TooLarge { width: u32::MAX, height: u32::MAX }));
  }
}

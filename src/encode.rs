use std::{
  fs::File,
  io::{self, BufWriter, Write},
  path::Path,
};

use image::{imageops::{self, FilterType}, DynamicImage, RgbImage};

use crate::{
  pixel::{pack, word_to_hex, Word},
  Dimensions, Error, Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
  pub dimensions: Dimensions,
  /// Resize to `dimensions` with nearest-neighbour sampling. When unset the
  /// source size is kept and `dimensions` is ignored.
  pub resize: bool,
}

impl Default for EncodeOptions {
  fn default() -> Self {
    EncodeOptions {
      dimensions: Dimensions::default(),
      resize: true,
    }
  }
}

/// Flattens to RGB (alpha is dropped) and applies the resize step.
pub fn prepare(img: DynamicImage, opts: &EncodeOptions) -> Result<RgbImage> {
  let rgb = img.to_rgb8();

  if !opts.resize {
    return Ok(rgb);
  }

  opts.dimensions.check()?;
  let Dimensions { width, height } = opts.dimensions;

  if rgb.dimensions() == (width, height) {
    return Ok(rgb);
  }

  tracing::debug!(
    from = ?rgb.dimensions(),
    to = ?(width, height),
    "Resizing (nearest)",
  );

  Ok(imageops::resize(&rgb, width, height, FilterType::Nearest))
}

/// Packs every pixel, row-major from the top-left corner.
pub fn encode_image(img: &RgbImage) -> Vec<Word> {
  img.pixels().map(|pixel| pack(pixel.0)).collect()
}

pub fn write_mem<W: Write>(words: &[Word], mut out: W) -> io::Result<()> {
  for &word in words {
    writeln!(out, "{}", word_to_hex(word))?;
  }

  out.flush()
}

/// Encodes the image at `input` into a mem file at `output`, overwriting it.
/// Returns the dimensions of the encoded image.
#[tracing::instrument(name = "encode", skip_all, fields(input = %input.display()))]
pub fn encode_file(input: &Path, output: &Path, opts: &EncodeOptions) -> Result<Dimensions> {
  if opts.resize {
    opts.dimensions.check()?;
  }

  let img = image::open(input).map_err(Error::image(input))?;
  let img = prepare(img, opts)?;
  let words = encode_image(&img);

  let file = File::create(output).map_err(Error::io(output))?;
  write_mem(&words, BufWriter::new(file)).map_err(Error::io(output))?;

  let (width, height) = img.dimensions();

  tracing::info!(
    width,
    height,
    lines = words.len(),
    output = %output.display(),
    "Mem file written.",
  );

  Ok(Dimensions::new(width, height))
}

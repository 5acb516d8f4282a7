use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::Level;

use memimg::{
  consts::{HEIGHT, MEM_FILE, WIDTH},
  encode_file, Dimensions, EncodeOptions,
};

#[derive(Parser)]
#[command(name = "img2mem")]
#[command(about = "Convert an image into a 12-bit hex mem file for $readmemh.")]
#[command(version, long_about = None)]
struct Args {
  /// Source image
  input: PathBuf,

  #[arg(short, long, default_value = MEM_FILE)]
  output: PathBuf,

  #[arg(long, default_value_t = WIDTH)]
  width: u32,

  #[arg(long, default_value_t = HEIGHT)]
  height: u32,

  /// Keep the source size instead of resizing to width x height
  #[arg(long)]
  no_resize: bool,

  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let args = Args::parse();

  tracing_subscriber::fmt()
    .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
    .init();

  let opts = EncodeOptions {
    dimensions: Dimensions::new(args.width, args.height),
    resize: !args.no_resize,
  };

  match encode_file(&args.input, &args.output, &opts) {
    Ok(_) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::error!("{err}");
      ExitCode::FAILURE
    }
  }
}

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::Level;

use memimg::{
  consts::{HEIGHT, IMAGE_FILE, WIDTH},
  decode_file, save_image, DecodeOptions, Dimensions, LineCountPolicy, Result,
};

#[derive(Parser)]
#[command(name = "mem2img")]
#[command(about = "Rebuild an image from a 12-bit hex mem file.")]
#[command(version, long_about = None)]
struct Args {
  /// Source mem file
  input: PathBuf,

  #[arg(short, long, default_value = IMAGE_FILE)]
  output: PathBuf,

  #[arg(long, default_value_t = WIDTH)]
  width: u32,

  #[arg(long, default_value_t = HEIGHT)]
  height: u32,

  /// Fail unless the file has exactly width x height lines
  #[arg(long)]
  strict: bool,

  /// Open the saved image in the system viewer
  #[arg(long)]
  show: bool,

  #[arg(short, long)]
  verbose: bool,
}

fn run(args: &Args) -> Result<()> {
  let opts = DecodeOptions {
    dimensions: Dimensions::new(args.width, args.height),
    policy: if args.strict { LineCountPolicy::Strict } else { LineCountPolicy::Lenient },
  };

  let img = decode_file(&args.input, &opts)?;
  save_image(&img, &args.output)?;

  if args.show {
    if let Err(err) = opener::open(&args.output) {
      tracing::warn!(output = %args.output.display(), "Could not open viewer: {err}");
    }
  }

  Ok(())
}

fn main() -> ExitCode {
  let args = Args::parse();

  tracing_subscriber::fmt()
    .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
    .init();

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::error!("{err}");
      ExitCode::FAILURE
    }
  }
}

//! ddsgen CLI - Command-line interface
//!
//! Converts a picture into a DDS texture, optionally split into tiles.

mod error;
mod runner;

use std::env;

use ddsgen::config::resolve;
use ddsgen::image::SourceImage;
use ddsgen::params::{parse_args, validate, Invocation, ParameterMap};
use error::CliError;
use runner::CliRunner;
use tracing::info;

const USAGE: &str = "Usage: [options] [input] [output]\n-h for help";

const HELP: &str = "\
ddsgen : Generates DDS file from various picture format.
Parameters:
  -h : help
  -i <file> : input file
  -o <file> : output file (optional)
  -p <format> : pixel format (RGB, RGBA, BGR, BGRA, GREY) (default : RGB/RGBA/GREY)
  -f <format> : dds format (DXT1/DXT3/DXT5/(argb)4444/1555/8888/(rgb)565/888/555)
  -m <bool> : use mipmap (true/false)
  -n <number> : max number of mipmaps to generate (default : 0 (0 means all mipmaps))
  -s <number-number> : splits the picture into n*m dds files (if possible) called <col>_<row>_<output file>
  -t <layout> : tile layout (exact, shared) (default : exact)";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    // Usage and help never touch the log file
    let parsed = match parse_args(args.iter().cloned()) {
        Ok(Invocation::Usage) => {
            println!("{}", USAGE);
            return;
        }
        Ok(Invocation::Help) => {
            println!("{}", HELP);
            return;
        }
        Ok(Invocation::Convert(map)) => Ok(map),
        Err(e) => Err(CliError::from(e)),
    };

    let runner = CliRunner::new().unwrap_or_else(|e| e.exit());
    runner.log_startup(&args);

    if let Err(e) = parsed.and_then(|map| run(&runner, &map)) {
        e.exit();
    }
}

fn run(runner: &CliRunner, map: &ParameterMap) -> Result<(), CliError> {
    let params = validate(map)?;
    info!(
        input = %params.input.display(),
        output = %params.output.display(),
        "Parameters validated"
    );

    let source = SourceImage::open(&params.input)?;
    let plan = resolve(&params, &source.info())?;

    match &plan.tiles {
        None => runner.convert_untiled(&source, &plan.config, &params.output),
        Some(tiles) => runner.convert_tiled(&source, &plan.config, tiles, &params.output),
    }
}

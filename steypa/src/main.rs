//! Command-line front end: cast one font file into firmware tables.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use steypa::{cast_font, font_identifier, Artifacts, CastError, FontdueInstance, DEFAULT_CHARSET};

#[derive(Parser, Debug)]
#[command(version, about = "Casts a scalable font into embeddable bitmap-font tables")]
struct Args {
    /// Font file to cast (ttf/otf)
    font: PathBuf,
    /// Pixel size to rasterize at
    size: u32,
    /// UTF-8 file listing the characters to cast; printable ASCII when
    /// omitted
    charset: Option<PathBuf>,
    /// Directory receiving the generated .c/.h/.png files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(artifacts) => println!("done: {}", artifacts.font_name),
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    }
}

fn run(args: &Args) -> Result<Artifacts, CastError> {
    let charset_text = match &args.charset {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|source| CastError::CharsetFile {
                path: path.clone(),
                source,
            })?
        }
        None => DEFAULT_CHARSET.to_owned(),
    };
    let font = FontdueInstance::from_file(&args.font, args.size)?;
    let name = font_identifier(&args.font, args.size);
    let artifacts = cast_font(&name, args.size, &charset_text, &font)?;
    artifacts.write(&args.out_dir)?;
    Ok(artifacts)
}

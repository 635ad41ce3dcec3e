//! This is the command line tool that loads an input file and either packs a
//! raw 8-bit grayscale dump into a barch container or unpacks one.

extern crate clap;
extern crate env_logger;
extern crate log;

use barch::utils::signatures::{match_signature, BARCH_SIG, FILE_EXTENSION};
use barch::{decode_image, deserialize, encode_image, serialize, RasterImage};
use clap::{Arg, ArgAction, Command};

use std::process::ExitCode;
use std::{fs, time::Instant};
use std::{fs::File, io::Write};

fn save_file(data: &[u8], path: &str) -> std::io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(data)?;
    log::info!("Wrote {}.", &path);
    Ok(())
}

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Operation completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

/// Wrap a raw sample dump into a raster of rows of 'width' samples.
fn load_raster(input: Vec<u8>, width: u32) -> Result<RasterImage, String> {
    if width == 0 {
        return Err(String::from("The width must be positive"));
    }
    if input.len() % width as usize != 0 {
        return Err(format!(
            "{} samples don't split into rows of {}",
            input.len(),
            width
        ));
    }
    let height = u32::try_from(input.len() / width as usize)
        .map_err(|_| String::from("Too many rows"))?;
    RasterImage::new(width, height, input).map_err(|err| err.to_string())
}

fn handle_buffers(
    is_compress: bool,
    width: Option<u32>,
    input: Vec<u8>,
) -> Result<Vec<u8>, String> {
    if is_compress {
        let width = width.ok_or("Compression needs the row width (--width)")?;
        let raster = load_raster(input, width)?;
        log::info!(
            "Compressing a {}x{} image",
            raster.width(),
            raster.height()
        );
        let barch = encode_image(&raster).map_err(|err| err.to_string())?;
        log::info!(
            "Packed {} of {} rows",
            barch.compressed_rows(),
            barch.height()
        );
        return Ok(serialize(&barch));
    }

    if !match_signature(&input, &BARCH_SIG) {
        return Err(String::from("The input is not a barch file"));
    }
    log::info!("Decompressing a barch image");
    let barch = deserialize(&input).map_err(|err| err.to_string())?;
    let raster = decode_image(&barch).map_err(|err| err.to_string())?;
    Ok(raster.into_data())
}

fn main() -> ExitCode {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("checked")
                .long("check")
                .help("Verify that the compressed output decodes back")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("decompress")
                .short('d')
                .long("decompress")
                .help("Try to decompress the input")
                .action(ArgAction::SetTrue)
                .conflicts_with("compress"),
        )
        .arg(
            Arg::new("compress")
                .short('c')
                .long("compress")
                .help("Compress the input")
                .conflicts_with("decompress")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path of the output file")
                .num_args(1),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("PIXELS")
                .help("The number of samples in each row of the raw input")
                .value_parser(clap::value_parser!(u32))
                .num_args(1),
        )
        .arg(
            Arg::new("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let mut cli_compress = matches.get_flag("compress");
    let cli_decompress = matches.get_flag("decompress");
    let cli_checked_mode = matches.get_flag("checked");
    let cli_width = matches.get_one::<u32>("width").copied();
    let mut cli_output_path = matches.get_one::<String>("output").cloned();

    let Some(input_path) = matches.get_one::<String>("INPUT") else {
        log::error!("No input file");
        return ExitCode::FAILURE;
    };
    let input = match fs::read(input_path) {
        Ok(input) => input,
        Err(err) => {
            log::error!("Can't open the input file {}: {}", input_path, err);
            return ExitCode::FAILURE;
        }
    };

    // The user did not specify if this is compress of decompress. Try to figure
    // out using the extension.
    let ends_with_ext = input_path.ends_with(FILE_EXTENSION);
    if !cli_compress && !cli_decompress && !ends_with_ext {
        cli_compress = true;
    }

    // Come up with a file name.
    if cli_output_path.is_none() {
        if ends_with_ext {
            // remove the extension.
            let end = input_path.len() - FILE_EXTENSION.len();
            cli_output_path = Some(String::from(&input_path[0..end]));
        } else {
            // Add the extension.
            cli_output_path = Some(input_path.clone() + FILE_EXTENSION);
        }
    }

    let out = cli_output_path.unwrap_or_default();
    let from = input.len();
    let timer = Timer::new();

    let dest = match handle_buffers(cli_compress, cli_width, input.clone()) {
        Ok(dest) => dest,
        Err(err) => {
            if cli_compress {
                log::error!("Compression failed: {}", err);
            } else {
                log::error!("Decompression failed: {}", err);
            }
            return ExitCode::FAILURE;
        }
    };

    if cli_compress {
        log::info!("Compressed from {} to {} bytes.", from, dest.len());
        log::info!(
            "Compression ratio is {:.4}x.",
            from as f64 / dest.len() as f64
        );
    } else {
        log::info!("Decompressed from {} to {} bytes.", from, dest.len());
    }

    if let Err(err) = save_file(&dest, &out) {
        log::error!("Unable to write {}: {}", out, err);
        return ExitCode::FAILURE;
    }

    if cli_compress && cli_checked_mode {
        match handle_buffers(false, None, dest) {
            Ok(decoded) if decoded == input => log::info!("Correct!"),
            Ok(_) => {
                log::error!("Incorrect!");
                return ExitCode::FAILURE;
            }
            Err(err) => {
                log::error!("Could not decompress the file: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    drop(timer);
    ExitCode::SUCCESS
}

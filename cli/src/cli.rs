use clap::Parser;
use pixel_sorter_lib::DEFAULT_OUTPUT_NAME;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Image Pixel Sorter - sort the pixels of an image by color intensity and HSV value."
)]
pub struct Cli {
    /// Path to the input image (PNG, JPEG or BMP).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory to write the sorted image into.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// File name of the sorted image. Always written as PNG.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT_NAME)]
    pub name: String,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

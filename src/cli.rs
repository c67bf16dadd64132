use crate::formats::ImageFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "storage-estimator",
    about = "Estimate the storage footprint of an image catalog",
    long_about = "storage-estimator keeps a catalog of images and image stacks and estimates how much \
                  storage they need. BMP and JPEG are stored as resolution pyramids, JPEG2000 uses a \
                  logarithmic model, and grouping images into a stack applies an extra compression discount.",
    version = "0.1.0",
    after_help = "COMMANDS READ FROM INPUT:\n  \
    <format> <width> <height>   add an image (BMP, J/JPEG, JP2/JPEG2000)\n  \
    G <id>, <id>, ...           group images into a new stack\n  \
    Q                           finish input and print the report\n\n\
    EXAMPLES:\n  \
    storage-estimator interactive\n  \
    storage-estimator run catalog.txt\n  \
    storage-estimator size jpeg 4000 3000"
)]
pub struct Args {
    #[arg(short = 'q', long, global = true, help = "Only print the report")]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Log every catalog change",
        long_help = "Log added images, built and dissolved stacks, and rejected lines to stderr."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Enter images and stacks line by line",
        long_about = "Read commands from standard input until Q or end of input, \
                      then print the catalog report. Invalid lines are reported and skipped."
    )]
    Interactive {
        #[arg(long, help = "Do not print the input prompt")]
        no_prompt: bool,
    },

    #[command(
        about = "Run a file of commands and print the report",
        long_about = "Execute every line of a command script as if typed interactively. \
                      Blank lines and lines starting with '#' are ignored."
    )]
    Run {
        #[arg(help = "Command script path")]
        script: PathBuf,
    },

    #[command(
        about = "Estimate the size of a single image",
        long_about = "Print the estimated storage size of one image without building a catalog."
    )]
    Size {
        #[arg(help = format!("Image format: {}", ImageFormat::format_names().join(", ")))]
        format: String,

        #[arg(help = "Width in pixels", allow_hyphen_values = true)]
        width: String,

        #[arg(help = "Height in pixels", allow_hyphen_values = true)]
        height: String,
    },
}

//! Command-line tone generator host.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tonegen::{GeneratorKind, PlaybackDriver};

#[derive(Parser)]
#[command(
    name = "tonegen",
    version,
    about = "Tone generator (0 = sine, 1 = square, 2 = white noise)"
)]
struct Args {
    /// Sample rate to use, in Hz
    #[arg(short = 's', long = "samplerate", default_value_t = 44100)]
    samplerate: u32,

    /// Number of output channels
    #[arg(short = 'c', long = "channels", default_value_t = 1)]
    channels: u16,

    /// Tone generator to use (unrecognized values fall back to sine)
    #[arg(short = 't', long = "tonegen", default_value_t = 0)]
    tonegen: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut driver = PlaybackDriver::new();
    driver.initialize(
        args.samplerate,
        args.channels,
        GeneratorKind::from_selector(args.tonegen),
    )?;
    driver.start()?;

    print!("Now playing. Press <enter> to quit...");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    driver.stop()?;
    Ok(())
}

//! Rotation preview demo
//!
//! Loads a raster band, normalizes and equalizes it, turns a copy 90
//! degrees counter-clockwise and shows both versions side by side.
//! Handy for eyeballing whether a scene is oriented the way the rest
//! of a pipeline expects.

use clap::{Arg, Command as ClapCommand};
use log::{error, info};
use std::process;

use rasterprep::config::DEFAULTS;
use rasterprep::processor::ImageProcessor;
use rasterprep::transform::rotate::rotate90_ccw;
use rasterprep::utils::logger::Logger;
use rasterprep::utils::viewer;

/// Pixels of black between the two panes
const PANE_GAP: u32 = 8;

fn main() {
    let matches = ClapCommand::new("rotate-demo")
        .version("0.1")
        .about("Show a raster band next to its 90 degree counter-clockwise turn")
        .arg(
            Arg::new("input")
                .help("Input raster file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the composite here instead of opening a viewer")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    if let Err(e) = Logger::init_global_logger(&DEFAULTS.log_file) {
        eprintln!("Error setting up logger: {}", e);
        process::exit(1);
    }

    let input = matches.get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or_default();

    let processor = match ImageProcessor::open(input) {
        Ok(p) => p,
        Err(e) => {
            error!("Could not load {}: {}", input, e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let (width, height) = processor.dimensions();
    info!("Loaded {} ({}x{}, source dtype {})",
          input, width, height, processor.source_dtype());

    let rotated = rotate90_ccw(processor.buffer());
    let composite = viewer::side_by_side(processor.buffer(), &rotated, PANE_GAP);
    info!("Composite is {}x{}", composite.width(), composite.height());

    match matches.get_one::<String>("output") {
        Some(output) => {
            if let Err(e) = composite.save(output) {
                error!("Could not write {}: {}", output, e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
            info!("Composite written to {}", output);
        }
        None => {
            // a headless box still gets the composite on disk, so a
            // viewer failure is reported but not fatal
            let shown = viewer::write_preview(&composite, "rotate-demo")
                .and_then(|path| {
                    viewer::open_viewer(&path)?;
                    Ok(path)
                });
            match shown {
                Ok(path) => info!("Preview opened from {}", path.display()),
                Err(e) => {
                    error!("{}", e);
                    eprintln!("Warning: {}", e);
                }
            }
        }
    }
}

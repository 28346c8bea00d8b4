use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use rasterprep::config::{PrepConfig, DEFAULTS};
use rasterprep::utils::logger::Logger;
use rasterprep::commands::{CommandFactory, RasterprepCommandFactory};

fn main() {
    let matches = ClapCommand::new("rasterprep")
        .version("0.1")
        .about("Preprocess raster bands: normalize, equalize and transform")
        .arg(
            Arg::new("input")
                .help("Input raster file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("no-equalize")
                .long("no-equalize")
                .help("Skip histogram equalization after loading")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rotate")
                .short('r')
                .long("rotate")
                .help("Rotate by the given angle in degrees (positive is counter-clockwise)")
                .value_name("DEGREES")
                .required(false),
        )
        .arg(
            Arg::new("resize")
                .long("resize")
                .help("Resize to the given dimensions")
                .value_name("WIDTHxHEIGHT")
                .required(false),
        )
        .arg(
            Arg::new("interpolation")
                .long("interpolation")
                .help("Resampling filter for resize (nearest, linear, cubic, lanczos)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("crop")
                .long("crop")
                .help("Crop to the given rectangle, clipped to the image bounds")
                .value_name("X,Y,WIDTH,HEIGHT")
                .required(false),
        )
        .arg(
            Arg::new("noise")
                .long("noise")
                .help("Add Gaussian noise with the given mean and variance")
                .value_name("MEAN,VARIANCE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .help("Save next to the input with this suffix before the extension")
                .value_name("SUFFIX")
                .required(false),
        )
        .arg(
            Arg::new("show")
                .long("show")
                .help("Open the processed image in the system viewer")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File receiving the operation log")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file overriding the built-in defaults")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match PrepConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading configuration: {}", e);
                process::exit(1);
            }
        },
        None => DEFAULTS.clone(),
    };

    let log_file = matches.get_one::<String>("log-file")
        .cloned()
        .unwrap_or_else(|| config.log_file.clone());

    let logger = match Logger::new(&log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger(&log_file) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = RasterprepCommandFactory::new(config);

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

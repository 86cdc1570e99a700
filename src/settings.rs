use anyhow::Result;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::fmt;

use crate::element::ElementKind;
use crate::field::Scene;
use crate::grid::Placement;
use crate::polarization::Polarization;

/// Runtime configuration for the application.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub grid_points: usize,
    pub element_start: usize,
    pub element_thickness: usize,
    pub state: Polarization,
    pub element: ElementKind,
    pub angle: f32,
    pub velocity: f32,
    pub frames: u64,
    #[serde(default = "default_fps")]
    pub fps: f32,
}

fn default_fps() -> f32 {
    16.0
}

impl Settings {
    /// The element placement on the propagation grid.
    pub fn placement(&self) -> Placement {
        Placement::new(self.element_start, self.element_thickness)
    }

    /// The scene selected by the current configuration.
    pub fn scene(&self) -> Scene {
        Scene {
            state: self.state,
            element: self.element.with_angle(self.angle),
        }
    }
}

pub fn load_default_config() -> Result<Settings> {
    let jaws_dir = retrieve_project_root();
    let default_config_file = jaws_dir.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    validate_config(&config);

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    let jaws_dir = retrieve_project_root();

    let default_config_file = jaws_dir.join("config/default.toml");
    let local_config = jaws_dir.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        println!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        println!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("jaws"))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let mut config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(state) = args.state {
        config.state = state;
    }
    if let Some(element) = args.element {
        config.element = element;
    }
    if let Some(angle) = args.angle {
        config.angle = angle;
    }
    if let Some(velocity) = args.velocity {
        config.velocity = velocity;
    }
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if let Some(start) = args.start {
        config.element_start = start;
    }
    if let Some(thickness) = args.thickness {
        config.element_thickness = thickness;
    }

    validate_config(&config);

    println!("{:#?}", config);

    Ok(config)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the JAWS_ROOT_DIR environment variable is set, use it.
/// 3. If a "config" subdirectory is found in the executable directory or any of its parents, use it.
/// If none of these methods work, the function will panic.
fn retrieve_project_root() -> std::path::PathBuf {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        return std::path::PathBuf::from(manifest_dir);
    }
    if let Ok(path) = env::var("JAWS_ROOT_DIR") {
        // Allow explicit configuration via environment variable
        return std::path::PathBuf::from(path);
    }

    // Fallback: walk upward from the executable directory looking for a
    // "config" subdirectory
    let exe_path = env::current_exe().expect("Failed to get current executable path");
    let mut current_dir = exe_path
        .parent()
        .expect("Failed to get executable directory")
        .to_path_buf();

    loop {
        if current_dir.join("config").is_dir() {
            return current_dir;
        }
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => panic!("Could not find project root directory"),
        }
    }
}

fn validate_config(config: &Settings) {
    assert!(
        config.grid_points > 1,
        "Grid must have at least two points"
    );
    assert!(
        config.element_start + config.element_thickness <= config.grid_points - 1,
        "Element must fit within the propagation grid"
    );
    assert!(
        (0.0..=1.0).contains(&config.velocity),
        "Wave velocity must be in [0, 1]"
    );
    assert!(config.fps > 0.0, "Frame cadence must be greater than 0");
}

#[derive(Parser, Debug)]
#[command(version, about = "JAWS - Jones Animated Wave Simulator")]
pub struct CliArgs {
    /// Incoming polarization state: h, v, d, a, r or l.
    #[arg(short, long, value_parser = parse_polarization)]
    state: Option<Polarization>,

    /// Optical element: hp, vp, lin, hwp or qwp.
    #[arg(short, long, value_parser = parse_element_kind)]
    element: Option<ElementKind>,

    /// Transmission-axis or fast-axis angle in radians.
    #[arg(short, long)]
    angle: Option<f32>,

    /// Wave velocity in phase units per tick, between 0 and 1.
    #[arg(short, long)]
    velocity: Option<f32>,

    /// Number of animation ticks to run.
    #[arg(short, long)]
    frames: Option<u64>,

    /// Grid index of the element front face.
    #[arg(long)]
    start: Option<usize>,

    /// Element thickness in grid steps.
    #[arg(long)]
    thickness: Option<usize>,
}

/// Parse a polarization state name or its short form.
fn parse_polarization(s: &str) -> Result<Polarization, String> {
    match s.to_lowercase().as_str() {
        "h" | "horizontal" => Ok(Polarization::Horizontal),
        "v" | "vertical" => Ok(Polarization::Vertical),
        "d" | "p45" | "diagonal" => Ok(Polarization::Diagonal),
        "a" | "m45" | "antidiagonal" => Ok(Polarization::Antidiagonal),
        "r" | "rc" | "right_circular" => Ok(Polarization::RightCircular),
        "l" | "lc" | "left_circular" => Ok(Polarization::LeftCircular),
        _ => Err(format!("Unknown polarization state: '{}'", s)),
    }
}

/// Parse an optical element name or its short form.
fn parse_element_kind(s: &str) -> Result<ElementKind, String> {
    match s.to_lowercase().as_str() {
        "hp" | "horizontal_polarizer" => Ok(ElementKind::HorizontalPolarizer),
        "vp" | "vertical_polarizer" => Ok(ElementKind::VerticalPolarizer),
        "lin" | "linear" | "linear_polarizer" => Ok(ElementKind::LinearPolarizer),
        "hwp" | "half_wave_plate" => Ok(ElementKind::HalfWavePlate),
        "qwp" | "quarter_wave_plate" => Ok(ElementKind::QuarterWavePlate),
        _ => Err(format!("Unknown optical element: '{}'", s)),
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Grid Points: {}
  - Element Start: {}
  - Element Thickness: {}
  - State: {}
  - Element: {}
  - Angle: {:.6}
  - Velocity: {:.6}
  - Frames: {}
  ",
            self.grid_points,
            self.element_start,
            self.element_thickness,
            self.state,
            self.element.with_angle(self.angle),
            self.angle,
            self.velocity,
            self.frames,
        )
    }
}

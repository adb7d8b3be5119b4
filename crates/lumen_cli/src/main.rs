use anyhow::{Context, Result};
use clap::{arg, value_parser, ArgMatches, Command};
use lumen_tracer::{render, CameraSettings, ImageBuffer, RenderConfig, Vec3};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

mod scene;

fn cli() -> Command {
    Command::new("lumen")
        .about("Path traces the showcase sphere scene and writes a PPM image.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            arg!(--width <WIDTH> "Image width in pixels")
                .value_parser(value_parser!(u32))
                .default_value("1200"),
        )
        .arg(
            arg!(--height <HEIGHT> "Image height in pixels")
                .value_parser(value_parser!(u32))
                .default_value("800"),
        )
        .arg(
            arg!(-s --samples <SAMPLES> "Samples per pixel")
                .value_parser(value_parser!(u32))
                .default_value("15"),
        )
        .arg(
            arg!(-d --"max-depth" <DEPTH> "Maximum number of bounces per path")
                .value_parser(value_parser!(u32))
                .default_value("50"),
        )
        .arg(
            arg!(--vfov <DEGREES> "Vertical field of view in degrees")
                .value_parser(value_parser!(f64))
                .default_value("20"),
        )
        .arg(
            arg!(--aperture <APERTURE> "Lens diameter, 0 for a pinhole camera")
                .value_parser(value_parser!(f64))
                .default_value("0.1"),
        )
        .arg(
            arg!(--seed <SEED> "Random seed for a reproducible render")
                .value_parser(value_parser!(u64))
                .required(false),
        )
        .arg(
            arg!(-o --output <FILE> "Write the PPM to a file instead of stdout")
                .value_parser(value_parser!(PathBuf))
                .required(false),
        )
}

/// Everything the command line controls.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    config: RenderConfig,
    vfov: f64,
    aperture: f64,
    output: Option<PathBuf>,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let get_u32 = |id: &str| {
            matches
                .get_one::<u32>(id)
                .copied()
                .with_context(|| format!("Missing --{id}"))
        };
        let get_f64 = |id: &str| {
            matches
                .get_one::<f64>(id)
                .copied()
                .with_context(|| format!("Missing --{id}"))
        };

        let mut config = RenderConfig::default()
            .with_resolution(get_u32("width")?, get_u32("height")?)
            .with_quality(get_u32("samples")?, get_u32("max-depth")?);
        config.seed = matches.get_one::<u64>("seed").copied();

        Ok(Self {
            config,
            vfov: get_f64("vfov")?,
            aperture: get_f64("aperture")?,
            output: matches.get_one::<PathBuf>("output").cloned(),
        })
    }

    /// The showcase view: low and to the side, focused on the origin.
    fn camera_settings(&self) -> CameraSettings {
        let look_from = Vec3::new(13.0, 2.0, 3.0);
        let look_at = Vec3::ZERO;
        CameraSettings::default()
            .with_position(look_from, look_at, Vec3::Y)
            .with_lens(self.vfov, self.aperture, 10.0)
            .with_aspect_ratio(self.config.aspect_ratio())
    }
}

fn write_image(image: &ImageBuffer, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            image.write_ppm(&mut writer)?;
            writer.flush()?;
            log::info!("Saved to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            image.write_ppm(&mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the PPM on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::from_matches(&cli().get_matches())?;
    options.config.validate().context("Invalid render settings")?;
    let camera = options
        .camera_settings()
        .build()
        .context("Invalid camera settings")?;

    let mut rng = options.config.rng();
    let world = scene::showcase(&mut rng);
    log::info!("Scene has {} spheres", world.len());

    let image = render(&camera, &world, &options.config, &mut rng);
    write_image(&image, options.output.as_deref()).context("Failed to write image")?;

    Ok(())
}

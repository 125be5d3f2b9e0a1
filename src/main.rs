//! Command line front end: generates a color map and prints it to
//! standard output, and the number of clipped colors to standard
//! error.

use std::io::{self, Write};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use gencolormap::{defaults, export, ColorMap, Error, RGB8};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format { Csv, Json, Ppm }

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Family {
    BrewerSequential,
    BrewerDiverging,
    BrewerQualitative,
    #[value(name = "pusequential-lightness")]
    PuSequentialLightness,
    #[value(name = "pusequential-saturation")]
    PuSequentialSaturation,
    #[value(name = "pusequential-rainbow")]
    PuSequentialRainbow,
    #[value(name = "pusequential-blackbody")]
    PuSequentialBlackBody,
    #[value(name = "pudiverging-lightness")]
    PuDivergingLightness,
    #[value(name = "pudiverging-saturation")]
    PuDivergingSaturation,
    #[value(name = "puqualitative-hue")]
    PuQualitativeHue,
    #[value(name = "cubehelix")]
    CubeHelix,
    Moreland,
    #[value(name = "mcnames")]
    McNames,
}

#[derive(Parser, Debug)]
#[command(name = "gencolormap", version,
          about = "Generates a color map and prints it to standard output.",
          after_help = "Options a color map type does not use are ignored.",
          disable_help_flag = true, disable_version_flag = true,
          allow_negative_numbers = true)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Number of colors in the map
    #[arg(short, long, default_value_t = defaults::N)]
    n: usize,

    /// Type of color map
    #[arg(short = 't', long = "type", value_enum,
          default_value_t = Family::BrewerSequential)]
    typ: Family,

    /// Hue in [0, 360] degrees ([0, 180] for cubehelix)
    #[arg(short = 'h', long, value_name = "DEG")]
    hue: Option<f64>,

    /// Hue divergence in [0, 360] degrees (diverging and qualitative maps)
    #[arg(short, long, value_name = "DEG")]
    divergence: Option<f64>,

    /// Contrast in [0, 1]
    #[arg(short, long)]
    contrast: Option<f64>,

    /// Saturation in [0, 1]
    #[arg(short, long)]
    saturation: Option<f64>,

    /// Brightness in [0, 1]
    #[arg(short, long)]
    brightness: Option<f64>,

    /// Warmth in [0, 1] (Brewer sequential and diverging maps)
    #[arg(short, long)]
    warmth: Option<f64>,

    /// Lightness in [0, 1]
    #[arg(short, long)]
    lightness: Option<f64>,

    /// Number of rotations (rainbow and cubehelix maps)
    #[arg(short, long)]
    rotations: Option<f64>,

    /// Start temperature in K (black body maps)
    #[arg(short = 'T', long)]
    temperature: Option<f64>,

    /// Lightness range, saturation range, or temperature range in K,
    /// depending on the map type
    #[arg(short = 'R', long)]
    range: Option<f64>,

    /// Saturation range of the lightness varying and rainbow maps
    #[arg(short = 'S', long)]
    saturation_range: Option<f64>,

    /// Gamma correction in (0, ∞) (cubehelix)
    #[arg(short, long)]
    gamma: Option<f64>,

    /// First color as sRGB bytes r,g,b (moreland)
    #[arg(short = 'A', long, value_parser = parse_color)]
    color0: Option<RGB8>,

    /// Last color as sRGB bytes r,g,b (moreland)
    #[arg(short = 'O', long, value_parser = parse_color)]
    color1: Option<RGB8>,

    /// Number of periods in (0, ∞) (mcnames)
    #[arg(short, long)]
    periods: Option<f64>,

    /// Log debug information to standard error
    #[arg(long)]
    verbose: bool,

    /// Print help
    #[arg(short = 'H', long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn parse_color(s: &str) -> Result<RGB8, Error> {
    let c: Vec<u8> = s.split(',')
        .map(|x| x.trim().parse())
        .collect::<Result<_, _>>()
        .map_err(|_| Error::InvalidColor(s.to_string()))?;
    match c.as_slice() {
        &[r, g, b] => Ok(RGB8::new(r, g, b)),
        _ => Err(Error::InvalidColor(s.to_string())),
    }
}

fn within(name: &'static str, v: Option<f64>, lo: f64, hi: f64)
          -> Result<(), Error> {
    match v {
        Some(x) if !(lo ..= hi).contains(&x) => {
            let reason = if hi == f64::INFINITY {
                format!("must be ≥ {lo}")
            } else {
                format!("must be in [{lo}, {hi}]")
            };
            Err(Error::InvalidParameter { name, value: x.to_string(), reason })
        }
        _ => Ok(()),
    }
}

fn positive(name: &'static str, v: Option<f64>) -> Result<(), Error> {
    match v {
        Some(x) if !(x > 0. && x.is_finite()) => Err(Error::InvalidParameter {
            name, value: x.to_string(),
            reason: "must be positive".to_string() }),
        _ => Ok(()),
    }
}

/// Replace `field` by `v` when given.
fn set(field: &mut f64, v: Option<f64>) {
    if let Some(v) = v { *field = v }
}

impl Cli {
    fn validate(&self) -> Result<(), Error> {
        if self.n < 2 {
            return Err(Error::TooFewColors(self.n))
        }
        let max_hue = if self.typ == Family::CubeHelix { 180. } else { 360. };
        within("hue", self.hue, 0., max_hue)?;
        within("divergence", self.divergence, 0., 360.)?;
        within("contrast", self.contrast, 0., 1.)?;
        within("saturation", self.saturation, 0., 1.)?;
        within("brightness", self.brightness, 0., 1.)?;
        within("warmth", self.warmth, 0., 1.)?;
        within("lightness", self.lightness, 0., 1.)?;
        if let Some(r) = self.rotations.filter(|r| !r.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "rotations", value: r.to_string(),
                reason: "must be finite".to_string() })
        }
        positive("temperature", self.temperature)?;
        if self.typ == Family::PuSequentialBlackBody {
            within("range", self.range, 0., f64::INFINITY)?;
        } else {
            within("range", self.range, 0., 1.)?;
        }
        within("saturation-range", self.saturation_range, 0., 1.)?;
        positive("gamma", self.gamma)?;
        positive("periods", self.periods)
    }

    /// The color map selected on the command line, with the options
    /// it does not set taken from [`defaults`].
    fn color_map(&self) -> Result<ColorMap, Error> {
        self.validate()?;
        let hue = self.hue.map(f64::to_radians);
        let divergence = self.divergence.map(f64::to_radians);
        let map = match self.typ {
            Family::BrewerSequential => {
                let mut p = defaults::brewer_sequential(self.n);
                set(&mut p.hue, hue);
                set(&mut p.contrast, self.contrast);
                set(&mut p.saturation, self.saturation);
                set(&mut p.brightness, self.brightness);
                set(&mut p.warmth, self.warmth);
                ColorMap::BrewerSequential(p)
            }
            Family::BrewerDiverging => {
                let mut p = defaults::brewer_diverging(self.n);
                set(&mut p.hue, hue);
                set(&mut p.divergence, divergence);
                set(&mut p.contrast, self.contrast);
                set(&mut p.saturation, self.saturation);
                set(&mut p.brightness, self.brightness);
                set(&mut p.warmth, self.warmth);
                ColorMap::BrewerDiverging(p)
            }
            Family::BrewerQualitative => {
                let mut p = defaults::brewer_qualitative();
                set(&mut p.hue, hue);
                set(&mut p.divergence, divergence);
                set(&mut p.contrast, self.contrast);
                set(&mut p.saturation, self.saturation);
                set(&mut p.brightness, self.brightness);
                ColorMap::BrewerQualitative(p)
            }
            Family::PuSequentialLightness => {
                let mut p = defaults::pu_sequential_lightness();
                set(&mut p.hue, hue);
                set(&mut p.saturation, self.saturation);
                set(&mut p.lightness_range, self.range);
                set(&mut p.saturation_range, self.saturation_range);
                ColorMap::PuSequentialLightness(p)
            }
            Family::PuSequentialSaturation => {
                let mut p = defaults::pu_sequential_saturation();
                set(&mut p.hue, hue);
                set(&mut p.lightness, self.lightness);
                set(&mut p.saturation, self.saturation);
                set(&mut p.saturation_range, self.range);
                ColorMap::PuSequentialSaturation(p)
            }
            Family::PuSequentialRainbow => {
                let mut p = defaults::pu_sequential_rainbow();
                set(&mut p.hue, hue);
                set(&mut p.rotations, self.rotations);
                set(&mut p.saturation, self.saturation);
                set(&mut p.lightness_range, self.range);
                set(&mut p.saturation_range, self.saturation_range);
                ColorMap::PuSequentialRainbow(p)
            }
            Family::PuSequentialBlackBody => {
                let mut p = defaults::pu_sequential_blackbody();
                set(&mut p.temperature, self.temperature);
                set(&mut p.range, self.range);
                set(&mut p.saturation, self.saturation);
                ColorMap::PuSequentialBlackBody(p)
            }
            Family::PuDivergingLightness => {
                let mut p = defaults::pu_diverging_lightness();
                set(&mut p.hue, hue);
                set(&mut p.divergence, divergence);
                set(&mut p.saturation, self.saturation);
                set(&mut p.lightness_range, self.range);
                set(&mut p.saturation_range, self.saturation_range);
                ColorMap::PuDivergingLightness(p)
            }
            Family::PuDivergingSaturation => {
                let mut p = defaults::pu_diverging_saturation();
                set(&mut p.hue, hue);
                set(&mut p.divergence, divergence);
                set(&mut p.lightness, self.lightness);
                set(&mut p.saturation, self.saturation);
                set(&mut p.saturation_range, self.range);
                ColorMap::PuDivergingSaturation(p)
            }
            Family::PuQualitativeHue => {
                let mut p = defaults::pu_qualitative_hue();
                set(&mut p.hue, hue);
                set(&mut p.divergence, divergence);
                set(&mut p.lightness, self.lightness);
                set(&mut p.saturation, self.saturation);
                ColorMap::PuQualitativeHue(p)
            }
            Family::CubeHelix => {
                let mut p = defaults::cubehelix();
                set(&mut p.hue, hue);
                set(&mut p.rotations, self.rotations);
                set(&mut p.saturation, self.saturation);
                set(&mut p.gamma, self.gamma);
                ColorMap::CubeHelix(p)
            }
            Family::Moreland => {
                let mut p = defaults::moreland();
                if let Some(c) = self.color0 { p.color0 = c }
                if let Some(c) = self.color1 { p.color1 = c }
                ColorMap::Moreland(p)
            }
            Family::McNames => {
                let mut p = defaults::mcnames();
                set(&mut p.periods, self.periods);
                ColorMap::McNames(p)
            }
        };
        Ok(map)
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let map = cli.color_map().context("invalid arguments")?;
    debug!(?map, "resolved parameters");
    let palette = map.generate(cli.n)?;
    let output = match cli.format {
        Format::Csv => export::to_csv(palette.colors()).into_bytes(),
        Format::Json => export::to_json(palette.colors())
            .context("cannot serialize the color map")?
            .into_bytes(),
        Format::Ppm => export::to_ppm(palette.colors()),
    };
    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)
        .and_then(|()| stdout.flush())
        .context("cannot write to standard output")?;
    eprintln!("{} color(s) were clipped", palette.clipped());
    Ok(())
}

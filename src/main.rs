use anyhow::{bail, Context, Result};
use conekit::{
    format_report, localized_error, ConeAnalysis, ConeProfile, ConeSpec, Config, Language,
    MachiningParams,
};
use std::path::PathBuf;
use std::str::FromStr;

const USAGE: &str = "conekit - truncated-cone calculator for lathe work

Usage: conekit [KEY=VALUE]...

Keys (defaults from configuration in parentheses):
  D=<mm>        large diameter (50)
  d=<mm>        small diameter (30)
  l=<mm>        cone length (100)
  rpm=<rpm>     spindle speed (600)
  feed=<mm/rev> feed per revolution (0.2)
  real_d=<mm>   measured large diameter, enables error report
  support=<deg> support angle, enables reverse calculation
  lang=<en|fa>  display language (en)
  png=<path>    export the 2D profile as a PNG image
  width=<px>    PNG width (640)
  height=<px>   PNG height (480)
";

struct CliArgs {
    spec: ConeSpec,
    machining: MachiningParams,
    measured_large_diameter: Option<f64>,
    support_deg: Option<f64>,
    png_path: Option<PathBuf>,
    png_width: u32,
    png_height: u32,
    config: Config,
}

fn parse_args(config: Config, args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs {
        spec: ConeSpec::new(
            config.defaults.large_diameter,
            config.defaults.small_diameter,
            config.defaults.length,
        ),
        machining: MachiningParams::new(config.defaults.spindle_rpm, config.defaults.feed_per_rev),
        measured_large_diameter: None,
        support_deg: None,
        png_path: None,
        png_width: 640,
        png_height: 480,
        config,
    };

    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("Expected KEY=VALUE, got '{}'", arg);
        };
        let number = || -> Result<f64> {
            value
                .parse::<f64>()
                .with_context(|| format!("'{}' is not a number for key '{}'", value, key))
        };
        match key {
            "D" => parsed.spec.large_diameter = number()?,
            "d" => parsed.spec.small_diameter = number()?,
            "l" => parsed.spec.length = number()?,
            "rpm" => parsed.machining.spindle_rpm = number()?,
            "feed" => parsed.machining.feed_per_rev = number()?,
            "real_d" => parsed.measured_large_diameter = Some(number()?),
            "support" => parsed.support_deg = Some(number()?),
            "lang" => {
                parsed.config.ui.language = Language::from_str(value)
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            "png" => parsed.png_path = Some(PathBuf::from(value)),
            "width" => parsed.png_width = number()? as u32,
            "height" => parsed.png_height = number()? as u32,
            _ => bail!("Unknown key '{}'", key),
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    conekit::init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print!("{}", USAGE);
        return Ok(());
    }

    let cli = parse_args(Config::default(), &args)?;

    let report = match ConeAnalysis::evaluate(
        &cli.spec,
        &cli.machining,
        cli.measured_large_diameter,
        cli.support_deg,
    ) {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!(%err, "analysis rejected inputs");
            eprintln!("{}", localized_error(cli.config.ui.language, &err));
            std::process::exit(1);
        }
    };

    print!("{}", format_report(&cli.config, &report));

    if let Some(path) = &cli.png_path {
        let profile = ConeProfile::from_spec(&cli.spec);
        conekit::export_png(&profile, path, cli.png_width, cli.png_height)?;
        println!("Saved profile image to {}", path.display());
    }

    Ok(())
}

//! aaa-geometry: generate layered abdominal aortic aneurysm geometry.
//!
//! Both subcommands plan the full ordered list of construction requests,
//! replay it against a recording kernel and write the resulting study
//! document, which names every section, circle, shell, solid and export.
//!
//! # Logging
//!
//! Set `RUST_LOG` to control log output, or use `-v` / `-vv`:
//! - `RUST_LOG=aneurysm_pipeline=info` - stage boundaries
//! - `RUST_LOG=debug` - every request as it is applied

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use model_config::ParameterOverrides;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;

use commands::{idealized, patient};

/// Generate multi-layer aneurysm solids from shape parameters or patient data.
#[derive(Parser)]
#[command(name = "aaa-geometry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory for exported solids and the study file
    #[arg(long, global = true, env = "GEOMETRY_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Output format for the run summary
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Idealized aneurysm from scalar shape parameters
    Idealized {
        /// JSON file with parameter values; command-line values take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        params: ParameterArgs,
    },

    /// Patient-specific aneurysm from centerline and area measurements
    Patient {
        /// JSON file describing the inputs; command-line values take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory that relative input paths are resolved against
        #[arg(long, env = "GEOMETRY_DATA_DIR", default_value = ".")]
        data_dir: PathBuf,

        /// Comma-separated x,y,z centerline samples
        #[arg(long)]
        centerline_file: Option<PathBuf>,

        /// Comma-separated z,area samples of the outer wall
        #[arg(long)]
        wall_area_file: Option<PathBuf>,

        /// Comma-separated z,area samples of the lumen
        #[arg(long)]
        lumen_area_file: Option<PathBuf>,

        /// Orient circles along the centerline tangent instead of the z axis
        #[arg(long)]
        use_tangent_normal: bool,

        /// Resampled points per raw centerline segment
        #[arg(long)]
        resample_factor: Option<usize>,

        /// Do not write interpolated_centerline.txt to the data directory
        #[arg(long)]
        no_centerline_dump: bool,
    },
}

/// Scalar shape parameters. Unset values come from the config file or defaults.
#[derive(Args, Debug, Default)]
pub struct ParameterArgs {
    /// Total length of the vessel segment
    #[arg(long)]
    length: Option<f64>,

    /// Radius of the healthy, non-dilated vessel
    #[arg(long)]
    radius_nondilated: Option<f64>,

    /// Radius at the sac apex
    #[arg(long)]
    radius_dilated: Option<f64>,

    #[arg(long)]
    wall_thickness_intima: Option<f64>,

    #[arg(long)]
    wall_thickness_media: Option<f64>,

    #[arg(long)]
    wall_thickness_adventitia: Option<f64>,

    /// Intraluminal thrombus thickness at the sac apex
    #[arg(long = "wall-thickness-ilt")]
    wall_thickness_ilt: Option<f64>,

    /// Lateral sac offset along x
    #[arg(long, allow_hyphen_values = true)]
    x_shift: Option<f64>,

    /// Lateral sac offset along y
    #[arg(long, allow_hyphen_values = true)]
    y_shift: Option<f64>,

    /// Baseline sections per layer
    #[arg(long)]
    n_sections: Option<usize>,
}

impl ParameterArgs {
    fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            length: self.length,
            radius_nondilated: self.radius_nondilated,
            radius_sac: self.radius_dilated,
            wall_thickness_intima: self.wall_thickness_intima,
            wall_thickness_media: self.wall_thickness_media,
            wall_thickness_adventitia: self.wall_thickness_adventitia,
            ilt_thickness: self.wall_thickness_ilt,
            x_shift: self.x_shift,
            y_shift: self.y_shift,
            n_sections: self.n_sections,
        }
    }
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "aneurysm_pipeline=info,centerline=info,geometry_kernel=info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Idealized { config, params } => {
            idealized::run(config.as_deref(), &params.overrides(), &cli)
        }
        Commands::Patient {
            config,
            data_dir,
            centerline_file,
            wall_area_file,
            lumen_area_file,
            use_tangent_normal,
            resample_factor,
            no_centerline_dump,
        } => patient::run(
            &patient::PatientArgs {
                config: config.clone(),
                data_dir: data_dir.clone(),
                centerline_file: centerline_file.clone(),
                wall_area_file: wall_area_file.clone(),
                lumen_area_file: lumen_area_file.clone(),
                use_tangent_normal: *use_tangent_normal,
                resample_factor: *resample_factor,
                dump_centerline: !no_centerline_dump,
            },
            &cli,
        ),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("Error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn idealized_flags_map_to_overrides() {
        let cli = Cli::parse_from([
            "aaa-geometry",
            "idealized",
            "--radius-dilated",
            "15",
            "--wall-thickness-ilt",
            "2.5",
            "--x-shift",
            "-3",
            "--n-sections",
            "13",
        ]);
        let Commands::Idealized { config, params } = cli.command else {
            panic!("expected idealized subcommand");
        };
        assert!(config.is_none());
        let overrides = params.overrides();
        assert_eq!(overrides.radius_sac, Some(15.0));
        assert_eq!(overrides.ilt_thickness, Some(2.5));
        assert_eq!(overrides.x_shift, Some(-3.0));
        assert_eq!(overrides.n_sections, Some(13));
        assert_eq!(overrides.length, None);
    }

    #[test]
    fn patient_flags_parse() {
        let cli = Cli::parse_from([
            "aaa-geometry",
            "--output-dir",
            "out",
            "patient",
            "--data-dir",
            "data",
            "--centerline-file",
            "c.txt",
            "--use-tangent-normal",
            "--resample-factor",
            "4",
        ]);
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        let Commands::Patient {
            data_dir,
            centerline_file,
            use_tangent_normal,
            resample_factor,
            no_centerline_dump,
            ..
        } = cli.command
        else {
            panic!("expected patient subcommand");
        };
        assert_eq!(data_dir, PathBuf::from("data"));
        assert_eq!(centerline_file, Some(PathBuf::from("c.txt")));
        assert!(use_tangent_normal);
        assert_eq!(resample_factor, Some(4));
        assert!(!no_centerline_dump);
    }
}

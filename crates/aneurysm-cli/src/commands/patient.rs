//! aaa-geometry patient - aneurysm from patient measurements.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use aneurysm_pipeline::run_patient_specific;
use geometry_kernel::RecordingKernel;
use model_config::{load_patient_config, PatientConfig};
use study_format::StudyMetadata;
use tracing::info;

use crate::output::{report, RunReport};
use crate::Cli;

/// File the resampled centerline is written to, inside the data directory.
const CENTERLINE_DUMP: &str = "interpolated_centerline.txt";

pub struct PatientArgs {
    pub config: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub centerline_file: Option<PathBuf>,
    pub wall_area_file: Option<PathBuf>,
    pub lumen_area_file: Option<PathBuf>,
    pub use_tangent_normal: bool,
    pub resample_factor: Option<usize>,
    pub dump_centerline: bool,
}

impl PatientArgs {
    /// Command-line values over the config file, relative paths under the data directory.
    fn resolve(&self) -> Result<PatientConfig> {
        let base = match &self.config {
            Some(path) => Some(
                load_patient_config(path)
                    .with_context(|| format!("Failed to load patient config {:?}", path))?,
            ),
            None => None,
        };

        let pick = |flag: &Option<PathBuf>, from_file: Option<&PathBuf>, name: &str| {
            match flag.as_ref().or(from_file) {
                Some(path) => Ok(path.clone()),
                None => bail!("missing --{name} (or a config file that sets it)"),
            }
        };
        let centerline = pick(
            &self.centerline_file,
            base.as_ref().map(|c| &c.centerline_file),
            "centerline-file",
        )?;
        let wall = pick(
            &self.wall_area_file,
            base.as_ref().map(|c| &c.wall_area_file),
            "wall-area-file",
        )?;
        let lumen = pick(
            &self.lumen_area_file,
            base.as_ref().map(|c| &c.lumen_area_file),
            "lumen-area-file",
        )?;

        let mut config = PatientConfig::new(centerline, wall, lumen)
            .with_tangent_normal(
                self.use_tangent_normal || base.as_ref().is_some_and(|c| c.use_tangent_normal),
            )
            .relative_to(&self.data_dir);
        if let Some(factor) = self
            .resample_factor
            .or_else(|| base.as_ref().map(|c| c.resample_factor))
        {
            config = config.with_resample_factor(factor);
        }
        Ok(config)
    }
}

pub fn run(args: &PatientArgs, cli: &Cli) -> Result<()> {
    let config = args.resolve()?;
    info!(?config, "patient-specific run");

    let dump = args
        .dump_centerline
        .then(|| args.data_dir.join(CENTERLINE_DUMP));
    let mut kernel = RecordingKernel::persistent(StudyMetadata::new("patient-specific"));
    let summary = run_patient_specific(&config, &cli.output_dir, &mut kernel, dump.as_deref())
        .context("Patient-specific geometry generation failed")?;

    report(&RunReport::new("patient-specific", &summary, &kernel), cli);
    Ok(())
}

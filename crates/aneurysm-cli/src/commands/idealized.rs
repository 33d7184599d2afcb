//! aaa-geometry idealized - parametric aneurysm.

use std::path::Path;

use anyhow::{Context, Result};
use aneurysm_pipeline::run_idealized;
use geometry_kernel::RecordingKernel;
use model_config::{resolve_parameters, ParameterOverrides};
use study_format::StudyMetadata;
use tracing::info;

use crate::output::{report, RunReport};
use crate::Cli;

pub fn run(config: Option<&Path>, overrides: &ParameterOverrides, cli: &Cli) -> Result<()> {
    let params = resolve_parameters(overrides, config).context("Failed to resolve parameters")?;
    info!(?params, "idealized run");

    let mut kernel = RecordingKernel::persistent(StudyMetadata::new("idealized"));
    let summary = run_idealized(&params, &cli.output_dir, &mut kernel)
        .context("Idealized geometry generation failed")?;

    report(&RunReport::new("idealized", &summary, &kernel), cli);
    Ok(())
}

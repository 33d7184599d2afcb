use std::path::Path;

use aneurysm_types::{KernelRequest, Parameters};
use centerline::{write_centerline, CenterlineError};
use geometry_kernel::GeometryKernel;
use model_config::PatientConfig;
use tracing::{debug, info, instrument};

use crate::domain::Domain;
use crate::idealized::plan_idealized;
use crate::patient::{load_patient_inputs, plan_patient_specific};
use crate::types::PipelineError;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Requests applied, in order.
    pub requests: Vec<KernelRequest>,
    pub domain: Domain,
}

/// Apply `requests` to `kernel` in order, stopping at the first failure.
///
/// Each request is checked against the names created so far before the
/// kernel is called.
#[instrument(skip_all, fields(requests = requests.len()))]
pub fn execute(
    requests: &[KernelRequest],
    kernel: &mut dyn GeometryKernel,
) -> Result<Domain, PipelineError> {
    let mut domain = Domain::new();
    for (step, request) in requests.iter().enumerate() {
        domain.admit(request)?;
        debug!(step, op = request.label(), "apply");
        kernel.apply(request)?;
    }
    info!(
        sections = domain.section_count(),
        shells = domain.shell_count(),
        solids = domain.solid_count(),
        exports = domain.export_count(),
        "run complete"
    );
    Ok(domain)
}

/// Plan and execute an idealized run.
pub fn run_idealized(
    params: &Parameters,
    output_dir: &Path,
    kernel: &mut dyn GeometryKernel,
) -> Result<RunSummary, PipelineError> {
    let requests = plan_idealized(params, output_dir)?;
    let domain = execute(&requests, kernel)?;
    Ok(RunSummary { requests, domain })
}

/// Plan and execute a patient-specific run.
///
/// When `centerline_dump` is given, the resampled centerline is written
/// there before any kernel request is issued.
pub fn run_patient_specific(
    config: &PatientConfig,
    output_dir: &Path,
    kernel: &mut dyn GeometryKernel,
    centerline_dump: Option<&Path>,
) -> Result<RunSummary, PipelineError> {
    let inputs = load_patient_inputs(config)?;
    if let Some(dump) = centerline_dump {
        write_centerline(dump, inputs.path.points()).map_err(CenterlineError::from)?;
        info!(path = %dump.display(), "wrote interpolated centerline");
    }
    let requests = plan_patient_specific(&inputs, output_dir);
    let domain = execute(&requests, kernel)?;
    Ok(RunSummary { requests, domain })
}

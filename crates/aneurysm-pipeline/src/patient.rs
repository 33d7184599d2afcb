use std::path::Path;

use aneurysm_types::{KernelRequest, ShellSpec, SolidSpec};
use centerline::{load_area_samples, load_centerline, CenterlineError, CenterlinePath};
use model_config::PatientConfig;
use profile_ops::{plan_centerline_sections, AreaProfile, NormalMode};
use tracing::{info, instrument};

use crate::exports::ExportPlan;
use crate::types::PipelineError;

/// Names used for one lofted surface of a patient-specific run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceNames {
    pub prefix: &'static str,
    pub shell: &'static str,
    pub solid: &'static str,
}

/// Outer wall surface, lofted from the wall areas.
pub const OUTER_WALL: SurfaceNames = SurfaceNames {
    prefix: "aneurysm_outer",
    shell: "aneurysm_outer_shell",
    solid: "aneurysm_outer",
};

/// Lumen surface, lofted from the lumen areas.
pub const LUMEN: SurfaceNames = SurfaceNames {
    prefix: "ILT",
    shell: "ILT_shell",
    solid: "Lumen",
};

/// Outer wall minus lumen.
pub const THROMBUS_SOLID: &str = "ILT";

/// Loaded and preprocessed inputs of a patient-specific run.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientInputs {
    pub path: CenterlinePath,
    pub wall: AreaProfile,
    pub lumen: AreaProfile,
    pub normal_mode: NormalMode,
}

/// Load the centerline and both area files, resample the centerline and
/// rescale both area profiles onto its arc length.
#[instrument(skip(config), fields(centerline = %config.centerline_file.display()))]
pub fn load_patient_inputs(config: &PatientConfig) -> Result<PatientInputs, PipelineError> {
    let raw = load_centerline(&config.centerline_file).map_err(CenterlineError::from)?;
    let path = CenterlinePath::from_samples(&raw, config.resample_factor)?;
    let area_profile = |file: &Path| -> Result<AreaProfile, PipelineError> {
        let samples = load_area_samples(file).map_err(CenterlineError::from)?;
        Ok(AreaProfile::from_samples(&samples, path.length())?)
    };
    let wall = area_profile(&config.wall_area_file)?;
    let lumen = area_profile(&config.lumen_area_file)?;
    Ok(PatientInputs {
        wall,
        lumen,
        normal_mode: NormalMode::from_flag(config.use_tangent_normal),
        path,
    })
}

/// Every kernel request of a patient-specific run, in construction order.
pub fn plan_patient_specific(inputs: &PatientInputs, output_dir: &Path) -> Vec<KernelRequest> {
    let mut requests = Vec::new();
    for (names, profile) in [(OUTER_WALL, &inputs.wall), (LUMEN, &inputs.lumen)] {
        let sections =
            plan_centerline_sections(&inputs.path, profile, names.prefix, inputs.normal_mode);
        requests.extend(sections.iter().map(|s| KernelRequest::AddSection {
            name: s.name.clone(),
            origin: s.origin(),
        }));
        requests.extend(sections.iter().map(|s| KernelRequest::AddCircleAt {
            section: s.name.clone(),
            center: s.circle.center,
            normal: s.circle.normal,
            radius: s.circle.radius,
        }));
        requests.push(KernelRequest::AddShell {
            shell: ShellSpec::approximating(
                names.shell,
                sections.into_iter().map(|s| s.name).collect(),
            ),
        });
        requests.push(KernelRequest::AddSolid {
            solid: SolidSpec::from_shell(names.solid, names.shell),
        });
    }
    requests.push(KernelRequest::AddSolid {
        solid: SolidSpec::from_cut(THROMBUS_SOLID, OUTER_WALL.solid, LUMEN.solid),
    });
    requests.extend(ExportPlan::patient_specific().requests(output_dir));
    info!(
        points = inputs.path.len(),
        requests = requests.len(),
        "planned patient-specific run"
    );
    requests
}

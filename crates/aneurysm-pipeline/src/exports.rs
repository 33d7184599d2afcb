use std::path::Path;

use aneurysm_types::{ExportFormat, KernelRequest};

/// Study file written at the end of an idealized run.
pub const IDEALIZED_STUDY_FILE: &str = "idealized_automatic_study.hdf";

/// Study file written at the end of a patient-specific run.
pub const PATIENT_STUDY_FILE: &str = "Patient_specific_study.hdf";

/// Which solids are written in which format, and where the study goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub targets: Vec<(ExportFormat, Vec<&'static str>)>,
    pub study_file: &'static str,
}

impl ExportPlan {
    pub fn idealized() -> Self {
        let layers = ["aneurysm_fluid", "aneurysm_intima_ILT", "media_solid", "adventitia_solid"];
        // IGES lists the thrombus-lined intima first.
        let iges = ["aneurysm_intima_ILT", "aneurysm_fluid", "media_solid", "adventitia_solid"];
        Self {
            targets: vec![
                (ExportFormat::Iges, iges.to_vec()),
                (ExportFormat::Stl, layers.to_vec()),
                (ExportFormat::Step, layers.to_vec()),
            ],
            study_file: IDEALIZED_STUDY_FILE,
        }
    }

    pub fn patient_specific() -> Self {
        Self {
            targets: ExportFormat::ALL
                .iter()
                .map(|&format| (format, vec!["ILT", "Lumen"]))
                .collect(),
            study_file: PATIENT_STUDY_FILE,
        }
    }

    /// Export requests to `{output_dir}/{solid}.{ext}`, then the study save.
    pub fn requests(&self, output_dir: &Path) -> Vec<KernelRequest> {
        let mut requests: Vec<KernelRequest> = self
            .targets
            .iter()
            .flat_map(|(format, solids)| {
                solids.iter().map(move |solid| KernelRequest::Export {
                    solid: solid.to_string(),
                    format: *format,
                    path: output_dir.join(format!("{solid}.{}", format.extension())),
                })
            })
            .collect();
        requests.push(KernelRequest::Save {
            path: output_dir.join(self.study_file),
        });
        requests
    }
}

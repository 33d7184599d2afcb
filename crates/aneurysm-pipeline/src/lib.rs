//! Generation runs: request planning and ordered execution.
//!
//! Planning is pure. [`plan_idealized`] and [`plan_patient_specific`] turn
//! their inputs into the complete ordered list of kernel requests for one
//! run. [`execute`] replays such a list against a [`GeometryKernel`],
//! tracking the named entities in an explicit [`Domain`] so that a request
//! referring to a missing name fails before the kernel sees it.
//!
//! [`GeometryKernel`]: geometry_kernel::GeometryKernel

pub mod domain;
pub mod exports;
pub mod idealized;
pub mod patient;
pub mod run;
pub mod types;

pub use domain::Domain;
pub use exports::{ExportPlan, IDEALIZED_STUDY_FILE, PATIENT_STUDY_FILE};
pub use idealized::{idealized_solids, plan_idealized, LayerPlan};
pub use patient::{
    load_patient_inputs, plan_patient_specific, PatientInputs, SurfaceNames, LUMEN, OUTER_WALL,
    THROMBUS_SOLID,
};
pub use run::{execute, run_idealized, run_patient_specific, RunSummary};
pub use types::PipelineError;

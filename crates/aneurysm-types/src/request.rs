use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::point::Point3d;
use crate::section::{ExportFormat, ShellSpec, SolidSpec};
use crate::vector::Vec3;

/// A declarative request to the geometry kernel.
///
/// A generation run is fully described by its ordered request list; the
/// kernel realizes the geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum KernelRequest {
    AddSection {
        name: String,
        origin: Point3d,
    },
    /// Circle centered on the section origin, in the section's default plane.
    AddCircle {
        section: String,
        radius: f64,
    },
    /// Circle with an explicit center and plane normal.
    AddCircleAt {
        section: String,
        center: Point3d,
        normal: Vec3,
        radius: f64,
    },
    AddShell {
        shell: ShellSpec,
    },
    AddSolid {
        solid: SolidSpec,
    },
    Export {
        solid: String,
        format: ExportFormat,
        path: PathBuf,
    },
    Save {
        path: PathBuf,
    },
}

impl KernelRequest {
    /// Short operation label, used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddSection { .. } => "add_section",
            Self::AddCircle { .. } => "add_circle",
            Self::AddCircleAt { .. } => "add_circle2",
            Self::AddShell { .. } => "add_shell",
            Self::AddSolid {
                solid: SolidSpec::FromShell { .. },
            } => "add_solid_from_shell",
            Self::AddSolid {
                solid: SolidSpec::FromCut { .. },
            } => "add_solid_from_cut",
            Self::Export { .. } => "export",
            Self::Save { .. } => "save",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_serialize_with_op_tag() {
        let req = KernelRequest::AddSection {
            name: "fluid0".into(),
            origin: Point3d::ORIGIN,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"op\":\"add_section\""), "{json}");

        let back: KernelRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn cut_label() {
        let req = KernelRequest::AddSolid {
            solid: SolidSpec::from_cut("c", "a", "b"),
        };
        assert_eq!(req.label(), "add_solid_from_cut");
    }
}

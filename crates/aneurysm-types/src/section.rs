use serde::{Deserialize, Serialize};

use crate::point::Point3d;
use crate::vector::Vec3;

/// A circular cross-section profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
    pub normal: Vec3,
    pub center: Point3d,
}

/// A named cross-section plane. The circle is attached once, after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub origin: Point3d,
    pub circle: Option<Circle>,
}

impl Section {
    pub fn new(name: impl Into<String>, origin: Point3d) -> Self {
        Self {
            name: name.into(),
            origin,
            circle: None,
        }
    }
}

/// Loft request: a shell through an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSpec {
    pub name: String,
    /// Sections in loft order. Must follow the longitudinal order.
    pub sections: Vec<String>,
    pub min_degree: u32,
    pub max_degree: u32,
    pub approximation: bool,
}

impl ShellSpec {
    pub const DEFAULT_MIN_DEGREE: u32 = 10;
    pub const DEFAULT_MAX_DEGREE: u32 = 20;

    /// Approximating loft with the default B-spline degree bounds.
    pub fn approximating(name: impl Into<String>, sections: Vec<String>) -> Self {
        Self {
            name: name.into(),
            sections,
            min_degree: Self::DEFAULT_MIN_DEGREE,
            max_degree: Self::DEFAULT_MAX_DEGREE,
            approximation: true,
        }
    }
}

/// How a solid is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SolidSpec {
    FromShell {
        name: String,
        shell: String,
    },
    /// `minuend - subtrahend`. Both operands must already exist.
    FromCut {
        name: String,
        minuend: String,
        subtrahend: String,
    },
}

impl SolidSpec {
    pub fn from_shell(name: impl Into<String>, shell: impl Into<String>) -> Self {
        Self::FromShell {
            name: name.into(),
            shell: shell.into(),
        }
    }

    pub fn from_cut(
        name: impl Into<String>,
        minuend: impl Into<String>,
        subtrahend: impl Into<String>,
    ) -> Self {
        Self::FromCut {
            name: name.into(),
            minuend: minuend.into(),
            subtrahend: subtrahend.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::FromShell { name, .. } | Self::FromCut { name, .. } => name,
        }
    }
}

/// Solid export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    Iges,
    Stl,
    Step,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Iges, ExportFormat::Stl, ExportFormat::Step];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Iges => "iges",
            ExportFormat::Stl => "stl",
            ExportFormat::Step => "step",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approximating_shell_uses_default_degrees() {
        let shell = ShellSpec::approximating("s", vec!["a0".into(), "a1".into()]);
        assert_eq!(shell.min_degree, 10);
        assert_eq!(shell.max_degree, 20);
        assert!(shell.approximation);
    }

    #[test]
    fn solid_spec_name() {
        assert_eq!(SolidSpec::from_shell("a", "s").name(), "a");
        assert_eq!(SolidSpec::from_cut("c", "a", "b").name(), "c");
    }

    #[test]
    fn export_extensions() {
        let exts: Vec<_> = ExportFormat::ALL.iter().map(|f| f.extension()).collect();
        assert_eq!(exts, ["iges", "stl", "step"]);
    }
}

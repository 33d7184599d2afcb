use std::path::PathBuf;

use aneurysm_types::{ExportFormat, Section, ShellSpec, SolidSpec};
use serde::{Deserialize, Serialize};

/// The named geometry of one study, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyDomain {
    pub sections: Vec<Section>,
    pub shells: Vec<ShellSpec>,
    pub solids: Vec<SolidSpec>,
    pub exports: Vec<ExportRecord>,
}

impl StudyDomain {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn shell(&self, name: &str) -> Option<&ShellSpec> {
        self.shells.iter().find(|s| s.name == name)
    }

    pub fn solid(&self, name: &str) -> Option<&SolidSpec> {
        self.solids.iter().find(|s| s.name() == name)
    }
}

/// A solid written to a geometry file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub solid: String,
    pub format: ExportFormat,
    pub path: PathBuf,
}

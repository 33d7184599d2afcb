//! Deterministic kernel that journals every request.
//!
//! Validates names exactly as a CAD backend would, keeps the resulting
//! domain in memory, and renders it as a study document on `save`. Geometry
//! files are recorded, not produced. Used by the pipeline tests and by the
//! command-line tool to write replayable study files.

use std::fs;
use std::path::{Path, PathBuf};

use aneurysm_types::{
    Circle, ExportFormat, KernelRequest, Point3d, Section, ShellSpec, SolidSpec, Vec3,
};
use study_format::{save_study, ExportRecord, StudyDomain, StudyMetadata};
use tracing::{debug, info};

use crate::traits::GeometryKernel;
use crate::types::{EntityKind, KernelError};

pub struct RecordingKernel {
    metadata: StudyMetadata,
    domain: StudyDomain,
    journal: Vec<KernelRequest>,
    /// Study documents rendered by `save`, in order.
    saved: Vec<(PathBuf, String)>,
    persistent: bool,
}

impl RecordingKernel {
    /// A kernel that keeps saved studies in memory only.
    pub fn new(metadata: StudyMetadata) -> Self {
        Self {
            metadata,
            domain: StudyDomain::default(),
            journal: Vec::new(),
            saved: Vec::new(),
            persistent: false,
        }
    }

    /// A kernel that also writes saved studies to disk.
    pub fn persistent(metadata: StudyMetadata) -> Self {
        Self {
            persistent: true,
            ..Self::new(metadata)
        }
    }

    pub fn metadata(&self) -> &StudyMetadata {
        &self.metadata
    }

    pub fn domain(&self) -> &StudyDomain {
        &self.domain
    }

    /// Every successfully applied request, in order.
    pub fn journal(&self) -> &[KernelRequest] {
        &self.journal
    }

    pub fn saved(&self) -> &[(PathBuf, String)] {
        &self.saved
    }

    fn section_mut(&mut self, name: &str) -> Result<&mut Section, KernelError> {
        self.domain
            .sections
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| KernelError::SectionNotFound {
                name: name.to_string(),
            })
    }

    fn require_shell(&self, name: &str) -> Result<(), KernelError> {
        match self.domain.shell(name) {
            Some(_) => Ok(()),
            None => Err(KernelError::ShellNotFound {
                name: name.to_string(),
            }),
        }
    }

    fn require_solid(&self, name: &str) -> Result<(), KernelError> {
        match self.domain.solid(name) {
            Some(_) => Ok(()),
            None => Err(KernelError::SolidNotFound {
                name: name.to_string(),
            }),
        }
    }

    fn ensure_unique(&self, kind: EntityKind, name: &str) -> Result<(), KernelError> {
        let taken = match kind {
            EntityKind::Section => self.domain.section(name).is_some(),
            EntityKind::Shell => self.domain.shell(name).is_some(),
            EntityKind::Solid => self.domain.solid(name).is_some(),
        };
        if taken {
            return Err(KernelError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn attach_circle(&mut self, section: &str, circle: Circle) -> Result<(), KernelError> {
        let target = self.section_mut(section)?;
        if target.circle.is_some() {
            return Err(KernelError::CircleAlreadyAttached {
                section: section.to_string(),
            });
        }
        target.circle = Some(circle);
        Ok(())
    }

    fn add_solid(&mut self, solid: SolidSpec) -> Result<(), KernelError> {
        match &solid {
            SolidSpec::FromShell { name, shell } => {
                self.ensure_unique(EntityKind::Solid, name)?;
                self.require_shell(shell)?;
            }
            SolidSpec::FromCut {
                name,
                minuend,
                subtrahend,
            } => {
                self.ensure_unique(EntityKind::Solid, name)?;
                self.require_solid(minuend)?;
                self.require_solid(subtrahend)?;
            }
        }
        debug!(solid = solid.name(), "add solid");
        self.domain.solids.push(solid.clone());
        self.journal.push(KernelRequest::AddSolid { solid });
        Ok(())
    }
}

impl Default for RecordingKernel {
    fn default() -> Self {
        Self::new(StudyMetadata::new("study"))
    }
}

impl GeometryKernel for RecordingKernel {
    fn add_section(&mut self, name: &str, origin: Point3d) -> Result<(), KernelError> {
        self.ensure_unique(EntityKind::Section, name)?;
        debug!(section = name, ?origin, "add section");
        self.domain.sections.push(Section::new(name, origin));
        self.journal.push(KernelRequest::AddSection {
            name: name.to_string(),
            origin,
        });
        Ok(())
    }

    fn add_circle(&mut self, section: &str, radius: f64) -> Result<(), KernelError> {
        let center = self.section_mut(section)?.origin;
        self.attach_circle(
            section,
            Circle {
                radius,
                normal: Vec3::Z,
                center,
            },
        )?;
        debug!(section, radius, "add circle");
        self.journal.push(KernelRequest::AddCircle {
            section: section.to_string(),
            radius,
        });
        Ok(())
    }

    fn add_circle_at(
        &mut self,
        section: &str,
        center: Point3d,
        normal: Vec3,
        radius: f64,
    ) -> Result<(), KernelError> {
        self.attach_circle(
            section,
            Circle {
                radius,
                normal,
                center,
            },
        )?;
        debug!(section, radius, "add circle at");
        self.journal.push(KernelRequest::AddCircleAt {
            section: section.to_string(),
            center,
            normal,
            radius,
        });
        Ok(())
    }

    fn add_shell(&mut self, shell: &ShellSpec) -> Result<(), KernelError> {
        self.ensure_unique(EntityKind::Shell, &shell.name)?;
        if shell.sections.len() < 2 {
            return Err(KernelError::Other {
                message: format!(
                    "shell {} needs at least 2 sections, got {}",
                    shell.name,
                    shell.sections.len()
                ),
            });
        }
        for name in &shell.sections {
            let section = self
                .domain
                .section(name)
                .ok_or_else(|| KernelError::SectionNotFound { name: name.clone() })?;
            if section.circle.is_none() {
                return Err(KernelError::MissingCircle {
                    section: name.clone(),
                });
            }
        }
        debug!(shell = %shell.name, sections = shell.sections.len(), "add shell");
        self.domain.shells.push(shell.clone());
        self.journal.push(KernelRequest::AddShell {
            shell: shell.clone(),
        });
        Ok(())
    }

    fn add_solid_from_shell(&mut self, name: &str, shell: &str) -> Result<(), KernelError> {
        self.add_solid(SolidSpec::from_shell(name, shell))
    }

    fn add_solid_from_cut(
        &mut self,
        name: &str,
        minuend: &str,
        subtrahend: &str,
    ) -> Result<(), KernelError> {
        self.add_solid(SolidSpec::from_cut(name, minuend, subtrahend))
    }

    fn export(
        &mut self,
        solid: &str,
        format: ExportFormat,
        path: &Path,
    ) -> Result<(), KernelError> {
        self.require_solid(solid)?;
        debug!(solid, ?format, path = %path.display(), "export");
        self.domain.exports.push(ExportRecord {
            solid: solid.to_string(),
            format,
            path: path.to_path_buf(),
        });
        self.journal.push(KernelRequest::Export {
            solid: solid.to_string(),
            format,
            path: path.to_path_buf(),
        });
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), KernelError> {
        // The document lists its own save, but the journal only records it
        // once the document is written.
        let request = KernelRequest::Save {
            path: path.to_path_buf(),
        };
        let pending: Vec<KernelRequest> = self
            .journal
            .iter()
            .cloned()
            .chain(std::iter::once(request.clone()))
            .collect();
        let document = save_study(&self.domain, &pending, &self.metadata).map_err(|e| {
            KernelError::Other {
                message: e.to_string(),
            }
        })?;

        if self.persistent {
            let io_err = |source| KernelError::Io {
                path: path.to_path_buf(),
                source,
            };
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
            fs::write(path, &document).map_err(io_err)?;
        }

        self.journal.push(request);
        info!(
            path = %path.display(),
            requests = self.journal.len(),
            persistent = self.persistent,
            "saved study"
        );
        self.saved.push((path.to_path_buf(), document));
        Ok(())
    }
}

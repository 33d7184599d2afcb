use std::collections::{BTreeMap, BTreeSet};

use aneurysm_types::{KernelRequest, SolidSpec};

use crate::types::PipelineError;

/// Named entities created so far in one run.
///
/// Owned by a single execution; requests are admitted one at a time in
/// construction order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Domain {
    /// Section name to whether a circle is attached.
    sections: BTreeMap<String, bool>,
    shells: BTreeSet<String>,
    solids: BTreeSet<String>,
    exports: usize,
}

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `request` against the current names and record its effect.
    pub fn admit(&mut self, request: &KernelRequest) -> Result<(), PipelineError> {
        match request {
            KernelRequest::AddSection { name, .. } => {
                if self.sections.contains_key(name) {
                    return Err(PipelineError::DuplicateName { name: name.clone() });
                }
                self.sections.insert(name.clone(), false);
            }
            KernelRequest::AddCircle { section, .. } | KernelRequest::AddCircleAt { section, .. } => {
                let has_circle = self
                    .sections
                    .get_mut(section)
                    .ok_or_else(|| PipelineError::SectionNotFound {
                        name: section.clone(),
                    })?;
                if *has_circle {
                    return Err(PipelineError::CircleAlreadyAttached {
                        section: section.clone(),
                    });
                }
                *has_circle = true;
            }
            KernelRequest::AddShell { shell } => {
                if let Some(missing) = shell
                    .sections
                    .iter()
                    .find(|name| !self.sections.contains_key(*name))
                {
                    return Err(PipelineError::SectionNotFound {
                        name: missing.clone(),
                    });
                }
                if !self.shells.insert(shell.name.clone()) {
                    return Err(PipelineError::DuplicateName {
                        name: shell.name.clone(),
                    });
                }
            }
            KernelRequest::AddSolid { solid } => {
                match solid {
                    SolidSpec::FromShell { shell, .. } => self.require_shell(shell)?,
                    SolidSpec::FromCut {
                        minuend,
                        subtrahend,
                        ..
                    } => {
                        self.require_solid(minuend)?;
                        self.require_solid(subtrahend)?;
                    }
                }
                if !self.solids.insert(solid.name().to_string()) {
                    return Err(PipelineError::DuplicateName {
                        name: solid.name().to_string(),
                    });
                }
            }
            KernelRequest::Export { solid, .. } => {
                self.require_solid(solid)?;
                self.exports += 1;
            }
            KernelRequest::Save { .. } => {}
        }
        Ok(())
    }

    fn require_shell(&self, name: &str) -> Result<(), PipelineError> {
        if self.shells.contains(name) {
            Ok(())
        } else {
            Err(PipelineError::ShellNotFound {
                name: name.to_string(),
            })
        }
    }

    fn require_solid(&self, name: &str) -> Result<(), PipelineError> {
        if self.solids.contains(name) {
            Ok(())
        } else {
            Err(PipelineError::SolidNotFound {
                name: name.to_string(),
            })
        }
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn has_solid(&self, name: &str) -> bool {
        self.solids.contains(name)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn shell_count(&self) -> usize {
        self.shells.len()
    }

    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    pub fn export_count(&self) -> usize {
        self.exports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aneurysm_types::{Point3d, ShellSpec};

    fn section(name: &str) -> KernelRequest {
        KernelRequest::AddSection {
            name: name.to_string(),
            origin: Point3d::ORIGIN,
        }
    }

    #[test]
    fn circle_needs_existing_section() {
        let mut domain = Domain::new();
        let err = domain
            .admit(&KernelRequest::AddCircle {
                section: "fluid3".into(),
                radius: 1.0,
            })
            .unwrap_err();
        assert!(matches!(err, PipelineError::SectionNotFound { name } if name == "fluid3"));
    }

    #[test]
    fn shell_reports_first_missing_section() {
        let mut domain = Domain::new();
        domain.admit(&section("a0")).unwrap();
        let shell = ShellSpec::approximating("s", vec!["a0".into(), "a1".into(), "a2".into()]);
        let err = domain.admit(&KernelRequest::AddShell { shell }).unwrap_err();
        assert!(matches!(err, PipelineError::SectionNotFound { name } if name == "a1"));
    }

    #[test]
    fn duplicate_section_is_rejected() {
        let mut domain = Domain::new();
        domain.admit(&section("a0")).unwrap();
        assert!(matches!(
            domain.admit(&section("a0")),
            Err(PipelineError::DuplicateName { .. })
        ));
    }

    #[test]
    fn cut_needs_solids() {
        let mut domain = Domain::new();
        let cut = KernelRequest::AddSolid {
            solid: SolidSpec::from_cut("ILT", "aneurysm_outer", "Lumen"),
        };
        assert!(matches!(
            domain.admit(&cut),
            Err(PipelineError::SolidNotFound { name }) if name == "aneurysm_outer"
        ));
        assert_eq!(domain.solid_count(), 0);
    }
}

use std::path::Path;

use aneurysm_types::{ExportFormat, KernelRequest, Point3d, ShellSpec, SolidSpec, Vec3};

use crate::types::KernelError;

/// The construction capabilities consumed by the generation pipeline.
///
/// Names are the only handles: every operation refers to sections, shells
/// and solids created by earlier calls. Implementations must fail rather than
/// skip when a referenced name does not exist.
pub trait GeometryKernel {
    /// Create a named cross-section plane through `origin`.
    fn add_section(&mut self, name: &str, origin: Point3d) -> Result<(), KernelError>;

    /// Attach a circle centered on the section origin, normal to the axis.
    fn add_circle(&mut self, section: &str, radius: f64) -> Result<(), KernelError>;

    /// Attach a circle with an explicit center and plane normal.
    fn add_circle_at(
        &mut self,
        section: &str,
        center: Point3d,
        normal: Vec3,
        radius: f64,
    ) -> Result<(), KernelError>;

    /// Loft a shell through the listed sections, in order.
    fn add_shell(&mut self, shell: &ShellSpec) -> Result<(), KernelError>;

    /// Close a shell into a solid.
    fn add_solid_from_shell(&mut self, name: &str, shell: &str) -> Result<(), KernelError>;

    /// Boolean difference `minuend - subtrahend`.
    fn add_solid_from_cut(
        &mut self,
        name: &str,
        minuend: &str,
        subtrahend: &str,
    ) -> Result<(), KernelError>;

    /// Write a solid to a geometry file.
    fn export(&mut self, solid: &str, format: ExportFormat, path: &Path)
        -> Result<(), KernelError>;

    /// Persist the study state.
    fn save(&mut self, path: &Path) -> Result<(), KernelError>;

    fn export_iges(&mut self, solid: &str, path: &Path) -> Result<(), KernelError> {
        self.export(solid, ExportFormat::Iges, path)
    }

    fn export_stl(&mut self, solid: &str, path: &Path) -> Result<(), KernelError> {
        self.export(solid, ExportFormat::Stl, path)
    }

    fn export_step(&mut self, solid: &str, path: &Path) -> Result<(), KernelError> {
        self.export(solid, ExportFormat::Step, path)
    }

    /// Dispatch one declarative request to the matching operation.
    fn apply(&mut self, request: &KernelRequest) -> Result<(), KernelError> {
        match request {
            KernelRequest::AddSection { name, origin } => self.add_section(name, *origin),
            KernelRequest::AddCircle { section, radius } => self.add_circle(section, *radius),
            KernelRequest::AddCircleAt {
                section,
                center,
                normal,
                radius,
            } => self.add_circle_at(section, *center, *normal, *radius),
            KernelRequest::AddShell { shell } => self.add_shell(shell),
            KernelRequest::AddSolid { solid } => match solid {
                SolidSpec::FromShell { name, shell } => self.add_solid_from_shell(name, shell),
                SolidSpec::FromCut {
                    name,
                    minuend,
                    subtrahend,
                } => self.add_solid_from_cut(name, minuend, subtrahend),
            },
            KernelRequest::Export {
                solid,
                format,
                path,
            } => self.export(solid, *format, path),
            KernelRequest::Save { path } => self.save(path),
        }
    }
}

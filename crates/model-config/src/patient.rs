use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

/// Resampled points per raw centerline segment.
pub const DEFAULT_RESAMPLE_FACTOR: usize = 1;

/// Inputs of a patient-specific run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatientConfig {
    /// Comma-separated `x,y,z` centerline samples.
    pub centerline_file: PathBuf,
    /// Comma-separated `z,area` samples of the outer wall.
    pub wall_area_file: PathBuf,
    /// Comma-separated `z,area` samples of the lumen.
    pub lumen_area_file: PathBuf,
    /// Orient circles along the centerline tangent instead of the z axis.
    #[serde(default)]
    pub use_tangent_normal: bool,
    #[serde(default = "default_resample_factor")]
    pub resample_factor: usize,
}

fn default_resample_factor() -> usize {
    DEFAULT_RESAMPLE_FACTOR
}

impl PatientConfig {
    pub fn new(
        centerline_file: impl Into<PathBuf>,
        wall_area_file: impl Into<PathBuf>,
        lumen_area_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            centerline_file: centerline_file.into(),
            wall_area_file: wall_area_file.into(),
            lumen_area_file: lumen_area_file.into(),
            use_tangent_normal: false,
            resample_factor: DEFAULT_RESAMPLE_FACTOR,
        }
    }

    pub fn with_tangent_normal(mut self, use_tangent_normal: bool) -> Self {
        self.use_tangent_normal = use_tangent_normal;
        self
    }

    pub fn with_resample_factor(mut self, resample_factor: usize) -> Self {
        self.resample_factor = resample_factor;
        self
    }

    /// Resolve relative input paths against `data_dir`.
    pub fn relative_to(mut self, data_dir: &Path) -> Self {
        for path in [
            &mut self.centerline_file,
            &mut self.wall_area_file,
            &mut self.lumen_area_file,
        ] {
            if path.is_relative() {
                *path = data_dir.join(&*path);
            }
        }
        self
    }
}

/// Read a patient-specific run description from a JSON file.
pub fn load_patient_config(path: &Path) -> Result<PatientConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_data_dir() {
        let cfg = PatientConfig::new("cl.txt", "/abs/wall.txt", "lumen.txt")
            .relative_to(Path::new("/data"));
        assert_eq!(cfg.centerline_file, PathBuf::from("/data/cl.txt"));
        assert_eq!(cfg.wall_area_file, PathBuf::from("/abs/wall.txt"));
        assert_eq!(cfg.lumen_area_file, PathBuf::from("/data/lumen.txt"));
    }

    #[test]
    fn builder_defaults() {
        let cfg = PatientConfig::new("a", "b", "c");
        assert!(!cfg.use_tangent_normal);
        assert_eq!(cfg.resample_factor, 1);
        let cfg = cfg.with_tangent_normal(true).with_resample_factor(4);
        assert!(cfg.use_tangent_normal);
        assert_eq!(cfg.resample_factor, 4);
    }
}

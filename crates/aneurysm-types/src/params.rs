use serde::{Deserialize, Serialize};

pub const DEFAULT_LENGTH: f64 = 100.0;
pub const DEFAULT_RADIUS_NONDILATED: f64 = 5.0;
pub const DEFAULT_RADIUS_SAC: f64 = 12.0;
pub const DEFAULT_WALL_THICKNESS: f64 = 1.0;
pub const DEFAULT_ILT_THICKNESS: f64 = 0.0;
pub const DEFAULT_X_SHIFT: f64 = 4.0;
pub const DEFAULT_Y_SHIFT: f64 = 0.0;
pub const DEFAULT_SECTION_COUNT: usize = 11;

/// Fully resolved scalar inputs of one idealized generation run.
///
/// Values are taken as given: negative thicknesses, a sac narrower than the
/// neck or an even section count are not rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Total longitudinal length.
    pub length: f64,
    /// Radius of the healthy (non-dilated) vessel.
    pub radius_nondilated: f64,
    /// Radius at the sac apex.
    pub radius_sac: f64,
    pub wall_thickness_intima: f64,
    pub wall_thickness_media: f64,
    pub wall_thickness_adventitia: f64,
    /// Intraluminal thrombus thickness at the sac apex.
    pub ilt_thickness: f64,
    /// Lateral offset of the sac apex along x.
    pub x_shift: f64,
    /// Lateral offset of the sac apex along y.
    pub y_shift: f64,
    /// Number of baseline sections. Expected odd so a middle section exists.
    pub n_sections: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            radius_nondilated: DEFAULT_RADIUS_NONDILATED,
            radius_sac: DEFAULT_RADIUS_SAC,
            wall_thickness_intima: DEFAULT_WALL_THICKNESS,
            wall_thickness_media: DEFAULT_WALL_THICKNESS,
            wall_thickness_adventitia: DEFAULT_WALL_THICKNESS,
            ilt_thickness: DEFAULT_ILT_THICKNESS,
            x_shift: DEFAULT_X_SHIFT,
            y_shift: DEFAULT_Y_SHIFT,
            n_sections: DEFAULT_SECTION_COUNT,
        }
    }
}

impl Parameters {
    /// Index of the sac apex section.
    pub fn mid_index(&self) -> usize {
        self.n_sections / 2
    }
}

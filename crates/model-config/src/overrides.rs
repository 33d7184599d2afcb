use aneurysm_types::Parameters;
use serde::Deserialize;

/// Optional per-field overrides of [`Parameters`].
///
/// Field names in config files follow the command-line spelling
/// (`radius_dilated`, `wall_thickness_ILT`). Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParameterOverrides {
    pub length: Option<f64>,
    pub radius_nondilated: Option<f64>,
    #[serde(rename = "radius_dilated", alias = "radius_sac")]
    pub radius_sac: Option<f64>,
    pub wall_thickness_intima: Option<f64>,
    pub wall_thickness_media: Option<f64>,
    pub wall_thickness_adventitia: Option<f64>,
    #[serde(rename = "wall_thickness_ILT", alias = "wall_thickness_ilt")]
    pub ilt_thickness: Option<f64>,
    pub x_shift: Option<f64>,
    pub y_shift: Option<f64>,
    pub n_sections: Option<usize>,
}

impl ParameterOverrides {
    /// Field-wise layering: values set on `self` win, unset fields fall
    /// through to `lower`.
    pub fn or(&self, lower: &ParameterOverrides) -> ParameterOverrides {
        ParameterOverrides {
            length: self.length.or(lower.length),
            radius_nondilated: self.radius_nondilated.or(lower.radius_nondilated),
            radius_sac: self.radius_sac.or(lower.radius_sac),
            wall_thickness_intima: self.wall_thickness_intima.or(lower.wall_thickness_intima),
            wall_thickness_media: self.wall_thickness_media.or(lower.wall_thickness_media),
            wall_thickness_adventitia: self
                .wall_thickness_adventitia
                .or(lower.wall_thickness_adventitia),
            ilt_thickness: self.ilt_thickness.or(lower.ilt_thickness),
            x_shift: self.x_shift.or(lower.x_shift),
            y_shift: self.y_shift.or(lower.y_shift),
            n_sections: self.n_sections.or(lower.n_sections),
        }
    }

    /// Fill every unset field from [`Parameters::default`].
    pub fn resolve(&self) -> Parameters {
        let d = Parameters::default();
        Parameters {
            length: self.length.unwrap_or(d.length),
            radius_nondilated: self.radius_nondilated.unwrap_or(d.radius_nondilated),
            radius_sac: self.radius_sac.unwrap_or(d.radius_sac),
            wall_thickness_intima: self.wall_thickness_intima.unwrap_or(d.wall_thickness_intima),
            wall_thickness_media: self.wall_thickness_media.unwrap_or(d.wall_thickness_media),
            wall_thickness_adventitia: self
                .wall_thickness_adventitia
                .unwrap_or(d.wall_thickness_adventitia),
            ilt_thickness: self.ilt_thickness.unwrap_or(d.ilt_thickness),
            x_shift: self.x_shift.unwrap_or(d.x_shift),
            y_shift: self.y_shift.unwrap_or(d.y_shift),
            n_sections: self.n_sections.unwrap_or(d.n_sections),
        }
    }
}

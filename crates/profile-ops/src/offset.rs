//! Concentric wall layers and the lumen thrombus carve-out.

use aneurysm_types::{LayerKind, Parameters};
use tracing::debug;

use crate::error::OpError;
use crate::radius::{IdealizedProfile, RadiusSample};

/// Wall thicknesses inside the outer surface of `kind`, innermost first.
fn walls_inside(params: &Parameters, kind: LayerKind) -> Vec<f64> {
    let walls = [
        params.wall_thickness_intima,
        params.wall_thickness_media,
        params.wall_thickness_adventitia,
    ];
    let count = match kind {
        LayerKind::Lumen => 0,
        LayerKind::Intima => 1,
        LayerKind::Media => 2,
        LayerKind::Adventitia => 3,
    };
    walls[..count].to_vec()
}

/// Total wall thickness between the lumen surface and the outer surface of `kind`.
pub fn cumulative_thickness(params: &Parameters, kind: LayerKind) -> f64 {
    walls_inside(params, kind).iter().sum()
}

/// The sac blend of `kind`, with both bounds grown by each inner wall in turn.
pub fn layer_profile(params: &Parameters, kind: LayerKind) -> Result<IdealizedProfile, OpError> {
    let lumen = IdealizedProfile::from_parameters(params)?;
    Ok(walls_inside(params, kind)
        .into_iter()
        .fold(lumen, |profile, wall| profile.grown(wall)))
}

/// Adjustment applied to blended radii after offsetting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarveOut {
    None,
    /// Thrombus lining the sac: the full thickness is removed at the apex and
    /// half of it on the sections next to the apex.
    Thrombus { ilt_thickness: f64 },
}

impl CarveOut {
    pub fn for_layer(params: &Parameters, kind: LayerKind) -> Self {
        match kind {
            LayerKind::Lumen => CarveOut::Thrombus {
                ilt_thickness: params.ilt_thickness,
            },
            _ => CarveOut::None,
        }
    }

    pub fn apply(&self, sample: RadiusSample) -> f64 {
        match *self {
            CarveOut::None => sample.radius,
            CarveOut::Thrombus { ilt_thickness } => {
                if sample.sac_apex {
                    sample.radius - ilt_thickness
                } else if sample.apex_distance == 1 {
                    sample.radius - ilt_thickness / 2.0
                } else {
                    sample.radius
                }
            }
        }
    }
}

/// Radius of each baseline section of `kind`, indexed like the baseline.
pub fn layer_radii(params: &Parameters, kind: LayerKind) -> Result<Vec<f64>, OpError> {
    let profile = layer_profile(params, kind)?;
    let carve_out = CarveOut::for_layer(params, kind);
    let radii: Vec<f64> = profile
        .samples()
        .into_iter()
        .map(|sample| carve_out.apply(sample))
        .collect();
    debug!(layer = %kind, ?radii, "layer radii");
    Ok(radii)
}

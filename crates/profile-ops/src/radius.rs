//! Longitudinal radius profiles.

use std::f64::consts::PI;

use aneurysm_types::Parameters;
use centerline::AreaSample;

use crate::error::OpError;

/// Sections on either side of the apex over which the sac blends into the neck.
pub const TRANSITION_RANGE: usize = 2;

/// Radius as a function of longitudinal position.
pub trait RadiusProfile {
    fn radius_at(&self, z: f64) -> f64;
}

/// Radius of one baseline section of an idealized layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusSample {
    pub radius: f64,
    /// Baseline sections between this one and the apex.
    pub apex_distance: usize,
    /// Set only on the middle section, where the radius is the sac radius.
    pub sac_apex: bool,
}

/// Piecewise-linear sac blend of an idealized layer.
///
/// The middle section carries the sac radius, the [`TRANSITION_RANGE`]
/// sections on each side blend linearly towards the non-dilated radius, and
/// all others carry the non-dilated radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealizedProfile {
    pub nondilated: f64,
    pub sac: f64,
    pub n_sections: usize,
    pub length: f64,
}

impl IdealizedProfile {
    pub fn new(
        nondilated: f64,
        sac: f64,
        n_sections: usize,
        length: f64,
    ) -> Result<Self, OpError> {
        if n_sections < 3 {
            return Err(OpError::InvalidSectionCount { n_sections });
        }
        Ok(Self {
            nondilated,
            sac,
            n_sections,
            length,
        })
    }

    /// The lumen profile of a parameter set.
    pub fn from_parameters(params: &Parameters) -> Result<Self, OpError> {
        Self::new(
            params.radius_nondilated,
            params.radius_sac,
            params.n_sections,
            params.length,
        )
    }

    /// Same blend with both bounds grown by `thickness`.
    pub fn grown(&self, thickness: f64) -> Self {
        Self {
            nondilated: self.nondilated + thickness,
            sac: self.sac + thickness,
            ..*self
        }
    }

    pub fn mid(&self) -> usize {
        self.n_sections / 2
    }

    pub fn sample(&self, index: usize) -> RadiusSample {
        let apex_distance = index.abs_diff(self.mid());
        RadiusSample {
            radius: self.blend(apex_distance as f64),
            apex_distance,
            sac_apex: apex_distance == 0,
        }
    }

    pub fn samples(&self) -> Vec<RadiusSample> {
        (0..self.n_sections).map(|i| self.sample(i)).collect()
    }

    fn blend(&self, distance: f64) -> f64 {
        let range = TRANSITION_RANGE as f64;
        if distance <= range {
            self.sac + (self.nondilated - self.sac) * distance / range
        } else {
            self.nondilated
        }
    }
}

impl RadiusProfile for IdealizedProfile {
    /// The blend evaluated at the fractional section index of `z`.
    fn radius_at(&self, z: f64) -> f64 {
        let step = self.length / (self.n_sections - 1) as f64;
        let position = if step > 0.0 { z / step } else { self.mid() as f64 };
        self.blend((position - self.mid() as f64).abs())
    }
}

/// Radius interpolated from cross-sectional area measurements.
///
/// Areas are converted with `r = sqrt(area / π)` and their raw abscissa is
/// rescaled onto `[0, arc_length]`. Evaluation is linear, extends the end
/// segments beyond the samples and never returns a negative radius.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaProfile {
    z: Vec<f64>,
    radius: Vec<f64>,
}

impl AreaProfile {
    pub fn from_samples(samples: &[AreaSample], arc_length: f64) -> Result<Self, OpError> {
        if samples.len() < 2 {
            return Err(OpError::TooFewAreaSamples {
                provided: samples.len(),
            });
        }
        if let Some((index, s)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| !s.z.is_finite() || !s.area.is_finite() || s.area < 0.0)
        {
            return Err(OpError::InvalidArea {
                index,
                z: s.z,
                area: s.area,
            });
        }
        let z_max = samples.iter().map(|s| s.z).fold(f64::NEG_INFINITY, f64::max);
        if z_max <= 0.0 {
            return Err(OpError::InvalidAreaAbscissa { z_max });
        }

        let mut pairs: Vec<(f64, f64)> = samples
            .iter()
            .map(|s| (s.z / z_max * arc_length, (s.area / PI).sqrt()))
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (z, radius) = pairs.into_iter().unzip();
        Ok(Self { z, radius })
    }

    /// Rescaled abscissa of the samples, ascending.
    pub fn knots(&self) -> &[f64] {
        &self.z
    }

    /// Sample radii, parallel to [`knots`](Self::knots).
    pub fn radii(&self) -> &[f64] {
        &self.radius
    }
}

impl RadiusProfile for AreaProfile {
    fn radius_at(&self, z: f64) -> f64 {
        let last = self.z.len() - 2;
        let i = self.z.partition_point(|&k| k <= z).saturating_sub(1).min(last);
        let (z0, z1) = (self.z[i], self.z[i + 1]);
        let (r0, r1) = (self.radius[i], self.radius[i + 1]);
        let r = if z1 > z0 {
            r0 + (r1 - r0) * (z - z0) / (z1 - z0)
        } else {
            r0
        };
        r.max(0.0)
    }
}

use aneurysm_types::{Point3d, Vec3};
use tracing::{debug, info, instrument};

use crate::error::{CenterlineError, DataError, GeometryError};
use crate::spline::SplineCurve;
use crate::COINCIDENCE_TOLERANCE;

/// Polyline subdivisions per resampled segment used for arc length.
pub const ARC_LENGTH_SUBDIVISIONS: usize = 32;

/// A resampled centerline: points, unit tangents and total arc length.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterlinePath {
    points: Vec<Point3d>,
    tangents: Vec<Vec3>,
    length: f64,
}

impl CenterlinePath {
    /// Smooth and densify raw samples.
    ///
    /// The result has `resample_factor * (raw.len() - 1) + 1` points; with a
    /// factor of 1 the raw samples are reproduced exactly.
    #[instrument(skip(raw), fields(raw_points = raw.len()))]
    pub fn from_samples(raw: &[Point3d], resample_factor: usize) -> Result<Self, CenterlineError> {
        if resample_factor == 0 {
            return Err(CenterlineError::InvalidResampleFactor {
                factor: resample_factor,
            });
        }
        if raw.len() < 2 {
            return Err(DataError::TooFewSamples {
                required: 2,
                provided: raw.len(),
            }
            .into());
        }

        let curve = SplineCurve::through(raw)?;
        let count = resample_factor * (raw.len() - 1) + 1;
        let points = curve.sample(count);
        let tangents = compute_tangents(&points)?;
        let length = curve.arc_length((count - 1) * ARC_LENGTH_SUBDIVISIONS);

        info!(points = points.len(), length, "resampled centerline");
        Ok(Self {
            points,
            tangents,
            length,
        })
    }

    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    pub fn tangents(&self) -> &[Vec3] {
        &self.tangents
    }

    /// Total arc length of the smoothed curve.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Point3d, &Vec3)> {
        self.points.iter().zip(&self.tangents)
    }
}

/// Unit tangents by central differences, one-sided at both ends.
///
/// Fails if two consecutive points coincide or a difference vanishes or is
/// not finite.
pub fn compute_tangents(points: &[Point3d]) -> Result<Vec<Vec3>, GeometryError> {
    let n = points.len();
    if n < 2 {
        return Err(GeometryError::DegenerateTangent { index: 0 });
    }
    if let Some(index) = points
        .windows(2)
        .position(|w| w[0].distance_to(&w[1]) < COINCIDENCE_TOLERANCE)
    {
        return Err(GeometryError::CoincidentPoints { index });
    }

    (0..n)
        .map(|i| -> Result<Vec3, GeometryError> {
            let d = if i == 0 {
                points[1] - points[0]
            } else if i == n - 1 {
                points[n - 1] - points[n - 2]
            } else {
                (points[i + 1] - points[i - 1]) / 2.0
            };
            let t = d
                .normalized()
                .ok_or(GeometryError::DegenerateTangent { index: i })?;
            debug!(index = i, tangent = ?t.to_array(), "tangent");
            Ok(t)
        })
        .collect()
}

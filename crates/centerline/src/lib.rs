//! Patient-specific centerline handling.
//!
//! Raw centerline samples are smoothed with one not-a-knot cubic spline per
//! axis (uniform parameter `t ∈ [0, 1]`), resampled, and annotated with unit
//! tangents and total arc length.

pub mod error;
pub mod io;
pub mod path;
pub mod spline;

pub use error::{CenterlineError, DataError, GeometryError};
pub use io::{load_area_samples, load_centerline, write_centerline, AreaSample};
pub use path::{compute_tangents, CenterlinePath, ARC_LENGTH_SUBDIVISIONS};
pub use spline::{linspace, CubicSpline, SplineCurve};

/// Consecutive points closer than this are treated as coincident.
pub const COINCIDENCE_TOLERANCE: f64 = 1e-9;

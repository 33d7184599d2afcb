//! Sections along a patient-specific centerline.

use aneurysm_types::{Circle, Point3d, Vec3};
use centerline::CenterlinePath;
use tracing::debug;

use crate::radius::RadiusProfile;

/// Orientation of the circles placed on a centerline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalMode {
    /// Every circle lies in a horizontal plane.
    #[default]
    Vertical,
    /// Every circle is perpendicular to the local tangent.
    Tangent,
}

impl NormalMode {
    pub fn from_flag(use_tangent_normal: bool) -> Self {
        if use_tangent_normal {
            NormalMode::Tangent
        } else {
            NormalMode::Vertical
        }
    }

    fn normal(self, tangent: Vec3) -> Vec3 {
        match self {
            NormalMode::Vertical => Vec3::Z,
            NormalMode::Tangent => tangent,
        }
    }
}

/// A section whose circle is centered on its own origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSection {
    pub name: String,
    pub circle: Circle,
}

impl CircleSection {
    pub fn origin(&self) -> Point3d {
        self.circle.center
    }
}

/// One section per centerline point, named `{prefix}{i}`.
///
/// The radius is looked up at the point's `z` coordinate.
pub fn plan_centerline_sections(
    path: &CenterlinePath,
    profile: &impl RadiusProfile,
    prefix: &str,
    mode: NormalMode,
) -> Vec<CircleSection> {
    let sections: Vec<CircleSection> = path
        .iter()
        .enumerate()
        .map(|(i, (point, tangent))| CircleSection {
            name: format!("{prefix}{i}"),
            circle: Circle {
                radius: profile.radius_at(point.z),
                normal: mode.normal(*tangent),
                center: *point,
            },
        })
        .collect();
    debug!(prefix, sections = sections.len(), ?mode, "planned centerline sections");
    sections
}

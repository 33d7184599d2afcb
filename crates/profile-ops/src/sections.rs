//! Longitudinal placement of idealized sections.
//!
//! Layout happens in two phases. [`SectionLayout::longitudinal`] places the
//! evenly spaced baseline sections together with the smoothing control
//! points near both ends, then [`SectionLayout::apply_sac_shift`] moves the
//! apex and its two neighbours laterally.

use aneurysm_types::{LayerKind, Parameters, Point3d};
use tracing::instrument;

use crate::error::OpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRole {
    Baseline,
    /// Control point between the first and second baseline sections.
    LeadIn,
    /// Control point between the last two baseline sections.
    LeadOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSection {
    pub name: String,
    pub origin: Point3d,
    pub role: SectionRole,
    /// Baseline index whose radius this section carries.
    pub anchor: usize,
}

/// All sections of one layer, in loft order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    prefix: String,
    n_sections: usize,
    step: f64,
    sections: Vec<PlannedSection>,
}

impl SectionLayout {
    pub fn longitudinal(length: f64, n_sections: usize, prefix: &str) -> Result<Self, OpError> {
        if n_sections < 3 {
            return Err(OpError::InvalidSectionCount { n_sections });
        }
        let last = n_sections - 1;
        let step = length / last as f64;
        let baseline_z = |i: usize| length * (i as f64 / last as f64);
        let section = |suffix: String, z: f64, role, anchor| PlannedSection {
            name: format!("{prefix}{suffix}"),
            origin: Point3d::on_axis(z),
            role,
            anchor,
        };

        let mut sections = Vec::with_capacity(n_sections + 4);
        for i in 0..n_sections {
            if i == last {
                let z = baseline_z(last - 1);
                let (role, anchor) = (SectionRole::LeadOut, last - 1);
                sections.push(section(format!("{last}a"), z + step / 2.0, role, anchor));
                sections.push(section(format!("{last}b"), z + 0.75 * step, role, anchor));
            }
            sections.push(section(i.to_string(), baseline_z(i), SectionRole::Baseline, i));
            if i == 0 {
                let z = baseline_z(0);
                sections.push(section("0a".into(), z + step / 3.0, SectionRole::LeadIn, 0));
                sections.push(section("0b".into(), z + 2.0 * step / 3.0, SectionRole::LeadIn, 0));
            }
        }

        Ok(Self {
            prefix: prefix.to_string(),
            n_sections,
            step,
            sections,
        })
    }

    /// Moves the apex section by the full shift and its two neighbours by half.
    pub fn apply_sac_shift(&mut self, x_shift: f64, y_shift: f64) {
        let mid = self.mid();
        for section in &mut self.sections {
            if section.role != SectionRole::Baseline {
                continue;
            }
            let (x, y) = match section.anchor.abs_diff(mid) {
                0 => (x_shift, y_shift),
                1 => (x_shift / 2.0, y_shift / 2.0),
                _ => continue,
            };
            section.origin = section.origin.at_lateral(x, y);
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn n_sections(&self) -> usize {
        self.n_sections
    }

    pub fn mid(&self) -> usize {
        self.n_sections / 2
    }

    /// Baseline spacing along the axis.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn sections(&self) -> &[PlannedSection] {
        &self.sections
    }

    pub fn baseline(&self, index: usize) -> Option<&PlannedSection> {
        self.sections
            .iter()
            .find(|s| s.role == SectionRole::Baseline && s.anchor == index)
    }

    pub fn loft_order(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Shifted layout for one layer of an idealized run.
#[instrument(skip(params), fields(n_sections = params.n_sections))]
pub fn plan_sections(params: &Parameters, kind: LayerKind) -> Result<SectionLayout, OpError> {
    let mut layout = SectionLayout::longitudinal(params.length, params.n_sections, kind.prefix())?;
    layout.apply_sac_shift(params.x_shift, params.y_shift);
    Ok(layout)
}

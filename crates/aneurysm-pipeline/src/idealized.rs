use std::path::Path;

use aneurysm_types::{KernelRequest, LayerKind, Parameters, ShellSpec, SolidSpec};
use profile_ops::{layer_radii, plan_sections, SectionLayout};
use tracing::{debug, info, instrument};

use crate::exports::ExportPlan;
use crate::types::PipelineError;

/// Sections and radii of one idealized layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPlan {
    pub kind: LayerKind,
    pub layout: SectionLayout,
    /// Radius per baseline index.
    pub radii: Vec<f64>,
}

impl LayerPlan {
    pub fn new(params: &Parameters, kind: LayerKind) -> Result<Self, PipelineError> {
        Ok(Self {
            kind,
            layout: plan_sections(params, kind)?,
            radii: layer_radii(params, kind)?,
        })
    }

    /// Section creations, then circle attachments, then the loft.
    ///
    /// Control points carry the radius of the baseline section they are
    /// anchored to.
    pub fn requests(&self) -> Vec<KernelRequest> {
        let sections = self.layout.sections();
        let mut requests = Vec::with_capacity(2 * sections.len() + 1);
        requests.extend(sections.iter().map(|s| KernelRequest::AddSection {
            name: s.name.clone(),
            origin: s.origin,
        }));
        requests.extend(sections.iter().map(|s| KernelRequest::AddCircle {
            section: s.name.clone(),
            radius: self.radii[s.anchor],
        }));
        requests.push(KernelRequest::AddShell {
            shell: ShellSpec::approximating(self.kind.shell_name(), self.layout.loft_order()),
        });
        requests
    }
}

/// The solid chain, in dependency order.
pub fn idealized_solids() -> Vec<SolidSpec> {
    let shell = |kind: LayerKind| kind.shell_name();
    vec![
        SolidSpec::from_shell("intima_outer", shell(LayerKind::Intima)),
        SolidSpec::from_shell("aneurysm_fluid", shell(LayerKind::Lumen)),
        SolidSpec::from_cut("aneurysm_intima_ILT", "intima_outer", "aneurysm_fluid"),
        SolidSpec::from_shell("media_outer", shell(LayerKind::Media)),
        SolidSpec::from_cut("media_solid", "media_outer", "intima_outer"),
        SolidSpec::from_shell("adventitia_outer", shell(LayerKind::Adventitia)),
        SolidSpec::from_cut("adventitia_solid", "adventitia_outer", "media_outer"),
    ]
}

/// Every kernel request of an idealized run, in construction order.
#[instrument(skip(params), fields(n_sections = params.n_sections))]
pub fn plan_idealized(
    params: &Parameters,
    output_dir: &Path,
) -> Result<Vec<KernelRequest>, PipelineError> {
    let mut requests = Vec::new();
    for kind in LayerKind::ALL {
        let layer = LayerPlan::new(params, kind)?;
        debug!(layer = %kind, sections = layer.layout.len(), "planned layer");
        requests.extend(layer.requests());
    }
    requests.extend(
        idealized_solids()
            .into_iter()
            .map(|solid| KernelRequest::AddSolid { solid }),
    );
    requests.extend(ExportPlan::idealized().requests(output_dir));
    info!(requests = requests.len(), "planned idealized run");
    Ok(requests)
}

pub mod error;
pub mod offset;
pub mod patient;
pub mod radius;
pub mod sections;

pub use error::OpError;
pub use offset::{cumulative_thickness, layer_profile, layer_radii, CarveOut};
pub use patient::{plan_centerline_sections, CircleSection, NormalMode};
pub use radius::{AreaProfile, IdealizedProfile, RadiusProfile, RadiusSample, TRANSITION_RANGE};
pub use sections::{plan_sections, PlannedSection, SectionLayout, SectionRole};

/// Errors from profile and section planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OpError {
    #[error("need at least 3 sections, got {n_sections}")]
    InvalidSectionCount { n_sections: usize },

    #[error("need at least 2 area samples, got {provided}")]
    TooFewAreaSamples { provided: usize },

    #[error("area sample {index} is negative or not finite: z = {z}, area = {area}")]
    InvalidArea { index: usize, z: f64, area: f64 },

    #[error("largest area abscissa must be positive, got {z_max}")]
    InvalidAreaAbscissa { z_max: f64 },
}

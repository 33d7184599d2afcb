use centerline::CenterlineError;
use geometry_kernel::KernelError;
use profile_ops::OpError;

/// Errors from planning or executing a generation run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("section not found: {name}")]
    SectionNotFound { name: String },

    #[error("shell not found: {name}")]
    ShellNotFound { name: String },

    #[error("solid not found: {name}")]
    SolidNotFound { name: String },

    #[error("`{name}` is already defined")]
    DuplicateName { name: String },

    #[error("section {section} already has a circle")]
    CircleAlreadyAttached { section: String },

    #[error("centerline error: {0}")]
    Centerline(#[from] CenterlineError),

    #[error("operation error: {0}")]
    Op(#[from] OpError),

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
}

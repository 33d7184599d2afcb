use std::fmt;
use std::path::PathBuf;

/// Kinds of named entity held by a kernel domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Section,
    Shell,
    Solid,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Section => "section",
            EntityKind::Shell => "shell",
            EntityKind::Solid => "solid",
        })
    }
}

/// Errors from kernel operations.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    #[error("section not found: {name}")]
    SectionNotFound { name: String },

    #[error("shell not found: {name}")]
    ShellNotFound { name: String },

    #[error("solid not found: {name}")]
    SolidNotFound { name: String },

    #[error("{kind} `{name}` already exists")]
    DuplicateName { kind: EntityKind, name: String },

    #[error("section {section} already has a circle")]
    CircleAlreadyAttached { section: String },

    #[error("section {section} has no circle to loft through")]
    MissingCircle { section: String },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("kernel error: {message}")]
    Other { message: String },
}

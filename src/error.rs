use std::{fmt::Display, path::PathBuf};

/// A target name or dependency that cannot be written into a Makefile rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(thiserror::Error)]
pub enum InvalidArgument {
    #[error("target name cannot be empty")]
    EmptyName,
    #[error("target name cannot contain space")]
    SpaceInName,
    #[error("target dependency name cannot be empty")]
    EmptyDependency,
    #[error("target dependency name cannot contain space")]
    SpaceInDependency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Read,
    Write,
    OpenAppend,
}

impl Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoOperation::Read => write!(f, "reading Makefile at"),
            IoOperation::Write => write!(f, "writing Makefile at"),
            IoOperation::OpenAppend => write!(f, "opening"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateStage {
    Parse,
    Execute,
}

impl Display for TemplateStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateStage::Parse => write!(f, "parsing template"),
            TemplateStage::Execute => write!(f, "executing template"),
        }
    }
}

#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum MakefileError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error("{operation} {}: {source}", .path.display())]
    Io {
        operation: IoOperation,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{stage}: {source}")]
    Template {
        stage: TemplateStage,
        source: anyhow::Error,
    },
}

/// Coarse classification of a [`MakefileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Io,
    Template,
}

impl MakefileError {
    pub fn io(operation: IoOperation, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn template(stage: TemplateStage, source: impl Into<anyhow::Error>) -> Self {
        Self::Template {
            stage,
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MakefileError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            MakefileError::Io { .. } => ErrorKind::Io,
            MakefileError::Template { .. } => ErrorKind::Template,
        }
    }
}

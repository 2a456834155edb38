use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Which of the two inputs a read failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    AdminConf,
    ClusterDocument,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::AdminConf => f.write_str("admin kube config"),
            Input::ClusterDocument => f.write_str("cluster document"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("reading {input} at {}", .path.display())]
    Read {
        input: Input,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing cluster document {} as JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cluster document has no `{key}` object")]
    Schema { key: &'static str },
    #[error("writing patched cluster document to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PatchError {
    /// True when nothing could be read because a path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PatchError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

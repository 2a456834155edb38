pub mod admin;
pub mod cluster;
pub mod error;
pub mod patch;
pub mod tracing;

pub use admin::read_admin_conf;
pub use cluster::{ClusterDocument, CONF_ANNOTATION};
pub use error::{Input, PatchError};
pub use patch::*;

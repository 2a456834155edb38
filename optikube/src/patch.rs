use std::path::{Path, PathBuf};

use crate::{admin::read_admin_conf, cluster::ClusterDocument, error::PatchError};

pub const ADMIN_CONF_PATH: &str = "/etc/kubernetes/admin.conf";
pub const OUTPUT_PATH: &str = "/home/vagrant/my-cluster.json";

pub const SUCCESS_MESSAGE: &str = "******** SUCCESSFULLY WROTE OPTIKON API POST JSON ***********";

/// Where the admin kube config is read from and the patched document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchPaths {
    pub admin_conf: PathBuf,
    pub output: PathBuf,
}

impl Default for PatchPaths {
    fn default() -> Self {
        Self {
            admin_conf: PathBuf::from(ADMIN_CONF_PATH),
            output: PathBuf::from(OUTPUT_PATH),
        }
    }
}

/// Injects the admin kube config into the cluster document at `input` and
/// writes the result to `paths.output`.
///
/// Both reads and the annotation happen before the output is opened, so any
/// failure leaves the output path untouched.
pub fn patch(input: impl AsRef<Path>, paths: &PatchPaths) -> Result<ClusterDocument, PatchError> {
    let input = input.as_ref();

    let admin_conf = read_admin_conf(&paths.admin_conf)?;
    let mut cluster = ClusterDocument::read_from(input)?;
    cluster.inject_conf(admin_conf)?;
    cluster.write_to(&paths.output)?;

    tracing::info!(
        input = %input.display(),
        output = %paths.output.display(),
        "injected admin kube config"
    );
    Ok(cluster)
}

use std::{fs, path::Path};

use crate::error::{Input, PatchError};

/// Reads the admin kube config as opaque text. The content is not parsed.
pub fn read_admin_conf(path: impl AsRef<Path>) -> Result<String, PatchError> {
    let path = path.as_ref();
    let conf = fs::read_to_string(path).map_err(|source| PatchError::Read {
        input: Input::AdminConf,
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = conf.len(), "read admin kube config");
    Ok(conf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin.conf");
        let conf = "apiVersion: v1\nkind: Config\nclusters:\n- name: \"edge-1\"\n";
        fs::write(&path, conf).unwrap();

        assert_eq!(read_admin_conf(&path).unwrap(), conf);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_admin_conf(dir.path().join("admin.conf")).unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(
            err,
            PatchError::Read {
                input: Input::AdminConf,
                ..
            }
        ));
    }
}

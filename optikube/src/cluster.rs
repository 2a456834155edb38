use std::{
    fs,
    io::{self, Write as _},
    path::Path,
};

use serde::*;
use serde_json::{Map, Value};

use crate::error::{Input, PatchError};

/// Annotation key the admin kube config is stored under.
pub const CONF_ANNOTATION: &str = "Conf";

/// A cluster resource as posted to the optikon API.
///
/// Only `metadata.annotations` is looked at; every other field is carried
/// through untouched and in its original order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ClusterDocument(Value);

impl ClusterDocument {
    /// Parses without a nesting limit; deep documents grow the stack on demand.
    pub fn parse(path: impl AsRef<Path>, text: &[u8]) -> Result<ClusterDocument, PatchError> {
        let to_parse_error = |source| PatchError::Parse {
            path: path.as_ref().to_owned(),
            source,
        };

        let mut de = serde_json::Deserializer::from_slice(text);
        de.disable_recursion_limit();
        let cluster = ClusterDocument::deserialize(serde_stacker::Deserializer::new(&mut de))
            .map_err(to_parse_error)?;
        de.end().map_err(to_parse_error)?;
        Ok(cluster)
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<ClusterDocument, PatchError> {
        let path = path.as_ref();
        let text = fs::read(path).map_err(|source| PatchError::Read {
            input: Input::ClusterDocument,
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read cluster document");
        Self::parse(path, &text)
    }

    /// `metadata.annotations`, which must already exist as objects.
    pub fn annotations_mut(&mut self) -> Result<&mut Map<String, Value>, PatchError> {
        let metadata = self
            .0
            .get_mut("metadata")
            .and_then(Value::as_object_mut)
            .ok_or(PatchError::Schema { key: "metadata" })?;
        metadata
            .get_mut("annotations")
            .and_then(Value::as_object_mut)
            .ok_or(PatchError::Schema {
                key: "metadata.annotations",
            })
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.0
            .get("metadata")?
            .get("annotations")?
            .get(key)?
            .as_str()
    }

    /// Sets (or overwrites) a single annotation. An existing key keeps its position.
    pub fn set_annotation(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), PatchError> {
        let key = key.into();
        let previous = self
            .annotations_mut()?
            .insert(key.clone(), Value::String(value.into()));
        tracing::debug!(%key, replaced = previous.is_some(), "set annotation");
        Ok(())
    }

    pub fn inject_conf(&mut self, admin_conf: impl Into<String>) -> Result<(), PatchError> {
        self.set_annotation(CONF_ANNOTATION, admin_conf)
    }

    pub fn to_json(&self) -> String {
        self.0.to_string()
    }

    /// Writes compact JSON, truncating whatever was at `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), PatchError> {
        let path = path.as_ref();
        let to_write_error = |source| PatchError::Write {
            path: path.to_owned(),
            source,
        };

        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(to_write_error)?;
        let mut writer = io::BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(|e| to_write_error(e.into()))?;
        writer.flush().map_err(to_write_error)?;

        tracing::debug!(path = %path.display(), "wrote cluster document");
        Ok(())
    }
}

impl From<Value> for ClusterDocument {
    fn from(value: Value) -> Self {
        ClusterDocument(value)
    }
}

//! Shared utilities for command implementations.
//!
//! - Reading descriptor documents from disk
//! - Decoding every module a document holds, whatever its shape
//! - Writing a document back in canonical form

use crate::error::{descriptor_error, CliError, Result, ResultExt};
use modgate_descriptor::{
    decode, encode, encode_modules, DescriptorError, DiagnosticSink, ModuleDescriptor,
    PlatformRegistry,
};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Label for the elements of a document that is itself a module list.
const ROOT_LIST: &str = "<root>";

/// How a document holds its modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// An object with the module list under a named field
    Container,
    /// A bare array of descriptors
    List,
    /// The document is itself one descriptor
    Single,
}

/// A decoded descriptor document.
#[derive(Debug)]
pub struct Document {
    pub value: Value,
    pub layout: Layout,
    pub modules: Vec<ModuleDescriptor>,
}

/// Read and parse a JSON document.
pub fn read_json(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).with_path(path)?;
    serde_json::from_str::<Value>(&contents)
        .with_hint(format!("{} is not valid JSON", path.display()))
}

/// Read `path` and decode the modules it holds.
///
/// An object carrying `field` is a container; an array is a list of
/// descriptors; anything else is decoded as a single descriptor.
pub fn load_document<R, S>(path: &Path, field: &str, registry: &R, sink: &mut S) -> Result<Document>
where
    R: PlatformRegistry + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let value = read_json(path)?;
    let (layout, modules) =
        decode_document(&value, field, registry, sink).map_err(descriptor_error(path))?;
    tracing::debug!(
        path = %path.display(),
        ?layout,
        modules = modules.len(),
        "loaded descriptor document"
    );
    Ok(Document {
        value,
        layout,
        modules,
    })
}

pub fn decode_document<R, S>(
    value: &Value,
    field: &str,
    registry: &R,
    sink: &mut S,
) -> std::result::Result<(Layout, Vec<ModuleDescriptor>), DescriptorError>
where
    R: PlatformRegistry + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    if value.get(field).is_some() {
        let modules = modgate_descriptor::decode_modules(value, field, registry, sink)?;
        return Ok((Layout::Container, modules));
    }

    if let Some(items) = value.as_array() {
        let modules = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                decode(item, registry, &mut *sink)
                    .map_err(|err| err.in_module_list(ROOT_LIST, index))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        return Ok((Layout::List, modules));
    }

    Ok((Layout::Single, vec![decode(value, registry, sink)?]))
}

/// Fail on the first module name that appears twice, ignoring ASCII case.
pub fn ensure_unique_names(path: &Path, modules: &[ModuleDescriptor]) -> Result<()> {
    let mut seen = HashSet::new();
    for module in modules {
        if !seen.insert(module.name().to_ascii_lowercase()) {
            return Err(CliError::DuplicateModule {
                name: module.name().to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// The document with its modules replaced by their canonical encoding.
///
/// Fields of a container other than the module list are left untouched. An
/// empty module list is dropped from a container.
pub fn canonical_document(document: &Document, field: &str) -> Value {
    match document.layout {
        Layout::Container => {
            let mut value = document.value.clone();
            if let Some(object) = value.as_object_mut() {
                if document.modules.is_empty() {
                    object.shift_remove(field);
                }
                // Replacing an existing key keeps its position.
                encode_modules(object, field, &document.modules);
            }
            value
        }
        Layout::List => Value::Array(document.modules.iter().map(encode).collect()),
        Layout::Single => document
            .modules
            .first()
            .map(encode)
            .unwrap_or(Value::Null),
    }
}

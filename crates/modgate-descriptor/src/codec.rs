//! Conversion between descriptors and their JSON form.
//!
//! Decoding is forgiving: optional fields may be missing or malformed, and
//! unrecognized list entries are dropped with a diagnostic while the list
//! itself is kept. Encoding is deliberately not its mirror image. A platform
//! allow list is written whenever it is set, even when empty, so that "no
//! platform" survives a round trip; every other list is written only when
//! it has entries.

use std::fmt::Display;
use std::hash::Hash;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::descriptor::ModuleDescriptor;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
use crate::error::{DescriptorError, Result};
use crate::filter::FilterList;
use crate::platform::{KnownPlatforms, PlatformRegistry};
use crate::types::LoadingPhase;

/// Conventional field holding a container document's module list.
pub const MODULES_FIELD: &str = "Modules";

pub const NAME: &str = "Name";
pub const TYPE: &str = "Type";
pub const LOADING_PHASE: &str = "LoadingPhase";
pub const ADDITIONAL_DEPENDENCIES: &str = "AdditionalDependencies";

/// A list field and the key older documents used for it.
#[derive(Debug, Clone, Copy)]
pub struct ListField {
    pub key: &'static str,
    pub legacy: &'static str,
}

pub const PLATFORM_ALLOW_LIST: ListField = ListField {
    key: "PlatformAllowList",
    legacy: "WhitelistPlatforms",
};
pub const PLATFORM_DENY_LIST: ListField = ListField {
    key: "PlatformDenyList",
    legacy: "BlacklistPlatforms",
};
pub const TARGET_ALLOW_LIST: ListField = ListField {
    key: "TargetAllowList",
    legacy: "WhitelistTargets",
};
pub const TARGET_DENY_LIST: ListField = ListField {
    key: "TargetDenyList",
    legacy: "BlacklistTargets",
};
pub const CONFIGURATION_ALLOW_LIST: ListField = ListField {
    key: "TargetConfigurationAllowList",
    legacy: "WhitelistTargetConfigurations",
};
pub const CONFIGURATION_DENY_LIST: ListField = ListField {
    key: "TargetConfigurationDenyList",
    legacy: "BlacklistTargetConfigurations",
};
pub const PROGRAM_ALLOW_LIST: ListField = ListField {
    key: "ProgramAllowList",
    legacy: "WhitelistPrograms",
};
pub const PROGRAM_DENY_LIST: ListField = ListField {
    key: "ProgramDenyList",
    legacy: "BlacklistPrograms",
};

/// Decode one module descriptor from a JSON object.
///
/// # Errors
///
/// - [`DescriptorError::InvalidDescriptor`] if `document` is not an object
///   or its name is empty.
/// - [`DescriptorError::MissingRequiredField`] if `Name` or `Type` is
///   absent, not a string, or (for `Type`) not a known host type.
///
/// Everything else is reported to `sink` and decoding carries on.
///
/// # Example
///
/// ```
/// use modgate_descriptor::{decode, FilterList, KnownPlatforms};
/// use serde_json::json;
///
/// let mut diagnostics = Vec::new();
/// let module = decode(
///     &json!({ "Name": "Net", "Type": "Runtime", "PlatformAllowList": ["Amiga"] }),
///     &KnownPlatforms::default(),
///     &mut diagnostics,
/// )
/// .unwrap();
///
/// // The unknown platform is dropped but the allow list stays, now empty.
/// assert_eq!(module.platform_allow_list, FilterList::Empty);
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn decode<R, S>(document: &Value, registry: &R, sink: &mut S) -> Result<ModuleDescriptor>
where
    R: PlatformRegistry + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let object = document
        .as_object()
        .ok_or_else(|| DescriptorError::invalid("expected a JSON object"))?;

    let name = object
        .get(NAME)
        .and_then(Value::as_str)
        .ok_or_else(|| DescriptorError::missing(NAME, None))?;

    let host_type = object
        .get(TYPE)
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| DescriptorError::missing(TYPE, Some(name)))?;

    let mut module = ModuleDescriptor::new(name, host_type)?;
    let mut reader = Reader {
        object,
        module: name,
        sink,
    };

    if let Some(phase) = reader.loading_phase() {
        module.loading_phase = phase;
    }

    module.platform_allow_list = reader.resolved_list(
        PLATFORM_ALLOW_LIST,
        DiagnosticKind::UnknownPlatform,
        "platform",
        |name| registry.try_parse(name),
    );
    module.platform_deny_list = reader.resolved_list(
        PLATFORM_DENY_LIST,
        DiagnosticKind::UnknownPlatform,
        "platform",
        |name| registry.try_parse(name),
    );
    module.target_allow_list = reader.resolved_list(
        TARGET_ALLOW_LIST,
        DiagnosticKind::UnknownTargetType,
        "target type",
        |name| name.parse().ok(),
    );
    module.target_deny_list = reader.resolved_list(
        TARGET_DENY_LIST,
        DiagnosticKind::UnknownTargetType,
        "target type",
        |name| name.parse().ok(),
    );
    module.configuration_allow_list = reader.resolved_list(
        CONFIGURATION_ALLOW_LIST,
        DiagnosticKind::UnknownTargetConfiguration,
        "target configuration",
        |name| name.parse().ok(),
    );
    module.configuration_deny_list = reader.resolved_list(
        CONFIGURATION_DENY_LIST,
        DiagnosticKind::UnknownTargetConfiguration,
        "target configuration",
        |name| name.parse().ok(),
    );
    module.program_allow_list = reader.raw_list(PROGRAM_ALLOW_LIST);
    module.program_deny_list = reader.raw_list(PROGRAM_DENY_LIST);

    if let Some(dependencies) = reader.string_array(ADDITIONAL_DEPENDENCIES) {
        module.additional_dependencies = dependencies.into_iter().map(str::to_owned).collect();
    }

    tracing::trace!(
        module = %module.name(),
        host_type = %module.host_type,
        "decoded module descriptor"
    );
    Ok(module)
}

/// Encode a descriptor as a JSON object.
///
/// `Name`, `Type` and `LoadingPhase` are always written. The platform allow
/// list is written whenever it is set; all other lists only when they hold
/// entries.
pub fn encode(module: &ModuleDescriptor) -> Value {
    let mut object = Map::new();
    object.insert(NAME.to_string(), Value::from(module.name()));
    object.insert(TYPE.to_string(), Value::from(module.host_type.as_str()));
    object.insert(
        LOADING_PHASE.to_string(),
        Value::from(module.loading_phase.as_str()),
    );

    // Set-but-empty must stay distinguishable from unset.
    if module.platform_allow_list.is_set() {
        object.insert(
            PLATFORM_ALLOW_LIST.key.to_string(),
            string_array(module.platform_allow_list.iter()),
        );
    }
    write_entries(&mut object, PLATFORM_DENY_LIST, &module.platform_deny_list);
    write_entries(&mut object, TARGET_ALLOW_LIST, &module.target_allow_list);
    write_entries(&mut object, TARGET_DENY_LIST, &module.target_deny_list);
    write_entries(&mut object, CONFIGURATION_ALLOW_LIST, &module.configuration_allow_list);
    write_entries(&mut object, CONFIGURATION_DENY_LIST, &module.configuration_deny_list);
    write_entries(&mut object, PROGRAM_ALLOW_LIST, &module.program_allow_list);
    write_entries(&mut object, PROGRAM_DENY_LIST, &module.program_deny_list);

    if !module.additional_dependencies.is_empty() {
        object.insert(
            ADDITIONAL_DEPENDENCIES.to_string(),
            string_array(module.additional_dependencies.iter()),
        );
    }

    Value::Object(object)
}

/// Decode the module list stored under `field` of a container document.
///
/// A missing field yields an empty list. The first element that fails to
/// decode aborts the whole list; the error names its position.
pub fn decode_modules<R, S>(
    document: &Value,
    field: &str,
    registry: &R,
    sink: &mut S,
) -> Result<Vec<ModuleDescriptor>>
where
    R: PlatformRegistry + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let Some(value) = document.get(field) else {
        return Ok(Vec::new());
    };
    let items = value.as_array().ok_or_else(|| {
        DescriptorError::invalid(format!("'{field}' must be an array of module descriptors"))
    })?;

    let modules = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            decode(item, registry, &mut *sink).map_err(|err| err.in_module_list(field, index))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(field, count = modules.len(), "decoded module list");
    Ok(modules)
}

/// Write `modules` under `field`, or leave `object` untouched if there are none.
pub fn encode_modules(object: &mut Map<String, Value>, field: &str, modules: &[ModuleDescriptor]) {
    if modules.is_empty() {
        return;
    }
    object.insert(
        field.to_string(),
        Value::Array(modules.iter().map(encode).collect()),
    );
}

impl ModuleDescriptor {
    /// Decode with the built-in platform registry, logging diagnostics
    /// through `tracing`.
    ///
    /// # Example
    ///
    /// ```
    /// use modgate_descriptor::{ModuleDescriptor, ModuleHostType};
    /// use serde_json::json;
    ///
    /// let module = ModuleDescriptor::from_value(&json!({
    ///     "Name": "EditorTools",
    ///     "Type": "Editor",
    /// }))
    /// .unwrap();
    /// assert_eq!(module.host_type, ModuleHostType::Editor);
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        decode(value, &KnownPlatforms::default(), &mut TracingSink)
    }

    pub fn to_value(&self) -> Value {
        encode(self)
    }
}

impl Serialize for ModuleDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        encode(self).serialize(serializer)
    }
}

struct Reader<'a, S: ?Sized> {
    object: &'a Map<String, Value>,
    module: &'a str,
    sink: &'a mut S,
}

impl<'a, S: DiagnosticSink + ?Sized> Reader<'a, S> {
    fn report(&mut self, kind: DiagnosticKind, message: String) {
        self.sink.report(Diagnostic::new(self.module, kind, message));
    }

    fn loading_phase(&mut self) -> Option<LoadingPhase> {
        let value = self.object.get(LOADING_PHASE)?;
        let Some(raw) = value.as_str() else {
            self.report(
                DiagnosticKind::MalformedField,
                format!("expected a string for '{LOADING_PHASE}'"),
            );
            return None;
        };
        match raw.parse() {
            Ok(phase) => Some(phase),
            Err(_) => {
                self.report(
                    DiagnosticKind::UnknownLoadingPhase,
                    format!(
                        "unknown loading phase '{raw}', using '{}'",
                        LoadingPhase::default()
                    ),
                );
                None
            }
        }
    }

    /// Look up a list field, falling back to its legacy key. A legacy key
    /// next to the current one is ignored.
    fn list_field(&mut self, field: ListField) -> Option<(&'static str, &'a Value)> {
        if let Some(value) = self.object.get(field.key) {
            if self.object.contains_key(field.legacy) {
                self.report(
                    DiagnosticKind::LegacyField,
                    format!(
                        "'{}' is a legacy key and is ignored because '{}' is present",
                        field.legacy, field.key
                    ),
                );
            }
            return Some((field.key, value));
        }
        let value = self.object.get(field.legacy)?;
        self.report(
            DiagnosticKind::LegacyField,
            format!("'{}' is a legacy key, use '{}'", field.legacy, field.key),
        );
        Some((field.legacy, value))
    }

    fn string_array(&mut self, key: &'static str) -> Option<Vec<&'a str>> {
        let value = self.object.get(key)?;
        self.strings(key, value)
    }

    fn strings(&mut self, label: &str, value: &'a Value) -> Option<Vec<&'a str>> {
        let strings = value
            .as_array()
            .and_then(|items| items.iter().map(Value::as_str).collect::<Option<Vec<_>>>());
        if strings.is_none() {
            self.report(
                DiagnosticKind::MalformedField,
                format!("expected an array of strings for '{label}', ignoring it"),
            );
        }
        strings
    }

    fn raw_list(&mut self, field: ListField) -> FilterList<String> {
        let Some((key, value)) = self.list_field(field) else {
            return FilterList::Unset;
        };
        match self.strings(key, value) {
            Some(names) => names.into_iter().map(str::to_owned).collect(),
            None => FilterList::Unset,
        }
    }

    /// Decode a list of names, dropping the ones `resolve` rejects. The list
    /// stays set even if every entry is dropped.
    fn resolved_list<T, F>(
        &mut self,
        field: ListField,
        kind: DiagnosticKind,
        what: &str,
        resolve: F,
    ) -> FilterList<T>
    where
        T: Hash + Eq,
        F: Fn(&str) -> Option<T>,
    {
        let Some((key, value)) = self.list_field(field) else {
            return FilterList::Unset;
        };
        let Some(names) = self.strings(key, value) else {
            return FilterList::Unset;
        };

        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            match resolve(name) {
                Some(entry) => entries.push(entry),
                None => self.report(
                    kind,
                    format!("unknown {what} '{name}' in '{key}', ignoring it"),
                ),
            }
        }
        FilterList::from_entries(entries)
    }
}

fn write_entries<T>(object: &mut Map<String, Value>, field: ListField, list: &FilterList<T>)
where
    T: Hash + Eq + Display,
{
    if list.has_entries() {
        object.insert(field.key.to_string(), string_array(list.iter()));
    }
}

fn string_array<T: Display>(items: impl Iterator<Item = T>) -> Value {
    Value::Array(items.map(|item| Value::String(item.to_string())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::types::{ModuleHostType, TargetType};
    use serde_json::json;

    fn decode_collecting(document: Value) -> (Result<ModuleDescriptor>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let result = decode(&document, &KnownPlatforms::default(), &mut diagnostics);
        (result, diagnostics)
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let (module, diagnostics) = decode_collecting(json!({ "Name": "Core", "Type": "Runtime" }));
        let module = module.unwrap();
        assert_eq!(module.name(), "Core");
        assert_eq!(module.loading_phase, LoadingPhase::Default);
        assert!(!module.platform_allow_list.is_set());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn non_object_is_invalid() {
        let (result, _) = decode_collecting(json!(["Core"]));
        assert!(matches!(result, Err(DescriptorError::InvalidDescriptor { .. })));
    }

    #[test]
    fn unknown_host_type_is_missing_field() {
        let (result, _) = decode_collecting(json!({ "Name": "Core", "Type": "Console" }));
        assert_eq!(
            result.unwrap_err(),
            DescriptorError::MissingRequiredField {
                field: TYPE,
                module: Some("Core".to_string()),
            }
        );
    }

    #[test]
    fn malformed_list_is_treated_as_absent() {
        let (module, diagnostics) = decode_collecting(json!({
            "Name": "Core",
            "Type": "Runtime",
            "PlatformAllowList": "Win64",
            "ProgramDenyList": ["Tool", 3],
        }));
        let module = module.unwrap();
        assert!(!module.platform_allow_list.is_set());
        assert!(!module.program_deny_list.is_set());
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .all(|d| d.kind == DiagnosticKind::MalformedField));
    }

    #[test]
    fn current_key_wins_over_legacy_key() {
        let (module, diagnostics) = decode_collecting(json!({
            "Name": "Core",
            "Type": "Runtime",
            "TargetAllowList": ["Editor"],
            "WhitelistTargets": ["Game"],
        }));
        let module = module.unwrap();
        assert_eq!(
            module.target_allow_list,
            FilterList::from_entries([TargetType::Editor])
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::LegacyField);
        assert!(diagnostics[0].message.contains("'WhitelistTargets'"));
        assert!(diagnostics[0].message.contains("ignored"));
    }

    #[test]
    fn encode_writes_keys_in_canonical_order() {
        let mut module = ModuleDescriptor::new("Core", ModuleHostType::Runtime).unwrap();
        module.additional_dependencies = vec!["Json".to_string()];
        module.platform_deny_list = FilterList::from_entries([Platform::new("Mac")]);
        module.platform_allow_list = FilterList::from_entries([Platform::new("Win64")]);

        let value = encode(&module);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "Name",
                "Type",
                "LoadingPhase",
                "PlatformAllowList",
                "PlatformDenyList",
                "AdditionalDependencies",
            ]
        );
    }

    #[test]
    fn serialize_matches_encode() {
        let module = ModuleDescriptor::new("Core", ModuleHostType::Program).unwrap();
        assert_eq!(serde_json::to_value(&module).unwrap(), encode(&module));
    }
}

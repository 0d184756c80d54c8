//! The module descriptor value object.

use crate::error::{DescriptorError, Result};
use crate::filter::FilterList;
use crate::platform::Platform;
use crate::types::{LoadingPhase, ModuleHostType, TargetConfiguration, TargetType};

/// Declarative description of one buildable module.
///
/// The name is fixed at construction. Everything else is plain data filled
/// in by the codec or by whoever owns the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    name: String,

    /// Kind of target that may load the module.
    pub host_type: ModuleHostType,

    /// When during startup the module loads.
    pub loading_phase: LoadingPhase,

    /// An empty list here means "no platform at all".
    pub platform_allow_list: FilterList<Platform>,
    pub platform_deny_list: FilterList<Platform>,

    pub target_allow_list: FilterList<TargetType>,
    pub target_deny_list: FilterList<TargetType>,

    pub configuration_allow_list: FilterList<TargetConfiguration>,
    pub configuration_deny_list: FilterList<TargetConfiguration>,

    /// Consulted only for program targets.
    pub program_allow_list: FilterList<String>,
    pub program_deny_list: FilterList<String>,

    /// Extra build dependencies, carried through untouched.
    pub additional_dependencies: Vec<String>,
}

impl ModuleDescriptor {
    /// Create a descriptor with every optional field at its default.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::InvalidDescriptor`] if `name` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use modgate_descriptor::{LoadingPhase, ModuleDescriptor, ModuleHostType};
    ///
    /// let module = ModuleDescriptor::new("Core", ModuleHostType::Runtime).unwrap();
    /// assert_eq!(module.name(), "Core");
    /// assert_eq!(module.loading_phase, LoadingPhase::Default);
    /// assert!(ModuleDescriptor::new("", ModuleHostType::Runtime).is_err());
    /// ```
    pub fn new(name: impl Into<String>, host_type: ModuleHostType) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DescriptorError::invalid("module name cannot be empty"));
        }

        Ok(Self {
            name,
            host_type,
            loading_phase: LoadingPhase::default(),
            platform_allow_list: FilterList::Unset,
            platform_deny_list: FilterList::Unset,
            target_allow_list: FilterList::Unset,
            target_deny_list: FilterList::Unset,
            configuration_allow_list: FilterList::Unset,
            configuration_deny_list: FilterList::Unset,
            program_allow_list: FilterList::Unset,
            program_deny_list: FilterList::Unset,
            additional_dependencies: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

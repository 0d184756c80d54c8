//! Build inclusion policy.
//!
//! Decides whether a module takes part in a given build. Checks run in a
//! fixed order and the first failing one decides; later checks rely on
//! earlier ones having passed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::ModuleDescriptor;
use crate::platform::Platform;
use crate::types::{ModuleHostType, TargetConfiguration, TargetType};

/// What is being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub platform: Platform,
    pub configuration: TargetConfiguration,
    /// Name of the target; matched against program allow/deny lists.
    pub target_name: String,
    pub target_type: TargetType,
    pub build_developer_tools: bool,
    pub requires_cooked_data: bool,
}

impl BuildRequest {
    pub fn new(
        platform: Platform,
        configuration: TargetConfiguration,
        target_name: impl Into<String>,
        target_type: TargetType,
    ) -> Self {
        Self {
            platform,
            configuration,
            target_name: target_name.into(),
            target_type,
            build_developer_tools: false,
            requires_cooked_data: false,
        }
    }

    pub fn with_developer_tools(mut self, enabled: bool) -> Self {
        self.build_developer_tools = enabled;
        self
    }

    pub fn with_cooked_data(mut self, required: bool) -> Self {
        self.requires_cooked_data = required;
        self
    }
}

/// The rule that kept a module out of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exclusion {
    PlatformNotAllowed,
    PlatformDenied,
    TargetTypeNotAllowed,
    TargetTypeDenied,
    ConfigurationNotAllowed,
    ConfigurationDenied,
    ProgramNotAllowed,
    ProgramDenied,
    HostTypeMismatch,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::PlatformNotAllowed => "platform is not in the allow list",
            Self::PlatformDenied => "platform is in the deny list",
            Self::TargetTypeNotAllowed => "target type is not in the allow list",
            Self::TargetTypeDenied => "target type is in the deny list",
            Self::ConfigurationNotAllowed => "configuration is not in the allow list",
            Self::ConfigurationDenied => "configuration is in the deny list",
            Self::ProgramNotAllowed => "program is not in the allow list",
            Self::ProgramDenied => "program is in the deny list",
            Self::HostTypeMismatch => "host type does not load in this target",
        };
        f.write_str(reason)
    }
}

/// Outcome of evaluating one module against one build request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every filter passed and the host type admits the target.
    Included,
    /// Admitted by name through the program allow list; the host type was
    /// not consulted.
    IncludedByProgramAllowList,
    Excluded(Exclusion),
}

impl Verdict {
    pub fn is_included(self) -> bool {
        !matches!(self, Self::Excluded(_))
    }

    pub fn exclusion(self) -> Option<Exclusion> {
        match self {
            Self::Excluded(reason) => Some(reason),
            Self::Included | Self::IncludedByProgramAllowList => None,
        }
    }
}

/// Evaluate `module` against `request`, reporting which rule decided.
pub fn evaluate(module: &ModuleDescriptor, request: &BuildRequest) -> Verdict {
    use Exclusion::*;

    // A set platform allow list is strict even when empty: an unknown
    // platform dropped during decoding must not open the module up to every
    // platform.
    if module.platform_allow_list.rejects_strict(&request.platform) {
        return Verdict::Excluded(PlatformNotAllowed);
    }
    if module.platform_deny_list.contains(&request.platform) {
        return Verdict::Excluded(PlatformDenied);
    }

    if module.target_allow_list.rejects_lenient(&request.target_type) {
        return Verdict::Excluded(TargetTypeNotAllowed);
    }
    if module.target_deny_list.contains(&request.target_type) {
        return Verdict::Excluded(TargetTypeDenied);
    }

    if module
        .configuration_allow_list
        .rejects_lenient(&request.configuration)
    {
        return Verdict::Excluded(ConfigurationNotAllowed);
    }
    if module.configuration_deny_list.contains(&request.configuration) {
        return Verdict::Excluded(ConfigurationDenied);
    }

    if request.target_type == TargetType::Program {
        // A named program overrides the host type entirely.
        if module.program_allow_list.has_entries() {
            return if module.program_allow_list.contains(&request.target_name) {
                Verdict::IncludedByProgramAllowList
            } else {
                Verdict::Excluded(ProgramNotAllowed)
            };
        }
        if module.program_deny_list.contains(&request.target_name) {
            return Verdict::Excluded(ProgramDenied);
        }
    }

    if module.host_type.admits(request) {
        Verdict::Included
    } else {
        Verdict::Excluded(HostTypeMismatch)
    }
}

/// Whether `module` takes part in the build described by `request`.
///
/// # Example
///
/// ```
/// use modgate_descriptor::{
///     is_eligible, BuildRequest, ModuleDescriptor, ModuleHostType, Platform,
///     TargetConfiguration, TargetType,
/// };
///
/// let module = ModuleDescriptor::new("EditorTools", ModuleHostType::Editor).unwrap();
/// let editor = BuildRequest::new(
///     Platform::new("Win64"),
///     TargetConfiguration::Development,
///     "MyGameEditor",
///     TargetType::Editor,
/// );
/// let game = BuildRequest { target_type: TargetType::Game, ..editor.clone() };
///
/// assert!(is_eligible(&module, &editor));
/// assert!(!is_eligible(&module, &game));
/// ```
pub fn is_eligible(module: &ModuleDescriptor, request: &BuildRequest) -> bool {
    evaluate(module, request).is_included()
}

impl ModuleDescriptor {
    /// Positional form of [`is_eligible`].
    pub fn is_compiled_in(
        &self,
        platform: &Platform,
        configuration: TargetConfiguration,
        target_name: &str,
        target_type: TargetType,
        build_developer_tools: bool,
        requires_cooked_data: bool,
    ) -> bool {
        let request = BuildRequest {
            platform: platform.clone(),
            configuration,
            target_name: target_name.to_string(),
            target_type,
            build_developer_tools,
            requires_cooked_data,
        };
        is_eligible(self, &request)
    }
}

impl ModuleHostType {
    /// Final gate of the policy: whether a module of this host type loads in
    /// the requested target.
    pub fn admits(self, request: &BuildRequest) -> bool {
        let target = request.target_type;
        match self {
            Self::Runtime | Self::RuntimeNoCommandlet => target != TargetType::Program,
            Self::RuntimeAndProgram => true,
            Self::CookedOnly => request.requires_cooked_data,
            Self::UncookedOnly => !request.requires_cooked_data,
            Self::Developer => matches!(target, TargetType::Editor | TargetType::Program),
            Self::DeveloperTool => request.build_developer_tools,
            Self::Editor | Self::EditorNoCommandlet => target == TargetType::Editor,
            Self::EditorAndProgram => matches!(target, TargetType::Editor | TargetType::Program),
            Self::Program => target == TargetType::Program,
            Self::ServerOnly => !matches!(target, TargetType::Program | TargetType::Client),
            Self::ClientOnly | Self::ClientOnlyNoCommandlet => {
                !matches!(target, TargetType::Program | TargetType::Server)
            }
            Self::Default => false,
        }
    }
}

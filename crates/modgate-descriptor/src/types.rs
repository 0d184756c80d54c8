//! Closed identifier sets used by module descriptors and build requests.
//!
//! Every enum here round-trips through its symbolic name: `Display` and
//! `Serialize` emit the canonical spelling, `FromStr` and `Deserialize`
//! accept any ASCII casing of it.

use thiserror::Error;

/// A symbolic name that does not match any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! symbolic_enum {
    (
        $label:literal =>
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical symbolic name.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| UnknownVariant {
                        kind: $label,
                        value: s.to_string(),
                    })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

symbolic_enum! {
    "module host type" =>
    /// The kind of build target that may load a module.
    pub enum ModuleHostType {
        /// Placeholder value; never eligible for any build
        Default,
        /// Any target using the engine runtime, except programs
        Runtime,
        /// Any runtime target except commandlets
        RuntimeNoCommandlet,
        /// Any target, programs included
        RuntimeAndProgram,
        /// Loaded only in builds that require cooked data
        CookedOnly,
        /// Loaded only in builds that run on uncooked data
        UncookedOnly,
        /// Deprecated: editor and program targets only
        Developer,
        /// Any target with developer tools enabled
        DeveloperTool,
        /// Loaded only by the editor
        Editor,
        /// Loaded only by the editor, except when running commandlets
        EditorNoCommandlet,
        /// Loaded by the editor or by programs
        EditorAndProgram,
        /// Loaded only by programs
        Program,
        /// Loaded only by servers
        ServerOnly,
        /// Loaded by clients, commandlets and the editor
        ClientOnly,
        /// Loaded by clients and the editor
        ClientOnlyNoCommandlet,
    }
}

impl ModuleHostType {
    /// Whether this host type has been superseded by a more specific one.
    pub const fn is_deprecated(self) -> bool {
        matches!(self, Self::Developer)
    }
}

symbolic_enum! {
    "loading phase" =>
    /// When during startup a module is loaded.
    #[derive(Default)]
    pub enum LoadingPhase {
        /// As soon as plugins can be loaded at all
        EarliestPossible,
        /// Right after the config system is initialized
        PostConfigInit,
        /// After the first screen following the system splash screen
        PostSplashScreen,
        /// Before object system initialization, for early loading screens
        PreEarlyLoadingScreen,
        /// Before the loading screen is triggered
        PreLoadingScreen,
        /// Right before the standard phase
        PreDefault,
        /// Standard timing during engine init, after game modules
        #[default]
        Default,
        /// Right after the standard phase
        PostDefault,
        /// After the engine has been initialized
        PostEngineInit,
        /// Never loaded automatically
        None,
    }
}

symbolic_enum! {
    "target type" =>
    /// The kind of target a build produces.
    pub enum TargetType {
        /// Cooked monolithic game executable
        Game,
        /// Uncooked modular editor executable
        Editor,
        /// Cooked client-only executable
        Client,
        /// Cooked dedicated-server executable
        Server,
        /// Standalone program
        Program,
    }
}

symbolic_enum! {
    "target configuration" =>
    /// Optimization and debugging profile of a build.
    pub enum TargetConfiguration {
        Unknown,
        Debug,
        DebugGame,
        Development,
        Shipping,
        Test,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("editor".parse::<TargetType>(), Ok(TargetType::Editor));
        assert_eq!("PROGRAM".parse::<TargetType>(), Ok(TargetType::Program));
        assert_eq!(
            "developertool".parse::<ModuleHostType>(),
            Ok(ModuleHostType::DeveloperTool)
        );
    }

    #[test]
    fn unknown_name_reports_kind() {
        let err = "Console".parse::<TargetType>().unwrap_err();
        assert_eq!(err.kind, "target type");
        assert_eq!(err.to_string(), "unknown target type 'Console'");
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(LoadingPhase::PostConfigInit.to_string(), "PostConfigInit");
        assert_eq!(
            TargetConfiguration::DebugGame.to_string(),
            "DebugGame"
        );
    }

    #[test]
    fn loading_phase_defaults_to_standard_timing() {
        assert_eq!(LoadingPhase::default(), LoadingPhase::Default);
    }

    #[test]
    fn serde_uses_symbolic_names() {
        let json = serde_json::to_value(ModuleHostType::EditorAndProgram).unwrap();
        assert_eq!(json, serde_json::json!("EditorAndProgram"));

        let parsed: TargetConfiguration =
            serde_json::from_value(serde_json::json!("shipping")).unwrap();
        assert_eq!(parsed, TargetConfiguration::Shipping);

        assert!(serde_json::from_value::<TargetType>(serde_json::json!("Console")).is_err());
    }

    #[test]
    fn only_developer_is_deprecated() {
        let deprecated: Vec<_> = ModuleHostType::ALL
            .iter()
            .filter(|host| host.is_deprecated())
            .collect();
        assert_eq!(deprecated, vec![&ModuleHostType::Developer]);
    }
}

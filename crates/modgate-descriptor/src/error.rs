//! Error types for descriptor construction and decoding.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DescriptorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("invalid module descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    #[error("module descriptor{} is missing required field '{field}'", describe(.module))]
    MissingRequiredField {
        field: &'static str,
        module: Option<String>,
    },
}

fn describe(module: &Option<String>) -> String {
    match module {
        Some(name) => format!(" '{name}'"),
        None => String::new(),
    }
}

impl DescriptorError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(field: &'static str, module: Option<&str>) -> Self {
        Self::MissingRequiredField {
            field,
            module: module.map(str::to_owned),
        }
    }

    /// Attach the position of the failing element when decoding a module list.
    ///
    /// The error kind is kept. A missing field on an unnamed element is
    /// reported against its list position, which [`module`](Self::module)
    /// then returns in place of a name.
    pub fn in_module_list(self, list: &str, index: usize) -> Self {
        match self {
            Self::InvalidDescriptor { reason } => Self::InvalidDescriptor {
                reason: format!("{reason} (while parsing {list}[{index}])"),
            },
            Self::MissingRequiredField { field, module } => Self::MissingRequiredField {
                field,
                module: module.or_else(|| Some(format!("{list}[{index}]"))),
            },
        }
    }

    /// Where the error is located: the module's name when it has one,
    /// otherwise its position in a module list such as `Modules[2]`.
    pub fn module(&self) -> Option<&str> {
        match self {
            Self::InvalidDescriptor { .. } => None,
            Self::MissingRequiredField { module, .. } => module.as_deref(),
        }
    }
}

//! Module descriptors and the build inclusion policy.
//!
//! A [`ModuleDescriptor`] says which builds a module may take part in: its
//! host type plus allow/deny lists over platforms, target types, target
//! configurations and program names. [`evaluate`] and [`is_eligible`] apply
//! those rules to a [`BuildRequest`]; [`decode`] and [`encode`] move
//! descriptors to and from their JSON form.
//!
//! Nothing here performs I/O. Non-fatal findings go to a
//! [`DiagnosticSink`] supplied by the caller.

pub mod codec;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod filter;
pub mod platform;
pub mod policy;
pub mod types;
pub mod validation;

pub use codec::{decode, decode_modules, encode, encode_modules, MODULES_FIELD};
pub use descriptor::ModuleDescriptor;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
pub use error::{DescriptorError, Result};
pub use filter::FilterList;
pub use platform::{KnownPlatforms, Platform, PlatformRegistry, BUILTIN_PLATFORMS};
pub use policy::{evaluate, is_eligible, BuildRequest, Exclusion, Verdict};
pub use types::{LoadingPhase, ModuleHostType, TargetConfiguration, TargetType, UnknownVariant};
pub use validation::validate;

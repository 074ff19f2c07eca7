//! Error types for rule-set construction.

use smol_str::SmolStr;
use thiserror::Error;

use super::CompletionKind;

/// Errors detected when validating rule tables and completion vocabularies.
///
/// All of these indicate bad construction-time data. The query paths never
/// fail: an unregistered identity resolves to no tag, host-default indent,
/// or no fold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    /// An identity is bound by more than one tag rule.
    #[error("identity `{identity}` is bound by more than one tag rule")]
    DuplicateTag { identity: SmolStr },

    /// An identity has more than one indentation rule.
    #[error("identity `{identity}` has more than one indentation rule")]
    DuplicateIndent { identity: SmolStr },

    /// An identity has more than one fold rule.
    #[error("identity `{identity}` has more than one fold rule")]
    DuplicateFold { identity: SmolStr },

    /// A completion label is repeated within one kind.
    #[error("completion label `{label}` appears twice with kind `{}`", .kind.as_str())]
    DuplicateCompletion { label: SmolStr, kind: CompletionKind },
}

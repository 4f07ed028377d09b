//! # Refactoring Types
//!
//! The `Refactor` trait implemented by every refactoring provider, and the
//! value types that cross the provider boundary. The registry and dispatcher
//! treat the action and edit types as opaque payloads.

use super::context::RefactorContext;
use serde::{Deserialize, Serialize};

/// A named refactoring provider.
///
/// A provider both detects where it applies (`get_available_actions`) and
/// produces the edits for one of the actions it offered
/// (`get_edits_for_action`). Providers are immutable once constructed and
/// may be queried from several requests at once.
pub trait Refactor: Send + Sync {
    /// Unique name the provider is registered under
    fn name(&self) -> &str;

    /// Description of the refactor to display in the editor UI
    fn description(&self) -> &str;

    /// Compute (quickly) which actions are available for this context.
    ///
    /// `None` and `Some(vec![])` both mean nothing is offered here.
    fn get_available_actions(&self, context: &RefactorContext<'_>)
    -> Option<Vec<ApplicableRefactorInfo>>;

    /// Compute the edits for `action_name`.
    ///
    /// `None` means no edit applies, e.g. because the selection went stale
    /// since the action was offered.
    fn get_edits_for_action(
        &self,
        context: &RefactorContext<'_>,
        action_name: &str,
    ) -> Option<RefactorEditInfo>;
}

/// A group of offerable actions contributed by one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableRefactorInfo {
    /// Name of the provider offering the actions
    pub name: String,

    /// Label for the group
    pub description: String,

    /// Whether the actions can be shown inline rather than in a submenu
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlineable: Option<bool>,

    pub actions: Vec<RefactorActionInfo>,
}

impl ApplicableRefactorInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            inlineable: None,
            actions: Vec::new(),
        }
    }

    /// Append an action to the group
    pub fn with_action(mut self, action: RefactorActionInfo) -> Self {
        self.actions.push(action);
        self
    }

    pub fn inlineable(mut self, inlineable: bool) -> Self {
        self.inlineable = Some(inlineable);
        self
    }
}

/// One concrete action the user can pick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorActionInfo {
    /// Action name passed back to `get_edits_for_action`
    pub name: String,

    /// UI label
    pub description: String,
}

impl RefactorActionInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Edits produced by a provider for one action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorEditInfo {
    pub edits: Vec<FileTextChanges>,

    /// File that should be renamed once edits are applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename_filename: Option<String>,

    /// Position at which the host should start a rename after applying edits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename_location: Option<usize>,
}

impl RefactorEditInfo {
    pub fn new(edits: Vec<FileTextChanges>) -> Self {
        Self {
            edits,
            ..Default::default()
        }
    }

    /// Total number of text changes across all files
    pub fn change_count(&self) -> usize {
        self.edits.iter().map(|f| f.text_changes.len()).sum()
    }
}

/// Text changes for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTextChanges {
    pub file_name: String,
    pub text_changes: Vec<TextChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    pub span: TextSpan,
    pub new_text: String,
}

impl TextChange {
    pub fn replace(start: usize, length: usize, new_text: impl Into<String>) -> Self {
        Self {
            span: TextSpan { start, length },
            new_text: new_text.into(),
        }
    }

    pub fn insert(position: usize, new_text: impl Into<String>) -> Self {
        Self::replace(position, 0, new_text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Listing entry for a registered provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefactorInfo {
    pub name: String,
    pub description: String,
}

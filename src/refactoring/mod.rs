//! # Refactoring System
//!
//! Registry and dispatch for pluggable refactor providers. Providers
//! implement [`Refactor`] and are registered by name; the host asks the
//! [`RefactorDispatcher`] which actions apply at a position and, later, for
//! the edits of the action the user picked.

pub mod catalog;
pub mod context;
pub mod service;
pub mod types;

pub use catalog::RefactorRegistry;
pub use context::{
    CancellationSignal, DEFAULT_NEW_LINE, LanguageServiceHost, Program, RefactorContext,
    RefactorOrCodeFixContext, SourceFile, SystemHost, TextChangesContext,
    get_new_line_from_context, get_refactor_context_length, to_text_changes_context,
};
pub use service::RefactorDispatcher;
pub use types::{
    ApplicableRefactorInfo, FileTextChanges, Refactor, RefactorActionInfo, RefactorEditInfo,
    RefactorInfo, TextChange, TextSpan,
};

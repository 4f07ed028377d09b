//! # Refactor Request Context
//!
//! Everything a provider sees for one request, plus the helpers that derive a
//! consistent formatting baseline (newline, text-changes context) from it.
//!
//! The context only borrows its collaborators. The registry never looks
//! inside the source file, program or host; it routes them to providers.

use crate::config::FormatContext;
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio_util::sync::CancellationToken;

/// Newline used when neither the format options nor the host supply one
pub const DEFAULT_NEW_LINE: &str = "\r\n";

/// A source file a request is made against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
        }
    }
}

/// Type-checked program handle. Providers downcast it to the concrete
/// program type of their host.
pub trait Program: Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// Host configuration provider
pub trait LanguageServiceHost: Send + Sync {
    /// The host's newline convention, if it has one
    fn new_line(&self) -> Option<&str> {
        None
    }
}

/// Host that reports the newline convention of the current platform
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl LanguageServiceHost for SystemHost {
    fn new_line(&self) -> Option<&str> {
        if cfg!(windows) { Some("\r\n") } else { Some("\n") }
    }
}

/// Cooperative cancellation flag polled between providers.
pub trait CancellationSignal: Send + Sync {
    fn is_cancellation_requested(&self) -> bool;
}

impl CancellationSignal for CancellationToken {
    fn is_cancellation_requested(&self) -> bool {
        self.is_cancelled()
    }
}

impl CancellationSignal for AtomicBool {
    fn is_cancellation_requested(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

/// Formatting inputs shared by refactor and code-fix requests
pub trait RefactorOrCodeFixContext {
    fn host(&self) -> &dyn LanguageServiceHost;
    fn format_context(&self) -> &FormatContext;
}

/// One refactor request. Built fresh by the caller and never mutated.
#[derive(Clone, Copy)]
pub struct RefactorContext<'a> {
    pub file: &'a SourceFile,
    pub start_position: usize,
    /// `None` for a plain cursor, `Some` for a selection
    pub end_position: Option<usize>,
    pub program: &'a dyn Program,
    pub cancellation_token: Option<&'a dyn CancellationSignal>,
    pub host: &'a dyn LanguageServiceHost,
    pub format_context: &'a FormatContext,
}

impl<'a> RefactorContext<'a> {
    /// Context for a cursor position, without cancellation
    pub fn new(
        file: &'a SourceFile,
        start_position: usize,
        program: &'a dyn Program,
        host: &'a dyn LanguageServiceHost,
        format_context: &'a FormatContext,
    ) -> Self {
        Self {
            file,
            start_position,
            end_position: None,
            program,
            cancellation_token: None,
            host,
            format_context,
        }
    }

    /// Turn the cursor into a selection ending at `end_position`
    pub fn with_end_position(mut self, end_position: usize) -> Self {
        self.end_position = Some(end_position);
        self
    }

    pub fn with_cancellation_token(mut self, token: &'a dyn CancellationSignal) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Whether the caller asked to stop. Always `false` without a token.
    pub fn is_cancellation_requested(&self) -> bool {
        self.cancellation_token
            .is_some_and(|token| token.is_cancellation_requested())
    }

    /// See [`get_refactor_context_length`]
    pub fn selection_length(&self) -> i64 {
        get_refactor_context_length(self)
    }
}

impl fmt::Debug for RefactorContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefactorContext")
            .field("file", &self.file.file_name)
            .field("start_position", &self.start_position)
            .field("end_position", &self.end_position)
            .field("cancellation_requested", &self.is_cancellation_requested())
            .field("format_context", self.format_context)
            .finish_non_exhaustive()
    }
}

impl RefactorOrCodeFixContext for RefactorContext<'_> {
    fn host(&self) -> &dyn LanguageServiceHost {
        self.host
    }

    fn format_context(&self) -> &FormatContext {
        self.format_context
    }
}

/// Minimal formatting bundle for materializing a provider's edits
#[derive(Debug, Clone, PartialEq)]
pub struct TextChangesContext<'a> {
    pub new_line_character: String,
    pub format_context: &'a FormatContext,
}

/// Length of the selection, or 0 for a plain cursor.
///
/// Degenerate ranges (end before start) yield a negative length rather than
/// failing. Exact whenever the difference fits in an `i64`.
pub fn get_refactor_context_length(context: &RefactorContext<'_>) -> i64 {
    match context.end_position {
        None => 0,
        Some(end) => end.wrapping_sub(context.start_position) as i64,
    }
}

/// Resolve the newline to use for edits: the explicit format option when set
/// and non-empty, otherwise the host's convention, otherwise
/// [`DEFAULT_NEW_LINE`].
pub fn get_new_line_from_context<C: RefactorOrCodeFixContext + ?Sized>(context: &C) -> String {
    context
        .format_context()
        .new_line_override()
        .or_else(|| context.host().new_line().filter(|nl| !nl.is_empty()))
        .unwrap_or(DEFAULT_NEW_LINE)
        .to_string()
}

/// Bundle the resolved newline with the format context. Recomputed on every
/// call.
pub fn to_text_changes_context<C: RefactorOrCodeFixContext + ?Sized>(
    context: &C,
) -> TextChangesContext<'_> {
    TextChangesContext {
        new_line_character: get_new_line_from_context(context),
        format_context: context.format_context(),
    }
}

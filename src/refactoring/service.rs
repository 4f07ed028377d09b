//! # Refactor Dispatch
//!
//! Routes host requests to registered providers: aggregates the actions
//! offered at a position and delegates edit generation to the provider that
//! owns an action.

use super::catalog::RefactorRegistry;
use super::context::RefactorContext;
use super::types::{ApplicableRefactorInfo, RefactorEditInfo};
use crate::errors::RefactorError;
use tracing::debug;

/// Dispatches requests over a borrowed registry.
///
/// Every call runs synchronously to completion on the calling thread.
/// Panics raised by a provider are not caught.
#[derive(Debug, Clone, Copy)]
pub struct RefactorDispatcher<'r> {
    registry: &'r RefactorRegistry,
}

impl<'r> RefactorDispatcher<'r> {
    pub fn new(registry: &'r RefactorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r RefactorRegistry {
        self.registry
    }

    /// Collect the actions every provider offers for `context`, flattened in
    /// registration order.
    ///
    /// The cancellation token is polled before each provider. Once it reports
    /// cancellation, remaining providers are not asked; results already
    /// gathered are kept.
    pub fn get_applicable_refactors(
        &self,
        context: &RefactorContext<'_>,
    ) -> Vec<ApplicableRefactorInfo> {
        let mut applicable = Vec::new();

        for refactor in self.registry.iter() {
            if context.is_cancellation_requested() {
                debug!(
                    "Cancellation requested, skipping refactor '{}'",
                    refactor.name()
                );
                continue;
            }

            if let Some(infos) = refactor.get_available_actions(context) {
                applicable.extend(infos);
            }
        }

        debug!(
            "Found {} applicable refactors in {}",
            applicable.len(),
            context.file.file_name
        );
        applicable
    }

    /// Ask the provider named `refactor_name` for the edits of `action_name`.
    ///
    /// Returns `None` both when no provider has that name and when the
    /// provider declines; use [`resolve_edits_for_refactor`](Self::resolve_edits_for_refactor)
    /// to tell the two apart.
    pub fn get_edits_for_refactor(
        &self,
        context: &RefactorContext<'_>,
        refactor_name: &str,
        action_name: &str,
    ) -> Option<RefactorEditInfo> {
        self.resolve_edits_for_refactor(context, refactor_name, action_name)
            .ok()
            .flatten()
    }

    /// Like [`get_edits_for_refactor`](Self::get_edits_for_refactor), but an
    /// unknown provider name is reported as `RefactorError::UnknownRefactor`.
    pub fn resolve_edits_for_refactor(
        &self,
        context: &RefactorContext<'_>,
        refactor_name: &str,
        action_name: &str,
    ) -> Result<Option<RefactorEditInfo>, RefactorError> {
        let Some(refactor) = self.registry.get(refactor_name) else {
            debug!("No refactor registered as '{}'", refactor_name);
            return Err(RefactorError::UnknownRefactor(refactor_name.to_string()));
        };

        debug!("Getting edits for '{}' from '{}'", action_name, refactor_name);
        let edits = refactor.get_edits_for_action(context, action_name);
        if edits.is_none() {
            debug!("Refactor '{}' produced no edits for '{}'", refactor_name, action_name);
        }
        Ok(edits)
    }
}

impl RefactorRegistry {
    /// Dispatcher borrowing this registry
    pub fn dispatcher(&self) -> RefactorDispatcher<'_> {
        RefactorDispatcher::new(self)
    }
}

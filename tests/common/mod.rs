// Common test utilities
#![allow(dead_code)]

use refactor_registry::*;
use std::any::Any;
use std::sync::{Arc, Mutex};

/// A call observed by a `RecordingRefactor`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Discover {
        file_name: String,
        start: usize,
        end: Option<usize>,
    },
    Edit {
        file_name: String,
        start: usize,
        end: Option<usize>,
        action: String,
    },
}

/// Refactor that records every call and offers a fixed set of actions
pub struct RecordingRefactor {
    name: String,
    description: String,
    offers: Option<Vec<ApplicableRefactorInfo>>,
    edit: Option<RefactorEditInfo>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingRefactor {
    /// Offers a single action labelled `label`
    pub fn offering(name: &str, label: &str) -> Self {
        let info = ApplicableRefactorInfo::new(name, label)
            .with_action(RefactorActionInfo::new(format!("{name}_action"), label));
        Self::with_offers(name, Some(vec![info]))
    }

    pub fn with_offers(name: &str, offers: Option<Vec<ApplicableRefactorInfo>>) -> Self {
        Self {
            name: name.to_string(),
            description: format!("{name} refactor"),
            offers,
            edit: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Respond to edit requests with `edit`
    pub fn producing(mut self, edit: RefactorEditInfo) -> Self {
        self.edit = Some(edit);
        self
    }

    /// Offers a single action and reports `description` as its own
    pub fn described_as(name: &str, description: &str) -> Self {
        let mut refactor = Self::offering(name, description);
        refactor.description = description.to_string();
        refactor
    }

    /// Handle to the call log that survives registration
    pub fn calls(&self) -> Arc<Mutex<Vec<Call>>> {
        self.calls.clone()
    }
}

impl Refactor for RecordingRefactor {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn get_available_actions(
        &self,
        context: &RefactorContext<'_>,
    ) -> Option<Vec<ApplicableRefactorInfo>> {
        self.calls.lock().unwrap().push(Call::Discover {
            file_name: context.file.file_name.clone(),
            start: context.start_position,
            end: context.end_position,
        });
        self.offers.clone()
    }

    fn get_edits_for_action(
        &self,
        context: &RefactorContext<'_>,
        action_name: &str,
    ) -> Option<RefactorEditInfo> {
        self.calls.lock().unwrap().push(Call::Edit {
            file_name: context.file.file_name.clone(),
            start: context.start_position,
            end: context.end_position,
            action: action_name.to_string(),
        });
        self.edit.clone()
    }
}

pub struct TestProgram {
    pub root_files: Vec<String>,
}

impl Program for TestProgram {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Host with a configurable newline convention
pub struct TestHost {
    pub new_line: Option<String>,
}

impl LanguageServiceHost for TestHost {
    fn new_line(&self) -> Option<&str> {
        self.new_line.as_deref()
    }
}

/// Owned collaborators a `RefactorContext` borrows from
pub struct Fixture {
    pub file: SourceFile,
    pub program: TestProgram,
    pub host: TestHost,
    pub format: FormatContext,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            file: SourceFile::new(
                "src/app.ts",
                "function total(items) {\n  return items.reduce((a, b) => a + b, 0);\n}\n",
            ),
            program: TestProgram {
                root_files: vec!["src/app.ts".to_string()],
            },
            host: TestHost { new_line: None },
            format: FormatContext::default(),
        }
    }

    /// Cursor context at `position`
    pub fn cursor(&self, position: usize) -> RefactorContext<'_> {
        RefactorContext::new(
            &self.file,
            position,
            &self.program,
            &self.host,
            &self.format,
        )
    }

    /// Selection context covering `start..end`
    pub fn selection(&self, start: usize, end: usize) -> RefactorContext<'_> {
        self.cursor(start).with_end_position(end)
    }
}

pub fn action_labels(infos: &[ApplicableRefactorInfo]) -> Vec<String> {
    infos
        .iter()
        .flat_map(|info| info.actions.iter().map(|a| a.description.clone()))
        .collect()
}

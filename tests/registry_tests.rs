//! Tests for RefactorRegistry population and listing.

mod common;

use common::*;
use refactor_registry::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_register_duplicate_does_not_fail() {
    let mut registry = RefactorRegistry::new();
    registry.register(RecordingRefactor::described_as("extract-function", "Old"));
    registry.register(RecordingRefactor::described_as("extract-function", "New"));

    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get("extract-function").unwrap().description(),
        "New"
    );
}

#[test]
fn test_try_register_leaves_original_in_place() {
    let original = RecordingRefactor::described_as("extract-function", "Original");
    let late = RecordingRefactor::described_as("extract-function", "Late");

    let mut registry = RefactorRegistry::new();
    registry.try_register(original).unwrap();
    let result = registry.try_register(late);

    assert!(matches!(result, Err(RefactorError::DuplicateRefactor(_))));
    assert_eq!(
        registry.get("extract-function").unwrap().description(),
        "Original"
    );
}

#[test]
fn test_list_refactors_in_registration_order() {
    let mut registry = RefactorRegistry::new();
    registry.register(RecordingRefactor::described_as("move-to-file", "Move to a new file"));
    registry.register(RecordingRefactor::described_as(
        "add-braces",
        "Add braces to arrow function",
    ));

    let listed = registry.list_refactors();
    assert_eq!(
        listed,
        vec![
            RefactorInfo {
                name: "move-to-file".to_string(),
                description: "Move to a new file".to_string(),
            },
            RefactorInfo {
                name: "add-braces".to_string(),
                description: "Add braces to arrow function".to_string(),
            },
        ]
    );

    let json = serde_json::to_string(&listed[0]).unwrap();
    assert_eq!(
        json,
        r#"{"name":"move-to-file","description":"Move to a new file"}"#
    );
}

#[test]
fn test_shared_refactor_registered_in_two_registries() {
    let shared: Arc<dyn Refactor> =
        Arc::new(RecordingRefactor::offering("extract-function", "Extract to function"));

    let mut first = RefactorRegistry::new();
    let mut second = RefactorRegistry::new();
    first.register_arc(shared.clone());
    second.try_register_arc(shared.clone()).unwrap();

    assert!(Arc::ptr_eq(first.get("extract-function").unwrap(), &shared));
    assert!(Arc::ptr_eq(second.get("extract-function").unwrap(), &shared));
}

#[test]
fn test_concurrent_queries_after_population() {
    let mut registry = RefactorRegistry::new();
    registry.register(RecordingRefactor::offering("extract-function", "Extract to function"));
    registry.register(RecordingRefactor::offering("extract-constant", "Extract to constant"));
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let fixture = Fixture::new();
                let ctx = fixture.selection(i, i + 10);
                action_labels(&registry.dispatcher().get_applicable_refactors(&ctx))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            vec!["Extract to function", "Extract to constant"]
        );
    }
}

use storyline_error::{
    FileError, FileErrorKind, LookupError, LookupErrorKind, SchemaError, SchemaErrorKind,
    StorylineError, StorylineErrorKind, StorylineResult,
};

fn lookup(stage: &str) -> StorylineResult<()> {
    Err(LookupError::new(LookupErrorKind::Model(stage.to_string())))?
}

#[test]
fn lookup_error_converts_and_reports_stage() {
    let err = lookup("nonexistent_stage").unwrap_err();

    assert!(err.is_lookup());
    match err.kind() {
        StorylineErrorKind::Lookup(e) => assert_eq!(e.kind.stage(), "nonexistent_stage"),
        other => panic!("expected lookup error, got {}", other),
    }
    assert!(err.to_string().contains("agent_model_mapping"));
}

#[test]
fn location_points_at_caller() {
    let err = FileError::new(FileErrorKind::Read("prompts/viewer.md".to_string()));
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn mismatched_stages_lists_both_sides() {
    let err: StorylineError = SchemaError::new(SchemaErrorKind::MismatchedStages {
        prompt_only: vec!["narrator".to_string()],
        model_only: vec!["critic".to_string(), "editor".to_string()],
    })
    .into();

    let message = err.to_string();
    assert!(message.contains("prompt-only [narrator]"));
    assert!(message.contains("model-only [critic, editor]"));
    assert!(!err.is_lookup());
}

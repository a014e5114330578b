//! Tests for prompt reading, template listing and roster assembly.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use storyline_config::{DEFAULT_MODEL, PipelineConfig};
use storyline_error::{FileErrorKind, StorylineErrorKind};
use storyline_prompts::{AgentRoster, PromptLibrary, TemplateCatalog, TemplateKind};
use tempfile::TempDir;

/// Config rooted in `root`, with prompts under `root/prompts` and templates under `root/templates`.
fn config_in(root: &Path, prompts: &[(&str, &str)], models: &[(&str, &str)]) -> PipelineConfig {
    PipelineConfig::new(
        to_map(prompts),
        to_map(models),
        root.join("prompts").display().to_string(),
        root.join("templates").display().to_string(),
    )
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_read_prompt_is_trimmed() {
    let root = TempDir::new().unwrap();
    write(
        &root.path().join("prompts/viewer.md"),
        "\n  You are a viewer.\n\n",
    );
    let config = config_in(
        root.path(),
        &[("viewer", "viewer.md")],
        &[("viewer", "gemini-2.5-pro")],
    );

    let library = PromptLibrary::new(&config);
    assert_eq!(library.read("viewer").unwrap(), "You are a viewer.");
    assert_eq!(library.read_file("viewer.md").unwrap(), "You are a viewer.");
    assert_eq!(
        library.path("viewer").unwrap(),
        root.path().join("prompts/viewer.md")
    );
}

#[test]
fn test_missing_prompt_file_is_not_found() {
    let root = TempDir::new().unwrap();
    let config = config_in(
        root.path(),
        &[("viewer", "viewer.md")],
        &[("viewer", "gemini-2.5-pro")],
    );

    let err = PromptLibrary::new(&config).read("viewer").unwrap_err();
    match err.kind() {
        StorylineErrorKind::File(e) => assert!(matches!(e.kind, FileErrorKind::NotFound(_))),
        other => panic!("expected file error, got {}", other),
    }
}

#[test]
fn test_unmapped_prompt_is_lookup_error() {
    let root = TempDir::new().unwrap();
    let config = config_in(root.path(), &[], &[]);

    let err = PromptLibrary::new(&config).read("nonexistent_stage").unwrap_err();
    assert!(err.is_lookup());
}

#[test]
fn test_list_templates_filters_and_sorts() {
    let root = TempDir::new().unwrap();
    let catalog = TemplateCatalog::new(root.path().join("templates"));
    catalog.ensure_dirs().unwrap();

    write(&catalog.path(TemplateKind::Story, "zebra.md"), "z");
    write(&catalog.path(TemplateKind::Story, "alpha.md"), "a");
    write(&catalog.path(TemplateKind::Story, "notes.txt"), "ignored");
    fs::create_dir_all(catalog.path(TemplateKind::Story, "nested.md")).unwrap();

    assert_eq!(
        catalog.list(TemplateKind::Story).unwrap(),
        vec!["alpha.md".to_string(), "zebra.md".to_string()]
    );
    assert!(catalog.list(TemplateKind::Storyboard).unwrap().is_empty());
}

#[test]
fn test_list_missing_directory_is_empty() {
    let root = TempDir::new().unwrap();
    let catalog = TemplateCatalog::new(root.path().join("absent"));

    assert!(catalog.list(TemplateKind::Story).unwrap().is_empty());
}

#[test]
fn test_read_template() {
    let root = TempDir::new().unwrap();
    let config = config_in(root.path(), &[], &[]);
    let catalog = TemplateCatalog::from_config(&config);

    write(
        &catalog.path(TemplateKind::Storyboard, "three_act.md"),
        "Shot 1\n",
    );

    assert_eq!(
        catalog
            .read(TemplateKind::Storyboard, "three_act.md")
            .unwrap()
            .as_deref(),
        Some("Shot 1")
    );
    assert_eq!(catalog.read(TemplateKind::Story, "missing.md").unwrap(), None);
    assert_eq!(
        catalog.dir(TemplateKind::Storyboard),
        root.path().join("templates").join("storyboard")
    );
}

#[test]
fn test_ensure_dirs_creates_both_kinds() {
    let root = TempDir::new().unwrap();
    let catalog = TemplateCatalog::new(root.path().join("templates"));

    catalog.ensure_dirs().unwrap();
    assert!(root.path().join("templates/story").is_dir());
    assert!(root.path().join("templates/storyboard").is_dir());

    // Idempotent
    catalog.ensure_dirs().unwrap();
}

#[test]
fn test_roster_pairs_prompts_with_models() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("prompts/viewer.md"), "Watch.");
    write(&root.path().join("prompts/reviewer.md"), "Review.");
    let config = config_in(
        root.path(),
        &[("viewer", "viewer.md"), ("reviewer", "reviewer.md")],
        &[("reviewer", "gemini-2.5-pro"), ("critic", "gemini-2.5-pro")],
    );

    let roster = AgentRoster::assemble(&PromptLibrary::new(&config)).unwrap();

    assert_eq!(roster.len(), 2);
    let stages: Vec<&str> = roster.iter().map(|agent| agent.stage().as_str()).collect();
    assert_eq!(stages, vec!["reviewer", "viewer"]);

    let reviewer = roster.get("reviewer").unwrap();
    assert_eq!(reviewer.model(), "gemini-2.5-pro");
    assert_eq!(reviewer.system_prompt(), "Review.");

    let viewer = roster.get("viewer").unwrap();
    assert_eq!(viewer.model(), DEFAULT_MODEL);
    assert_eq!(viewer.prompt_path(), &root.path().join("prompts/viewer.md"));

    assert!(roster.get("critic").is_none());
}

#[test]
fn test_roster_fails_on_missing_prompt() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("prompts/viewer.md"), "Watch.");
    let config = config_in(
        root.path(),
        &[("viewer", "viewer.md"), ("reviewer", "reviewer.md")],
        &[],
    );

    let err = AgentRoster::assemble(&PromptLibrary::new(&config)).unwrap_err();
    assert!(matches!(err.kind(), StorylineErrorKind::File(_)));
}

#[test]
fn test_roster_serializes() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("prompts/viewer.md"), "Watch.");
    let config = config_in(
        root.path(),
        &[("viewer", "viewer.md")],
        &[("viewer", "gemini-2.5-pro")],
    );

    let roster = AgentRoster::assemble(&PromptLibrary::new(&config)).unwrap();
    let json = serde_json::to_value(&roster).unwrap();
    assert_eq!(json["agents"][0]["stage"], "viewer");
    assert_eq!(json["agents"][0]["model"], "gemini-2.5-pro");
}

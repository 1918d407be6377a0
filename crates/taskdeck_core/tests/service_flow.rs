use taskdeck_core::snapshot::TASKS_KEY;
use taskdeck_core::{InMemoryKvStore, KvStore, TaskEditor, TaskService};
use uuid::Uuid;

#[test]
fn load_from_empty_store_starts_empty() {
    let kv = InMemoryKvStore::new();
    let service = TaskService::load(&kv).unwrap();
    assert!(service.tasks().is_empty());
}

#[test]
fn every_successful_mutation_is_visible_after_reload() {
    let kv = InMemoryKvStore::new();
    let mut service = TaskService::load(&kv).unwrap();

    assert!(service.add("pack bags", "passport, charger").unwrap());
    let id = service.tasks()[0].id;
    assert!(service.toggle_complete(id).unwrap());
    assert!(service.edit(id, "pack bags tonight", "").unwrap());

    let reloaded = TaskService::load(&kv).unwrap();
    assert_eq!(reloaded.tasks(), service.tasks());
    assert_eq!(reloaded.tasks()[0].title, "pack bags tonight");
    assert!(reloaded.tasks()[0].completed);
}

#[test]
fn rejected_add_reports_unchanged_and_writes_nothing() {
    let kv = InMemoryKvStore::new();
    let mut service = TaskService::load(&kv).unwrap();

    assert!(!service.add("   ", "details").unwrap());
    assert!(service.tasks().is_empty());
    assert_eq!(kv.get(TASKS_KEY).unwrap(), None);
}

#[test]
fn operations_on_unknown_ids_report_unchanged() {
    let kv = InMemoryKvStore::new();
    let mut service = TaskService::load(&kv).unwrap();
    service.add("only task", "").unwrap();

    let ghost = Uuid::new_v4();
    assert!(!service.toggle_complete(ghost).unwrap());
    assert!(!service.remove(ghost).unwrap());
    assert!(!service.edit(ghost, "new title", "").unwrap());
    assert_eq!(service.tasks().len(), 1);
}

#[test]
fn remove_twice_second_call_is_a_noop() {
    let kv = InMemoryKvStore::new();
    let mut service = TaskService::load(&kv).unwrap();
    service.add("short lived", "").unwrap();
    let id = service.tasks()[0].id;

    assert!(service.remove(id).unwrap());
    assert!(!service.remove(id).unwrap());
    assert!(service.tasks().is_empty());
}

#[test]
fn editor_begin_seeds_draft_from_task() {
    let kv = InMemoryKvStore::new();
    let mut service = TaskService::load(&kv).unwrap();
    service.add("call dentist", "before Friday").unwrap();
    let task = &service.tasks()[0];

    let mut editor = TaskEditor::new();
    editor.begin(task);
    assert!(editor.is_active());
    assert_eq!(editor.title, "call dentist");
    assert_eq!(editor.description, "before Friday");
}

#[test]
fn editor_cancel_discards_draft_and_exits() {
    let kv = InMemoryKvStore::new();
    let mut service = TaskService::load(&kv).unwrap();
    service.add("stable", "unchanged").unwrap();
    let id = service.tasks()[0].id;

    let mut editor = TaskEditor::new();
    editor.begin(&service.tasks()[0]);
    editor.title = "scrapped draft".to_string();
    editor.cancel(service.find(id).unwrap());

    assert!(!editor.is_active());
    assert_eq!(editor.title, "stable");
    assert_eq!(service.find(id).unwrap().title, "stable");
}

#[test]
fn editor_commit_applies_draft_and_exits() {
    let kv = InMemoryKvStore::new();
    let mut service = TaskService::load(&kv).unwrap();
    service.add("draft title", "draft body").unwrap();
    let id = service.tasks()[0].id;
    service.toggle_complete(id).unwrap();

    let mut editor = TaskEditor::new();
    editor.begin(service.find(id).unwrap());
    editor.title = "final title".to_string();
    editor.description = String::new();

    assert!(editor.commit(&mut service, id).unwrap());
    assert!(!editor.is_active());

    let task = service.find(id).unwrap();
    assert_eq!(task.title, "final title");
    assert_eq!(task.description, "");
    assert!(task.completed);
}

#[test]
fn editor_commit_with_blank_title_stays_in_edit_mode() {
    let kv = InMemoryKvStore::new();
    let mut service = TaskService::load(&kv).unwrap();
    service.add("keep me", "").unwrap();
    let id = service.tasks()[0].id;

    let mut editor = TaskEditor::new();
    editor.begin(service.find(id).unwrap());
    editor.title = "   ".to_string();

    assert!(!editor.commit(&mut service, id).unwrap());
    assert!(editor.is_active());
    assert_eq!(service.find(id).unwrap().title, "keep me");
}

#[test]
fn editor_commit_on_missing_id_exits_without_change() {
    let kv = InMemoryKvStore::new();
    let mut service = TaskService::load(&kv).unwrap();
    service.add("survivor", "").unwrap();

    let mut editor = TaskEditor::new();
    editor.begin(&service.tasks()[0]);
    editor.title = "new title".to_string();

    assert!(!editor.commit(&mut service, Uuid::new_v4()).unwrap());
    assert!(!editor.is_active());
    assert_eq!(service.tasks()[0].title, "survivor");
}

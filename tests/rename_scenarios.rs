use findreplace::defaults::UndoLabels;
use findreplace::host::{DocumentHost, Host};
use findreplace::panel::Panel;
use findreplace::project::{ItemType, Layer, ProjectDocument, ProjectItem};
use findreplace::rename::{find_replace, RenameRequest, ScopeKind};
use findreplace::ErrorCode;
use tempfile::tempdir;

const PROMO: &str = r#"{
  "name": "Promo",
  "activeItem": "comp-main",
  "items": [
    { "id": "ftg-1", "name": "Intro_v1", "type": "footage" },
    { "id": "ftg-2", "name": "Outro_v1", "type": "footage" },
    { "id": "logo", "name": "Logo", "type": "solid" },
    { "id": "comp-main", "name": "Main", "type": "composition",
      "layers": [ { "id": "l1", "name": "Layer 1" }, { "id": "l2", "name": "Layer 2" } ] }
  ]
}"#;

fn item_names(host: &DocumentHost) -> Vec<String> {
    host.project()
        .unwrap()
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

/// Host that counts transaction calls around an in-memory document.
struct AuditHost {
    inner: DocumentHost,
    begun: usize,
    ended: usize,
    project_reads: usize,
}

impl AuditHost {
    fn new(doc: ProjectDocument) -> Self {
        Self {
            inner: DocumentHost::in_memory(doc),
            begun: 0,
            ended: 0,
            project_reads: 0,
        }
    }
}

impl Host for AuditHost {
    fn begin_transaction(&mut self, label: &str) -> findreplace::Result<()> {
        self.begun += 1;
        self.inner.begin_transaction(label)
    }

    fn end_transaction(&mut self) -> findreplace::Result<()> {
        self.ended += 1;
        self.inner.end_transaction()
    }

    fn open_project(&mut self) -> Option<&mut ProjectDocument> {
        self.project_reads += 1;
        self.inner.open_project()
    }
}

#[test]
fn suffix_removal_is_saved_with_history() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("promo.json");
    std::fs::write(&path, PROMO).unwrap();

    let mut host = DocumentHost::open(&path).unwrap();
    let outcome = find_replace(
        &mut host,
        ScopeKind::ProjectItems,
        &RenameRequest::new("_v1", ""),
        &UndoLabels::default(),
    )
    .unwrap();

    assert_eq!(outcome.matched_count, 2);
    assert_eq!(outcome.renamed_count, 2);
    assert_eq!(outcome.scope_label, "Promo");

    let reopened = DocumentHost::open(&path).unwrap();
    assert_eq!(item_names(&reopened), vec!["Intro", "Outro", "Logo", "Main"]);

    let history = &reopened.project().unwrap().history;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].changes.len(), 2);
    assert_eq!(history[0].changes[0].from, "Intro_v1");
}

#[test]
fn no_op_replace_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("promo.json");
    std::fs::write(&path, PROMO).unwrap();

    let mut host = DocumentHost::open(&path).unwrap();
    let outcome = find_replace(
        &mut host,
        ScopeKind::CompositionLayers,
        &RenameRequest::new("Layer", "Layer"),
        &UndoLabels::default(),
    )
    .unwrap();

    assert_eq!(outcome.matched_count, 2);
    assert_eq!(outcome.renamed_count, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), PROMO);
}

#[test]
fn empty_find_never_opens_transaction() {
    let mut host = AuditHost::new(ProjectDocument::parse(PROMO).unwrap());
    let err = find_replace(
        &mut host,
        ScopeKind::ProjectItems,
        &RenameRequest::new("", "x"),
        &UndoLabels::default(),
    )
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidInput);
    assert_eq!(host.begun, 0);
    assert_eq!(host.project_reads, 0);
}

#[test]
fn missing_composition_is_no_scope_and_closes_once() {
    let mut doc = ProjectDocument::parse(PROMO).unwrap();
    doc.active_item = Some("logo".to_string());
    let before = doc.clone();
    let mut host = AuditHost::new(doc);

    let err = find_replace(
        &mut host,
        ScopeKind::CompositionLayers,
        &RenameRequest::new("Layer", "Shape"),
        &UndoLabels::default(),
    )
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ScopeNoComposition);
    assert_eq!((host.begun, host.ended), (1, 1));
    assert_eq!(host.inner.project(), Some(&before));
}

#[test]
fn locked_layer_failure_closes_once_and_keeps_progress() {
    let mut doc = ProjectDocument::new(vec![ProjectItem::composition(
        "comp",
        "Main",
        vec![
            Layer::new("l1", "Title A"),
            Layer::new("l2", "Title B").locked(),
        ],
    )]);
    doc.active_item = Some("comp".to_string());
    let mut host = AuditHost::new(doc);

    let err = find_replace(
        &mut host,
        ScopeKind::CompositionLayers,
        &RenameRequest::new("Title", "Card"),
        &UndoLabels::default(),
    )
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::HostOperationFailed);
    assert_eq!((host.begun, host.ended), (1, 1));

    let layers = host.inner.project().unwrap().items()[0].layers().to_vec();
    assert_eq!(layers[0].name, "Card A");
    assert_eq!(layers[1].name, "Title B");
}

#[test]
fn custom_undo_label_is_used() {
    let mut host = DocumentHost::in_memory(ProjectDocument::new(vec![ProjectItem::new(
        "a",
        "Shot_010",
        ItemType::Footage,
    )]));
    let labels = UndoLabels {
        project: "Batch rename".to_string(),
        ..UndoLabels::default()
    };

    find_replace(
        &mut host,
        ScopeKind::ProjectItems,
        &RenameRequest::new("_010", "_020"),
        &labels,
    )
    .unwrap();

    assert_eq!(host.project().unwrap().history[0].label, "Batch rename");
}

#[test]
fn panel_swap_then_apply_reverts_rename() {
    let mut host = DocumentHost::in_memory(ProjectDocument::parse(PROMO).unwrap());
    let mut panel = Panel::default();
    panel.set_find_text("_v1");
    panel.set_replace_text("_final");

    panel.apply(&mut host, ScopeKind::ProjectItems);
    assert_eq!(item_names(&host)[0], "Intro_final");

    panel.swap();
    let status = panel.apply(&mut host, ScopeKind::ProjectItems).to_string();
    assert_eq!(status, "Replaced '_final' in 2 project item(s)");
    assert_eq!(item_names(&host), vec!["Intro_v1", "Outro_v1", "Logo", "Main"]);
    assert_eq!(host.project().unwrap().history.len(), 2);
}

#[test]
fn unmatched_pass_over_shared_layer_ids_records_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shared.json");
    let content = r#"{
  "activeItem": "c1",
  "items": [
    { "id": "c1", "name": "Main", "type": "composition", "layers": [ { "id": "1", "name": "BG" } ] },
    { "id": "c2", "name": "Alt", "type": "composition", "layers": [ { "id": "1", "name": "Title" } ] }
  ]
}"#;
    std::fs::write(&path, content).unwrap();

    let mut host = DocumentHost::open(&path).unwrap();
    let outcome = find_replace(
        &mut host,
        ScopeKind::CompositionLayers,
        &RenameRequest::new("zzz", "y"),
        &UndoLabels::default(),
    )
    .unwrap();

    assert_eq!(outcome.renamed_count, 0);
    assert!(host.project().unwrap().history.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}

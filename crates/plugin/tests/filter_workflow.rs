//! End-to-end workflow: settings on disk, a host that lays out late, vault
//! events, the user command and the periodic tick.

use std::time::{Duration, Instant};

use notefold_explorer::{MemoryView, RowKind, TreeRow};
use notefold_plugin::{
    FilterController, MemoryHost, PassOutcome, RefreshClock, SkipReason, UpdateTrigger,
    VaultEventKind,
};
use notefold_settings::SettingsStore;
use tempfile::tempdir;

fn vault_root() -> Vec<TreeRow> {
    vec![
        TreeRow::folder(
            "Project",
            vec![
                TreeRow::header(),
                TreeRow::folder("Project/Drafts", vec![TreeRow::header()]),
                TreeRow::file("Project/Drafts.md"),
            ],
        ),
        TreeRow::file("Project.md"),
        TreeRow::file("Notes.md"),
    ]
}

fn paths(rows: &[TreeRow]) -> Vec<Option<&str>> {
    rows.iter().map(|row| row.path.as_deref()).collect()
}

#[test]
fn full_session_filter_toggle_and_restore() {
    let dir = tempdir().unwrap();
    let mut store = SettingsStore::load(dir.path().join("notefold.json")).unwrap();
    let mut controller = FilterController::new();

    // The explorer leaf is not laid out yet; the pass defers.
    let mut host = MemoryHost::not_laid_out();
    let outcome = controller.handle(UpdateTrigger::Command, &mut host, store.settings());
    assert_eq!(outcome, PassOutcome::Skipped(SkipReason::ViewNotReady));

    // Layout ready: the next trigger captures and filters.
    let original = vault_root();
    host.attach_view(MemoryView::new(original.clone()));
    let outcome = controller.handle(
        UpdateTrigger::Vault(VaultEventKind::Create),
        &mut host,
        store.settings(),
    );
    assert_eq!(
        outcome,
        PassOutcome::Filtered {
            hidden: 2,
            directories: 2
        }
    );
    assert_eq!(host.status_text(), "Shadowed files: 2 hidden");

    let rows = host.view().unwrap().rows();
    assert_eq!(paths(rows), vec![Some("Project"), Some("Notes.md")]);
    // The nested `Drafts.md` is gone too, independent of the root's decision.
    assert_eq!(
        paths(&rows[0].entries),
        vec![None, Some("Project/Drafts")]
    );
    assert_eq!(rows[0].entries[1].kind, RowKind::Folder);

    // Toggling the setting off restores the pristine tree.
    store
        .update(|settings| settings.hide_shadowed_files = false)
        .unwrap();
    let outcome = controller.handle(UpdateTrigger::Command, &mut host, store.settings());
    assert_eq!(outcome, PassOutcome::Restored);
    assert_eq!(host.view().unwrap().rows(), &original[..]);
    assert_eq!(host.status_text(), "Shadowed files: off");

    // The flag survives a reload from disk.
    let reloaded = SettingsStore::load(store.path()).unwrap();
    assert!(!reloaded.settings().hide_shadowed_files);
}

#[test]
fn periodic_tick_keeps_the_tree_filtered() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::load(dir.path().join("notefold.json")).unwrap();
    let mut controller = FilterController::with_clock(RefreshClock::new(Duration::from_secs(1)));
    let mut host = MemoryHost::new(MemoryView::new(vault_root()));
    let start = Instant::now();

    let first = controller.tick(start, &mut host, store.settings()).unwrap();
    assert!(matches!(first, PassOutcome::Filtered { hidden: 2, .. }));

    // Within the interval nothing runs; after it, the pass is idempotent.
    assert!(controller
        .tick(start + Duration::from_millis(300), &mut host, store.settings())
        .is_none());
    let later = controller
        .tick(start + Duration::from_secs(2), &mut host, store.settings())
        .unwrap();
    assert!(matches!(later, PassOutcome::Filtered { hidden: 0, .. }));
}

#[test]
fn create_event_while_filtered_refreshes_the_snapshot() {
    let dir = tempdir().unwrap();
    let mut store = SettingsStore::load(dir.path().join("notefold.json")).unwrap();
    let mut controller = FilterController::new();
    let mut host = MemoryHost::new(MemoryView::new(vault_root()));

    controller.handle(UpdateTrigger::Command, &mut host, store.settings());

    // The host re-renders the explorer pristine after a new pair appears.
    let mut regrown = vault_root();
    regrown.push(TreeRow::folder("Ideas", Vec::new()));
    regrown.push(TreeRow::file("Ideas.md"));
    host.attach_view(MemoryView::new(regrown.clone()));

    let outcome = controller.handle(
        UpdateTrigger::Vault(VaultEventKind::Create),
        &mut host,
        store.settings(),
    );
    assert!(matches!(outcome, PassOutcome::Filtered { hidden: 3, .. }));

    // Disabling now restores the regrown tree, not the stale one.
    store
        .update(|settings| settings.hide_shadowed_files = false)
        .unwrap();
    controller.handle(UpdateTrigger::Command, &mut host, store.settings());
    assert_eq!(host.view().unwrap().rows(), &regrown[..]);
}

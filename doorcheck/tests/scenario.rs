//! End-to-end flows through store, reducer, and persistence

use doorcheck::action::Action;
use doorcheck::effect::Effect;
use doorcheck::reducer::reducer;
use doorcheck::state::{AppState, Mode, Status};
use doorcheck::store::Store;
use doorcheck_core::{Checklist, ItemId, SnapshotStore};
use tempfile::TempDir;

struct App {
    store: Store,
    snapshot: SnapshotStore,
    _dir: TempDir,
}

impl App {
    fn start() -> Self {
        let dir = TempDir::new().unwrap();
        let snapshot = SnapshotStore::new(dir.path().join("checklist.json"));
        let store = Store::new(AppState::new(snapshot.load()), reducer);
        Self {
            store,
            snapshot,
            _dir: dir,
        }
    }

    /// Dispatch and perform effects the way the main loop does
    fn dispatch(&mut self, action: Action) {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            match effect {
                Effect::SaveList => self
                    .snapshot
                    .save(&self.store.state().checklist)
                    .unwrap(),
            }
        }
    }

    fn state(&self) -> &AppState {
        self.store.state()
    }
}

#[test]
fn first_run_toggle_delete_and_check_all() {
    let mut app = App::start();

    // Fresh start seeds the four defaults
    assert_eq!(app.state().checklist.len(), 4);
    assert_eq!(app.state().status(), Status::Remaining(4));

    app.dispatch(Action::ItemToggle(ItemId(3)));
    assert_eq!(app.state().status(), Status::Remaining(3));

    // Deleting is confirm-gated
    app.dispatch(Action::ItemDeleteRequest(ItemId(1)));
    assert!(matches!(app.state().mode, Mode::Confirming(_)));
    app.dispatch(Action::ConfirmAccept);
    assert_eq!(app.state().mode, Mode::List);
    assert_eq!(app.state().checklist.len(), 3);
    assert!(app.state().checklist.get(ItemId(1)).is_none());
    assert!(app.state().checklist.get(ItemId(3)).unwrap().checked);

    app.dispatch(Action::ListCheckAll);
    assert_eq!(app.state().status(), Status::Complete);

    // Everything above was persisted; a restart sees the same list
    let reloaded = app.snapshot.load();
    assert_eq!(&reloaded, &app.state().checklist);
    assert_eq!(reloaded.len(), 3);
}

#[test]
fn add_flow_persists_and_survives_restart() {
    let mut app = App::start();

    app.dispatch(Action::ModalOpen);
    assert_eq!(
        app.state().mode,
        Mode::AddItem {
            input: String::new()
        }
    );

    app.dispatch(Action::InputChange("Umbrella".into()));
    app.dispatch(Action::ItemAdd("Umbrella".into()));
    assert_eq!(app.state().mode, Mode::List);
    assert_eq!(app.state().checklist.len(), 5);

    let reloaded = app.snapshot.load();
    let added = reloaded.items().last().unwrap();
    assert_eq!(added.text, "Umbrella");
    assert!(!added.checked);
    assert!(added.id > ItemId(4));
}

#[test]
fn reorder_and_reset_round_trip() {
    let mut app = App::start();

    let order = vec![ItemId(4), ItemId(3), ItemId(2), ItemId(1)];
    app.dispatch(Action::ListReorder(order.clone()));
    assert_eq!(app.state().checklist.ids(), order);

    app.dispatch(Action::ListCheckAll);
    app.dispatch(Action::ListResetRequest);
    app.dispatch(Action::ConfirmAccept);
    assert_eq!(app.state().status(), Status::Remaining(4));

    // Order and cleared checkmarks both survive the restart
    let reloaded = app.snapshot.load();
    assert_eq!(reloaded.ids(), order);
    assert!(reloaded.items().iter().all(|item| !item.checked));
}

#[test]
fn cancelled_confirms_change_nothing() {
    let mut app = App::start();

    app.dispatch(Action::ItemDeleteRequest(ItemId(2)));
    app.dispatch(Action::ConfirmCancel);
    assert_eq!(app.state().mode, Mode::List);
    assert_eq!(app.state().checklist.len(), 4);

    app.dispatch(Action::ListResetRequest);
    app.dispatch(Action::ConfirmCancel);
    assert_eq!(app.state().checklist.len(), 4);
}

#[test]
fn deleting_every_item_leaves_an_empty_list_not_the_seed() {
    let mut app = App::start();

    for id in app.state().checklist.ids() {
        app.dispatch(Action::ItemDeleteRequest(id));
        app.dispatch(Action::ConfirmAccept);
    }
    assert!(app.state().checklist.is_empty());
    assert_eq!(app.state().status(), Status::Remaining(0));

    // An empty list is a valid snapshot and must not reseed on load
    let reloaded = app.snapshot.load();
    assert!(reloaded.is_empty());
}

#[test]
fn blank_add_keeps_the_modal_open_without_adding() {
    let mut app = App::start();

    app.dispatch(Action::ModalOpen);
    app.dispatch(Action::InputChange("   ".into()));
    app.dispatch(Action::ItemAdd("   ".into()));
    assert_eq!(
        app.state().mode,
        Mode::AddItem {
            input: "   ".into()
        }
    );
    assert_eq!(app.state().checklist.len(), 4);

    // the user can still back out explicitly
    app.dispatch(Action::ModalClose);
    assert_eq!(app.state().mode, Mode::List);
}

#[test]
fn corrupt_snapshot_falls_back_to_the_seed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checklist.json");
    std::fs::write(&path, "{not json").unwrap();

    let snapshot = SnapshotStore::new(&path);
    assert_eq!(snapshot.load(), Checklist::seed());
}

// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    annotate::PageWatcher,
    config::state::AppState,
    page::PeoplePage,
    roster,
    store::{FileStore, StoreMap, StorePort},
    student::Roster,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Canvas Roster",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Fire-and-forget request to open the detached note editor for one
/// student. Relayed over a channel; no response expected.
#[derive(Clone, Debug)]
pub struct EditorRequest {
    pub class: String,
    pub user_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteSurface {
    Modal,
    Detached,
}

/// Editing state for one open note surface.
pub struct NoteEditor {
    pub surface: NoteSurface,
    pub class: String,
    pub user_id: String,
    pub title: String,
    pub draft: String,
    pub preview: bool,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub store: FileStore,

    // read-side snapshot for the browser view
    pub classes: Vec<String>,
    pub all_data: StoreMap,
    pub roster: Roster,

    // last fetched page + annotation over it
    pub page: Option<PeoplePage>,
    pub watcher: PageWatcher,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,

    // note surfaces; both can be open at once, last writer wins
    pub modal: Option<NoteEditor>,
    pub detached: Option<NoteEditor>,

    // editor-request relay
    pub editor_tx: mpsc::Sender<EditorRequest>,
    editor_rx: mpsc::Receiver<EditorRequest>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let store = FileStore::new();
        let (editor_tx, editor_rx) = mpsc::channel();

        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            store,
            classes: Vec::new(),
            all_data: StoreMap::new(),
            roster: Vec::new(),
            page: None,
            watcher: PageWatcher::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            modal: None,
            detached: None,
            editor_tx,
            editor_rx,
        };

        app.refresh_store_view();

        // restore the last selected class if it still exists
        match roster::last_selected(&app.store) {
            Ok(Some(last)) if app.classes.contains(&last) => {
                app.state.gui.selected_class = Some(last.clone());
                app.roster = roster::roster_of(&app.all_data, &last).unwrap_or_default();
            }
            Ok(_) => {}
            Err(e) => logd!("Init: last selected unavailable ({})", e),
        }

        if !app.classes.is_empty() {
            app.status("Loaded local data");
        }
        logf!(
            "Init: classes={}, selected={:?}",
            app.classes.len(),
            app.state.gui.selected_class
        );

        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    pub fn selected_class(&self) -> Option<&str> {
        self.state.gui.selected_class.as_deref()
    }

    /// Reload the whole-store snapshot and the selected roster from disk.
    pub fn refresh_store_view(&mut self) {
        match self.store.get_all() {
            Ok(map) => self.all_data = map,
            Err(e) => {
                loge!("Store: Read failed: {}", e);
                self.status(format!("Store error: {e}"));
                return;
            }
        }
        self.classes = roster::class_names_of(&self.all_data);

        // drop a selection whose class vanished
        if let Some(sel) = self.state.gui.selected_class.clone() {
            if self.classes.contains(&sel) {
                self.roster = roster::roster_of(&self.all_data, &sel).unwrap_or_default();
            } else {
                self.state.gui.selected_class = None;
                self.roster.clear();
            }
        }
    }

    pub fn select_class(&mut self, class: &str) {
        self.state.gui.selected_class = Some(s!(class));
        self.roster = roster::roster_of(&self.all_data, class).unwrap_or_default();
        self.status(format!("{}: {} student(s)", class, self.roster.len()));
        logf!("UI: Selected class {} ({} rows)", class, self.roster.len());

        if let Err(e) = roster::remember_selected(&mut self.store, class) {
            loge!("Store: remember selected failed: {}", e);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // drain editor requests relayed by the table
        while let Ok(req) = self.editor_rx.try_recv() {
            actions::notes::open_detached(self, req);
        }

        // debounced re-scan of the watched page
        if let Some(mut page) = self.page.take() {
            if let Some(stats) = self.watcher.tick(&mut page, Instant::now()) {
                logd!(
                    "Annotate: re-scan injected={} marked={} skipped={}",
                    stats.injected,
                    stats.already_marked,
                    stats.skipped
                );
            }
            if self.watcher.rescan_pending() {
                ctx.request_repaint_after(Duration::from_millis(25));
            }
            self.page = Some(page);
        }

        egui::SidePanel::left("classes")
            .resizable(false)
            .show(ctx, |ui| {
                components::class_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);

            ui.separator();

            components::roster_table::draw(ui, self);
        });

        components::note_editor::draw(ctx, self);
    }
}

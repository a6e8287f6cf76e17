//! Interactive session: the ephemeral UI state and its key handling.
//!
//! The front end translates terminal events into [`KeyChord`]s and feeds
//! them to [`SnippetSession::handle_key`]; it renders whatever
//! [`SnippetSession::view`] returns. Nothing in here is persisted except
//! through the use cases.

mod editor;
mod text_field;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sb_core::keymap::{Action, KeyChord, KeyCode, Keymap};
use sb_core::ports::ToastTimerPort;
use sb_core::settings::Settings;
use sb_core::{Screen, SearchQuery, Selection, Snippet, SyncReport, ToastExpiry, ToastKind};
use tracing::{debug, error, warn};

use crate::deps::AppDeps;
use crate::usecases::{
    CopyOutcome, CopySnippetToClipboard, DeleteSnippet, GetSettings, ListVisibleSnippets, SaveOutcome,
    SaveSnippet, SyncOutcome, SyncSnippets, UpdateSettings,
};

pub use editor::{EditorField, SnippetEditor};
pub use text_field::TextField;

/// Where typed keys go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    List,
    /// Set exactly while a [`SnippetEditor`] is open.
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toasts {
    pub copied: bool,
    pub sync: Option<SyncReport>,
}

/// Read-only snapshot handed to the renderer.
pub struct SessionView<'a> {
    pub search: &'a TextField,
    pub focus: Focus,
    pub screen: Screen,
    pub snippets: &'a [Snippet],
    pub selected: usize,
    pub editor: Option<&'a SnippetEditor>,
    pub toasts: &'a Toasts,
    pub status: Option<&'a str>,
    pub keymap: &'a Keymap,
    pub settings: &'a Settings,
    pub sync_enabled: bool,
}

pub struct SnippetSession {
    list: ListVisibleSnippets,
    save: SaveSnippet,
    delete: DeleteSnippet,
    copy: CopySnippetToClipboard,
    sync: SyncSnippets,
    update_settings: UpdateSettings,
    toast_timer: Arc<dyn ToastTimerPort>,

    settings: Settings,
    keymap: Keymap,

    search: TextField,
    selection: Selection,
    focus: Focus,
    screen: Screen,
    editor: Option<SnippetEditor>,
    visible: Vec<Snippet>,
    toasts: Toasts,
    /// Latest scheduled generation per visible toast.
    pending_dismissals: HashMap<ToastKind, u64>,
    toast_generation: u64,
    status: Option<String>,
}

impl SnippetSession {
    /// Load settings, build the key map and the first listing.
    ///
    /// Invalid user key bindings are logged and replaced by the defaults
    /// instead of preventing startup.
    pub async fn start(deps: AppDeps, initial_query: &str) -> Result<Self> {
        let settings = GetSettings::new(deps.settings.clone()).execute().await?;
        let keymap = match Keymap::default().with_overrides(&settings.keybindings) {
            Ok(keymap) => keymap,
            Err(e) => {
                warn!(error = %e, "Ignoring invalid key bindings");
                Keymap::default()
            }
        };

        let mut session = Self {
            list: ListVisibleSnippets::new(deps.snippet_repo.clone()),
            save: SaveSnippet::new(deps.snippet_repo.clone(), deps.clock.clone()),
            delete: DeleteSnippet::new(deps.snippet_repo.clone(), deps.clock.clone()),
            copy: CopySnippetToClipboard::new(deps.snippet_repo.clone(), deps.clipboard.clone(), deps.clock.clone()),
            sync: SyncSnippets::new(deps.snippet_repo.clone(), deps.remote.clone()),
            update_settings: UpdateSettings::new(deps.settings.clone()),
            toast_timer: deps.toast_timer.clone(),
            settings,
            keymap,
            search: TextField::with_text(initial_query),
            selection: Selection::default(),
            focus: Focus::Search,
            screen: Screen::Snippets,
            editor: None,
            visible: Vec::new(),
            toasts: Toasts::default(),
            pending_dismissals: HashMap::new(),
            toast_generation: 0,
            status: None,
        };
        session.refresh().await?;
        Ok(session)
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            search: &self.search,
            focus: self.focus,
            screen: self.screen,
            snippets: &self.visible,
            selected: self.selection.index(),
            editor: self.editor.as_ref(),
            toasts: &self.toasts,
            status: self.status.as_deref(),
            keymap: &self.keymap,
            settings: &self.settings,
            sync_enabled: self.sync.is_enabled(),
        }
    }

    pub fn search_term(&self) -> &str {
        self.search.text()
    }

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn visible(&self) -> &[Snippet] {
        &self.visible
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn editor(&self) -> Option<&SnippetEditor> {
        self.editor.as_ref()
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Re-run the current search against storage.
    pub async fn refresh(&mut self) -> Result<()> {
        self.visible = self.list.execute(&SearchQuery::parse(self.search.text())).await?;
        self.selection.clamp(self.visible.len());
        Ok(())
    }

    /// Hide the toast named by `expiry` unless it has been shown again
    /// since that dismissal was scheduled.
    pub fn dismiss_toast(&mut self, expiry: ToastExpiry) {
        let kind = expiry.kind;
        if self.pending_dismissals.get(&kind) != Some(&expiry.generation) {
            debug!(toast = %kind, generation = expiry.generation, "Ignoring stale toast expiry");
            return;
        }
        self.pending_dismissals.remove(&kind);
        debug!(toast = %kind, "Toast dismissed");
        match kind {
            ToastKind::Copied => self.toasts.copied = false,
            ToastKind::Sync => self.toasts.sync = None,
        }
    }

    /// Handle one key press. Failures are logged and surfaced in the
    /// status line; they never end the session.
    pub async fn handle_key(&mut self, chord: KeyChord) -> Control {
        self.status = None;
        match self.dispatch(chord).await {
            Ok(control) => control,
            Err(e) => {
                error!(error = %e, key = %chord, "Key handling failed");
                self.status = Some(format!("{e:#}"));
                Control::Continue
            }
        }
    }

    async fn dispatch(&mut self, chord: KeyChord) -> Result<Control> {
        if self.screen != Screen::Snippets {
            return self.dispatch_panel(chord).await;
        }

        match self.focus {
            Focus::Editor => return self.dispatch_editor(chord).await,
            Focus::Search if chord.is_text_editing() => {
                if self.search.apply(&chord) {
                    self.selection.reset();
                    self.refresh().await?;
                }
                return Ok(Control::Continue);
            }
            _ => {}
        }

        match self.keymap.lookup(&chord) {
            Some(action) => self.perform(action).await,
            None => Ok(Control::Continue),
        }
    }

    async fn dispatch_panel(&mut self, chord: KeyChord) -> Result<Control> {
        match self.keymap.lookup(&chord) {
            Some(Action::ShowHelp) => self.screen = self.screen.cycle(Screen::Help),
            Some(Action::ShowConfig) => self.screen = self.screen.cycle(Screen::Config),
            Some(Action::ShowFeedback) => self.screen = self.screen.cycle(Screen::Feedback),
            Some(Action::Cancel) => self.screen = Screen::Snippets,
            Some(Action::Sync) => self.run_sync().await?,
            Some(Action::ToggleSyncOnSave) if self.screen == Screen::Config => {
                self.toggle_sync_on_save().await?
            }
            Some(Action::Quit) => return Ok(Control::Quit),
            _ => {}
        }
        Ok(Control::Continue)
    }

    async fn dispatch_editor(&mut self, chord: KeyChord) -> Result<Control> {
        let Some(editor) = self.editor.as_mut() else {
            self.focus = Focus::List;
            return Ok(Control::Continue);
        };

        if chord.is_text_editing() {
            editor.apply(&chord);
            return Ok(Control::Continue);
        }

        // Enter submits from the single-line description and breaks lines
        // in the content.
        if chord == KeyChord::plain(KeyCode::Enter) {
            if editor.field() == EditorField::Content {
                editor.insert_newline();
                return Ok(Control::Continue);
            }
            self.save_editor().await?;
            return Ok(Control::Continue);
        }

        match self.keymap.lookup(&chord) {
            Some(Action::Save) => self.save_editor().await?,
            Some(Action::Cancel) => self.close_editor(),
            Some(Action::NextField) => editor.next_field(),
            Some(Action::SelectUp) => self.selection.up(),
            Some(Action::SelectDown) => self.selection.down(self.visible.len()),
            Some(Action::Quit) => return Ok(Control::Quit),
            _ => {}
        }
        Ok(Control::Continue)
    }

    async fn perform(&mut self, action: Action) -> Result<Control> {
        match action {
            Action::NewSnippet => self.open_editor(SnippetEditor::new_snippet()),
            Action::EditSelected => {
                if let Some(snippet) = self.selected().cloned() {
                    self.open_editor(SnippetEditor::edit(snippet));
                }
            }
            Action::DeleteSelected => {
                if let Some(id) = self.selected().map(|s| s.id.clone()) {
                    self.delete.execute(&id).await?;
                    self.refresh().await?;
                }
            }
            Action::Cancel => {
                self.close_editor();
                self.focus = Focus::List;
            }
            Action::Confirm => self.copy_selected().await?,
            Action::ShowHelp => self.screen = self.screen.cycle(Screen::Help),
            Action::ShowConfig => self.screen = self.screen.cycle(Screen::Config),
            Action::ShowFeedback => self.screen = self.screen.cycle(Screen::Feedback),
            Action::Sync => self.run_sync().await?,
            Action::FocusSearch => self.focus = Focus::Search,
            Action::SelectUp => self.selection.up(),
            Action::SelectDown => self.selection.down(self.visible.len()),
            Action::Quit => return Ok(Control::Quit),
            Action::Save | Action::NextField | Action::ToggleSyncOnSave => {}
        }
        Ok(Control::Continue)
    }

    fn selected(&self) -> Option<&Snippet> {
        self.visible.get(self.selection.index())
    }

    fn open_editor(&mut self, editor: SnippetEditor) {
        self.editor = Some(editor);
        self.focus = Focus::Editor;
    }

    fn close_editor(&mut self) {
        self.editor = None;
        if self.focus == Focus::Editor {
            self.focus = Focus::List;
        }
    }

    async fn copy_selected(&mut self) -> Result<()> {
        if self.editor.is_some() {
            return Ok(());
        }

        let selected = self.selected().cloned();
        if self.copy.execute(selected.as_ref()).await? == CopyOutcome::NothingSelected {
            return Ok(());
        }

        self.toasts.copied = true;
        self.schedule_dismissal(ToastKind::Copied).await;
        self.search.clear();
        self.selection.reset();
        self.refresh().await
    }

    async fn save_editor(&mut self) -> Result<()> {
        let Some(editor) = &self.editor else {
            return Ok(());
        };
        let target = editor.target().map(|s| s.id.clone());
        let (description, content) = editor.submission();

        if self.save.execute(target.as_ref(), description, content).await? == SaveOutcome::Rejected {
            return Ok(());
        }

        self.close_editor();
        self.refresh().await?;

        if self.settings.general.sync_on_save && self.sync.is_enabled() {
            self.run_sync().await?;
        }
        Ok(())
    }

    async fn run_sync(&mut self) -> Result<()> {
        match self.sync.execute().await? {
            SyncOutcome::Disabled => {
                self.status = Some("sync is not configured: set [sync] remote_path".to_string());
            }
            SyncOutcome::Completed(report) => {
                self.toasts.sync = Some(report);
                self.schedule_dismissal(ToastKind::Sync).await;
                self.refresh().await?;
            }
        }
        Ok(())
    }

    async fn toggle_sync_on_save(&mut self) -> Result<()> {
        let mut settings = self.settings.clone();
        settings.general.sync_on_save = !settings.general.sync_on_save;
        self.update_settings.execute(settings.clone()).await?;
        self.settings = settings;
        Ok(())
    }

    async fn schedule_dismissal(&mut self, kind: ToastKind) {
        self.toast_generation += 1;
        let expiry = ToastExpiry {
            kind,
            generation: self.toast_generation,
        };
        self.pending_dismissals.insert(kind, expiry.generation);

        let ttl = Duration::from_millis(self.settings.general.toast_duration_ms);
        if let Err(e) = self.toast_timer.schedule(expiry, ttl).await {
            warn!(error = %e, toast = %kind, "Failed to schedule toast dismissal");
        }
    }
}

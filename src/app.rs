//! Application state and core logic

use crate::catalog::{toolbar_items, ToolbarItem};
use crate::config::TuiConfig;
use crate::error::BuilderError;
use crate::state::{
    AppState, EditorFocus, EditorPayload, FieldDescriptor, Form, FormStore, Mode, Overlay,
    PathPrompt, PreviewForm, PropertyForm,
};
use crate::transfer::{ensure_json_path, export_to_dir, read_import, FileSource, TokioFileSource};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Window for the second Ctrl+C press
const QUIT_WINDOW: Duration = Duration::from_millis(1000);

/// Alert shown for any failed import; the detail goes to the log
pub const IMPORT_FAILED: &str = "Failed to import form. Please check the JSON file.";
pub const IMPORT_SUCCEEDED: &str = "Form imported successfully!";
pub const SUBMITTED: &str = "Form Submitted! Check the log for details.";

/// Completion of a background file import
#[derive(Debug)]
pub struct ImportOutcome {
    pub path: PathBuf,
    pub result: Result<Vec<FieldDescriptor>, BuilderError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// The form definition being built
    pub store: FormStore,
    /// User configuration
    pub config: TuiConfig,
    /// Toolbar palette offered by the editor
    palette: Vec<ToolbarItem>,
    /// Reader used by imports
    source: Arc<dyn FileSource>,
    import_tx: mpsc::UnboundedSender<ImportOutcome>,
    import_rx: mpsc::UnboundedReceiver<ImportOutcome>,
    /// Write the config back after successful imports
    persist_config: bool,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self::with_source(config, Arc::new(TokioFileSource), true)
    }

    fn with_source(config: TuiConfig, source: Arc<dyn FileSource>, persist_config: bool) -> Self {
        let (import_tx, import_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            store: FormStore::new(),
            config,
            palette: toolbar_items(),
            source,
            import_tx,
            import_rx,
            persist_config,
            quit: false,
            last_ctrl_c: None,
        }
    }

    pub fn palette(&self) -> &[ToolbarItem] {
        &self.palette
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Export and preview are only available with at least one field
    pub fn controls_enabled(&self) -> bool {
        !self.store.is_empty()
    }

    /// Current form definition as pretty JSON
    pub fn config_json(&self) -> String {
        serde_json::to_string_pretty(&*self.store.read()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to render form configuration");
            String::new()
        })
    }

    /// Change notification from the editing surface
    pub fn notify_editor(&mut self, payload: EditorPayload) {
        self.store.apply(payload);
        self.after_store_change();
    }

    /// Raw change notification, e.g. a pasted payload
    pub fn notify_editor_raw(&mut self, raw: &Value) {
        if self.store.update(raw) {
            self.after_store_change();
        }
    }

    fn after_store_change(&mut self) {
        let fields = self.store.read();
        self.state.editor.clamp(fields.len());
        self.state.preview = PreviewForm::from_fields(&fields);
        self.state.sync_mode(fields.len());
    }

    /// Write the form to the export directory
    pub fn export(&mut self) -> Option<PathBuf> {
        let dir = self.config.resolved_export_dir();
        match export_to_dir(&self.store.read(), &dir, Utc::now()) {
            Ok(path) => {
                self.state.status_message = Some(format!("Exported to {}", path.display()));
                Some(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Export refused");
                self.push_error(e.to_string());
                None
            }
        }
    }

    /// Switch between editor and preview
    pub fn toggle_preview(&mut self) {
        if let Err(e) = self.state.toggle_mode(self.store.len()) {
            self.push_error(e.to_string());
        }
    }

    pub fn open_import_prompt(&mut self) {
        let initial = self
            .config
            .last_import_dir
            .as_ref()
            .map(|dir| format!("{}/", dir.display()))
            .unwrap_or_default();
        self.state.overlay = Overlay::ImportPrompt(PathPrompt::new(initial));
    }

    /// Read `path` in the background. Completions are applied by
    /// [`App::poll_imports`] in the order they finish.
    pub fn start_import(&mut self, path: PathBuf) {
        let source = Arc::clone(&self.source);
        let tx = self.import_tx.clone();
        self.state.pending_imports += 1;
        self.state.status_message = Some(format!("Importing {}...", path.display()));
        tracing::debug!(path = %path.display(), "Starting import");

        tokio::spawn(async move {
            let result = read_import(source.as_ref(), &path).await;
            // The receiver lives as long as the app
            let _ = tx.send(ImportOutcome { path, result });
        });
    }

    /// Apply every import that finished since the last tick
    pub fn poll_imports(&mut self) {
        while let Ok(outcome) = self.import_rx.try_recv() {
            self.apply_import(outcome);
        }
    }

    fn apply_import(&mut self, outcome: ImportOutcome) {
        self.state.pending_imports = self.state.pending_imports.saturating_sub(1);
        let ImportOutcome { path, result } = outcome;

        match result {
            Ok(fields) => {
                tracing::info!(path = %path.display(), fields = fields.len(), "Imported form");
                self.store.import(fields);
                self.after_store_change();
                self.state.notice = Some(IMPORT_SUCCEEDED.to_string());
                self.state.status_message = Some(format!("Imported {}", path.display()));
                self.remember_import_dir(&path);
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Import Error");
                self.state.status_message = None;
                self.push_error(IMPORT_FAILED);
            }
        }
    }

    fn remember_import_dir(&mut self, path: &std::path::Path) {
        let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else {
            return;
        };
        self.config.last_import_dir = Some(dir.to_path_buf());
        if self.persist_config {
            if let Err(e) = self.config.save() {
                tracing::warn!(error = %e, "Failed to save config");
            }
        }
    }

    /// Submit the preview answers
    pub fn submit_preview(&mut self) {
        match self.state.preview.submit() {
            Ok(answers) => {
                let submission = serde_json::Value::Object(answers);
                tracing::info!(%submission, "Form Submission");
                self.state.notice = Some(SUBMITTED.to_string());
            }
            Err(missing) => {
                self.push_error(format!("Please fill in: {}", missing.join(", ")));
            }
        }
    }

    /// Copy the configuration JSON to the clipboard
    pub fn copy_config(&mut self) {
        if self.store.is_empty() {
            self.push_error(BuilderError::EmptyForm.to_string());
            return;
        }
        let json = self.config_json();
        match self.copy_to_clipboard(&json) {
            Ok(()) => self.state.status_message = Some(format!("Copied {} chars", json.len())),
            Err(e) => self.push_error(format!("Failed to copy: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Double Ctrl+C quits from anywhere
        if ctrl && key.code == KeyCode::Char('c') {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|last| now.duration_since(last) < QUIT_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }

        // Alerts are modal
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return Ok(());
        }

        match self.state.overlay {
            Overlay::ImportPrompt(_) => return self.handle_import_prompt_key(key),
            Overlay::Properties(_) => return self.handle_properties_key(key),
            Overlay::None => {}
        }

        if ctrl {
            match key.code {
                KeyCode::Char('e') => {
                    self.export();
                }
                KeyCode::Char('o') => self.open_import_prompt(),
                KeyCode::Char('p') => self.toggle_preview(),
                KeyCode::Char('s') if self.state.mode == Mode::Preview => self.submit_preview(),
                _ => {}
            }
            return Ok(());
        }

        match self.state.mode {
            Mode::Edit => self.handle_editor_key(key),
            Mode::Preview => self.handle_preview_key(key),
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Result<()> {
        let fields = self.store.read();
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.state.editor.focus.toggle(),
            KeyCode::Char('j') | KeyCode::Down => self
                .state
                .editor
                .move_selection_down(self.palette.len(), fields.len()),
            KeyCode::Char('k') | KeyCode::Up => self.state.editor.move_selection_up(),
            KeyCode::Char('a') => self.add_selected_palette_item(),
            KeyCode::Enter => match self.state.editor.focus {
                EditorFocus::Palette => self.add_selected_palette_item(),
                EditorFocus::Canvas => self.open_properties(),
            },
            KeyCode::Char('e') => self.open_properties(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(payload) = self.state.editor.remove(&fields) {
                    self.notify_editor(payload);
                }
            }
            KeyCode::Char('K') => {
                if let Some(payload) = self.state.editor.move_up(&fields) {
                    self.notify_editor(payload);
                }
            }
            KeyCode::Char('J') => {
                if let Some(payload) = self.state.editor.move_down(&fields) {
                    self.notify_editor(payload);
                }
            }
            KeyCode::Char('y') => self.copy_config(),
            KeyCode::PageDown => self.state.scroll_down(),
            KeyCode::PageUp => self.state.scroll_up(),
            _ => {}
        }
        Ok(())
    }

    fn add_selected_palette_item(&mut self) {
        let Some(item) = self.palette.get(self.state.editor.palette_index).cloned() else {
            return;
        };
        let payload = self.state.editor.add(&item, &self.store.read());
        self.notify_editor(payload);
    }

    fn open_properties(&mut self) {
        let index = self.state.editor.canvas_index;
        if let Some(field) = self.store.read().get(index) {
            self.state.overlay = Overlay::Properties(PropertyForm::from_field(index, field));
        }
    }

    fn handle_preview_key(&mut self, key: KeyEvent) -> Result<()> {
        let preview = &mut self.state.preview;
        match key.code {
            KeyCode::Esc => self.toggle_preview(),
            KeyCode::Tab | KeyCode::Down => preview.next_field(),
            KeyCode::BackTab | KeyCode::Up => preview.prev_field(),
            KeyCode::Right => preview.cycle_choice(true),
            KeyCode::Left => preview.cycle_choice(false),
            KeyCode::Backspace => preview.backspace(),
            KeyCode::Enter => self.submit_preview(),
            KeyCode::Char(c) => preview.input_char(c),
            _ => {}
        }
        Ok(())
    }

    fn handle_import_prompt_key(&mut self, key: KeyEvent) -> Result<()> {
        let Overlay::ImportPrompt(prompt) = &mut self.state.overlay else {
            return Ok(());
        };
        match key.code {
            KeyCode::Esc => self.state.overlay = Overlay::None,
            KeyCode::Enter => {
                let Some(text) = prompt.path.non_empty_text() else {
                    return Ok(());
                };
                let path = PathBuf::from(text);
                match ensure_json_path(&path) {
                    Ok(()) => {
                        self.state.overlay = Overlay::None;
                        self.start_import(path);
                    }
                    Err(e) => self.push_error(e.to_string()),
                }
            }
            KeyCode::Backspace => prompt.get_active_field_mut().pop_char(),
            KeyCode::Char(c) => prompt.get_active_field_mut().push_char(c),
            _ => {}
        }
        Ok(())
    }

    fn handle_properties_key(&mut self, key: KeyEvent) -> Result<()> {
        let Overlay::Properties(form) = &mut self.state.overlay else {
            return Ok(());
        };
        let save = key.code == KeyCode::Enter
            || (key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL));

        if save {
            let target = form.target;
            let fields = self.store.read();
            let edited = fields.get(target).map(|original| form.apply(original));
            self.state.overlay = Overlay::None;
            if let Some(payload) =
                edited.and_then(|field| self.state.editor.replace(&fields, target, field))
            {
                self.notify_editor(payload);
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.state.overlay = Overlay::None,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Backspace => form.get_active_field_mut().pop_char(),
            KeyCode::Char(c) => form.get_active_field_mut().push_char(c),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::MockFileSource;
    use serde_json::json;
    use std::path::Path;

    fn test_app(export_dir: &Path) -> App {
        let config = TuiConfig {
            export_dir: Some(export_dir.to_path_buf()),
            ..Default::default()
        };
        App::with_source(config, Arc::new(MockFileSource::new()), false)
    }

    fn app_with_source(source: MockFileSource) -> App {
        App::with_source(TuiConfig::default(), Arc::new(source), false)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(key(*code)).unwrap();
        }
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn seeded(app: &mut App) {
        app.notify_editor_raw(&json!([
            {"type": "TextInput", "label": "Name", "field_name": "name"}
        ]));
    }

    mod controls {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_controls_disabled_when_empty() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            assert!(!app.controls_enabled());
            seeded(&mut app);
            assert!(app.controls_enabled());
        }

        #[test]
        fn test_export_empty_shows_error_and_writes_nothing() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());

            app.handle_key(ctrl('e')).unwrap();

            assert_eq!(app.state.current_error(), Some("No form elements to export"));
            assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        }

        #[test]
        fn test_export_writes_file() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            seeded(&mut app);

            let path = app.export().unwrap();

            assert!(path.starts_with(dir.path()));
            let written: Value =
                serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
            assert_eq!(written["version"], json!("1.0.0"));
            assert!(app.state.status_message.unwrap().starts_with("Exported to"));
        }

        #[test]
        fn test_preview_toggle_refused_when_empty() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            app.handle_key(ctrl('p')).unwrap();
            assert_eq!(app.state.mode, Mode::Edit);
            assert_eq!(app.state.current_error(), Some("No form elements to preview"));
        }

        #[test]
        fn test_double_toggle_keeps_form() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            seeded(&mut app);
            let before = app.store.read();

            app.handle_key(ctrl('p')).unwrap();
            assert_eq!(app.state.mode, Mode::Preview);
            app.handle_key(ctrl('p')).unwrap();
            assert_eq!(app.state.mode, Mode::Edit);
            assert!(Arc::ptr_eq(&before, &app.store.read()));
        }

        #[test]
        fn test_alert_blocks_keys_until_dismissed() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            app.handle_key(ctrl('e')).unwrap();
            press(&mut app, &[KeyCode::Char('a')]);
            assert!(app.store.is_empty());
            press(&mut app, &[KeyCode::Enter, KeyCode::Char('a')]);
            assert_eq!(app.store.len(), 1);
        }

        #[test]
        fn test_double_ctrl_c_quits() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            app.handle_key(ctrl('c')).unwrap();
            assert!(!app.should_quit());
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_build_form_from_palette() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            // Header, then Dropdown (palette index 4)
            press(
                &mut app,
                &[
                    KeyCode::Enter,
                    KeyCode::Char('j'),
                    KeyCode::Char('j'),
                    KeyCode::Char('j'),
                    KeyCode::Char('j'),
                    KeyCode::Enter,
                ],
            );
            let labels: Vec<_> = app.store.read().iter().map(|f| f.display_label()).collect();
            assert_eq!(labels, vec!["Header", "Dropdown"]);
        }

        #[test]
        fn test_remove_and_reorder_from_canvas() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            press(&mut app, &[KeyCode::Char('a'), KeyCode::Char('j'), KeyCode::Char('a')]);
            press(&mut app, &[KeyCode::Tab, KeyCode::Char('K')]);
            let labels: Vec<_> = app.store.read().iter().map(|f| f.display_label()).collect();
            assert_eq!(labels, vec!["Text Input", "Header"]);

            press(&mut app, &[KeyCode::Char('d')]);
            assert_eq!(app.store.len(), 1);
            assert_eq!(app.store.read()[0].display_label(), "Header");
        }

        #[test]
        fn test_property_editing_updates_store() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            press(&mut app, &[KeyCode::Char('j'), KeyCode::Char('a'), KeyCode::Char('e')]);
            assert!(matches!(app.state.overlay, Overlay::Properties(_)));

            // Clear "Text Input" and type a new label
            for _ in 0.."Text Input".len() {
                press(&mut app, &[KeyCode::Backspace]);
            }
            type_str(&mut app, "Name");
            press(&mut app, &[KeyCode::Enter]);

            assert!(matches!(app.state.overlay, Overlay::None));
            assert_eq!(app.store.read()[0].label(), Some("Name"));
        }

        #[test]
        fn test_escape_discards_property_edits() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            press(&mut app, &[KeyCode::Char('a'), KeyCode::Char('e')]);
            type_str(&mut app, "zzz");
            press(&mut app, &[KeyCode::Esc]);
            assert_eq!(app.store.read()[0].text(), Some("Header"));
        }

        #[test]
        fn test_unrecognized_raw_payload_is_ignored() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            seeded(&mut app);
            let before = app.store.read();
            app.notify_editor_raw(&json!({"nope": true}));
            assert!(Arc::ptr_eq(&before, &app.store.read()));
            assert!(!app.state.has_alert());
        }

        #[test]
        fn test_emptying_form_leaves_preview() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            seeded(&mut app);
            app.toggle_preview();
            app.notify_editor_raw(&json!([]));
            assert_eq!(app.state.mode, Mode::Edit);
        }
    }

    mod preview {
        use super::*;
        use pretty_assertions::assert_eq;
        use std::io;
        use std::sync::Mutex;
        use tracing_subscriber::fmt::MakeWriter;

        /// Log sink shared between the subscriber and the test
        #[derive(Clone, Default)]
        struct CapturedLog(Arc<Mutex<Vec<u8>>>);

        impl CapturedLog {
            fn contents(&self) -> String {
                String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
            }
        }

        impl io::Write for CapturedLog {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for CapturedLog {
            type Writer = Self;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        #[test]
        fn test_submission_is_logged_as_json() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            seeded(&mut app);
            app.toggle_preview();
            type_str(&mut app, "Ada");

            let log = CapturedLog::default();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(log.clone())
                .with_ansi(false)
                .finish();
            tracing::subscriber::with_default(subscriber, || {
                app.handle_key(ctrl('s')).unwrap();
            });

            let output = log.contents();
            assert!(output.contains("Form Submission"), "{output}");
            assert!(output.contains(r#"submission={"name":"Ada"}"#), "{output}");
        }

        #[test]
        fn test_submit_collects_answers() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            seeded(&mut app);
            app.handle_key(ctrl('p')).unwrap();
            type_str(&mut app, "Ada");
            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(app.state.notice.as_deref(), Some(SUBMITTED));
        }

        #[test]
        fn test_submit_missing_required() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            app.notify_editor_raw(&json!([
                {"type": "EmailInput", "label": "Email", "field_name": "email", "required": true}
            ]));
            app.toggle_preview();
            press(&mut app, &[KeyCode::Enter]);
            assert_eq!(app.state.current_error(), Some("Please fill in: Email"));
        }

        #[test]
        fn test_escape_returns_to_editor() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            seeded(&mut app);
            app.toggle_preview();
            press(&mut app, &[KeyCode::Esc]);
            assert_eq!(app.state.mode, Mode::Edit);
        }
    }

    mod importing {
        use super::*;
        use pretty_assertions::assert_eq;

        async fn wait_for_imports(app: &mut App) {
            for _ in 0..200 {
                app.poll_imports();
                if app.state.pending_imports == 0 {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            panic!("import did not complete");
        }

        #[tokio::test]
        async fn test_successful_import_replaces_form() {
            let mut source = MockFileSource::new();
            source.expect_read_to_string().returning(|_| {
                Ok(r#"{"id": "form_1", "fields": [{"type": "Header", "text": "Hi"}, {"label": "B"}]}"#
                    .to_string())
            });
            let mut app = app_with_source(source);
            seeded(&mut app);

            app.start_import(PathBuf::from("forms/saved.json"));
            wait_for_imports(&mut app).await;

            assert_eq!(app.store.len(), 2);
            assert!(app.store.read()[0]
                .unique_id()
                .unwrap()
                .starts_with("imported_field_"));
            assert_eq!(app.state.notice.as_deref(), Some(IMPORT_SUCCEEDED));
            assert_eq!(app.state.preview.slots.len(), 2);
            assert_eq!(app.config.last_import_dir, Some(PathBuf::from("forms")));
        }

        #[tokio::test]
        async fn test_invalid_import_keeps_form() {
            let mut source = MockFileSource::new();
            source
                .expect_read_to_string()
                .returning(|_| Ok(r#"{"fields":"not-an-array"}"#.to_string()));
            let mut app = app_with_source(source);
            seeded(&mut app);
            let before = app.store.read();

            app.start_import(PathBuf::from("bad.json"));
            wait_for_imports(&mut app).await;

            assert!(Arc::ptr_eq(&before, &app.store.read()));
            assert_eq!(app.state.current_error(), Some(IMPORT_FAILED));
        }

        #[tokio::test]
        async fn test_malformed_json_keeps_form() {
            let mut source = MockFileSource::new();
            source
                .expect_read_to_string()
                .returning(|_| Ok("{\"fields\": [".to_string()));
            let mut app = app_with_source(source);
            seeded(&mut app);
            let before = app.store.read();

            app.start_import(PathBuf::from("broken.json"));
            wait_for_imports(&mut app).await;

            assert!(Arc::ptr_eq(&before, &app.store.read()));
            assert_eq!(app.state.current_error(), Some(IMPORT_FAILED));
        }

        #[test]
        fn test_later_completion_wins() {
            let mut app = app_with_source(MockFileSource::new());
            app.state.pending_imports = 2;
            let fields = |label: &str| vec![FieldDescriptor::default().with("label", label)];

            app.apply_import(ImportOutcome {
                path: PathBuf::from("first.json"),
                result: Ok(fields("first")),
            });
            app.apply_import(ImportOutcome {
                path: PathBuf::from("second.json"),
                result: Ok(fields("second")),
            });

            assert_eq!(app.store.read()[0].label(), Some("second"));
            assert_eq!(app.state.pending_imports, 0);
        }

        #[test]
        fn test_prompt_rejects_non_json_path() {
            let mut app = app_with_source(MockFileSource::new());
            app.handle_key(ctrl('o')).unwrap();
            type_str(&mut app, "form.txt");
            press(&mut app, &[KeyCode::Enter]);

            assert_eq!(app.state.pending_imports, 0);
            assert!(app
                .state
                .current_error()
                .unwrap()
                .contains("only .json files"));
            assert!(matches!(app.state.overlay, Overlay::ImportPrompt(_)));
        }

        #[test]
        fn test_prompt_prefills_last_directory() {
            let mut app = app_with_source(MockFileSource::new());
            app.config.last_import_dir = Some(PathBuf::from("/data"));
            app.open_import_prompt();
            let Overlay::ImportPrompt(prompt) = &app.state.overlay else {
                panic!("prompt not open");
            };
            assert_eq!(prompt.path.as_text(), "/data/");
        }

        #[tokio::test]
        async fn test_export_import_export_roundtrip() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = test_app(dir.path());
            app.notify_editor_raw(&json!([
                {"type": "Header", "text": "Survey"},
                {"type": "RadioButtons", "label": "Pick", "field_name": "pick",
                 "options": [{"value": "a", "label": "A"}, {"value": "b", "label": "B"}]}
            ]));
            let original: Vec<_> = app.store.read().iter().map(|f| f.without_id()).collect();

            let path = app.export().unwrap();
            let mut reader = App::with_source(
                TuiConfig::default(),
                Arc::new(TokioFileSource),
                false,
            );
            reader.start_import(path);
            wait_for_imports(&mut reader).await;

            let restored: Vec<_> = reader.store.read().iter().map(|f| f.without_id()).collect();
            assert_eq!(restored, original);
        }
    }
}

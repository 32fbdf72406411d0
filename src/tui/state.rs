//! Application state and event handling for the TUI workspace.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use crate::config::Config;
use crate::export;
use crate::models::{RgbColor, SessionState, TropeCatalog, MAX_RINGS};
use crate::parser::stash::parse_stash_csv;
use crate::parser::template_gen::{save_template, TEMPLATE_FILENAME};
use crate::services::extractor::DEFAULT_COLOR_COUNT;
use crate::services::{generator, matcher};
use crate::tui::color_picker::ColorPickerState;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::extraction::{ExtractionJob, ExtractionMessage};
use crate::tui::prompt::{PromptPurpose, PromptState};
use crate::tui::settings_panel::SettingField;
use crate::tui::status_bar::StatusMessage;
use crate::tui::trope_picker::TropePickerState;
use crate::tui::{clipboard, Theme};

/// Which panel has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The working palette.
    #[default]
    Palette,
    /// Grid settings.
    Settings,
    /// The yarn match list.
    Matches,
}

impl Focus {
    const fn next(self) -> Self {
        match self {
            Self::Palette => Self::Settings,
            Self::Settings => Self::Matches,
            Self::Matches => Self::Palette,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Palette => Self::Matches,
            Self::Settings => Self::Palette,
            Self::Matches => Self::Settings,
        }
    }
}

/// An open popup; receives all input until it closes.
#[derive(Debug)]
pub enum Popup {
    /// Curated palette picker.
    ColorPicker(ColorPickerState),
    /// Trope search list.
    TropePicker(TropePickerState),
    /// Single-line text prompt.
    Prompt(PromptState),
}

/// Top-level application state for the TUI.
pub struct AppState {
    /// The design session.
    pub session: SessionState,
    /// User preferences.
    pub config: Config,
    /// Active color theme.
    pub theme: Theme,
    /// Focused panel.
    pub focus: Focus,
    /// Cursor within the settings panel.
    pub setting_field: SettingField,
    /// Cursor within the palette.
    pub palette_index: usize,
    /// Cursor within the match list.
    pub match_index: usize,
    /// Transient status message.
    pub status: StatusMessage,
    /// How many colors an image extraction asks for (3-8).
    pub extract_count: usize,
    /// Open popup, if any.
    pub popup: Option<Popup>,
    /// Running extraction job, if any.
    pub extraction: Option<ExtractionJob>,
    /// Whether the help overlay is open.
    pub help_visible: bool,
    /// Set when the user asked to quit.
    pub should_quit: bool,
    /// Palette position being edited via the picker, if any. A selection
    /// replaces that entry instead of appending.
    editing_palette_index: Option<usize>,
    /// Trope catalog for resolving picker selections.
    catalog: TropeCatalog,
}

impl AppState {
    /// Creates the workspace state from loaded preferences.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut session = SessionState::new();
        session.grid_settings.rows = config.grid.rows.clamp(1, 20);
        session.grid_settings.columns = config.grid.columns.clamp(1, 20);
        session.grid_settings.colors_per_square = config.grid.colors_per_square.clamp(1, MAX_RINGS);

        Self {
            session,
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            focus: Focus::default(),
            setting_field: SettingField::default(),
            palette_index: 0,
            match_index: 0,
            status: StatusMessage::default(),
            extract_count: DEFAULT_COLOR_COUNT,
            popup: None,
            extraction: None,
            help_visible: false,
            should_quit: false,
            editing_palette_index: None,
            catalog: TropeCatalog::default(),
        }
    }

    /// Short label for the running background job, if any.
    #[must_use]
    pub fn busy_label(&self) -> Option<String> {
        self.extraction
            .as_ref()
            .filter(|job| job.is_running())
            .map(|job| format!("Extracting colors from {}", job.source.display()))
    }

    /// Contextual shortcut hints for the status bar.
    #[must_use]
    pub fn hints(&self) -> &'static str {
        if self.popup.is_some() {
            return "Enter: confirm | Esc: cancel";
        }
        match self.focus {
            Focus::Palette => {
                "a: picker | x: hex | d: remove | c: copy | o/O: image/stash | g: generate | ?: help | q: quit"
            }
            Focus::Settings => {
                "+/-: adjust | T: trope | b: title | g/G: generate | e/E: export | ?: help | q: quit"
            }
            Focus::Matches => {
                "m/M: swap yarn | G: book grid | E: design sheet | ?: help | q: quit"
            }
        }
    }

    /// Handles one key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.help_visible {
            self.help_visible = false;
            return;
        }

        // Popups swallow all input while open
        if self.popup.is_some() {
            let event = match self.popup.as_mut() {
                Some(Popup::ColorPicker(state)) => {
                    state.handle_input(key).map(TaggedEvent::Plain)
                }
                Some(Popup::TropePicker(state)) => {
                    state.handle_input(key).map(TaggedEvent::Plain)
                }
                Some(Popup::Prompt(state)) => {
                    let purpose = state.purpose;
                    state
                        .handle_input(key)
                        .map(|event| TaggedEvent::Prompt(purpose, event))
                }
                None => None,
            };
            if let Some(event) = event {
                self.apply_popup_event(event);
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.help_visible = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => self.adjust_setting(1),
            KeyCode::Char('-') | KeyCode::Left => self.adjust_setting(-1),
            KeyCode::Char('a') => {
                self.editing_palette_index = None;
                self.popup = Some(Popup::ColorPicker(ColorPickerState::new()));
            }
            KeyCode::Enter => self.edit_selected_color(),
            KeyCode::Char('u') => self.reset_selected_color(),
            KeyCode::Char('x') => {
                self.popup = Some(Popup::Prompt(PromptState::new(
                    "Add color (hex)",
                    PromptPurpose::HexColor,
                )));
            }
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected_color(),
            KeyCode::Char('c') => self.copy_selected_color(),
            KeyCode::Char('o') => {
                self.popup = Some(Popup::Prompt(PromptState::new(
                    "Extract colors from image",
                    PromptPurpose::ImagePath,
                )));
            }
            KeyCode::Char('O') => {
                self.popup = Some(Popup::Prompt(PromptState::new(
                    "Load yarn stash CSV",
                    PromptPurpose::StashPath,
                )));
            }
            KeyCode::Char('T') => {
                self.popup = Some(Popup::TropePicker(TropePickerState::new()));
            }
            KeyCode::Char('b') => {
                self.popup = Some(Popup::Prompt(PromptState::with_value(
                    "Book title",
                    PromptPurpose::BookTitle,
                    self.session.book.title.clone(),
                )));
            }
            KeyCode::Char('g') => self.generate_grid(),
            KeyCode::Char('G') => self.generate_book_grid(),
            KeyCode::Char('m') => self.swap_match_yarn(1),
            KeyCode::Char('M') => self.swap_match_yarn(-1),
            KeyCode::Char('e') => self.export_pattern(),
            KeyCode::Char('E') => self.export_design_sheet(),
            KeyCode::Char('w') => self.write_template(),
            _ => {}
        }
    }

    /// Applies an event emitted by the open popup.
    fn apply_popup_event(&mut self, event: TaggedEvent) {
        match event {
            TaggedEvent::Plain(ComponentEvent::Cancelled) => self.popup = None,
            TaggedEvent::Plain(ComponentEvent::ColorSelected(color)) => {
                match self.editing_palette_index.take() {
                    Some(index) => {
                        if self.session.palette.replace_at(index, color) {
                            self.refresh_matches();
                            self.status =
                                StatusMessage::info(format!("Changed to {}", color.to_hex()));
                        } else {
                            self.status = StatusMessage::error(format!(
                                "{} is already in the palette",
                                color.to_hex()
                            ));
                        }
                    }
                    None => self.add_color(color),
                }
                self.popup = None;
            }
            TaggedEvent::Plain(ComponentEvent::TropeSelected(name)) => {
                if let Some(trope) = self.catalog.find(&name) {
                    self.session.select_trope(&trope.name, trope.color);
                    self.status =
                        StatusMessage::info(format!("Trope set to {}", trope.name));
                }
                self.popup = None;
            }
            TaggedEvent::Plain(ComponentEvent::TextSubmitted(_)) => {
                // Prompts always arrive tagged; nothing to do here
                self.popup = None;
            }
            TaggedEvent::Prompt(purpose, ComponentEvent::TextSubmitted(value)) => {
                self.popup = None;
                self.handle_prompt_value(purpose, value);
            }
            TaggedEvent::Prompt(_, _) => self.popup = None,
        }
    }

    /// Dispatches a submitted prompt value by its purpose.
    fn handle_prompt_value(&mut self, purpose: PromptPurpose, value: String) {
        let value = value.trim().to_string();
        match purpose {
            PromptPurpose::HexColor => match RgbColor::from_hex(&value) {
                Some(color) => self.add_color(color),
                None => {
                    self.status =
                        StatusMessage::error(format!("'{value}' is not a valid #rrggbb color"));
                }
            },
            PromptPurpose::ImagePath => {
                if value.is_empty() {
                    self.status = StatusMessage::error("No image path given");
                    return;
                }
                let token = self.session.begin_extraction();
                self.extraction = Some(ExtractionJob::spawn(
                    PathBuf::from(&value),
                    self.extract_count,
                    token,
                ));
                self.status = StatusMessage::default();
            }
            PromptPurpose::StashPath => match parse_stash_csv(&PathBuf::from(&value)) {
                Ok(records) => {
                    let count = records.len();
                    self.session.set_stash(records);
                    self.refresh_matches();
                    self.match_index = 0;
                    self.status = StatusMessage::info(format!("Loaded {count} yarn(s)"));
                }
                Err(e) => self.status = StatusMessage::error(format!("{e:#}")),
            },
            PromptPurpose::BookTitle => {
                self.session.book.title = value;
                self.status = StatusMessage::info("Title updated");
            }
        }
    }

    /// Adds a color to the palette; duplicate adds are a visible no-op.
    fn add_color(&mut self, color: RgbColor) {
        if self.session.palette.add(color) {
            self.refresh_matches();
            self.status = StatusMessage::info(format!("Added {}", color.to_hex()));
        } else {
            self.status =
                StatusMessage::info(format!("{} is already in the palette", color.to_hex()));
        }
    }

    fn remove_selected_color(&mut self) {
        if self.focus != Focus::Palette {
            return;
        }
        let Some(color) = self.session.palette.get(self.palette_index).copied() else {
            return;
        };
        self.session.palette.remove(&color);
        self.clamp_cursors();
        self.refresh_matches();
        self.status = StatusMessage::info(format!("Removed {}", color.to_hex()));
    }

    /// Opens the picker to replace the selected palette color.
    fn edit_selected_color(&mut self) {
        if self.focus != Focus::Palette {
            return;
        }
        if let Some(color) = self.session.palette.get(self.palette_index).copied() {
            self.editing_palette_index = Some(self.palette_index);
            self.popup = Some(Popup::ColorPicker(ColorPickerState::with_color(color)));
        }
    }

    /// Resets an edited palette entry back to its extracted original.
    fn reset_selected_color(&mut self) {
        if self.focus != Focus::Palette {
            return;
        }
        let Some(original) = self.session.original_color(self.palette_index) else {
            self.status = StatusMessage::error("No extracted original for this color");
            return;
        };
        if self.session.palette.replace_at(self.palette_index, original) {
            self.refresh_matches();
            self.status = StatusMessage::info(format!("Reset to {}", original.to_hex()));
        }
    }

    fn copy_selected_color(&mut self) {
        if self.focus != Focus::Palette {
            return;
        }
        if let Some(color) = self.session.palette.get(self.palette_index) {
            self.status = StatusMessage::info(clipboard::copy_hex(&color.to_hex()));
        }
    }

    /// Recomputes matches when both a palette and a stash exist.
    fn refresh_matches(&mut self) {
        if self.session.palette.is_empty() || self.session.stash.is_empty() {
            return;
        }
        let matches =
            matcher::match_colors_to_yarn(self.session.palette.colors(), &self.session.stash);
        self.session.set_matches(matches);
        self.clamp_cursors();
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Palette => {
                self.palette_index = step(
                    self.palette_index,
                    delta,
                    self.session.palette.len(),
                );
            }
            Focus::Settings => {
                self.setting_field = if delta < 0 {
                    self.setting_field.previous()
                } else {
                    self.setting_field.next()
                };
            }
            Focus::Matches => {
                self.match_index = step(self.match_index, delta, self.session.matches.len());
            }
        }
    }

    fn adjust_setting(&mut self, delta: isize) {
        if self.focus != Focus::Settings {
            return;
        }
        let settings = &mut self.session.grid_settings;
        match self.setting_field {
            SettingField::Rows => settings.rows = bounded(settings.rows, delta, 1, 20),
            SettingField::Columns => settings.columns = bounded(settings.columns, delta, 1, 20),
            SettingField::ColorsPerSquare => {
                let max = MAX_RINGS.min(self.session.palette.len().max(1));
                settings.colors_per_square =
                    bounded(settings.colors_per_square, delta, 1, max);
            }
            SettingField::ExtractColors => {
                self.extract_count = bounded(self.extract_count, delta, 3, 8);
            }
        }
    }

    /// Generates a basic grid from the palette. Validation failures surface
    /// in the status bar and leave the existing grid untouched.
    fn generate_grid(&mut self) {
        let settings = self.session.grid_settings;
        let mut rng = StdRng::from_os_rng();
        match generator::generate_grid(
            &self.session.palette,
            settings.rows,
            settings.columns,
            settings.colors_per_square,
            &mut rng,
        ) {
            Ok(grid) => {
                let squares = grid.square_count();
                self.session.grid = Some(grid);
                self.status = StatusMessage::info(format!("Generated {squares} squares"));
            }
            Err(e) => self.status = StatusMessage::error(format!("{e:#}")),
        }
    }

    /// Generates a book-inspired grid from the matches and trope.
    fn generate_book_grid(&mut self) {
        if self.session.book.trope.is_empty() {
            self.status = StatusMessage::error("Select a book trope first (T)");
            return;
        }
        let settings = self.session.grid_settings;
        let mut rng = StdRng::from_os_rng();
        match generator::generate_book_grid(
            &self.session.matches,
            self.session.book.trope_color,
            settings.rows,
            settings.columns,
            &mut rng,
        ) {
            Ok(grid) => {
                let squares = grid.square_count();
                self.session.grid = Some(grid);
                self.status =
                    StatusMessage::info(format!("Generated {squares} book-inspired squares"));
            }
            Err(e) => self.status = StatusMessage::error(format!("{e:#}")),
        }
    }

    /// Swaps the selected match's yarn for the next/previous stash entry.
    fn swap_match_yarn(&mut self, direction: isize) {
        if self.focus != Focus::Matches || self.session.stash.is_empty() {
            return;
        }
        let Some(current) = self.session.matches.get(self.match_index) else {
            return;
        };

        let position = self
            .session
            .stash
            .iter()
            .position(|y| y.id == current.yarn.id)
            .unwrap_or(0);
        let count = self.session.stash.len() as isize;
        let next = (position as isize + direction).rem_euclid(count) as usize;
        let yarn_id = self.session.stash[next].id.clone();

        match self.session.manual_rematch(self.match_index, &yarn_id) {
            Ok(()) => {
                self.status = StatusMessage::info(format!(
                    "Match now uses {}",
                    self.session.matches[self.match_index].yarn.name
                ));
            }
            Err(e) => self.status = StatusMessage::error(format!("{e:#}")),
        }
    }

    fn export_pattern(&mut self) {
        let Some(grid) = &self.session.grid else {
            self.status = StatusMessage::error("Generate a grid before exporting");
            return;
        };
        match export::export_pattern(grid, &self.config.export_dir()) {
            Ok(path) => {
                self.status = StatusMessage::info(format!("Exported {}", path.display()));
            }
            Err(e) => {
                log::error!("Pattern export failed: {e:#}");
                self.status = StatusMessage::error(format!("{e:#}"));
            }
        }
    }

    fn export_design_sheet(&mut self) {
        let Some(grid) = &self.session.grid else {
            self.status = StatusMessage::error("Generate a grid before exporting");
            return;
        };
        match export::export_design_sheet(
            grid,
            &self.session.book.title,
            &self.session.book.trope,
            self.session.matches.len(),
            &self.config.export_dir(),
        ) {
            Ok(path) => {
                self.status = StatusMessage::info(format!("Exported {}", path.display()));
            }
            Err(e) => {
                log::error!("Design sheet export failed: {e:#}");
                self.status = StatusMessage::error(format!("{e:#}"));
            }
        }
    }

    fn write_template(&mut self) {
        let path = self.config.export_dir().join(TEMPLATE_FILENAME);
        match save_template(&path) {
            Ok(()) => {
                self.status =
                    StatusMessage::info(format!("Wrote stash template to {}", path.display()));
            }
            Err(e) => self.status = StatusMessage::error(format!("{e:#}")),
        }
    }

    /// Polls the extraction worker and applies a finished result.
    ///
    /// Results arriving with a stale token are discarded; the palette only
    /// ever reflects the most recently requested extraction.
    pub fn poll_extraction(&mut self) {
        let message = match &mut self.extraction {
            None => return,
            Some(job) => {
                let polled = job.poll();
                if polled.is_none() && job.is_running() {
                    return;
                }
                polled
            }
        };
        self.extraction = None;
        let Some(message) = message else {
            return;
        };

        match message {
            ExtractionMessage::Finished(token, colors) => {
                let count = colors.len();
                if self.session.accept_extraction(token, colors) {
                    self.palette_index = 0;
                    self.refresh_matches();
                    self.status =
                        StatusMessage::info(format!("Extracted {count} color(s)"));
                } else {
                    self.status = StatusMessage::info("Discarded stale extraction result");
                }
            }
            ExtractionMessage::Failed(_, message) => {
                log::error!("Extraction failed: {message}");
                self.status = StatusMessage::error(message);
            }
        }
    }

    fn clamp_cursors(&mut self) {
        let palette_len = self.session.palette.len();
        if palette_len == 0 {
            self.palette_index = 0;
        } else if self.palette_index >= palette_len {
            self.palette_index = palette_len - 1;
        }

        let match_len = self.session.matches.len();
        if match_len == 0 {
            self.match_index = 0;
        } else if self.match_index >= match_len {
            self.match_index = match_len - 1;
        }
    }
}

/// A component event, optionally tagged with the prompt purpose it came from.
#[derive(Debug)]
enum TaggedEvent {
    Plain(ComponentEvent),
    Prompt(PromptPurpose, ComponentEvent),
}

fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = index as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

fn bounded(value: usize, delta: isize, min: usize, max: usize) -> usize {
    let next = value as isize + delta;
    next.clamp(min as isize, max as isize) as usize
}

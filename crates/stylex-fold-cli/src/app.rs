use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{io::Stdout, path::PathBuf};
use stylex_fold_engine::{
    Document, FOLD_MARKER, FoldIntent, FoldView, LineClassifier, apply, read_document,
};

/// The document currently on screen with its fold state.
struct OpenDocument {
    document: Document,
    fold_view: FoldView,
}

pub struct App {
    files: Vec<PathBuf>,
    file_list_state: ListState,
    classifier: LineClassifier,
    open: Option<OpenDocument>,
    status: String,
    scroll: u16,
}

impl App {
    pub fn new(files: Vec<PathBuf>, classifier: LineClassifier) -> Self {
        let mut app = Self {
            files,
            file_list_state: ListState::default(),
            classifier,
            open: None,
            status: String::new(),
            scroll: 0,
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    pub fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(path) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            self.open = None;
            return;
        };

        match read_document(path) {
            Ok(document) => {
                let fold_view = FoldView::new(&document);
                self.status = format!("{} line(s)", document.line_count());
                self.open = Some(OpenDocument {
                    document,
                    fold_view,
                });
            }
            Err(e) => {
                log::debug!("Failed to read {}: {e}", path.display());
                self.status = format!("Error reading file: {e}");
                self.open = None;
            }
        }
    }

    /// Runs `intent` against the open document. Returns whether it changed anything.
    pub fn run_intent(&mut self, intent: FoldIntent) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };

        let dispatched = apply(
            intent,
            &open.document,
            &self.classifier,
            &mut open.fold_view,
        );
        self.status = if dispatched {
            intent.to_string()
        } else {
            format!("{intent}: nothing to fold")
        };
        dispatched
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(10);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(10);
    }

    fn content_lines(&self) -> Vec<Line<'_>> {
        let Some(open) = &self.open else {
            return vec![Line::from(self.status.as_str())];
        };

        let number_width = open.document.line_count().to_string().len();
        open.fold_view
            .visible_lines()
            .into_iter()
            .map(|line| {
                let number = Span::styled(
                    format!("{:>width$} ", line.index + 1, width = number_width),
                    Style::default().fg(Color::DarkGray),
                );
                let mut spans = vec![number, Span::raw(line.text)];
                if line.folded {
                    spans.push(Span::styled(
                        FOLD_MARKER,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::PageDown => app.scroll_down(),
                KeyCode::PageUp => app.scroll_up(),
                KeyCode::Char('n') => {
                    app.run_intent(FoldIntent::FoldNames);
                }
                KeyCode::Char('b') => {
                    app.run_intent(FoldIntent::FoldBlocks);
                }
                KeyCode::Char('u') => {
                    app.run_intent(FoldIntent::UnfoldNames);
                }
                KeyCode::Char('a') => {
                    app.run_intent(FoldIntent::UnfoldAll);
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| ListItem::new(Line::from(path.display().to_string())))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel; no wrapping so indentation stays readable
    let title = format!("Content [{}]", app.status);
    let content = Paragraph::new(app.content_lines())
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: File | "),
        Span::raw("n: Fold names | b: Fold blocks | "),
        Span::raw("u: Unfold names | a: Unfold all | PgUp/PgDn: Scroll"),
    ]);

    f.render_widget(Paragraph::new(help_text), rows[1]);
}

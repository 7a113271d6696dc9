use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::board::Board;
use crate::io::config_io;
use crate::io::storage::{self, FileStorage};
use crate::model::bucket::Bucket;
use crate::model::config::Config;
use crate::model::task::{Task, TaskId};

use super::input;
use super::render;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task title into the prompt
    AddTask,
}

/// Main application state. The cursor is a (focused quadrant, visible row)
/// pair; rows index the quadrant's *visible* list, which the key handlers
/// translate back to bucket positions before calling into the core.
pub struct App {
    pub board: Board,
    pub config: Config,
    pub mode: Mode,
    pub should_quit: bool,
    pub focus: Bucket,
    pub cursor: usize,
    /// Add-task prompt buffer; kept on rejection so the title can be fixed
    pub input: String,
    /// One-line feedback shown in the status row
    pub status: String,
}

impl App {
    pub fn new(board: Board, config: Config) -> App {
        App {
            board,
            config,
            mode: Mode::Navigate,
            should_quit: false,
            focus: Bucket::UrgentImportant,
            cursor: 0,
            input: String::new(),
            status: String::new(),
        }
    }

    /// The tasks a quadrant actually shows: hidden-labeled tasks are
    /// filtered out, and done tasks too when configured away.
    pub fn visible(&self, bucket: Bucket) -> Vec<&Task> {
        self.board
            .tasks
            .in_bucket(bucket)
            .into_iter()
            .filter(|t| {
                !t.label
                    .as_deref()
                    .is_some_and(|name| self.board.labels.is_hidden(name))
            })
            .filter(|t| !(self.config.board.hide_done && t.done))
            .collect()
    }

    pub fn selected(&self) -> Option<&Task> {
        self.visible(self.focus).get(self.cursor).copied()
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected().map(|t| t.id)
    }

    /// Translate a visible row to the task's index within the full bucket
    /// list, which is what the placement engine counts in.
    pub fn bucket_index(&self, bucket: Bucket, visible_row: usize) -> Option<usize> {
        let id = self.visible(bucket).get(visible_row).map(|t| t.id)?;
        self.board
            .tasks
            .in_bucket(bucket)
            .iter()
            .position(|t| t.id == id)
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible(self.focus).len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

/// Launch the TUI against the discovered (or overridden) data directory
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = storage::resolve_data_dir(data_dir)?;
    let config = config_io::load_config(&dir)?;
    let board = Board::load(Box::new(FileStorage::new(dir)));
    let mut app = App::new(board, config);

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.should_quit {
        terminal.draw(|frame| render::draw(frame, app))?;
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }
    }
    Ok(())
}

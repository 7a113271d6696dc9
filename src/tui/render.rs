use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::cli::output::truncate;
use crate::model::bucket::Bucket;
use crate::model::task::Task;

use super::app::{App, Mode};
use super::theme;

/// Draw the whole screen: 2x2 board, label row, status/prompt row
pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_board(frame, rows[0], app);
    draw_label_row(frame, rows[1], app);
    draw_status_row(frame, rows[2], app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(halves[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(halves[1]);

    let cells = [top[0], top[1], bottom[0], bottom[1]];
    for (bucket, cell) in Bucket::ALL.into_iter().zip(cells) {
        draw_quadrant(frame, cell, app, bucket);
    }
}

fn draw_quadrant(frame: &mut Frame, area: Rect, app: &App, bucket: Bucket) {
    let focused = app.focus == bucket;
    let accent = theme::bucket_color(bucket);
    let border_style = if focused {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };

    let tasks = app.visible(bucket);
    let block = Block::bordered()
        .title(format!(" {} ({}) ", bucket.heading(), tasks.len()))
        .border_style(border_style);

    let width = app.config.board.title_width;
    let items: Vec<ListItem> = tasks.iter().map(|&t| task_item(app, t, width)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if focused && !tasks.is_empty() {
        state.select(Some(app.cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn task_item<'a>(app: &App, task: &'a Task, width: usize) -> ListItem<'a> {
    let check = if task.done { "[x] " } else { "[ ] " };
    let mut spans = vec![Span::raw(check)];

    let title = truncate(&task.title, width);
    if task.done {
        spans.push(Span::styled(
            title,
            Style::default().add_modifier(Modifier::CROSSED_OUT).dim(),
        ));
    } else {
        spans.push(Span::raw(title));
    }

    if let Some(name) = &task.label {
        let color = app
            .board
            .labels
            .get(name)
            .and_then(|l| theme::hex_color(&l.color));
        let mut style = Style::default();
        if let Some(color) = color {
            style = style.fg(color);
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("@{name}"), style));
    }

    ListItem::new(Line::from(spans))
}

/// All labels with their colors; hidden ones are struck through
fn draw_label_row(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" labels: ")];
    for label in app.board.labels.labels() {
        let mut style = Style::default();
        if let Some(color) = theme::hex_color(&label.color) {
            style = style.fg(color);
        }
        if app.board.labels.is_hidden(&label.name) {
            style = style.add_modifier(Modifier::CROSSED_OUT).dim();
        }
        spans.push(Span::styled(format!("@{} ", label.name), style));
    }
    if app.board.labels.is_empty() {
        spans.push(Span::raw("(none)").dim());
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_row(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.mode {
        Mode::AddTask => Line::from(vec![
            Span::raw(" new task: "),
            Span::raw(app.input.as_str()),
            Span::raw("▏").dim(),
        ]),
        Mode::Navigate if !app.status.is_empty() => {
            Line::from(Span::raw(format!(" {}", app.status)))
        }
        Mode::Navigate => Line::from(
            Span::raw(" n:new  space:done  J/K:reorder  1-4:move  h:hide label  tab:quadrant  q:quit")
                .dim(),
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}

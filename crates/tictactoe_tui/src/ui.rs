//! Stateless UI rendering for tic-tac-toe.

use anyhow::{Result, anyhow};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};
use strum::IntoEnumIterator;
use tictactoe_core::{CellView, Mark, Mode, Position, Presenter, RenderState};

/// Draws render states onto a ratatui terminal.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
    cursor: Position,
}

impl<B: Backend> TerminalPresenter<B> {
    /// Wraps a terminal. The cursor starts on the center cell.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            cursor: Position::CENTER,
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// The wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

}

impl<B: Backend> Presenter for TerminalPresenter<B> {
    type Error = anyhow::Error;

    fn render(&mut self, state: &RenderState) -> Result<()> {
        let cursor = self.cursor;
        self.terminal
            .draw(|frame| draw(frame, state, cursor))
            .map_err(|e| anyhow!("Failed to draw frame: {e}"))?;
        Ok(())
    }
}

/// Renders the whole screen with cursor highlight.
pub fn draw(frame: &mut Frame, state: &RenderState, cursor: Position) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Mode
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Score
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_mode_tabs(frame, chunks[1], *state.mode());
    draw_board(frame, chunks[2], state, cursor);

    let status_style = if *state.round_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(state.status().as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let score = state.score();
    let score_text = format!(
        "X: {}   O: {}   Draw: {}",
        score.x(),
        score.o(),
        score.draw()
    );
    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(score, chunks[4]);

    let help = Paragraph::new(
        "arrows/1-9 move  enter select  n new round  r reset  p pvp  a ai  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn draw_mode_tabs(frame: &mut Frame, area: Rect, mode: Mode) {
    let selected = Mode::iter().position(|m| m == mode).unwrap_or(0);
    let tabs = Tabs::new(Mode::iter().map(Mode::name))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title("Mode"));
    frame.render_widget(tabs, area);
}

fn draw_board(frame: &mut Frame, area: Rect, state: &RenderState, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, state, cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, state: &RenderState, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(cell) = state.cells().get(row * 3 + col) {
            draw_cell(frame, chunk, state, cell, cursor);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState,
    cell: &CellView,
    cursor: Position,
) {
    let index = *cell.index();
    let symbol = match cell.mark() {
        Some(mark) => format!(" {mark} "),
        None if *cell.interactable() => format!(" {} ", index + 1),
        None => "   ".to_string(),
    };
    let mut style = match cell.mark() {
        None => Style::default().fg(Color::DarkGray),
        Some(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let on_winning_line = state
        .winning_line()
        .is_some_and(|line| line.contains(&index));
    if on_winning_line {
        style = style.bg(Color::Green);
    }
    if index == cursor.to_index() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center within the 3-line cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

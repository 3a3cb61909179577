//! Stateless UI rendering.

use super::app::{App, Mode};
use super::form::NameForm;
use noughts_engine::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const CELL_WIDTH: u16 = 11;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = format!(
        "arrows move · Enter/1-9 place · s {} · r reset scores · q quit",
        app.button()
    );
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Mode::NameEntry(form) = app.mode() {
        draw_name_form(frame, area, form);
    }
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let entry = |player: Player, color: Color| {
        Span::styled(
            format!(
                " {} ({}): {} ",
                engine.name_of(player),
                player,
                engine.scores().get(player)
            ),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };
    let line = Line::from(vec![
        entry(Player::X, Color::Blue),
        Span::raw("   "),
        entry(Player::O, Color::Red),
    ]);
    let scores = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Score "));
    frame.render_widget(scores, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, 11);

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
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, style) = cell_content(app, pos);

    // Vertically center within the 3-line cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Symbol and style of one cell: cell number when empty, winning line
/// highlighted, the rest dimmed once the round is over.
fn cell_content(app: &App, pos: Position) -> (String, Style) {
    let engine = app.engine();
    let round = engine.round_state();

    let (symbol, mut style) = match engine.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = app.winning_line().is_some_and(|line| line.contains(&pos));
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if round.is_terminal() {
        style = style.add_modifier(Modifier::DIM);
    }
    if engine.last_move() == Some(pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if pos == app.cursor() && round.accepts_moves() {
        style = style.bg(Color::White).fg(Color::Black);
    }
    (symbol, style)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_name_form(frame: &mut Frame, area: Rect, form: &NameForm) {
    let popup = center_rect(area, 44, 8);
    frame.render_widget(Clear, popup);

    let field = |player: Player| {
        let focused = form.focus() == player;
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::raw(format!(" {}: ", player)),
            Span::styled(format!("{}{}", form.value(player), cursor), style),
        ])
    };

    let text = vec![
        Line::from(""),
        field(Player::X),
        field(Player::O),
        Line::from(""),
        Line::from(Span::styled(
            " Tab switch · Enter start · Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Player names "),
    );
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::sound::Silent;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 22)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_names_scores_and_status() {
        let mut app = App::new(Some(("Ann", "Bo")), Box::new(Silent));
        app.request_start();
        app.select(4);
        let screen = render(&app);
        assert!(screen.contains("Ann (X): 0"));
        assert!(screen.contains("Bo (O): 0"));
        assert!(screen.contains("Bo's turn (O)"));
        assert!(screen.contains('X'));
    }

    #[test]
    fn test_renders_name_form() {
        let mut app = App::new(None, Box::new(Silent));
        app.request_start();
        let screen = render(&app);
        assert!(screen.contains("Player names"));
        assert!(screen.contains("Player 1"));
    }

    #[test]
    fn test_won_round_highlights_line_and_dims_the_rest() {
        let mut app = App::new(Some(("Ann", "Bo")), Box::new(Silent));
        app.request_start();
        for index in [0, 3, 1, 4, 2] {
            app.select(index);
        }

        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            let (symbol, style) = cell_content(&app, pos);
            assert_eq!(symbol, "X");
            assert_eq!(style.bg, Some(Color::Green));
            assert!(!style.add_modifier.contains(Modifier::DIM));
        }

        let (_, last) = cell_content(&app, Position::TopRight);
        assert!(last.add_modifier.contains(Modifier::UNDERLINED));
        let (_, earlier) = cell_content(&app, Position::TopLeft);
        assert!(!earlier.add_modifier.contains(Modifier::UNDERLINED));

        let (symbol, loser) = cell_content(&app, Position::MiddleLeft);
        assert_eq!(symbol, "O");
        assert!(loser.add_modifier.contains(Modifier::DIM));
        assert_eq!(loser.bg, None);

        let (symbol, empty) = cell_content(&app, Position::BottomRight);
        assert_eq!(symbol, "9");
        assert!(empty.add_modifier.contains(Modifier::DIM));

        let mut terminal = Terminal::new(TestBackend::new(60, 22)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let highlighted = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "X" && cell.bg == Color::Green)
            .count();
        assert_eq!(highlighted, 3);
    }

    #[test]
    fn test_cursor_shown_only_while_round_accepts_moves() {
        let mut app = App::new(Some(("Ann", "Bo")), Box::new(Silent));
        let (_, idle) = cell_content(&app, app.cursor());
        assert_eq!(idle.bg, None);

        app.request_start();
        let (_, live) = cell_content(&app, app.cursor());
        assert_eq!(live.bg, Some(Color::White));
    }
}

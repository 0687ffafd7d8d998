//! Rendering of a round snapshot into the ratatui frame.

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::engine::{Difficulty, GameState};

/// Everything the screen needs for one draw call.
pub struct RoundView<'a> {
    pub state: &'a GameState,
    pub difficulty: Difficulty,
    pub seconds_left: u64,
    pub input: &'a str,
}

pub fn render(frame: &mut Frame, view: &RoundView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("HANGTERM — {} round", view.difficulty))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(title, chunks[0]);

    let word = Paragraph::new(spread(&view.state.masked()))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(word, chunks[1]);

    let status = Paragraph::new(format!(
        "Lives: {} {}   Time left: {:2}s   Guessed: {}",
        view.state.lives(),
        "♥".repeat(view.state.lives() as usize),
        view.seconds_left,
        guessed_line(view.state),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(status, chunks[2]);

    let input = Paragraph::new(format!("{}_", view.input))
        .block(Block::default().borders(Borders::ALL).title(" GUESS "))
        .alignment(Alignment::Center);
    frame.render_widget(input, chunks[3]);

    let footer = if view.state.is_won() {
        Paragraph::new(format!(
            "You won! The answer was {}.\nEnter: new round   Tab: switch difficulty   Esc: quit",
            view.state.answer()
        ))
        .style(Style::default().fg(Color::Green))
    } else if view.state.is_lost() {
        Paragraph::new(format!(
            "Out of lives. The answer was {}.\nEnter: new round   Tab: switch difficulty   Esc: quit",
            view.state.answer()
        ))
        .style(Style::default().fg(Color::Red))
    } else {
        Paragraph::new("Type a letter and press Enter to guess. Esc quits.")
            .style(Style::default().fg(Color::Gray))
    };
    frame.render_widget(footer.alignment(Alignment::Center), chunks[4]);
}

/// Space out a masked answer for readability: "A__" becomes "A _ _".
pub fn spread(masked: &str) -> String {
    let mut out = String::with_capacity(masked.len() * 2);
    for (i, c) in masked.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Guessed letters as an alphabetical, space-separated line.
pub fn guessed_line(state: &GameState) -> String {
    let mut out = String::new();
    for c in state.guessed() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::spread;

    #[test]
    fn spread_inserts_separators() {
        assert_eq!(spread("A__"), "A _ _");
        assert_eq!(spread("_ _"), "_   _");
        assert_eq!(spread(""), "");
    }
}

use crate::cards::{Card, Color as CardColor};
use crate::evaluator::{Combination, Kind};
use crate::report::rank_rows;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_hand(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // header
            Constraint::Length(15), // hand, one row per rank
            Constraint::Min(4),     // combinations
            Constraint::Length(3),  // status bar
        ])
        .split(f.area());

    let cfg = app.dealer.config();
    let mut header_lines = vec![Line::from(format!(
        "Hand: {}   Max deals: {}   Max sets: {}   Gate: {}",
        cfg.hand_size,
        cfg.max_attempts,
        cfg.eval.max_set_candidates,
        if cfg.require_satisfying { "straight + set" } else { "off" },
    ))];
    header_lines.push(match &app.deal {
        Some(deal) => Line::from(format!(
            "Deal #{}   took {} shuffle(s)   Total score: {}",
            app.deals_made,
            deal.attempts,
            deal.result.total_score()
        )),
        None => Line::from("No deal yet."),
    });
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("rummy-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let hand_lines: Vec<Line> = match &app.deal {
        Some(deal) => rank_rows(&deal.hand)
            .into_iter()
            .map(|(rank, cards)| {
                let mut spans = vec![Span::styled(
                    format!("{rank:>2} │ "),
                    Style::default().add_modifier(Modifier::DIM),
                )];
                spans.extend(card_spans(cards));
                Line::from(spans)
            })
            .collect(),
        None => vec![Line::from("Press Space to deal.")],
    };
    let hand = Paragraph::new(hand_lines)
        .block(Block::default().title("Hand by rank").borders(Borders::ALL));
    f.render_widget(hand, chunks[1]);

    let mut combo_lines: Vec<Line> = Vec::new();
    if let Some(deal) = &app.deal {
        for combo in deal.result.combinations() {
            combo_lines.push(combination_line(combo));
        }
        if let Some(rest) = deal.result.remainder() {
            combo_lines.push(combination_line(&rest));
        }
        combo_lines.push(Line::from(Span::styled(
            format!("Total score: {}", deal.result.total_score()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    let combos = Paragraph::new(combo_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Combinations").borders(Borders::ALL));
    f.render_widget(combos, chunks[2]);

    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));
    let left = match app.deal_error() {
        Some(err) => Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from("Space: deal"),
    };
    f.render_widget(Paragraph::new(left), cols[0]);
    f.render_widget(
        Paragraph::new(Line::from("? help • M menu • Q quit")).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    }
}

fn combination_line(combo: &Combination) -> Line<'static> {
    let label_style = match combo.kind() {
        Kind::Straight => Style::default().fg(Color::Green),
        Kind::Set => Style::default().fg(Color::Magenta),
        _ => Style::default().add_modifier(Modifier::DIM),
    };
    let mut spans = vec![Span::styled(format!("{:<9}", combo.kind().label()), label_style)];
    spans.extend(card_spans(combo.cards()));
    spans.push(Span::raw(format!("  score {}", combo.score())));
    Line::from(spans)
}

fn card_spans(cards: impl IntoIterator<Item = Card>) -> Vec<Span<'static>> {
    cards
        .into_iter()
        .map(|c| Span::styled(format!("{:<4}", c.to_string()), card_style(c.color())))
        .collect()
}

fn card_style(color: CardColor) -> Style {
    let fg = match color {
        CardColor::Red => Color::Red,
        CardColor::Yellow => Color::Yellow,
        CardColor::Blue => Color::LightBlue,
        CardColor::Black => Color::Gray,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Hand:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space / N: deal a new hand"),
        Line::from("- M: settings menu"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply and deal"),
        Line::from("- Esc: back"),
        Line::from(""),
        Line::from("Straights are runs of 3+ ranks in one color."),
        Line::from("Sets are 3-4 cards of one rank; 4 need all colors."),
        Line::from("Selection is greedy by score, not exhaustive."),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

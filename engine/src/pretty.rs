//! Human-readable rendering of snapshots and events.
//!
//! This is a debugging and replay aid, not a wire format. The plain form is
//! stable enough to diff; `color` adds ANSI styling for terminals.

use holdem_shared::{Card, HandEvent, SeatEventKind, TableEventKind};
use owo_colors::OwoColorize;

use crate::game::GameState;

fn format_card(card: Card, color: bool) -> String {
    let text = card.to_string();
    if color && card.is_red() {
        text.red().to_string()
    } else {
        text
    }
}

fn format_cards(cards: &[Card], color: bool) -> String {
    cards
        .iter()
        .map(|&c| format_card(c, color))
        .collect::<Vec<_>>()
        .join(" ")
}

fn seat_name(state: &GameState, seat: usize) -> String {
    state
        .seats
        .get(seat)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| format!("Seat {}", seat))
}

/// One line per event, in the voice of a hand history.
pub fn format_event(event: &HandEvent, state: &GameState, color: bool) -> String {
    match event {
        HandEvent::Seat { seat, kind } => {
            let name = seat_name(state, seat.0);
            let name = if color {
                name.bold().to_string()
            } else {
                name
            };
            match kind {
                SeatEventKind::Fold => format!("{} folds", name),
                SeatEventKind::Check => format!("{} checks", name),
                SeatEventKind::Call(amount) => format!("{} calls {}", name, amount),
                SeatEventKind::Bet(amount) => format!("{} bets {}", name, amount),
                SeatEventKind::Raise { to, by } => {
                    format!("{} raises by {} to {}", name, by, to)
                }
                SeatEventKind::AllIn { to } => format!("{} is all-in for {}", name, to),
                SeatEventKind::PostBlind { kind, amount } => {
                    let which = match kind {
                        holdem_shared::BlindKind::Small => "small",
                        holdem_shared::BlindKind::Big => "big",
                    };
                    format!("{} posts {} blind {}", name, which, amount)
                }
            }
        }
        HandEvent::Table(kind) => match kind {
            TableEventKind::HandStart => "--- new hand ---".to_owned(),
            TableEventKind::HoleDealt { seat } => {
                format!("dealt hole cards to {}", seat_name(state, seat.0))
            }
            TableEventKind::StreetStarted(street) => format!("* {}", street.to_str()),
            TableEventKind::BoardDealt { cards, .. } => {
                format!("board: {}", format_cards(cards, color))
            }
            TableEventKind::ShowdownResults(results) => {
                let lines: Vec<String> = results
                    .iter()
                    .map(|r| {
                        format!(
                            "{} shows {} ({})",
                            seat_name(state, r.seat.0),
                            format_cards(&r.best_five, color),
                            r.rank
                        )
                    })
                    .collect();
                lines.join("; ")
            }
            TableEventKind::PotAwarded { winners, amount } => {
                let names: Vec<String> =
                    winners.iter().map(|w| seat_name(state, w.0)).collect();
                format!("pot of {} awarded to {}", amount, names.join(", "))
            }
            TableEventKind::Walkaway { seat } => {
                format!("{} wins uncontested", seat_name(state, seat.0))
            }
        },
    }
}

/// Full snapshot: street, positions, blinds, pot, board, seats and history.
pub fn render_state(state: &GameState, color: bool) -> String {
    let mut out = String::new();
    out.push_str("=== Table ===\n");
    out.push_str(&format!(
        "Street: {}  Dealer: {}  Blinds: {}/{}  Pot: {}\n",
        state.street.to_str(),
        state.dealer,
        state.small_blind,
        state.big_blind,
        state.pot.total()
    ));
    out.push_str(&format!(
        "Board: [{}]\n",
        format_cards(&state.community, color)
    ));
    out.push_str("Seats:\n");
    for seat in &state.seats {
        let mut line = format!("  {} [{} chips]", seat.name, seat.stack);
        if seat.folded {
            line.push_str(" (folded)");
        }
        if seat.all_in {
            line.push_str(" (all-in)");
        }
        line.push_str(&format!(" cards: [{}]", format_cards(&seat.hole, color)));
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("History:\n");
    for event in &state.history {
        out.push_str("  ");
        out.push_str(&format_event(event, state, color));
        out.push('\n');
    }
    out
}

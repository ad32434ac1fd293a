//! Text rendering for the board and the score table.
//! Pure functions: they build strings and never print.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{Display, Write};

use crate::board::Board;
use crate::common::CellKey;
use crate::participant::Participant;

const SEPARATOR: &str = "  +---+---+---+";

/// Draw the grid with column letters across the top and row numbers down
/// the side.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("    A   B   C\n");
    out.push_str(SEPARATOR);
    out.push('\n');
    for row in 0..3 {
        let _ = write!(out, "{} |", row + 1);
        for col in 0..3 {
            let key = CellKey::ALL[row * 3 + col];
            let ch = board.get(key).map_or(' ', |m| m.as_char());
            let _ = write!(out, " {} |", ch);
        }
        out.push('\n');
        out.push_str(SEPARATOR);
        if row < 2 {
            out.push('\n');
        }
    }
    out
}

/// "Human's marker is X. Computer's marker is O."
pub fn marker_legend(human: &Participant, computer: &Participant) -> String {
    format!(
        "{}'s marker is {}. {}'s marker is {}.",
        human.name(),
        human.marker(),
        computer.name(),
        computer.marker()
    )
}

fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width);
    out.extend(core::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(core::iter::repeat(fill).take(right));
    out
}

/// Two-column score table, one column per participant.
pub fn score_table(human: &Participant, computer: &Participant) -> String {
    let rule = "+----------------+----------------+";
    [
        format!("+{}+", center("SCORE", 33, '=')),
        format!("|{}|{}|", center(human.name(), 16, ' '), center(computer.name(), 16, ' ')),
        rule.to_string(),
        format!(
            "|{}|{}|",
            center(&human.score().to_string(), 16, ' '),
            center(&computer.score().to_string(), 16, ' ')
        ),
        rule.to_string(),
    ]
    .join("\n")
}

/// Join items as "a, b, or c"; two items become "a or b".
pub fn joinor<T: Display>(items: &[T], delimiter: &str, final_join: &str) -> String {
    let words: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    match words.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} {} {}", first, final_join, second),
        [init @ .., last] => format!("{}{}{} {}", init.join(delimiter), delimiter, final_join, last),
    }
}

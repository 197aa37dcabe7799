//! Side-by-side text boxes for the three piles.

use lair::{Lair, Pile, PileId};

const BOX_WIDTH: usize = 10;

/// Lines for one pile: centered label, top border, one row per slot, bottom
/// border. The box is as tall as the pile's capacity, logs drawn top first.
fn pile_lines(pile: &Pile) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(BOX_WIDTH));
    let units = pile.units();

    let mut lines = Vec::with_capacity(pile.capacity() as usize + 3);
    lines.push(format!("{:^width$}", pile.label(), width = BOX_WIDTH + 2));
    lines.push(border.clone());
    for slot in 0..pile.capacity() as usize {
        match units.get(slot) {
            Some(unit) => lines.push(format!("|{:^width$}|", unit, width = BOX_WIDTH)),
            None => lines.push(format!("|{}|", " ".repeat(BOX_WIDTH))),
        }
    }
    lines.push(border);
    lines
}

/// Render all three piles next to each other.
pub fn render(lair: &Lair) -> String {
    let boxes: Vec<Vec<String>> = PileId::ALL
        .iter()
        .map(|&id| pile_lines(lair.pile(id)))
        .collect();

    let rows = boxes.iter().map(Vec::len).min().unwrap_or(0);
    let mut out = String::new();
    for row in 0..rows {
        let line: Vec<&str> = boxes.iter().map(|b| b[row].as_str()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_initial_lair() {
        let lair = Lair::new(2).unwrap();
        let text = render(&lair);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "   Forest        Base       Hideout   ");
        assert_eq!(lines[2], "|    1     | |          | |          |");
        assert_eq!(lines[3], "|    2     | |          | |          |");
    }
}

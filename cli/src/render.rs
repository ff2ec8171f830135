use std::fmt::Write;

use minesweeper_core::Board;

/// Text view of the board: a column header, then one line per row prefixed with its index.
pub fn render(board: &Board) -> String {
    let glyphs = board.glyphs();
    let (rows, cols) = board.size();
    let width = rows.max(cols).saturating_sub(1).to_string().len();

    let mut out = String::new();
    let _ = write!(out, "{:width$} ", "");
    for col in 0..cols {
        let _ = write!(out, " {col:>width$}");
    }
    out.push('\n');

    for (row, tiles) in glyphs.rows().into_iter().enumerate() {
        let _ = write!(out, "{row:>width$} ");
        for glyph in tiles {
            let _ = write!(out, " {glyph:>width$}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Mines left: {}", board.mines_left());
    out
}

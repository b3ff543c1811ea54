//! Text snapshots of a board

use reversi_core::{Board, Cell, Color, Geometry};

/// Render the board as a text snapshot: `X` for Black, `O` for White,
/// `.` for empty. Hex rows are shifted to suggest the hexagon outline.
pub fn board_to_text(board: &Board) -> String {
    match board.geometry() {
        Geometry::Hex { radius } => hex_text(board, radius),
        Geometry::Square { side } => square_text(board, side),
    }
}

fn symbol(board: &Board, cell: Cell) -> char {
    match board.occupant_of(cell).ok().flatten() {
        Some(Color::Black) => 'X',
        Some(Color::White) => 'O',
        None => '.',
    }
}

fn hex_text(board: &Board, radius: i32) -> String {
    let mut out = String::new();
    for r in -radius..=radius {
        for _ in 0..r.abs() {
            out.push(' ');
        }
        let q_min = (-radius).max(-r - radius);
        let q_max = radius.min(-r + radius);
        for q in q_min..=q_max {
            out.push(symbol(board, Cell::Hex { q, r, s: -q - r }));
            if q < q_max {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

fn square_text(board: &Board, side: i32) -> String {
    let mut out = String::new();
    for row in 0..side {
        for col in 0..side {
            out.push(symbol(board, Cell::sq(row, col)));
            if col < side - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

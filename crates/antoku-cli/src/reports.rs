use antoku_core::board::Board;
use antoku_core::colony::ColonyStats;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

/// Boxed grid for humans, one table row per puzzle row. Printed to
/// stderr; stdout carries the machine-readable format.
pub fn print_board_grid(board: &Board) {
    let n = board.n();
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    for row in 0..n {
        let cells: Vec<Cell> = (0..n)
            .map(|col| {
                let value = board.value(row * n + col);
                let label = if value == 0 {
                    ".".to_string()
                } else {
                    value.to_string()
                };
                Cell::new(label).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    eprintln!("{table}");
}

pub fn print_colony_summary(stats: &[ColonyStats]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Colony", "Best", "Iterations", "Fail cells"]);
    for s in stats {
        table.add_row(vec![
            s.id.to_string(),
            s.best_score.to_string(),
            s.iterations.to_string(),
            s.fail_cells.to_string(),
        ]);
    }
    eprintln!("{table}");
}

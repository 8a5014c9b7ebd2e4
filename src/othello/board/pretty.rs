use crate::othello::prelude::*;

impl Board {
    /// Pretty-prints the board with row and column labels.
    pub fn pretty(&self) -> String {
        let header = format!("  {}", (0..BOARD_SIZE).join(""));
        let rows = self.cells.0.iter().enumerate().map(|(i, row)| {
            format!("{} {}", i, row.iter().map(|cell| format!("{}", cell)).join(""))
        });
        std::iter::once(header).chain(rows).collect::<Vec<String>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::othello::prelude::*;

    #[test]
    fn labels_rows_and_columns() {
        let pretty = Board::new().pretty();
        let lines = pretty.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert_eq!(lines[0], "  01234567");
        assert_eq!(lines[4], "3 ...BW...");
        assert_eq!(lines[5], "4 ...WB...");
    }
}

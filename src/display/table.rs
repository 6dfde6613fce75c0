use std::fmt;

/// Plain text table with a heading row and a border.
///
/// ```text
/// .-----------------------------.
/// |        |    Lundi 19.10     |
/// |--------|--------------------|
/// | Menu 1 | Soupe (CHF 2.50)   |
/// '-----------------------------'
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    heading: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_heading<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.heading = cells.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = std::iter::once(&self.heading)
            .chain(&self.rows)
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        (0..columns)
            .map(|column| {
                std::iter::once(&self.heading)
                    .chain(&self.rows)
                    .filter_map(|row| row.get(column))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        // Each column is padded by one space on both sides, columns joined by '|'.
        let inner: usize = widths.iter().map(|w| w + 2).sum::<usize>() + widths.len().saturating_sub(1);

        writeln!(f, ".{}.", "-".repeat(inner))?;
        if !self.heading.is_empty() {
            write_row(f, &self.heading, &widths, true)?;
            let separator: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
            writeln!(f, "|{}|", separator.join("|"))?;
        }
        for row in &self.rows {
            write_row(f, row, &widths, false)?;
        }
        writeln!(f, "'{}'", "-".repeat(inner))
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &[String], widths: &[usize], centered: bool) -> fmt::Result {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(column, &width)| {
            let cell = row.get(column).map(String::as_str).unwrap_or("");
            if centered {
                format!(" {:^width$} ", cell, width = width)
            } else {
                format!(" {:<width$} ", cell, width = width)
            }
        })
        .collect();
    writeln!(f, "|{}|", cells.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_bordered_table() {
        let mut table = Table::new();
        table.set_heading(["", "Lundi"]);
        table.add_row(["Menu 1", "Soupe (2.50)"]);
        table.add_row(["Végé", "Tofu (5.00)"]);

        let expected = "\
.-----------------------.
|        |    Lundi     |
|--------|--------------|
| Menu 1 | Soupe (2.50) |
| Végé   | Tofu (5.00)  |
'-----------------------'
";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let mut table = Table::new();
        table.set_heading(["", "Day"]);
        table.add_row(["A", "x", "y"]);

        let rendered = table.to_string();
        assert!(rendered.contains("|   | Day |   |\n"));
        assert!(rendered.contains("| A | x   | y |\n"));
    }
}

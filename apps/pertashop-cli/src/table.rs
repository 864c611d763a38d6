//! Plain-text table rendering for the dashboard and the sales report.

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone)]
struct Column {
    header: String,
    align: Align,
}

/// A titled table with an optional footer row (e.g. TOTAL).
#[derive(Debug, Clone, Default)]
pub struct Table {
    title: Option<String>,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Table {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn column(mut self, header: impl Into<String>, align: Align) -> Self {
        self.columns.push(Column {
            header: header.into(),
            align,
        });
        self
    }

    /// Adds a row; missing cells render empty, extra cells are dropped.
    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn footer(&mut self, cells: Vec<String>) {
        self.footer = Some(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .chain(self.footer.iter())
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(col.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Renders the table, one trailing newline included.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };

        let mut out = String::new();
        if let Some(title) = &self.title {
            let total: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
            out.push_str(&pad(title, total, Align::Center).trim_end().to_string());
            out.push('\n');
        }

        out.push_str(&border("┌", "┬", "┐"));
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&self.line(&headers, &widths, true));
        out.push_str(&border("├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&self.line(row, &widths, false));
        }
        if let Some(footer) = &self.footer {
            out.push_str(&border("├", "┼", "┤"));
            out.push_str(&self.line(footer, &widths, false));
        }
        out.push_str(&border("└", "┴", "┘"));
        out
    }

    fn line(&self, cells: &[String], widths: &[usize], header: bool) -> String {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (col, width))| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let align = if header { Align::Center } else { col.align };
                pad(cell, *width, align)
            })
            .collect();
        format!("│ {} │\n", rendered.join(" │ "))
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    let space = width.saturating_sub(len);
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(space)),
        Align::Right => format!("{}{}", " ".repeat(space), text),
        Align::Center => {
            let left = space / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(space - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        let mut table = Table::new("Stock")
            .column("Fuel", Align::Left)
            .column("Liters", Align::Right);
        table.row(vec!["Pertamax".into(), "4,800.00".into()]);
        table.row(vec!["Pertalite".into(), "7,000.00".into()]);
        table.footer(vec!["TOTAL".into(), "11,800.00".into()]);

        let text = table.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "Stock");
        assert!(lines.contains(&"│ Pertamax  │  4,800.00 │"));
        assert!(lines.contains(&"│ TOTAL     │ 11,800.00 │"));
        // Every boxed line has the same width
        let width = lines[1].chars().count();
        assert!(lines[1..].iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_short_rows_render_empty_cells() {
        let mut table = Table::new("t").column("a", Align::Left).column("b", Align::Left);
        table.row(vec!["x".into()]);
        assert!(table.render().contains("│ x │   │"));
        assert_eq!(table.len(), 1);
    }
}

//! Plain-text table rendering for listing screens.

use rollbook_core::pagination::PaginationMeta;

/// Accumulates rows and prints them with column-aligned headers.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn print(&self) {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        print_line(&self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        print_line(&rule, &widths);
        for row in &self.rows {
            print_line(row, &widths);
        }
    }
}

fn print_line(cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}

/// Prints the pagination footer under a listing.
pub fn print_meta(meta: &PaginationMeta) {
    println!(
        "Page {} of {} ({} total)",
        meta.page, meta.total_pages, meta.total
    );
}

/// Placeholder for a value the backend did not include.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

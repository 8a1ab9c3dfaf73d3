//! Plain-text table rendering for collection listings.

use launchdeck_core::{Company, Launch, LaunchBase, NewsArticle, Rocket};

/// An entity that can render itself as one table row.
pub trait Tabular {
    const COLUMNS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// Print a left-aligned column table followed by a record count.
pub fn print_table<T: Tabular>(records: &[T]) {
    let rows: Vec<Vec<String>> = records.iter().map(Tabular::row).collect();

    let mut widths: Vec<usize> = T::COLUMNS.iter().map(|column| column.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let render = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = T::COLUMNS.iter().map(|c| c.to_string()).collect();
    let header = render(&header);
    println!("{header}");
    println!("{}", "-".repeat(header.len()));
    for row in &rows {
        println!("{}", render(row));
    }
    println!("({} records)", records.len());
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

impl Tabular for Rocket {
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "HEIGHT", "MASS", "ACTIVE"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            format!("{:.1} m", self.height),
            format!("{:.0} kg", self.mass),
            yes_no(self.active),
        ]
    }
}

impl Tabular for Launch {
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "DATE", "STATUS", "PROVIDER"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.launch_date.format("%Y-%m-%d %H:%M").to_string(),
            self.status.as_str().to_string(),
            self.provider
                .as_ref()
                .map(|provider| provider.name.clone())
                .unwrap_or_default(),
        ]
    }
}

impl Tabular for NewsArticle {
    const COLUMNS: &'static [&'static str] = &["ID", "DATE", "TITLE", "URL"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.to_string(),
            self.title.clone(),
            self.url.clone(),
        ]
    }
}

impl Tabular for LaunchBase {
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "COUNTRY", "LAT", "LON"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.country.clone(),
            format!("{:.4}", self.latitude),
            format!("{:.4}", self.longitude),
        ]
    }
}

impl Tabular for Company {
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "FOUNDED", "HQ", "EMPLOYEES"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.founded.to_string(),
            self.headquarters.clone(),
            self.employees.to_string(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rocket_row_matches_columns() {
        let rocket = Rocket {
            id: 1,
            external_id: None,
            name: "Electron".to_string(),
            description: String::new(),
            height: 18.0,
            diameter: 1.2,
            mass: 13_000.0,
            company_id: None,
            company: None,
            image_url: String::new(),
            active: true,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(rocket.row().len(), Rocket::COLUMNS.len());
        assert_eq!(rocket.row()[4], "yes");
    }
}

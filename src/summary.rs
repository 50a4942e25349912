use crate::record::CleanedRecord;

const COLUMNS: [(&str, &str); 5] = [
    ("Theme Names", "text"),
    ("Author", "text"),
    ("Price", "int64"),
    ("Rating Count", "int64"),
    ("Sales Count", "int64"),
];

/// Renders the cleaned dataset as a table followed by a per-column info block.
pub fn format_summary(records: &[CleanedRecord]) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.display_name().to_string(),
                r.author.clone(),
                r.price.to_string(),
                r.rating_count.to_string(),
                r.sales_count.to_string(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|(name, _)| name.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = COLUMNS.map(|(name, _)| name.to_string());
    push_row(&mut out, &header, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    let non_null = [
        records.iter().filter(|r| r.name.is_some()).count(),
        records.len(),
        records.len(),
        records.len(),
        records.len(),
    ];
    out.push('\n');
    out.push_str(&format!("{} entries, {} columns\n", records.len(), COLUMNS.len()));
    out.push_str(&format!(" #  {:<14}{:<16}Dtype\n", "Column", "Non-Null Count"));
    for (i, ((name, dtype), count)) in COLUMNS.iter().zip(non_null).enumerate() {
        let count = format!("{count} non-null");
        out.push_str(&format!(" {i}  {name:<14}{count:<16}{dtype}\n"));
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            // Text columns align left, numbers right.
            if i < 2 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_rows_and_counts_missing_names() {
        let records = vec![
            CleanedRecord {
                name: Some("Avada".to_string()),
                author: "ThemeFusion".to_string(),
                price: 69,
                rating_count: 26000,
                sales_count: 950,
            },
            CleanedRecord {
                name: None,
                author: "Kriesi".to_string(),
                price: 0,
                rating_count: 800,
                sales_count: 12,
            },
        ];
        let summary = format_summary(&records);
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(
            lines[0],
            "Theme Names  Author       Price  Rating Count  Sales Count"
        );
        assert_eq!(
            lines[1],
            "Avada        ThemeFusion     69         26000          950"
        );
        assert_eq!(
            lines[2],
            "n/a          Kriesi           0           800           12"
        );
        assert!(summary.contains("2 entries, 5 columns"));
        assert!(summary.contains(" 0  Theme Names   1 non-null      text"));
        assert!(summary.contains(" 4  Sales Count   2 non-null      int64"));
    }
}

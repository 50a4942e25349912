use std::path::Path;

use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    aggregator::AuthorTotal, fonts::FAMILY, record::CleanedRecord,
    text_manipulators::wrap_label,
};

pub const SIZE: (u32, u32) = (1200, 800);
pub const LABEL_WRAP_WIDTH: usize = 10;
const LINE_HEIGHT: u32 = 18;

const VIRIDIS: [RGBColor; 5] = [
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
];

const BLUES: [RGBColor; 5] = [
    RGBColor(8, 48, 107),
    RGBColor(8, 81, 156),
    RGBColor(33, 113, 181),
    RGBColor(66, 146, 198),
    RGBColor(107, 174, 214),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// One entry per line of the x axis label.
    pub label: Vec<String>,
    pub value: i64,
}

#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub bars: Vec<Bar>,
    pub palette: &'static [RGBColor],
}

pub fn authors_chart(top: &[AuthorTotal]) -> BarChart {
    BarChart {
        title: "Highly Rated Authors".to_string(),
        x_desc: "Theme Authors".to_string(),
        y_desc: "Total Ratings".to_string(),
        bars: top
            .iter()
            .map(|total| Bar {
                label: vec![total.author.clone()],
                value: total.rating_count,
            })
            .collect(),
        palette: &VIRIDIS,
    }
}

pub fn themes_chart(top: &[&CleanedRecord]) -> BarChart {
    BarChart {
        title: "Top Selling Themes".to_string(),
        x_desc: "Theme Names".to_string(),
        y_desc: "Sales Count".to_string(),
        bars: top
            .iter()
            .map(|record| Bar {
                label: wrap_label(record.display_name(), LABEL_WRAP_WIDTH),
                value: record.sales_count,
            })
            .collect(),
        palette: &BLUES,
    }
}

/// Draws `chart` as a PNG at `path`, replacing any existing file.
///
/// With `with_text` unset only the bars are drawn, since every caption and
/// label needs a registered font.
pub fn render_bar_chart(path: &Path, chart: &BarChart, with_text: bool) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // Plotted as f64 so values near i64::MAX can't overflow the axis maths.
    let max = chart.bars.iter().map(|bar| bar.value).max().unwrap_or(0).max(1) as f64;
    let y_top = max * 1.1 + 1.0;
    let slots = chart.bars.len().max(1) as f64;
    let label_lines = chart
        .bars
        .iter()
        .map(|bar| bar.label.len())
        .max()
        .unwrap_or(1)
        .max(1) as u32;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if with_text {
        builder
            .caption(&chart.title, (FAMILY, 40))
            .x_label_area_size(50 + label_lines * LINE_HEIGHT)
            .y_label_area_size(100);
    }
    let mut ctx = builder.build_cartesian_2d(0f64..slots, 0f64..y_top)?;

    if with_text {
        ctx.configure_mesh()
            .disable_x_mesh()
            // Bar labels are drawn below, one text element per wrapped line.
            .x_label_formatter(&|_: &f64| String::new())
            .y_label_formatter(&|v: &f64| format!("{v:.0}"))
            .x_desc(chart.x_desc.as_str())
            .y_desc(chart.y_desc.as_str())
            .axis_desc_style((FAMILY, 20))
            .label_style((FAMILY, 14))
            .draw()?;
    }

    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        let x = i as f64;
        let color = chart.palette[i % chart.palette.len()];
        Rectangle::new([(x + 0.1, 0.0), (x + 0.9, bar.value as f64)], color.filled())
    }))?;

    if with_text {
        let style =
            TextStyle::from((FAMILY, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
        for (i, bar) in chart.bars.iter().enumerate() {
            let (x, y) = ctx.backend_coord(&(i as f64 + 0.5, 0.0));
            for (line_no, line) in bar.label.iter().enumerate() {
                let y = y + 8 + (line_no as u32 * LINE_HEIGHT) as i32;
                root.draw(&Text::new(line.as_str(), (x, y), style.clone()))?;
            }
        }
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, sales_count: i64) -> CleanedRecord {
        CleanedRecord {
            name: name.map(str::to_string),
            author: "ThemeFusion".to_string(),
            price: 69,
            rating_count: 26000,
            sales_count,
        }
    }

    #[test]
    fn theme_labels_are_wrapped() {
        let a = record(Some("Avada Website Builder"), 900);
        let b = record(None, 10);
        let chart = themes_chart(&[&a, &b]);
        assert_eq!(
            chart.bars,
            vec![
                Bar {
                    label: vec!["Avada".to_string(), "Website".to_string(), "Builder".to_string()],
                    value: 900,
                },
                Bar { label: vec!["n/a".to_string()], value: 10 },
            ]
        );
    }

    #[test]
    fn author_labels_stay_on_one_line() {
        let chart = authors_chart(&[AuthorTotal {
            author: "Theme Fusion Collective".to_string(),
            rating_count: 27000,
        }]);
        assert_eq!(chart.bars[0].label, ["Theme Fusion Collective"]);
        assert_eq!(chart.title, "Highly Rated Authors");
    }

    #[test]
    fn renders_png_without_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let a = record(Some("Avada"), 900);
        render_bar_chart(&path, &themes_chart(&[&a]), false).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn renders_bars_at_the_top_of_the_i64_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        let chart = authors_chart(&[
            AuthorTotal { author: "ThemeFusion".to_string(), rating_count: i64::MAX },
            AuthorTotal { author: "Kriesi".to_string(), rating_count: 1 },
        ]);
        render_bar_chart(&path, &chart, false).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn renders_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        render_bar_chart(&path, &authors_chart(&[]), false).unwrap();
        assert!(path.is_file());
    }
}

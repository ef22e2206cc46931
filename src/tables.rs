use crate::dataset::route_label;
use crate::models::{TableRow, TableSection};

/// What a table column holds. Classified once per section from the header
/// text (headers embed dates, e.g. `Current Index (07-21-2025)`, so the
/// match is on the stable label part), then rendering dispatches on the
/// kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    Route,
    CurrentIndex,
    PreviousIndex,
    WeeklyChange,
    Other(String),
}

pub fn classify_header(header: &str) -> ColumnKind {
    if header.contains("Weekly Change") {
        ColumnKind::WeeklyChange
    } else if header.contains("Current Index") {
        ColumnKind::CurrentIndex
    } else if header.contains("Previous Index") {
        ColumnKind::PreviousIndex
    } else if header.contains("항로") || header.contains("Route") {
        ColumnKind::Route
    } else {
        ColumnKind::Other(header.to_lowercase().replace(' ', "_"))
    }
}

/// Renders a section as an HTML table, or a "no data" placeholder when the
/// section has no headers or no rows.
pub fn render_table(family_key: &str, section: &TableSection) -> String {
    if section.headers.is_empty() || section.rows.is_empty() {
        return r#"<p class="no-data">No data available</p>"#.to_string();
    }

    let kinds: Vec<ColumnKind> = section.headers.iter().map(|h| classify_header(h)).collect();

    let mut html = String::from("<table class=\"index-table\"><thead><tr>");
    for header in &section.headers {
        html.push_str("<th>");
        html.push_str(&escape(header));
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");

    for row in &section.rows {
        html.push_str("<tr>");
        for kind in &kinds {
            render_cell(&mut html, family_key, row, kind);
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn render_cell(html: &mut String, family_key: &str, row: &TableRow, kind: &ColumnKind) {
    match kind {
        ColumnKind::Route => {
            html.push_str("<td class=\"route\">");
            html.push_str(&escape(route_label(family_key, &row.route)));
            html.push_str("</td>");
        }
        ColumnKind::CurrentIndex => {
            html.push_str("<td class=\"num\">");
            html.push_str(&format_index(row.current_index));
            html.push_str("</td>");
        }
        ColumnKind::PreviousIndex => {
            html.push_str("<td class=\"num\">");
            html.push_str(&format_index(row.previous_index));
            html.push_str("</td>");
        }
        ColumnKind::WeeklyChange => {
            let change = &row.weekly_change;
            match (change.value.as_deref(), change.percentage.as_deref()) {
                (Some(value), Some(percentage)) => {
                    let class = change.color_class.as_deref().unwrap_or("text-gray-700");
                    html.push_str(&format!(
                        "<td class=\"num\"><span class=\"{}\">{} ({})</span></td>",
                        escape(class),
                        escape(value),
                        escape(percentage)
                    ));
                }
                _ => html.push_str("<td class=\"num\">-</td>"),
            }
        }
        // Fallback for columns this schema does not know: the only row
        // fields addressable by a snake_cased header are the named ones.
        ColumnKind::Other(key) => {
            let text = match key.as_str() {
                "route" => escape(&row.route),
                "current_index" => format_index(row.current_index),
                "previous_index" => format_index(row.previous_index),
                _ => "-".to_string(),
            };
            html.push_str("<td>");
            html.push_str(&text);
            html.push_str("</td>");
        }
    }
}

fn format_index(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract().abs() < f64::EPSILON => format!("{v:.0}"),
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeeklyChange;

    fn section() -> TableSection {
        TableSection {
            headers: vec![
                "항로".to_string(),
                "Current Index (07-21-2025)".to_string(),
                "Previous Index (07-14-2025)".to_string(),
                "Weekly Change".to_string(),
            ],
            rows: vec![TableRow {
                route: "KCCI_종합지수".to_string(),
                current_index: Some(2079.96),
                previous_index: Some(1985.0),
                weekly_change: WeeklyChange {
                    value: Some("94.96".to_string()),
                    percentage: Some("4.78%".to_string()),
                    color_class: Some("text-red-500".to_string()),
                },
            }],
        }
    }

    #[test]
    fn headers_classify_despite_embedded_dates() {
        assert_eq!(classify_header("Current Index (07-21-2025)"), ColumnKind::CurrentIndex);
        assert_eq!(classify_header("Previous Index (07-14-2025)"), ColumnKind::PreviousIndex);
        assert_eq!(classify_header("Weekly Change"), ColumnKind::WeeklyChange);
        assert_eq!(classify_header("항로"), ColumnKind::Route);
        assert_eq!(
            classify_header("Charter Rate"),
            ColumnKind::Other("charter_rate".to_string())
        );
    }

    #[test]
    fn renders_route_without_prefix_and_change_with_color() {
        let html = render_table("KCCI", &section());
        assert!(html.contains("<td class=\"route\">종합지수</td>"));
        assert!(html.contains("2079.96"));
        assert!(html.contains("<span class=\"text-red-500\">94.96 (4.78%)</span>"));
    }

    #[test]
    fn empty_section_renders_placeholder() {
        let empty = TableSection::default();
        assert!(render_table("KCCI", &empty).contains("No data available"));

        let headers_only = TableSection {
            headers: vec!["항로".to_string()],
            rows: Vec::new(),
        };
        assert!(render_table("KCCI", &headers_only).contains("No data available"));
    }

    #[test]
    fn missing_change_parts_render_dash() {
        let mut section = section();
        section.rows[0].weekly_change.percentage = None;
        section.rows[0].previous_index = None;
        let html = render_table("KCCI", &section);
        assert!(html.contains("<td class=\"num\">-</td>"));
        assert!(!html.contains("94.96 ("));
    }

    #[test]
    fn header_text_is_escaped() {
        let section = TableSection {
            headers: vec!["<script>".to_string()],
            rows: vec![TableRow {
                route: "X_y".to_string(),
                current_index: None,
                previous_index: None,
                weekly_change: WeeklyChange::default(),
            }],
        };
        let html = render_table("X", &section);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn whole_indices_drop_the_decimals() {
        assert_eq!(format_index(Some(1985.0)), "1985");
        assert_eq!(format_index(Some(2079.96)), "2079.96");
        assert_eq!(format_index(None), "-");
    }
}

use crate::aggregate::{Reduction, aggregate_monthly};
use crate::chart::{ChartKind, ChartRegistry, ChartSpec};
use crate::dataset::build_datasets;
use crate::models::{DashboardData, DataPoint, Dataset, WeatherData};
use crate::palette::Palette;
use crate::routes::IndexFamily;
use crate::tables::render_table;
use chrono::Local;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

/// Trailing window for the blank-sailing bar chart.
const BLANK_SAILING_MONTHS: usize = 12;

pub const EXCHANGE_CHART_MOUNT: &str = "exchange-chart";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorldClock {
    pub city: &'static str,
    pub zone: &'static str,
}

/// Clocks shown in the header strip, ticked client-side once a second.
pub const WORLD_CLOCKS: [WorldClock; 5] = [
    WorldClock { city: "Seoul", zone: "Asia/Seoul" },
    WorldClock { city: "Shanghai", zone: "Asia/Shanghai" },
    WorldClock { city: "Los Angeles", zone: "America/Los_Angeles" },
    WorldClock { city: "New York", zone: "America/New_York" },
    WorldClock { city: "London", zone: "Europe/London" },
];

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub key: &'static str,
    pub title: &'static str,
    pub chart_mount: &'static str,
    pub table_mount: &'static str,
    pub chart: Option<ChartSpec>,
    pub month_labels: Option<Vec<String>>,
    pub table_html: String,
    /// Set when the section was absent from the artifact.
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExchangePanel {
    pub latest: Option<f64>,
    pub change: Option<f64>,
    pub chart_mount: &'static str,
    pub chart: Option<ChartSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub generated_at: String,
    pub sections: Vec<SectionView>,
    pub weather: Option<WeatherData>,
    pub exchange: ExchangePanel,
    pub clocks: Vec<WorldClock>,
}

/// One render pass over a freshly fetched artifact. Sections degrade
/// independently: a family missing from the artifact becomes a placeholder
/// without touching its neighbors.
pub fn build_dashboard(data: &DashboardData) -> DashboardView {
    let mut registry = ChartRegistry::with_mounts(
        IndexFamily::ALL
            .iter()
            .map(|f| f.chart_mount())
            .chain([EXCHANGE_CHART_MOUNT])
            .collect(),
    );

    let sections = IndexFamily::ALL
        .iter()
        .map(|&family| build_section(family, data, &mut registry))
        .collect();

    DashboardView {
        generated_at: Local::now().to_rfc3339(),
        sections,
        weather: data.weather_data.clone(),
        exchange: build_exchange_panel(data, &mut registry),
        clocks: WORLD_CLOCKS.to_vec(),
    }
}

fn build_section(
    family: IndexFamily,
    data: &DashboardData,
    registry: &mut ChartRegistry,
) -> SectionView {
    let series = data.chart_data.get(family.key());
    let table = data.table_data.get(family.key());

    if series.is_none() && table.is_none() {
        warn!(family = family.key(), "section missing from artifact");
        return SectionView {
            key: family.key(),
            title: family.title(),
            chart_mount: family.chart_mount(),
            table_mount: family.table_mount(),
            chart: None,
            month_labels: None,
            table_html: render_table(family.key(), &Default::default()),
            placeholder: Some(format!("{} data is unavailable", family.key())),
        };
    }

    let mut series = series.cloned().unwrap_or_default();
    series.sort_by_key(|record| record.date);
    let table = table.cloned().unwrap_or_default();

    // Blank sailings are weekly counts; the chart shows monthly totals.
    let (chart_series, month_labels) = if family == IndexFamily::BlankSailing {
        let aggregate = aggregate_monthly(&series, BLANK_SAILING_MONTHS, Reduction::Sum);
        (aggregate.records, Some(aggregate.month_labels))
    } else {
        (series, None)
    };
    let monthly = month_labels.is_some();

    let mut palette = Palette::new();
    let datasets = build_datasets(family, &chart_series, &table.rows, &mut palette);
    let chart = if datasets.is_empty() {
        None
    } else {
        let (kind, overrides) = if monthly {
            (ChartKind::Bar, Some(json!({"scales": {"y": {"beginAtZero": true}}})))
        } else {
            (ChartKind::Line, None)
        };
        registry.render(family.chart_mount(), kind, datasets, overrides, monthly);
        registry.take(family.chart_mount())
    };

    SectionView {
        key: family.key(),
        title: family.title(),
        chart_mount: family.chart_mount(),
        table_mount: family.table_mount(),
        chart,
        month_labels,
        table_html: render_table(family.key(), &table),
        placeholder: None,
    }
}

fn build_exchange_panel(data: &DashboardData, registry: &mut ChartRegistry) -> ExchangePanel {
    let mut history = data.exchange_rate_history.clone();
    history.sort_by_key(|point| point.date);

    let points: Vec<DataPoint> = history
        .iter()
        .filter_map(|point| point.usd.map(|y| DataPoint { x: point.date, y }))
        .collect();

    let latest = points.last().map(|p| p.y);
    let change = match points.len() {
        0 | 1 => None,
        n => Some(points[n - 1].y - points[n - 2].y),
    };

    let chart = if points.is_empty() {
        warn!("exchange-rate history is empty");
        None
    } else {
        let mut palette = Palette::new();
        let color = palette.next();
        let dataset = Dataset {
            label: "USD/KRW".to_string(),
            points,
            color,
            border_color: palette.next_border(),
            border_width: 2,
        };
        registry.render(EXCHANGE_CHART_MOUNT, ChartKind::Line, vec![dataset], None, false);
        registry.take(EXCHANGE_CHART_MOUNT)
    };

    ExchangePanel {
        latest,
        change,
        chart_mount: EXCHANGE_CHART_MOUNT,
        chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExchangeRatePoint, TableRow, TableSection, TimeSeriesRecord, WeeklyChange};

    fn artifact() -> DashboardData {
        let mut data = DashboardData::default();
        data.chart_data.insert(
            "KCCI".to_string(),
            vec![
                TimeSeriesRecord {
                    date: "2024-02-01".parse().unwrap(),
                    fields: [("KCCI_종합지수".to_string(), Some(1100.0))].into(),
                },
                TimeSeriesRecord {
                    date: "2024-01-01".parse().unwrap(),
                    fields: [("KCCI_종합지수".to_string(), Some(1000.0))].into(),
                },
            ],
        );
        data.table_data.insert(
            "KCCI".to_string(),
            TableSection {
                headers: vec![
                    "항로".to_string(),
                    "Current Index".to_string(),
                    "Previous Index".to_string(),
                    "Weekly Change".to_string(),
                ],
                rows: vec![TableRow {
                    route: "KCCI_종합지수".to_string(),
                    current_index: Some(1100.0),
                    previous_index: Some(1000.0),
                    weekly_change: WeeklyChange::default(),
                }],
            },
        );
        data.exchange_rate_history = vec![
            ExchangeRatePoint { date: "2024-01-02".parse().unwrap(), usd: Some(1310.0) },
            ExchangeRatePoint { date: "2024-01-01".parse().unwrap(), usd: Some(1300.0) },
        ];
        data
    }

    #[test]
    fn builds_all_eight_sections_with_placeholders_for_missing() {
        let view = build_dashboard(&artifact());
        assert_eq!(view.sections.len(), 8);

        let kcci = view.sections.iter().find(|s| s.key == "KCCI").unwrap();
        assert!(kcci.placeholder.is_none());
        let chart = kcci.chart.as_ref().unwrap();
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].label, "종합지수");
        assert_eq!(chart.datasets[0].border_width, 2);

        let scfi = view.sections.iter().find(|s| s.key == "SCFI").unwrap();
        assert!(scfi.placeholder.is_some());
        assert!(scfi.chart.is_none());
        assert!(scfi.table_html.contains("No data available"));
    }

    #[test]
    fn chart_series_is_sorted_ascending_before_projection() {
        let view = build_dashboard(&artifact());
        let kcci = view.sections.iter().find(|s| s.key == "KCCI").unwrap();
        let points = &kcci.chart.as_ref().unwrap().datasets[0].points;
        assert_eq!(points[0].y, 1000.0);
        assert_eq!(points[1].y, 1100.0);
    }

    #[test]
    fn blank_sailing_renders_monthly_bars() {
        let mut data = artifact();
        data.chart_data.insert(
            "BLANK_SAILING".to_string(),
            vec![
                TimeSeriesRecord {
                    date: "2025-07-04".parse().unwrap(),
                    fields: [("BLANK_SAILING_MSC".to_string(), Some(2.0))].into(),
                },
                TimeSeriesRecord {
                    date: "2025-07-18".parse().unwrap(),
                    fields: [("BLANK_SAILING_MSC".to_string(), Some(6.0))].into(),
                },
            ],
        );
        data.table_data.insert(
            "BLANK_SAILING".to_string(),
            TableSection {
                headers: vec!["항로".to_string(), "Current Index".to_string()],
                rows: vec![TableRow {
                    route: "BLANK_SAILING_MSC".to_string(),
                    current_index: Some(6.0),
                    previous_index: None,
                    weekly_change: WeeklyChange::default(),
                }],
            },
        );

        let view = build_dashboard(&data);
        let section = view.sections.iter().find(|s| s.key == "BLANK_SAILING").unwrap();
        let chart = section.chart.as_ref().unwrap();
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.options["scales"]["y"]["beginAtZero"], serde_json::json!(true));
        assert_eq!(chart.options["scales"]["x"]["time"]["unit"], serde_json::json!("month"));
        assert_eq!(section.month_labels.as_ref().unwrap().len(), 12);
        // Monthly totals, not means: 2 + 6 for July.
        assert_eq!(chart.datasets[0].points.last().unwrap().y, 8.0);
    }

    #[test]
    fn exchange_panel_reports_latest_and_change() {
        let view = build_dashboard(&artifact());
        assert_eq!(view.exchange.latest, Some(1310.0));
        assert_eq!(view.exchange.change, Some(10.0));
        assert!(view.exchange.chart.is_some());
    }

    #[test]
    fn empty_artifact_degrades_everywhere_without_panicking() {
        let view = build_dashboard(&DashboardData::default());
        assert_eq!(view.sections.len(), 8);
        assert!(view.sections.iter().all(|s| s.placeholder.is_some()));
        assert!(view.exchange.chart.is_none());
        assert!(view.weather.is_none());
        assert_eq!(view.clocks.len(), 5);
    }
}

use crate::models::{DataPoint, Dataset, TableRow, TimeSeriesRecord};
use crate::palette::Palette;
use crate::routes::{IndexFamily, Resolution, RouteKeyMap};
use tracing::warn;

const COMPOSITE_BORDER_WIDTH: u8 = 2;
const ROUTE_BORDER_WIDTH: u8 = 1;

/// Builds one series per table row for a family, in row order. Rows are
/// skipped when the route is intentionally chartless, when the label is
/// unmapped, when the row has no current index, or when the series filters
/// down to zero points; only the first case is silent.
pub fn build_datasets(
    family: IndexFamily,
    series: &[TimeSeriesRecord],
    rows: &[TableRow],
    palette: &mut Palette,
) -> Vec<Dataset> {
    build_datasets_with_map(
        RouteKeyMap::for_family(family),
        family.key(),
        family.composite_marker(),
        series,
        rows,
        palette,
    )
}

pub fn build_datasets_with_map(
    map: &RouteKeyMap,
    family_key: &str,
    composite_marker: Option<&str>,
    series: &[TimeSeriesRecord],
    rows: &[TableRow],
    palette: &mut Palette,
) -> Vec<Dataset> {
    let mut datasets = Vec::new();

    for row in rows {
        let label = route_label(family_key, &row.route);
        let field = match map.resolve(label) {
            Some(Resolution::Field(field)) => field,
            Some(Resolution::Excluded) => continue,
            None => {
                warn!(family = family_key, route = label, "route label has no series mapping");
                continue;
            }
        };

        if row.current_index.is_none() {
            warn!(family = family_key, route = label, "row has no current index, skipping series");
            continue;
        }

        let points: Vec<DataPoint> = series
            .iter()
            .filter_map(|record| record.value(field).map(|y| DataPoint { x: record.date, y }))
            .collect();
        if points.is_empty() {
            warn!(family = family_key, route = label, "series has no valid points, skipping");
            continue;
        }

        let color = palette.next();
        let border_color = palette.next_border();
        datasets.push(Dataset {
            label: label.to_string(),
            points,
            color,
            border_color,
            border_width: if composite_marker == Some(label) {
                COMPOSITE_BORDER_WIDTH
            } else {
                ROUTE_BORDER_WIDTH
            },
        });
    }

    datasets
}

/// Strips the family prefix (which may itself contain underscores, e.g.
/// `BLANK_SAILING`) plus the joining underscore from a row's route.
pub fn route_label<'a>(family_key: &str, route: &'a str) -> &'a str {
    route
        .strip_prefix(family_key)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(route)
}

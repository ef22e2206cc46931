use crate::models::TimeSeriesRecord;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// How a month bucket reduces each field's non-null values. Mean is the
/// primary contract; Sum exists for series whose unit is a weekly count
/// (blank sailings), where a monthly total is the meaningful figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

/// One record per covered calendar month, dated on the first of the month,
/// carrying the same field set as the input records.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    pub records: Vec<TimeSeriesRecord>,
    pub month_labels: Vec<String>,
}

impl MonthlyAggregate {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            month_labels: Vec::new(),
        }
    }
}

/// Groups `records` by calendar month and reduces every numeric field over
/// the trailing `months_to_display` months ending at the latest record's
/// month, ascending and gap-free. A month with no contributing values for a
/// field yields `None` for that field, never zero.
pub fn aggregate_monthly(
    records: &[TimeSeriesRecord],
    months_to_display: usize,
    reduction: Reduction,
) -> MonthlyAggregate {
    if records.is_empty() || months_to_display == 0 {
        return MonthlyAggregate::empty();
    }

    let latest = records.iter().map(|r| r.date).max().unwrap_or_default();
    let field_names: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.fields.keys().map(String::as_str))
        .collect();

    let mut out = MonthlyAggregate::empty();
    for back in (0..months_to_display).rev() {
        let month = months_before(latest, back as u32);
        let in_month = |r: &&TimeSeriesRecord| {
            r.date.year() == month.year() && r.date.month() == month.month()
        };

        let mut aggregated = TimeSeriesRecord {
            date: month,
            fields: Default::default(),
        };
        for field in &field_names {
            let values: Vec<f64> = records
                .iter()
                .filter(in_month)
                .filter_map(|r| r.value(field))
                .collect();
            let reduced = if values.is_empty() {
                None
            } else {
                let sum: f64 = values.iter().sum();
                match reduction {
                    Reduction::Sum => Some(sum),
                    Reduction::Mean => Some(sum / values.len() as f64),
                }
            };
            aggregated.fields.insert((*field).to_string(), reduced);
        }

        out.month_labels.push(month.format("%Y-%m").to_string());
        out.records.push(aggregated);
    }
    out
}

/// First day of the month `back` months before `date`'s month.
fn months_before(date: NaiveDate, back: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 - back as i32;
    let (year, month0) = (total.div_euclid(12), total.rem_euclid(12) as u32);
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or_default()
}

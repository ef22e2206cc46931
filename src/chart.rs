use crate::models::Dataset;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Everything the page's painter needs for one chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub datasets: Vec<Dataset>,
    pub options: Value,
}

/// Baseline chart options; monthly charts step the time axis by month.
pub fn default_options(monthly: bool) -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "scales": {
            "x": {
                "type": "time",
                "time": {
                    "unit": if monthly { "month" } else { "day" },
                    "tooltipFormat": "yyyy-MM-dd"
                }
            },
            "y": {
                "beginAtZero": false,
                "ticks": { "maxTicksLimit": 6 }
            }
        },
        "plugins": {
            "legend": { "position": "bottom" },
            "tooltip": { "mode": "index", "intersect": false }
        },
        "elements": { "point": { "radius": 0 } }
    })
}

/// Recursive merge where `overrides` wins on conflicting leaves and objects
/// merge key by key.
pub fn merge_options(defaults: Value, overrides: &Value) -> Value {
    match (defaults, overrides) {
        (Value::Object(mut base), Value::Object(extra)) => {
            for (key, value) in extra {
                let merged = match base.remove(key) {
                    Some(existing) => merge_options(existing, value),
                    None => value.clone(),
                };
                base.insert(key.clone(), merged);
            }
            Value::Object(base)
        }
        _ => overrides.clone(),
    }
}

/// Holds at most one chart per mount point. Mounts are the fixed set of
/// canvas ids the page defines; rendering to anything else is a logged
/// no-op rather than an error.
pub struct ChartRegistry {
    mounts: Vec<&'static str>,
    charts: HashMap<&'static str, ChartSpec>,
}

impl ChartRegistry {
    pub fn with_mounts(mounts: Vec<&'static str>) -> Self {
        Self {
            mounts,
            charts: HashMap::new(),
        }
    }

    /// Binds a chart to `mount_id`, replacing whatever was bound there.
    pub fn render(
        &mut self,
        mount_id: &str,
        kind: ChartKind,
        datasets: Vec<Dataset>,
        overrides: Option<Value>,
        monthly: bool,
    ) -> Option<&ChartSpec> {
        let Some(mount) = self.mounts.iter().copied().find(|m| *m == mount_id) else {
            warn!(mount_id, "no such chart mount point, skipping render");
            return None;
        };

        let options = match overrides {
            Some(overrides) => merge_options(default_options(monthly), &overrides),
            None => default_options(monthly),
        };
        self.charts.insert(mount, ChartSpec { kind, datasets, options });
        self.charts.get(mount)
    }

    pub fn take(&mut self, mount_id: &str) -> Option<ChartSpec> {
        self.charts.remove(mount_id)
    }

    pub fn live_charts(&self) -> usize {
        self.charts.len()
    }
}

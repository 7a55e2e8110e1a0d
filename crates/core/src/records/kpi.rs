//! KPI records.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id::RecordId;
use crate::validate;

use super::{double_option, Record};

/// Maximum KPI title length in characters, after trimming.
pub const TITLE_MAX: usize = 200;

/// A KPI card: a metric name, its current value, and optional trend/meta
/// annotations.
///
/// `trend` and `meta` are omitted from the wire shape when unset, matching
/// the original payloads. `meta` is stored trimmed; setting it to an empty
/// string clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: RecordId,
    pub title: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

/// Body of `POST /kpis`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateKpi {
    pub title: String,
    pub value: f64,
    #[serde(default)]
    pub trend: Option<f64>,
    #[serde(default)]
    pub meta: Option<String>,
}

/// Body of `PATCH /kpis` (id travels alongside). Absent fields are left
/// untouched; `meta: null` or an empty `meta` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KpiPatch {
    pub title: Option<String>,
    pub value: Option<f64>,
    pub trend: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub meta: Option<Option<String>>,
}

/// Normalize a meta annotation: trimmed, empty means unset.
fn normalize_meta(meta: Option<String>) -> Option<String> {
    meta.map(|m| m.trim().to_string()).filter(|m| !m.is_empty())
}

impl Record for Kpi {
    type Draft = CreateKpi;
    type Patch = KpiPatch;

    const RESOURCE: &'static str = "kpis";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn build(id: RecordId, draft: CreateKpi) -> Result<Self> {
        let title = validate::non_empty("title", &draft.title, TITLE_MAX)?;
        let value = validate::non_negative("value", draft.value)?;
        let trend = match draft.trend {
            Some(t) => Some(validate::finite("trend", t)?),
            None => None,
        };
        Ok(Kpi {
            id,
            title,
            value,
            trend,
            meta: normalize_meta(draft.meta),
        })
    }

    fn apply(&mut self, patch: KpiPatch) -> Result<()> {
        let title = match patch.title {
            Some(t) => Some(validate::non_empty("title", &t, TITLE_MAX)?),
            None => None,
        };
        let value = match patch.value {
            Some(v) => Some(validate::non_negative("value", v)?),
            None => None,
        };
        let trend = match patch.trend {
            Some(t) => Some(validate::finite("trend", t)?),
            None => None,
        };

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(value) = value {
            self.value = value;
        }
        if let Some(trend) = trend {
            self.trend = Some(trend);
        }
        if let Some(meta) = patch.meta {
            self.meta = normalize_meta(meta);
        }
        Ok(())
    }
}

use crate::models::{RoundResult, StarAdmission};
use serde::Serialize;

// =========================================================
// Round-result cutoff table (錄取結果)
// =========================================================

/// Rendered placeholder for a missing count or cutoff value.
pub const NO_DATA: &str = "—";

/// Expand a percentile-band code to its full two-character label
/// (頂 → 頂標). Any other code, e.g. a letter grade, passes through
/// unchanged.
pub fn expand_standard(code: &str) -> &str {
    match code {
        "頂" => "頂標",
        "前" => "前標",
        "均" => "均標",
        "後" => "後標",
        "底" => "底標",
        other => other,
    }
}

/// Compact column header for a comparison criterion: the 學測 prefix is
/// dropped (學測數學 → 數學).
pub fn short_item_name(item: &str) -> &str {
    item.strip_prefix("學測").unwrap_or(item)
}

/// One row of the cutoff table, covering a single admission round.
///
/// `count` is `None` only when the round itself is absent; a present
/// round with a missing criterion value still shows its admitted count.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRow<'a> {
    /// Row label (第一輪 / 第二輪)
    pub label: &'static str,
    /// Admitted count; `None` when the round did not occur
    pub count: Option<u32>,
    /// One cell per comparison criterion, in column order
    pub cells: Vec<Option<&'a str>>,
}

impl RoundRow<'_> {
    pub fn count_display(&self) -> String {
        match self.count {
            Some(count) => format!("{}人", count),
            None => NO_DATA.to_string(),
        }
    }

    /// Cell text for column `index`; the no-data sentinel for a missing
    /// value or an out-of-range column.
    pub fn cell_display(&self, index: usize) -> &str {
        self.cells.get(index).and_then(|cell| *cell).unwrap_or(NO_DATA)
    }
}

/// Two-round cutoff table for a merit-recommendation record. The record's
/// comparison order defines the canonical column set.
#[derive(Debug, Clone, Serialize)]
pub struct ResultTable<'a> {
    /// Criterion column names, in comparison order
    pub columns: &'a [String],
    /// Exactly two rows: round 1 then round 2
    pub rounds: Vec<RoundRow<'a>>,
}

impl<'a> ResultTable<'a> {
    pub fn for_admission(admission: &'a StarAdmission) -> Self {
        let columns = admission.comparison_order.as_slice();
        ResultTable {
            columns,
            rounds: vec![
                build_row("第一輪", admission.round1.as_ref(), columns),
                build_row("第二輪", admission.round2.as_ref(), columns),
            ],
        }
    }

    /// Whether any round carries a value for column `index`; drives the
    /// column highlight in the rendered table.
    pub fn column_has_data(&self, index: usize) -> bool {
        self.rounds
            .iter()
            .any(|row| row.cells.get(index).map_or(false, |cell| cell.is_some()))
    }
}

fn build_row<'a>(
    label: &'static str,
    round: Option<&'a RoundResult>,
    columns: &'a [String],
) -> RoundRow<'a> {
    RoundRow {
        label,
        count: round.map(|r| r.count),
        cells: columns
            .iter()
            .map(|item| round.and_then(|r| r.threshold(item)))
            .collect(),
    }
}

//! Ranking of the results table.

use crate::types::TickerStats;

/// Sort ascending by the alpha p-value, most significant alpha first.
///
/// `total_cmp` keeps the comparator a total order: a NaN p-value (degenerate
/// regression with zero standard error) sorts after every finite value
/// instead of corrupting the order of the remaining rows. The sort is
/// stable, so ties keep their insertion order.
pub fn rank_by_alpha_significance(rows: &mut [TickerStats]) {
    rows.sort_by(|a, b| a.p_alpha.total_cmp(&b.p_alpha));
}

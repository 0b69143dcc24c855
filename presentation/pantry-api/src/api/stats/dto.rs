use poem_openapi::Object;

use business::domain::stats::model::{CategoryCount, InventorySummary};

use crate::api::ingredient::dto::CategoryDto;

#[derive(Debug, Clone, Object)]
pub struct CategoryCountResponse {
    pub category: CategoryDto,
    pub count: usize,
}

impl From<CategoryCount> for CategoryCountResponse {
    fn from(count: CategoryCount) -> Self {
        Self {
            category: count.category.into(),
            count: count.count,
        }
    }
}

/// Counts over active ingredients. `expiring_soon` and `expired` never
/// overlap.
#[derive(Debug, Clone, Object)]
pub struct InventorySummaryResponse {
    pub total: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    /// All categories, zero counts included
    pub per_category: Vec<CategoryCountResponse>,
}

impl From<InventorySummary> for InventorySummaryResponse {
    fn from(summary: InventorySummary) -> Self {
        Self {
            total: summary.total,
            expiring_soon: summary.expiring_soon,
            expired: summary.expired,
            per_category: summary.per_category.into_iter().map(|c| c.into()).collect(),
        }
    }
}

use crate::domain::ingredient::value_objects::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Counts over the active ingredients of one user at one instant.
///
/// `expiring_soon` and `expired` are disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub total: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    /// Every category in table order, zero counts included.
    pub per_category: Vec<CategoryCount>,
}

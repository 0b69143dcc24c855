use chrono::{DateTime, Utc};

use super::model::{CategoryCount, InventorySummary};
use crate::domain::ingredient::freshness::{RiskLevel, get_risk_level, is_at_risk};
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::value_objects::Category;

/// Single pass over `active`, which callers obtain from `select_active`.
pub fn summarize(active: &[Ingredient], now: DateTime<Utc>) -> InventorySummary {
    let mut per_category: Vec<CategoryCount> = Category::ALL
        .iter()
        .map(|&category| CategoryCount { category, count: 0 })
        .collect();
    let mut expiring_soon = 0;
    let mut expired = 0;

    for ingredient in active {
        match get_risk_level(ingredient, now) {
            RiskLevel::Expired => expired += 1,
            RiskLevel::ExpiringSoon => expiring_soon += 1,
            RiskLevel::Fresh => {}
        }
        if let Some(slot) = per_category
            .iter_mut()
            .find(|c| c.category == ingredient.category)
        {
            slot.count += 1;
        }
    }

    InventorySummary {
        total: active.len(),
        expiring_soon,
        expired,
        per_category,
    }
}

/// Expiring-soon and expired items together, keeping the input order.
pub fn at_risk(active: Vec<Ingredient>, now: DateTime<Utc>) -> Vec<Ingredient> {
    active
        .into_iter()
        .filter(|i| is_at_risk(i, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::model::NewIngredientProps;
    use crate::domain::ingredient::value_objects::ShelfLifeUnit;
    use crate::domain::shared::value_objects::UserId;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    /// Ingredient whose expiry is `days_left` days after `now()`.
    fn expiring_in(days_left: i64, category: Category) -> Ingredient {
        let mut ingredient = Ingredient::new(
            NewIngredientProps {
                user_id: UserId::new("user-1"),
                name: "item".to_string(),
                category,
                production_date: now() - Duration::days(30),
                shelf_life_value: 1,
                shelf_life_unit: ShelfLifeUnit::Day,
                initial_quantity: 1.0,
                quantity_unit: "pc".to_string(),
            },
            now(),
        )
        .unwrap();
        ingredient.expiry_date = now() + Duration::days(days_left);
        ingredient
    }

    #[test]
    fn should_count_expired_and_expiring_soon_disjointly() {
        let active = vec![
            expiring_in(-5, Category::Meat),
            expiring_in(-1, Category::Dairy),
            expiring_in(0, Category::Dairy),
            expiring_in(3, Category::Fruits),
            expiring_in(4, Category::Fruits),
            expiring_in(30, Category::Others),
        ];

        let summary = summarize(&active, now());

        assert_eq!(summary.total, 6);
        assert_eq!(summary.expired, 2);
        assert_eq!(summary.expiring_soon, 2);
    }

    #[test]
    fn should_report_every_category_in_table_order() {
        let active = vec![
            expiring_in(10, Category::Fish),
            expiring_in(10, Category::Fish),
            expiring_in(10, Category::Vegetables),
        ];

        let summary = summarize(&active, now());

        let categories: Vec<Category> = summary.per_category.iter().map(|c| c.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        let counts: Vec<usize> = summary.per_category.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![1, 0, 0, 0, 2, 0]);
    }

    #[test]
    fn should_summarize_empty_inventory() {
        let summary = summarize(&[], now());

        assert_eq!(summary.total, 0);
        assert_eq!(summary.expired + summary.expiring_soon, 0);
        assert!(summary.per_category.iter().all(|c| c.count == 0));
        assert_eq!(summary.per_category.len(), Category::ALL.len());
    }

    #[test]
    fn should_union_expired_and_expiring_soon_in_at_risk_list() {
        let active = vec![
            expiring_in(-2, Category::Meat),
            expiring_in(12, Category::Dairy),
            expiring_in(3, Category::Dairy),
            expiring_in(0, Category::Fruits),
        ];
        let summary = summarize(&active, now());

        let risky = at_risk(active.clone(), now());

        assert_eq!(risky.len(), summary.expired + summary.expiring_soon);
        let ids: Vec<_> = risky.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![active[0].id, active[2].id, active[3].id]);
    }
}

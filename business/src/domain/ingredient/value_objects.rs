use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Vegetables,
    Fruits,
    Dairy,
    Meat,
    Fish,
    Others,
}

impl Category {
    /// Fixed table order. Classification, per-category statistics and any
    /// listing by category follow it.
    pub const ALL: [Category; 6] = [
        Category::Vegetables,
        Category::Fruits,
        Category::Dairy,
        Category::Meat,
        Category::Fish,
        Category::Others,
    ];

    /// Maps a loosely-typed label (e.g. from label extraction) onto the
    /// enumeration. Unrecognized labels fall back to `Others`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "vegetables" | "vegetable" | "veggies" | "蔬菜" => Category::Vegetables,
            "fruits" | "fruit" | "水果" => Category::Fruits,
            "dairy" | "乳制品" | "奶制品" => Category::Dairy,
            "meat" | "肉类" | "肉" => Category::Meat,
            "fish" | "seafood" | "鱼类" | "海鲜" => Category::Fish,
            _ => Category::Others,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Vegetables => write!(f, "vegetables"),
            Category::Fruits => write!(f, "fruits"),
            Category::Dairy => write!(f, "dairy"),
            Category::Meat => write!(f, "meat"),
            Category::Fish => write!(f, "fish"),
            Category::Others => write!(f, "others"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegetables" => Ok(Category::Vegetables),
            "fruits" => Ok(Category::Fruits),
            "dairy" => Ok(Category::Dairy),
            "meat" => Ok(Category::Meat),
            "fish" => Ok(Category::Fish),
            "others" => Ok(Category::Others),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelfLifeUnit {
    Day,
    Month,
    Year,
}

impl std::fmt::Display for ShelfLifeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShelfLifeUnit::Day => write!(f, "day"),
            ShelfLifeUnit::Month => write!(f, "month"),
            ShelfLifeUnit::Year => write!(f, "year"),
        }
    }
}

impl std::str::FromStr for ShelfLifeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" | "days" => Ok(ShelfLifeUnit::Day),
            "month" | "months" => Ok(ShelfLifeUnit::Month),
            "year" | "years" => Ok(ShelfLifeUnit::Year),
            _ => Err(format!("Invalid shelf life unit: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientStatus {
    Active,
    Consumed,
    Discarded,
}

impl std::fmt::Display for IngredientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngredientStatus::Active => write!(f, "active"),
            IngredientStatus::Consumed => write!(f, "consumed"),
            IngredientStatus::Discarded => write!(f, "discarded"),
        }
    }
}

impl std::str::FromStr for IngredientStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(IngredientStatus::Active),
            "consumed" => Ok(IngredientStatus::Consumed),
            "discarded" => Ok(IngredientStatus::Discarded),
            _ => Err(format!("Invalid ingredient status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_every_category_through_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn should_map_loose_labels_onto_categories() {
        assert_eq!(Category::from_label(" Dairy "), Category::Dairy);
        assert_eq!(Category::from_label("海鲜"), Category::Fish);
        assert_eq!(Category::from_label("Vegetable"), Category::Vegetables);
    }

    #[test]
    fn should_fall_back_to_others_when_label_unknown() {
        assert_eq!(Category::from_label("snacks"), Category::Others);
        assert_eq!(Category::from_label(""), Category::Others);
    }

    #[test]
    fn should_accept_plural_shelf_life_units() {
        assert_eq!("months".parse::<ShelfLifeUnit>(), Ok(ShelfLifeUnit::Month));
        assert!("week".parse::<ShelfLifeUnit>().is_err());
    }
}

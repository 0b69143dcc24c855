use super::value_objects::Category;

/// Keyword table, scanned top to bottom.
///
/// Order is the tie-break when a name matches several categories: "牛奶"
/// contains both the dairy keyword "奶" and the meat keyword "牛", and resolves
/// to dairy because dairy comes first. Keywords are lower-case.
const KEYWORDS: [(Category, &[&str]); 5] = [
    (
        Category::Vegetables,
        &[
            "菜", "番茄", "西红柿", "土豆", "萝卜", "黄瓜", "南瓜", "冬瓜", "洋葱", "茄子",
            "蒜", "姜", "葱", "椒", "菇", "笋", "豆角", "西兰花", "lettuce", "tomato",
            "potato", "carrot", "onion", "cabbage", "spinach", "cucumber", "eggplant",
            "broccoli", "mushroom", "garlic", "pepper", "celery",
        ],
    ),
    (
        Category::Fruits,
        &[
            "果", "香蕉", "橙", "橘", "桔", "梨", "葡萄", "莓", "桃", "西瓜", "柠檬", "芒",
            "apple", "banana", "orange", "grape", "berry", "pear", "peach", "lemon", "mango",
            "melon", "kiwi", "cherry",
        ],
    ),
    (
        Category::Dairy,
        &[
            "奶", "乳", "酪", "芝士", "黄油", "milk", "cheese", "yogurt", "yoghurt",
            "butter", "cream",
        ],
    ),
    (
        Category::Meat,
        &[
            "肉", "牛", "猪", "羊", "鸡", "鸭", "排骨", "香肠", "火腿", "培根", "beef",
            "pork", "chicken", "lamb", "bacon", "sausage", "ham", "steak", "turkey",
        ],
    ),
    (
        Category::Fish,
        &[
            "鱼", "虾", "蟹", "贝", "鱿", "海鲜", "fish", "salmon", "tuna", "shrimp", "prawn",
            "crab", "cod", "squid",
        ],
    ),
];

/// Suggests a category for a free-text item name.
///
/// Returns the first category in table order with a keyword contained in the
/// name, or `Others`.
pub fn classify(name: &str) -> Category {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return Category::Others;
    }

    KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Others)
}

//! Static ingredient guide: what helps the skin and what to be careful with.

use once_cell::sync::Lazy;
use shared::{Ingredient, IngredientCategory, IngredientListResponse};

fn ingredient(
    id: u64,
    name: &str,
    description: &str,
    benefits: &[&str],
    sources: &[&str],
    category: IngredientCategory,
    is_beneficial: bool,
) -> Ingredient {
    Ingredient {
        id,
        name: name.to_string(),
        description: description.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        sources: sources.iter().map(|s| s.to_string()).collect(),
        category,
        is_beneficial,
    }
}

static CATALOGUE: Lazy<Vec<Ingredient>> = Lazy::new(|| {
    use IngredientCategory::*;

    vec![
        ingredient(
            1,
            "Vitamin A Alternatives",
            "Help with skin repair and anti-aging effects",
            &["Promotes skin repair", "Reduces signs of aging", "Improves skin texture"],
            &["Papaya", "Tomato", "Sweet Potato", "Cheese", "Butter", "Apricot"],
            Vitamin,
            true,
        ),
        ingredient(
            2,
            "Vitamin C Sources",
            "Brightens skin and boosts collagen production",
            &["Brightens complexion", "Boosts collagen production", "Protects against environmental damage"],
            &["Lemon", "Vitamin C serum", "Oranges", "Strawberries"],
            Vitamin,
            true,
        ),
        ingredient(
            3,
            "Hydration & Detox",
            "Flushes out toxins and keeps skin healthy",
            &["Removes toxins from body", "Improves skin hydration", "Enhances cellular function"],
            &["Lemon water", "Amla juice", "Saafi (herbal blood purifier)"],
            Hydration,
            true,
        ),
        ingredient(
            4,
            "Skin-friendly Nutrients",
            "Support overall skin health and appearance",
            &["Reduces inflammation", "Improves gut health", "Supports skin repair"],
            &["Omega-3 fatty acids", "Probiotics & Fiber", "Multivitamins"],
            Nutrient,
            true,
        ),
        ingredient(
            5,
            "Natural Skin Treatments",
            "Natural remedies for skin brightening and cleansing",
            &["Deep cleansing", "Brightening effect", "Antioxidant protection"],
            &["Besan (gram flour) + honey", "Green tea + Apple Cider Vinegar", "Steam treatment + Exfoliation"],
            Treatment,
            true,
        ),
        ingredient(
            6,
            "Harsh Cleansers & Overwashing",
            "Strips natural oils, causing dryness",
            &[],
            &["Many commercial face washes", "Alcohol-based products"],
            Treatment,
            false,
        ),
        ingredient(
            7,
            "Pore-Clogging Ingredients",
            "Can lead to breakouts and congested skin",
            &[],
            &["Comedogenic moisturizers", "Heavy oils", "Some makeup products"],
            Treatment,
            false,
        ),
        ingredient(
            8,
            "Excessive Sugar",
            "Causes breakouts and inflammation",
            &[],
            &["Processed foods", "Sugary drinks", "Desserts"],
            Nutrient,
            false,
        ),
    ]
});

/// Every ingredient in the guide, beneficial ones first
pub fn all_ingredients() -> &'static [Ingredient] {
    &CATALOGUE
}

fn matches(ingredient: &Ingredient, needle: &str) -> bool {
    ingredient.name.to_lowercase().contains(needle)
        || ingredient.description.to_lowercase().contains(needle)
        || ingredient
            .sources
            .iter()
            .any(|source| source.to_lowercase().contains(needle))
}

/// Case-insensitive search over name, description and sources.
/// An empty query returns the whole guide.
pub fn search_ingredients(query: &str) -> IngredientListResponse {
    let needle = query.trim().to_lowercase();

    let (beneficial, caution): (Vec<Ingredient>, Vec<Ingredient>) = CATALOGUE
        .iter()
        .filter(|ingredient| needle.is_empty() || matches(ingredient, &needle))
        .cloned()
        .partition(|ingredient| ingredient.is_beneficial);

    IngredientListResponse { beneficial, caution }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        let all = all_ingredients();
        assert_eq!(all.len(), 8);
        assert_eq!(all.iter().filter(|i| i.is_beneficial).count(), 5);
        assert!(all.iter().filter(|i| !i.is_beneficial).all(|i| i.benefits.is_empty()));
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let result = search_ingredients("  ");
        assert_eq!(result.beneficial.len(), 5);
        assert_eq!(result.caution.len(), 3);
    }

    #[test]
    fn test_search_matches_sources_case_insensitively() {
        let result = search_ingredients("LEMON");
        let ids: Vec<u64> = result.beneficial.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(result.caution.is_empty());
    }

    #[test]
    fn test_search_matches_description() {
        let result = search_ingredients("breakouts");
        let ids: Vec<u64> = result.caution.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn test_search_without_match() {
        let result = search_ingredients("retinoid");
        assert!(result.beneficial.is_empty());
        assert!(result.caution.is_empty());
    }
}

//! Display-label lookup tables shared by all card builders.
//!
//! The portal pages each carried their own copy of these tables; they are
//! consolidated here behind one mapping-with-fallback helper so every
//! surface (TUI cards, CLI output, web responses) renders labels the same
//! way.

/// Taste tag slug → display label.
pub const TASTE_LABELS: &[(&str, &str)] = &[
    ("cyber", "Cyberpunk"),
    ("street", "Street"),
    ("wa-modern", "Wa-Modern"),
    ("ryousangata", "量産型"),
    ("jirai", "地雷系"),
    ("fantasy", "Fantasy"),
    ("casual", "Casual"),
    ("gothic", "Gothic"),
    ("pop", "Pop"),
];

/// Item type slug → display label.
pub const TYPE_LABELS: &[(&str, &str)] = &[
    ("avatar", "Avatar"),
    ("costume", "Costume"),
    ("accessory", "Accessory"),
    ("texture", "Texture"),
    ("tool", "Tool"),
    ("pose", "Pose"),
];

/// Audience category slug → display label.
pub const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("mens", "Mens"),
    ("womens", "Womens"),
    ("kids", "Kids"),
];

/// Looks up `key` in a slug→label mapping, falling back to the raw key
/// when unrecognized.
#[must_use]
pub fn label_for<'a>(mapping: &[(&str, &'a str)], key: &'a str) -> &'a str {
    mapping
        .iter()
        .find(|(slug, _)| *slug == key)
        .map_or(key, |(_, label)| label)
}

/// Display label for a taste tag slug.
#[must_use]
pub fn taste_label(slug: &str) -> &str {
    label_for(TASTE_LABELS, slug)
}

/// Display label for an item type slug.
#[must_use]
pub fn type_label(slug: &str) -> &str {
    label_for(TYPE_LABELS, slug)
}

/// Display label for an audience category slug.
#[must_use]
pub fn category_label(slug: &str) -> &str {
    label_for(CATEGORY_LABELS, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slugs() {
        assert_eq!(taste_label("cyber"), "Cyberpunk");
        assert_eq!(taste_label("wa-modern"), "Wa-Modern");
        assert_eq!(type_label("avatar"), "Avatar");
        assert_eq!(category_label("womens"), "Womens");
    }

    #[test]
    fn test_unknown_slug_falls_back_to_raw_value() {
        assert_eq!(taste_label("vaporwave"), "vaporwave");
        assert_eq!(type_label("prefab"), "prefab");
    }
}

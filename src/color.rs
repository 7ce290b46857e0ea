use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

/// Fallback for categories the map was not built with.
pub const DEFAULT_COLOR: &str = "#808080";

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// formatted as `#rrggbb` for the browser.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: booster category → hex colour
// ---------------------------------------------------------------------------

/// Maps each booster version category to a distinct colour, so a category
/// keeps its colour whatever subset of rows is plotted.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, String>,
}

impl ColorMap {
    /// Build a colour map from the categories, in the given order.
    pub fn new<'a>(categories: impl IntoIterator<Item = &'a String>) -> Self {
        let categories: Vec<&String> = categories.into_iter().collect();
        let palette = generate_palette(categories.len());
        let mapping = categories
            .into_iter()
            .cloned()
            .zip(palette)
            .collect();

        ColorMap { mapping }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> &str {
        self.mapping
            .get(category)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct_hex() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for c in &palette {
            assert!(c.starts_with('#') && c.len() == 7, "bad colour {c}");
        }
        let mut unique = palette.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn unknown_category_is_gray() {
        let cats = vec!["v1.0".to_string(), "FT".to_string()];
        let map = ColorMap::new(&cats);
        assert_ne!(map.color_for("FT"), DEFAULT_COLOR);
        assert_eq!(map.color_for("B5"), DEFAULT_COLOR);
    }
}

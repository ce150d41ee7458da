//! Card themes: display names and glyph tables.
//!
//! Themes are display configuration only. The engine deals in
//! `SymbolIndex` values and never looks a glyph up itself; renderers and
//! result screens call `Theme::glyph` when they need something to draw.

use serde::{Deserialize, Serialize};

use super::card::SymbolIndex;

/// Number of glyphs every theme provides. Bounds `num_pairs`.
pub const GLYPHS_PER_THEME: usize = 10;

/// A selectable card face set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    #[serde(rename = "olympics")]
    Winter,
    Fantasy,
    Vehicles,
    #[serde(rename = "thanksgiving")]
    Holiday,
    Sports,
    Easter,
}

impl Theme {
    /// Every theme, in selector order.
    pub const ALL: [Theme; 6] = [
        Theme::Winter,
        Theme::Fantasy,
        Theme::Vehicles,
        Theme::Holiday,
        Theme::Sports,
        Theme::Easter,
    ];

    /// Stable key used in analytics records and serialized configs.
    ///
    /// Winter and Holiday keep their historical keys so existing analytics
    /// rows still aggregate under the same theme.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Theme::Winter => "olympics",
            Theme::Fantasy => "fantasy",
            Theme::Vehicles => "vehicles",
            Theme::Holiday => "thanksgiving",
            Theme::Sports => "sports",
            Theme::Easter => "easter",
        }
    }

    /// Human-readable name for the theme selector.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Theme::Winter => "Winter",
            Theme::Fantasy => "Fantasy",
            Theme::Vehicles => "Vehicles",
            Theme::Holiday => "Holiday",
            Theme::Sports => "Sports",
            Theme::Easter => "Easter",
        }
    }

    /// Selector icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Theme::Winter => "❄️",
            Theme::Fantasy => "🏰",
            Theme::Vehicles => "🚗",
            Theme::Holiday => "🦃",
            Theme::Sports => "⚽",
            Theme::Easter => "🐰",
        }
    }

    /// The full glyph table.
    #[must_use]
    pub const fn glyphs(self) -> &'static [&'static str; GLYPHS_PER_THEME] {
        match self {
            Theme::Winter => &["⛷️", "🏂", "⛸️", "🎿", "🛷", "🏒", "🥌", "❄️", "🏔️", "🥇"],
            Theme::Fantasy => &["🦄", "👸", "🏰", "🐉", "🧚", "🧙‍♂️", "🗡️", "👑", "🔮", "🧝‍♀️"],
            Theme::Vehicles => &["🚗", "🚕", "🚙", "🚌", "🚎", "🏎️", "🚓", "🚑", "🚒", "🚛"],
            Theme::Holiday => &["🦃", "🥧", "🌽", "🥔", "🥖", "🍗", "🍽️", "🍁", "🎃", "👨‍👩‍👧‍👦"],
            Theme::Sports => &["⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏉", "🎳", "🏓", "⛳"],
            Theme::Easter => &["🐰", "🥚", "🐣", "🌷", "🦋", "🐑", "🌸", "🧺", "🐥", "🌈"],
        }
    }

    /// Glyph for a symbol, or `None` if the index is past the table.
    #[must_use]
    pub fn glyph(self, symbol: SymbolIndex) -> Option<&'static str> {
        self.glyphs().get(symbol.index()).copied()
    }

    /// Look a theme up by its analytics key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_glyph_tables_are_distinct() {
        for theme in Theme::ALL {
            let unique: HashSet<_> = theme.glyphs().iter().collect();
            assert_eq!(unique.len(), GLYPHS_PER_THEME, "{} has duplicate glyphs", theme);
        }
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(Theme::Vehicles.glyph(SymbolIndex::new(0)), Some("🚗"));
        assert_eq!(Theme::Easter.glyph(SymbolIndex::new(9)), Some("🌈"));
        assert_eq!(Theme::Easter.glyph(SymbolIndex::new(10)), None);
    }

    #[test]
    fn test_key_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_key(theme.key()), Some(theme));
        }
        assert_eq!(Theme::from_key("winter"), None);
        assert_eq!(Theme::from_key("olympics"), Some(Theme::Winter));
    }

    #[test]
    fn test_serde_matches_key() {
        for theme in Theme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.key()));
        }
        let holiday: Theme = serde_json::from_str("\"thanksgiving\"").unwrap();
        assert_eq!(holiday, Theme::Holiday);
    }
}

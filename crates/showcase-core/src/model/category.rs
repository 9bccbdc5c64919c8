use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Gallery tabs. `All` is the wildcard; the rest are field tags carried by
/// project records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    All,
    Web,
    Ios,
    Android,
    Ml,
}

impl Category {
    /// Tab order as shown in the category bar.
    pub const TABS: [Self; 5] = [Self::All, Self::Web, Self::Ios, Self::Android, Self::Ml];

    /// Upper-case tag, identical to the normalized form of a record's field tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Web => "WEB",
            Self::Ios => "IOS",
            Self::Android => "ANDROID",
            Self::Ml => "ML",
        }
    }

    /// Position of this category in [`Self::TABS`].
    #[must_use]
    pub const fn tab_index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Web => 1,
            Self::Ios => 2,
            Self::Android => 3,
            Self::Ml => 4,
        }
    }

    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::All)
    }
}

/// Error returned when parsing a category from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    pub got: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid category: '{}' (expected one of all, web, ios, android, ml)",
            self.got
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "web" => Ok(Self::Web),
            "ios" | "mobile-ios" => Ok(Self::Ios),
            "android" | "mobile-android" => Ok(Self::Android),
            "ml" | "machine-learning" => Ok(Self::Ml),
            _ => Err(ParseCategoryError { got: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Category;
    use std::str::FromStr;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::from_str("WEB").unwrap(), Category::Web);
        assert_eq!(Category::from_str("Web").unwrap(), Category::Web);
        assert_eq!(Category::from_str(" ml ").unwrap(), Category::Ml);
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(Category::from_str("mobile-ios").unwrap(), Category::Ios);
        assert_eq!(
            Category::from_str("mobile-android").unwrap(),
            Category::Android
        );
        assert_eq!(
            Category::from_str("machine-learning").unwrap(),
            Category::Ml
        );
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = Category::from_str("desktop").unwrap_err();
        assert_eq!(err.got, "desktop");
        assert!(err.to_string().contains("desktop"));
    }

    #[test]
    fn tab_index_matches_tab_order() {
        for (idx, tab) in Category::TABS.into_iter().enumerate() {
            assert_eq!(tab.tab_index(), idx);
        }
    }

    #[test]
    fn display_parse_roundtrips() {
        for tab in Category::TABS {
            assert_eq!(Category::from_str(&tab.to_string()).unwrap(), tab);
        }
    }

    #[test]
    fn json_uses_uppercase_tags() {
        assert_eq!(serde_json::to_string(&Category::Ios).unwrap(), "\"IOS\"");
        assert_eq!(
            serde_json::from_str::<Category>("\"ANDROID\"").unwrap(),
            Category::Android
        );
    }

    #[test]
    fn wildcard_is_first_tab_and_default() {
        assert_eq!(Category::TABS[0], Category::All);
        assert_eq!(Category::default(), Category::All);
        assert!(Category::All.is_wildcard());
        assert!(!Category::Web.is_wildcard());
    }
}

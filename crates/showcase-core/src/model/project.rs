use super::category::Category;
use serde::{Deserialize, Serialize};

/// Field attribute as written in a project manifest: either one tag or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Single(String),
    Set(Vec<String>),
}

impl Default for RawField {
    fn default() -> Self {
        Self::Set(Vec::new())
    }
}

/// Normalized field tags: upper-cased, de-duplicated, first-seen order.
///
/// Tags are not trimmed. A padded tag such as `" web "` is kept verbatim
/// (upper-cased) and matches no category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldTags(Vec<String>);

impl FieldTags {
    #[must_use]
    pub fn normalize(raw: &RawField) -> Self {
        let candidates: &[String] = match raw {
            RawField::Single(tag) => std::slice::from_ref(tag),
            RawField::Set(tags) => tags,
        };

        let mut tags: Vec<String> = Vec::with_capacity(candidates.len());
        for tag in candidates {
            let tag = tag.to_uppercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Self(tags)
    }

    /// Returns true if any tag equals the category's tag.
    ///
    /// The wildcard is not a tag, so `Category::All` never matches here;
    /// callers handle the wildcard before asking.
    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.0.iter().any(|tag| tag == category.as_str())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<RawField> for FieldTags {
    fn from(raw: RawField) -> Self {
        Self::normalize(&raw)
    }
}

/// One project card. Built once at ingestion and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    title: String,
    thumbnail_url: String,
    tags: Vec<String>,
    field: FieldTags,
    generation: i64,
    url: String,
}

impl ProjectRecord {
    pub fn new(
        title: impl Into<String>,
        thumbnail_url: impl Into<String>,
        tags: Vec<String>,
        field: impl Into<FieldTags>,
        generation: i64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            thumbnail_url: thumbnail_url.into(),
            tags,
            field: field.into(),
            generation,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub const fn field(&self) -> &FieldTags {
        &self.field
    }

    #[must_use]
    pub const fn generation(&self) -> i64 {
        self.generation
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_set_normalize_to_same_tags() {
        let single = FieldTags::normalize(&RawField::Single("web".to_string()));
        let set = FieldTags::normalize(&RawField::Set(vec![
            "Web".to_string(),
            "WEB".to_string(),
        ]));
        assert_eq!(single, set);
        assert_eq!(single.as_slice(), ["WEB"]);
    }

    #[test]
    fn normalize_drops_blank_tags_and_keeps_order() {
        let tags = FieldTags::normalize(&RawField::Set(vec![
            "ios".to_string(),
            String::new(),
            "android".to_string(),
            "IOS".to_string(),
        ]));
        assert_eq!(tags.as_slice(), ["IOS", "ANDROID"]);
    }

    #[test]
    fn padded_tags_are_kept_and_never_match() {
        let tags = FieldTags::from(RawField::Single(" web ".to_string()));
        assert_eq!(tags.as_slice(), [" WEB "]);
        assert!(!tags.contains(Category::Web));

        let record = ProjectRecord::new("padded", "", vec![], RawField::Single(" web ".into()), 1, "p");
        let records = [record];
        assert!(crate::listing::filter_by_category(&records, Category::Web).is_empty());
        assert_eq!(crate::listing::filter_by_category(&records, Category::All).len(), 1);
    }

    #[test]
    fn contains_matches_any_tag() {
        let tags = FieldTags::from(RawField::Set(vec!["ios".to_string(), "ml".to_string()]));
        assert!(tags.contains(Category::Ios));
        assert!(tags.contains(Category::Ml));
        assert!(!tags.contains(Category::Web));
        assert!(!tags.contains(Category::All));
    }

    #[test]
    fn unknown_tags_are_kept_but_never_match() {
        let tags = FieldTags::from(RawField::Single("desktop".to_string()));
        assert_eq!(tags.as_slice(), ["DESKTOP"]);
        assert!(Category::TABS.iter().all(|c| !tags.contains(*c)));
    }

    #[test]
    fn raw_field_deserializes_either_shape() {
        let single: RawField = serde_json::from_str("\"WEB\"").unwrap();
        assert_eq!(single, RawField::Single("WEB".to_string()));

        let set: RawField = serde_json::from_str("[\"IOS\", \"ANDROID\"]").unwrap();
        assert_eq!(
            set,
            RawField::Set(vec!["IOS".to_string(), "ANDROID".to_string()])
        );
    }

    #[test]
    fn record_serializes_normalized_field() {
        let record = ProjectRecord::new(
            "Club site",
            "/img/site.png",
            vec!["react".to_string()],
            RawField::Single("web".to_string()),
            3,
            "web/club-site",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["field"], serde_json::json!(["WEB"]));
        assert_eq!(json["generation"], 3);
        assert_eq!(json["url"], "web/club-site");
    }
}

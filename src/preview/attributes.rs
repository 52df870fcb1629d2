use std::collections::{BTreeMap, HashMap};

pub const TITLE: &str = "title";
pub const COVER_IMAGE: &str = "cover-image";
pub const SEASONS: &str = "seasons";
pub const GENRES: &str = "genres";
pub const LAST_UPDATED: &str = "last-updated";
pub const DATA_ID: &str = "data-id";

/// Anything a card can read its string attributes from.
///
/// Lookups happen on every render so the card always sees the live values.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl AttributeSource for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// Snapshot of the six card attributes taken at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewAttributes {
    pub title: Option<String>,
    pub cover_image: Option<String>,
    pub seasons: Option<String>,
    pub genres: Option<String>,
    pub last_updated: Option<String>,
    pub id: Option<String>,
}

impl PreviewAttributes {
    pub fn read<S: AttributeSource + ?Sized>(source: &S) -> Self {
        Self {
            title: source.attribute(TITLE),
            cover_image: source.attribute(COVER_IMAGE),
            seasons: source.attribute(SEASONS),
            genres: source.attribute(GENRES),
            last_updated: source.attribute(LAST_UPDATED),
            id: source.attribute(DATA_ID),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_all_attributes() {
        let source: &[(&str, &str)] = &[
            ("title", "Serial"),
            ("cover-image", "https://example.com/serial.jpg"),
            ("seasons", "4"),
            ("genres", "True Crime"),
            ("last-updated", "2022-11-03"),
            ("data-id", "10716"),
        ];
        let attrs = PreviewAttributes::read(source);

        assert_eq!(attrs.title.as_deref(), Some("Serial"));
        assert_eq!(attrs.cover_image.as_deref(), Some("https://example.com/serial.jpg"));
        assert_eq!(attrs.seasons.as_deref(), Some("4"));
        assert_eq!(attrs.genres.as_deref(), Some("True Crime"));
        assert_eq!(attrs.last_updated.as_deref(), Some("2022-11-03"));
        assert_eq!(attrs.id.as_deref(), Some("10716"));
    }

    #[test]
    fn test_absent_attributes_are_none() {
        let attrs = PreviewAttributes::read(&HashMap::<String, String>::new());
        assert_eq!(attrs, PreviewAttributes::default());
    }

    #[test]
    fn test_id_is_not_parsed() {
        let mut source = BTreeMap::new();
        source.insert(DATA_ID.to_string(), " 0042 ".to_string());
        assert_eq!(PreviewAttributes::read(&source).id.as_deref(), Some(" 0042 "));
    }
}

use super::attributes::PreviewAttributes;
use super::format::{genre_tags, season_label, updated_label};

pub const DEFAULT_ALT: &str = "Podcast cover";

/// Everything a render pass writes into the card's slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewContent {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub meta: String,
    pub tags: Vec<String>,
    pub updated: String,
}

impl PreviewContent {
    pub fn from_attributes(attrs: &PreviewAttributes) -> Self {
        let image_alt = attrs
            .title
            .as_deref()
            .map(|title| format!("{} cover", title))
            .unwrap_or_else(|| DEFAULT_ALT.to_string());

        Self {
            image_src: attrs.cover_image.clone().unwrap_or_default(),
            image_alt,
            title: attrs.title.clone().unwrap_or_default(),
            meta: season_label(attrs.seasons.as_deref()),
            tags: genre_tags(attrs.genres.as_deref()),
            updated: updated_label(attrs.last_updated.as_deref()),
        }
    }

    /// Visible text of the card in document order, the same string the
    /// shadow root's text nodes concatenate to (style text excluded).
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.title);
        text.push_str(&self.meta);
        for tag in &self.tags {
            text.push_str(tag);
        }
        text.push_str(&self.updated);
        text
    }
}

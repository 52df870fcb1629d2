use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::preview::attributes::{
    AttributeSource, COVER_IMAGE, DATA_ID, GENRES, LAST_UPDATED, SEASONS, TITLE,
};

/// Typed view of what a host knows about a podcast before it becomes a card.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PodcastSummary {
    pub id: String,
    pub title: String,
    pub image: String,
    pub seasons: u32,
    pub genres: Vec<String>,
    /// ISO-8601 date of the last episode
    pub updated: String,
}

impl PodcastSummary {
    pub fn genres_attribute(&self) -> String {
        self.genres.join(",")
    }
}

// Same strings the element sees once the card is in the page.
impl AttributeSource for PodcastSummary {
    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            TITLE => Some(self.title.clone()),
            COVER_IMAGE => Some(self.image.clone()),
            SEASONS => Some(self.seasons.to_string()),
            GENRES => Some(self.genres_attribute()),
            LAST_UPDATED => Some(self.updated.clone()),
            DATA_ID => Some(self.id.clone()),
            _ => None,
        }
    }
}

/// Emits a `<podcast-preview>` element for `podcast`. The element renders
/// itself once the client bundle has registered the tag.
#[component]
pub fn PodcastPreviewCard(podcast: PodcastSummary) -> impl IntoView {
    let genres = podcast.genres_attribute();
    let seasons = podcast.seasons.to_string();

    view! {
        <podcast-preview
            title=podcast.title
            cover-image=podcast.image
            seasons=seasons
            genres=genres
            last-updated=podcast.updated
            data-id=podcast.id
        ></podcast-preview>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{PreviewAttributes, PreviewContent};

    fn summary() -> PodcastSummary {
        PodcastSummary {
            id: "10716".to_string(),
            title: "Something Was Wrong".to_string(),
            image: "https://example.com/swr.jpg".to_string(),
            seasons: 1,
            genres: vec!["True Crime".to_string(), "Investigative Journalism".to_string()],
            updated: "2022-11-03T07:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_summary_as_attributes() {
        let attrs = PreviewAttributes::read(&summary());
        assert_eq!(attrs.seasons.as_deref(), Some("1"));
        assert_eq!(attrs.genres.as_deref(), Some("True Crime,Investigative Journalism"));
        assert_eq!(attrs.id.as_deref(), Some("10716"));
        assert_eq!(summary().attribute("unknown"), None);
    }

    #[test]
    fn test_summary_renders_through_card() {
        let content = PreviewContent::from_attributes(&PreviewAttributes::read(&summary()));
        assert_eq!(content.meta, "1 season");
        assert_eq!(content.tags, vec!["True Crime", "Investigative Journalism"]);
        assert_eq!(content.updated, "Updated: November 3, 2022");
        assert_eq!(content.image_alt, "Something Was Wrong cover");
    }

    #[test]
    fn test_no_genres_means_no_tags() {
        let podcast = PodcastSummary {
            genres: Vec::new(),
            ..summary()
        };
        let content = PreviewContent::from_attributes(&PreviewAttributes::read(&podcast));
        assert!(content.tags.is_empty());
    }
}

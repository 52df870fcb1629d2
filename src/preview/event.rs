use serde::{Deserialize, Serialize};

use super::attributes::{AttributeSource, DATA_ID};

/// Event type dispatched by a card when it is clicked.
pub const PODCAST_CLICKED: &str = "podcast-clicked";

/// Detail payload of a `podcast-clicked` event.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PodcastClicked {
    pub id: Option<String>,
}

impl PodcastClicked {
    /// Reads `data-id` at click time, not at render time.
    pub fn from_source<S: AttributeSource + ?Sized>(source: &S) -> Self {
        Self {
            id: source.attribute(DATA_ID),
        }
    }
}

/// How the notification travels once dispatched on the host element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchOptions {
    pub bubbles: bool,
    pub composed: bool,
}

pub const CLICK_DISPATCH: DispatchOptions = DispatchOptions {
    bubbles: true,
    composed: true,
};

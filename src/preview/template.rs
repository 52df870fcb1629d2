//! Markup and style sheet for the card's shadow root.
//!
//! The style sheet only applies inside the shadow root, and document styles
//! don't reach in. `:host` rules style the custom element itself.

use once_cell::sync::Lazy;

pub const PREVIEW_STYLES: &str = r#"
:host {
  display: block;
  cursor: pointer;
  transition: transform 0.2s;
}

:host(:hover) {
  transform: scale(1.02);
}

.card {
  background: white;
  padding: 1rem;
  border-radius: 8px;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
  display: flex;
  flex-direction: column;
  height: 100%;
  box-sizing: border-box;
}

.card-image {
  width: 100%;
  border-radius: 6px;
  object-fit: cover;
  aspect-ratio: 1 / 1;
}

.card-title {
  margin: 0.75rem 0 0.25rem;
  font-size: 1.1rem;
  color: #111;
}

.card-meta, .updated-text {
  font-size: 0.8rem;
  color: #555;
}

.tags {
  margin: 0.5rem 0;
  line-height: 1.5;
}

.tag {
  background: #eee;
  padding: 0.3rem 0.6rem;
  margin-right: 0.5rem;
  margin-bottom: 0.5rem;
  border-radius: 4px;
  display: inline-block;
  font-size: 0.8rem;
}

.card-footer {
  margin-top: auto;
  padding-top: 0.5rem;
}
"#;

pub const PREVIEW_MARKUP: &str = r#"<div class="card">
  <img class="card-image" src="" alt="Podcast cover" />
  <h3 class="card-title"></h3>
  <p class="card-meta"></p>
  <div class="tags"></div>
  <div class="card-footer">
    <p class="updated-text"></p>
  </div>
</div>"#;

/// Class given to each genre chip created inside `.tags`.
pub const TAG_CLASS: &str = "tag";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Image,
    Title,
    Meta,
    Tags,
    Updated,
}

impl Slot {
    pub const ALL: [Slot; 5] = [Slot::Image, Slot::Title, Slot::Meta, Slot::Tags, Slot::Updated];

    pub fn selector(&self) -> &'static str {
        match self {
            Slot::Image => ".card-image",
            Slot::Title => ".card-title",
            Slot::Meta => ".card-meta",
            Slot::Tags => ".tags",
            Slot::Updated => ".updated-text",
        }
    }
}

/// Inner HTML of the shared `<template>`: style sheet first, then the card.
pub static TEMPLATE_HTML: Lazy<String> =
    Lazy::new(|| format!("<style>{}</style>\n{}", PREVIEW_STYLES, PREVIEW_MARKUP));

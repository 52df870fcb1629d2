//! The `<podcast-preview>` card: attribute parsing, formatting, the shadow
//! root template and the attach/click/detach controller.

pub mod attributes;
pub mod content;
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod event;
pub mod format;
pub mod registry;
pub mod template;

pub use attributes::{AttributeSource, PreviewAttributes};
pub use content::PreviewContent;
pub use controller::{CardHost, PreviewController};
#[cfg(feature = "hydrate")]
pub use dom::{define_podcast_preview, DomHost, PodcastPreviewElement};
pub use error::PreviewError;
pub use event::{PodcastClicked, PODCAST_CLICKED};
pub use registry::TAG_NAME;

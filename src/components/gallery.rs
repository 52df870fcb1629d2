use cfg_if::cfg_if;
use leptos::prelude::*;

use crate::components::preview_card::{PodcastPreviewCard, PodcastSummary};

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::{closure::Closure, JsCast};
        use crate::preview::{PodcastClicked, PreviewError, PODCAST_CLICKED};

        fn clicked_id(event: &web_sys::Event) -> Result<Option<String>, PreviewError> {
            let custom = event
                .dyn_ref::<web_sys::CustomEvent>()
                .ok_or_else(|| PreviewError::Dom(format!("{} is not a CustomEvent", PODCAST_CLICKED)))?;
            let clicked: PodcastClicked = serde_wasm_bindgen::from_value(custom.detail())
                .map_err(|e| PreviewError::Dom(e.to_string()))?;
            Ok(clicked.id)
        }
    }
}

fn sample(id: &str, title: &str, seasons: u32, genres: &[&str], updated: &str) -> PodcastSummary {
    PodcastSummary {
        id: id.to_string(),
        title: title.to_string(),
        image: format!("https://picsum.photos/seed/{}/400", id),
        seasons,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        updated: updated.to_string(),
    }
}

/// Static demo data for the home page.
pub fn sample_podcasts() -> Vec<PodcastSummary> {
    vec![
        sample("10716", "Something Was Wrong", 1, &["True Crime", "Investigative Journalism"], "2022-11-03T07:00:00.000Z"),
        sample("5675", "This American Life", 3, &["Personal Growth", "History"], "2022-10-24T12:15:00.000Z"),
        sample("8514", "Murder on the Orient Line", 2, &["Drama", "Crime", "Thriller"], "2022-09-12"),
        sample("9177", "The Daily Build", 10, &["Technology", "News"], "2023-01-05T18:30:00+01:00"),
        sample("6756", "Untitled Pilot", 1, &[], "2021-02-01"),
    ]
}

/// Grid of cards plus one listener on the grid itself. `podcast-clicked`
/// leaves each card's shadow root and bubbles up to it.
#[component]
pub fn PodcastGallery(podcasts: Vec<PodcastSummary>) -> impl IntoView {
    let (selected, set_selected) = signal(None::<String>);
    let gallery_ref = NodeRef::<leptos::html::Div>::new();

    cfg_if! {
        if #[cfg(feature = "hydrate")] {
            Effect::new(move |registered: Option<bool>| {
                if registered == Some(true) {
                    return true;
                }
                let Some(gallery) = gallery_ref.get() else {
                    return false;
                };

                let on_clicked = Closure::wrap(Box::new(move |event: web_sys::Event| {
                    match clicked_id(&event) {
                        Ok(Some(id)) => {
                            log::info!("podcast {} selected", id);
                            set_selected.set(Some(id));
                        }
                        Ok(None) => log::warn!("{} without a data-id", PODCAST_CLICKED),
                        Err(e) => log::error!("Failed to read click: {}", e),
                    }
                }) as Box<dyn FnMut(_)>);

                if let Err(e) = gallery.add_event_listener_with_callback(
                    PODCAST_CLICKED,
                    on_clicked.as_ref().unchecked_ref(),
                ) {
                    log::error!("Failed to listen for {}: {:?}", PODCAST_CLICKED, e);
                    return false;
                }
                // Keep the closure alive
                on_clicked.forget();
                true
            });
        } else {
            let _ = set_selected;
        }
    }

    view! {
        <section class="gallery-page">
            <p class="selected">
                {move || match selected.get() {
                    Some(id) => format!("Selected podcast: {}", id),
                    None => "Click a podcast to select it".to_string(),
                }}
            </p>
            <div class="gallery" node_ref=gallery_ref>
                {podcasts
                    .into_iter()
                    .map(|podcast| view! { <PodcastPreviewCard podcast=podcast/> })
                    .collect_view()}
            </div>
        </section>
    }
}

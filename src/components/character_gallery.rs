//! Character Gallery
//!
//! Owns the [`Feed`] and [`FilterState`] for the session, renders the derived
//! list as cards, and loads the next page when the list is scrolled near its
//! end.
//!
//! Fetches go through the feed's ticket protocol: `request_next` hands out at
//! most one [`PageRequest`] at a time, so scroll bursts never start a second
//! fetch while one is pending.

use std::rc::Rc;

use citadel_core::{
    Feed, FeedStatus, FilterState, GraphQlClient, Language, PageRequest, ScrollMetrics,
};
use dioxus::prelude::*;

use crate::components::{CharacterCard, FilterBar};
use crate::context::{get_config, use_client};

/// Fetch the page for `request` in the background and merge the outcome.
fn fetch(request: PageRequest, client: GraphQlClient, mut feed: Signal<Feed>) {
    spawn(async move {
        let outcome = client.characters(request.page()).await;
        feed.write().complete(request, outcome);
    });
}

/// Ask the feed for the next page and fetch it if one is due.
fn load_more(mut feed: Signal<Feed>, client: Signal<GraphQlClient>) {
    let request = feed.write().request_next();
    if let Some(request) = request {
        fetch(request, client.peek().clone(), feed);
    }
}

/// Measure the scroll container and load more if the end is near.
fn check_near_end(
    container: Signal<Option<Rc<MountedData>>>,
    threshold: f64,
    feed: Signal<Feed>,
    client: Signal<GraphQlClient>,
) {
    spawn(async move {
        let Some(element) = container.peek().clone() else {
            return;
        };
        let (Ok(offset), Ok(size), Ok(rect)) = (
            element.get_scroll_offset().await,
            element.get_scroll_size().await,
            element.get_client_rect().await,
        ) else {
            tracing::debug!("Scroll metrics unavailable");
            return;
        };

        let metrics = ScrollMetrics::new(offset.y, rect.size.height, size.height);
        if metrics.near_end(threshold) {
            load_more(feed, client);
        }
    });
}

/// Scrollable gallery of character cards with filters.
#[component]
pub fn CharacterGallery(language: Language) -> Element {
    let threshold = get_config().scroll_threshold();
    let client = use_client();

    let mut feed: Signal<Feed> = use_signal(Feed::new);
    let mut filter: Signal<FilterState> = use_signal(FilterState::new);
    let mut container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let derived = use_memo(move || feed.read().derive(&filter.read()));

    // Initial page on mount
    use_hook(move || {
        spawn(async move {
            let request = feed.write().begin_initial();
            if let Some(request) = request {
                fetch(request, client.peek().clone(), feed);
            }
        })
    });

    // Re-measure after each merge and each filter change, and keep loading
    // while the rendered list does not reach the threshold. A failed or empty
    // load-more waits for the user to scroll again.
    use_effect(move || {
        let mounted = container.read().is_some();
        let rendered = derived.read().len();
        if mounted && feed.read().can_auto_fill() {
            tracing::trace!(rendered, "Checking whether the list fills the view");
            check_near_end(container, threshold, feed, client);
        }
    });

    let t = language.messages();
    let feed_ref = feed.read();

    match feed_ref.status() {
        FeedStatus::Loading => {
            return rsx! {
                p { class: "gallery-status gallery-status--loading", "{t.loading_initial}" }
            };
        }
        FeedStatus::Failed(err) => {
            let text = t.error_loading(Some(err.message()));
            return rsx! {
                p { class: "gallery-status gallery-status--error", "{text}" }
            };
        }
        FeedStatus::Ready => {}
    }

    let loading_more = feed_ref.is_loading_more();
    let has_more = feed_ref.has_more();
    let fetch_more_failed = feed_ref.fetch_more_error().is_some();
    drop(feed_ref);

    let characters = derived.read();

    rsx! {
        div {
            class: "gallery-scroll",
            onmounted: move |e| container.set(Some(e.data())),
            onscroll: move |_| check_near_end(container, threshold, feed, client),

            FilterBar {
                filter: filter(),
                language,
                on_change: move |next| filter.set(next),
            }

            if fetch_more_failed {
                p { class: "gallery-banner gallery-banner--error", "{t.error_fetching_more}" }
            }

            if characters.is_empty() {
                p { class: "gallery-status", "{t.no_characters_found}" }
            }

            div { class: "gallery-grid",
                for (index, character) in characters.iter().enumerate() {
                    CharacterCard {
                        key: "{character.id}-{index}",
                        character: character.clone(),
                        language,
                        index,
                    }
                }
            }

            if loading_more {
                p { class: "gallery-status gallery-status--loading", "{t.loading_more}" }
            } else if !has_more && !characters.is_empty() {
                p { class: "gallery-end", strong { "{t.end_message}" } }
            }
        }
    }
}

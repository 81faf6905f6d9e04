//! Shared context for gallery components.
//!
//! The GraphQL client is created once in [`App`](crate::app::App) and handed
//! to components through `use_context`. Language and filter state are not
//! context: they are owned by the component that changes them and passed
//! down as props.

use citadel_core::{GalleryConfig, GraphQlClient};
use dioxus::prelude::*;

/// Get the gallery configuration.
/// Uses the global config set from command line args.
pub fn get_config() -> GalleryConfig {
    crate::get_config()
}

/// Provide the GraphQL client to all child components.
pub fn provide_client(config: &GalleryConfig) -> Signal<GraphQlClient> {
    let client = use_signal(|| GraphQlClient::from_config(config));
    use_context_provider(|| client)
}

/// Hook to access the GraphQL client from context.
pub fn use_client() -> Signal<GraphQlClient> {
    use_context::<Signal<GraphQlClient>>()
}

//! Status, species and sort controls.

use citadel_core::{CharacterStatus, FilterState, Language, Messages, SortKey};
use dioxus::prelude::*;

fn sort_label(t: &Messages, key: SortKey) -> &'static str {
    match key {
        SortKey::Name => t.option_name,
        SortKey::Origin => t.option_origin,
    }
}

/// Filter and sort controls.
///
/// Stateless: renders `filter` and reports every edit as a whole new
/// [`FilterState`] through `on_change`.
#[component]
pub fn FilterBar(
    filter: FilterState,
    language: Language,
    on_change: EventHandler<FilterState>,
) -> Element {
    let t = language.messages();
    let statuses = [
        CharacterStatus::Alive,
        CharacterStatus::Dead,
        CharacterStatus::Unknown,
    ];

    let for_status = filter.clone();
    let for_species = filter.clone();
    let for_sort = filter.clone();

    rsx! {
        div { class: "filter-bar",
            div { class: "filter-field",
                label { r#for: "status-filter", "{t.filter_status}" }
                select {
                    id: "status-filter",
                    value: "{filter.status}",
                    onchange: move |e| on_change.call(for_status.clone().with_status(e.value())),
                    option { value: "", selected: filter.status.is_empty(), "{t.option_all}" }
                    for status in statuses {
                        option {
                            key: "{status.wire_value()}",
                            value: "{status.wire_value()}",
                            selected: filter.status == status.wire_value(),
                            "{t.status_option(status)}"
                        }
                    }
                }
            }
            div { class: "filter-field",
                label { r#for: "species-filter", "{t.filter_species}" }
                input {
                    id: "species-filter",
                    r#type: "text",
                    placeholder: "{t.placeholder_species}",
                    value: "{filter.species}",
                    oninput: move |e| on_change.call(for_species.clone().with_species(e.value())),
                }
            }
            div { class: "filter-field",
                label { r#for: "sort-by", "{t.filter_sort_by}" }
                select {
                    id: "sort-by",
                    value: "{filter.sort_by}",
                    onchange: move |e| {
                        let sort_by = e.value().parse().unwrap_or_default();
                        on_change.call(for_sort.clone().sorted_by(sort_by));
                    },
                    for key in SortKey::all() {
                        option {
                            key: "{key}",
                            value: "{key}",
                            selected: filter.sort_by == key,
                            {sort_label(t, key)}
                        }
                    }
                }
            }
        }
    }
}

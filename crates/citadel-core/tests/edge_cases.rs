//! Edge case and boundary condition tests
//!
//! These tests verify the pipeline handles sparse records, odd cursors and
//! unusual filter input without raising errors.

use citadel_core::query::decode_characters_response;
use citadel_core::{
    derive, Character, CharacterPage, Feed, FilterState, Language, PageInfo, SortKey,
};

// ============================================================================
// Sparse Records
// ============================================================================

/// A record with nothing but an id decodes and renders placeholders
#[test]
fn test_id_only_record() {
    let body = r#"{"data":{"characters":{"info":{"count":1,"pages":1,"next":null,"prev":null},
        "results":[{"id":"42"}]}}}"#;
    let page = decode_characters_response(body).unwrap();
    let c = &page.results.unwrap()[0];

    let t = Language::En.messages();
    assert_eq!(t.or_unnamed(c.name.as_deref()), "Unnamed");
    assert_eq!(t.or_unknown(c.status.as_deref()), "Unknown");
    assert_eq!(t.or_unknown(c.origin_name()), "Unknown");
}

/// Missing `info` decodes with no next page
#[test]
fn test_missing_info() {
    let page = decode_characters_response(r#"{"data":{"characters":{"results":[{"id":"1"}]}}}"#)
        .unwrap();
    assert_eq!(page.info, PageInfo::default());
    assert!(!page.info.has_next());
}

/// An empty `errors` array is not an error
#[test]
fn test_empty_errors_array() {
    let body = r#"{"data":{"characters":{"info":{"count":0,"pages":0,"next":null,"prev":null},"results":[]}},"errors":[]}"#;
    let page = decode_characters_response(body).unwrap();
    assert!(page.is_degenerate());
}

// ============================================================================
// Cursor Semantics
// ============================================================================

/// `next = 0` is a real page number, not "no more pages"
#[test]
fn test_zero_cursor_is_followed() {
    let mut feed = Feed::new();
    let request = feed.begin_initial().unwrap();
    feed.complete(
        request,
        Ok(CharacterPage::new(
            PageInfo {
                count: 2,
                pages: 2,
                next: Some(0),
                prev: None,
            },
            vec![Character::new("1")],
        )),
    );

    assert!(feed.has_more());
    assert_eq!(feed.request_next().map(|r| r.page()), Some(0));
}

/// Duplicate ids across pages are kept
#[test]
fn test_duplicates_are_not_removed() {
    let mut feed = Feed::new();
    let info = PageInfo {
        next: Some(2),
        ..Default::default()
    };

    let request = feed.begin_initial().unwrap();
    feed.complete(request, Ok(CharacterPage::new(info, vec![Character::new("1")])));
    let request = feed.request_next().unwrap();
    feed.complete(
        request,
        Ok(CharacterPage::new(PageInfo::default(), vec![Character::new("1")])),
    );

    assert_eq!(feed.characters().len(), 2);
    assert_eq!(feed.derive(&FilterState::new()).len(), 2);
}

// ============================================================================
// Filter Input
// ============================================================================

/// Unicode and whitespace in the species filter are matched literally
#[test]
fn test_species_filter_with_spaces() {
    let list = vec![
        Character::new("1").with_species("Mythological Creature"),
        Character::new("2").with_species("Mythological"),
    ];
    let derived = derive(&list, &FilterState::new().with_species("logical cre"));
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].id, "1");
}

/// A status filter outside the known values simply matches nothing known
#[test]
fn test_unrecognized_status_filter() {
    let list = vec![
        Character::new("1").with_status("Alive"),
        Character::new("2").with_status("Zombified"),
    ];
    let derived = derive(&list, &FilterState::new().with_status("zombified"));
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].id, "2");
}

/// Origin sort puts characters without an origin first
#[test]
fn test_origin_sort_missing_first() {
    let list = vec![
        Character::new("1").with_name("A").with_origin("Earth"),
        Character::new("2").with_name("B"),
        Character::new("3").with_name("C").with_origin("Abadango"),
    ];
    let derived = derive(&list, &FilterState::new().sorted_by(SortKey::Origin));
    let ids: Vec<_> = derived.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);
}

/// Names with letters outside basic Latin sort next to their base letter
#[test]
fn test_name_sort_folds_accented_initials() {
    let list: Vec<_> = ["Summer", "Ștefan", "Sanchez", "Ğuy", "Hank", "Łukasz", "Maß"]
        .iter()
        .enumerate()
        .map(|(i, name)| Character::new(i.to_string()).with_name(*name))
        .collect();
    let derived = derive(&list, &FilterState::new());
    let names: Vec<_> = derived.iter().filter_map(|c| c.name.as_deref()).collect();
    assert_eq!(
        names,
        vec!["Ğuy", "Hank", "Łukasz", "Maß", "Sanchez", "Ștefan", "Summer"]
    );
}

/// Very long lists derive without issue
#[test]
fn test_large_list() {
    let list: Vec<_> = (0..10_000)
        .map(|i| Character::new(i.to_string()).with_name(format!("N{}", 10_000 - i)))
        .collect();
    let derived = derive(&list, &FilterState::new());
    assert_eq!(derived.len(), 10_000);
    assert_eq!(derived[0].name.as_deref(), Some("N1"));
}

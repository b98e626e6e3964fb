#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

//! End-to-end checks against the stock sample deck shipped by `lectern generate`.

use lectern_core::{
    AssetLayout, CollapseState, Config, Deck, QueryEngine, Section, Segment, Viewer,
};

fn sample_deck() -> Deck {
    Deck::generate(
        10,
        vec![
            Section::new("Intro", 1, 0),
            Section::new("Background", 2, 1),
            Section::new("Main", 4, 0),
            Section::new("TopicA", 4, 1),
            Section::new("Sub A1", 5, 2),
            Section::new("TopicB", 7, 1),
            Section::new("Conclusion", 9, 0),
        ],
        &AssetLayout::default(),
    )
}

#[test]
fn resolves_current_sections() {
    let outline = sample_deck().outline();

    assert_eq!(outline.section_containing(5).unwrap().title, "Sub A1");
    assert_eq!(outline.section_containing(3).unwrap().title, "Background");
    let background = outline.section_range_of(1).unwrap();
    assert_eq!((background.start, background.end), (2, 3));
}

#[test]
fn main_does_not_adopt_grandchildren() {
    let outline = sample_deck().outline();
    let main = outline
        .sections()
        .iter()
        .position(|s| s.title == "Main")
        .unwrap();

    let children: Vec<&str> = outline
        .children_of(main)
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(children.first(), Some(&"TopicA"));
    assert!(!children.contains(&"Sub A1"));
}

#[test]
fn second_tier_starts_collapsed() {
    let outline = sample_deck().outline();
    let state = CollapseState::initial(&outline);
    let collapsed: Vec<&str> = state.iter().map(|k| k.title.as_str()).collect();
    assert_eq!(collapsed, vec!["Background", "TopicA", "TopicB"]);
}

#[test]
fn topic_query_lists_topic_slides_in_order() {
    let deck = sample_deck();
    let engine = QueryEngine::default();
    let results = engine.search(&deck.search_index(), "topic");

    assert!(!results.is_empty());
    assert!(results.len() <= 20);
    for window in results.windows(2) {
        assert!(window[0].slide_id < window[1].slide_id);
    }
    for result in &results {
        assert!(result.title.to_lowercase().contains("topic"));
        let matched = engine
            .highlight(&result.title, "topic")
            .into_iter()
            .filter(Segment::is_matched)
            .count();
        assert_eq!(matched, 1);
    }
}

#[test]
fn viewer_walkthrough() {
    let mut viewer = Viewer::new(sample_deck(), &Config::default());

    let mut visited = Vec::new();
    while viewer.next() {
        visited.push(viewer.current_section().unwrap().title.clone());
    }
    assert_eq!(
        visited,
        vec![
            "Background",
            "Background",
            "TopicA",
            "Sub A1",
            "Sub A1",
            "TopicB",
            "TopicB",
            "Conclusion",
            "Conclusion"
        ]
    );

    // Walking the whole deck opened every second-tier section.
    assert_eq!(viewer.collapse_state().collapsed_count(), 0);
    assert_eq!(viewer.outline_rows().len(), 7);
}

#[test]
fn fallback_deck_is_searchable() {
    let viewer = Viewer::new(
        Deck::fallback(12, &AssetLayout::default()),
        &Config::default(),
    );
    let results = viewer.search_now("slide 1");
    let ids: Vec<u32> = results.iter().map(|r| r.slide_id).collect();
    assert_eq!(ids, vec![1, 10, 11, 12]);
    assert!(results.iter().all(|r| r.title == "Introduction"));
    assert_eq!(results[0].matched_text, "Slide 1 Introduction");
}

//! Section model tests: validation against configured routes, custom
//! translators, and reorder properties.

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;

use sidebar_sections::config::{LimitsConfig, RoutesConfig, StaticConfig};
use sidebar_sections::i18n::{Translator, interpolate, keys};
use sidebar_sections::routing::{RouteResolver, RouteTable};
use sidebar_sections::section::{
    Origin, Section, SectionLink, Segment, ValidationContext, valid_external, valid_internal,
};

// =============================================================================
// Helpers
// =============================================================================

fn ctx_with(resolver: Arc<dyn RouteResolver>, translator: Arc<dyn Translator>) -> ValidationContext {
    ValidationContext::new(
        resolver,
        translator,
        Origin::new("localhost:3000"),
        LimitsConfig::default(),
    )
}

fn link(object_id: u64, name: &str, value: &str, segment: Segment) -> SectionLink {
    SectionLink {
        name: Some(name.into()),
        value: Some(value.into()),
        ..SectionLink::new(object_id, segment)
    }
}

/// German-ish catalog to check that messages come from the translator.
struct Shouty;

impl Translator for Shouty {
    fn translate(&self, key: &str, interpolations: &[(&str, String)]) -> String {
        let template = match key {
            keys::NAME_MAXIMUM => "NAME ZU LANG (%{count})",
            keys::VALUE_INVALID => "UNGUELTIG",
            _ => "?",
        };
        interpolate(template, interpolations)
    }
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_routes_from_config_extend_defaults() {
    let mut extra = BTreeMap::new();
    extra.insert("docs".to_string(), "/docs/{slug}".to_string());
    let table = RouteTable::from_config(&RoutesConfig { extra }).unwrap();
    let ctx = ctx_with(Arc::new(table), Arc::new(sidebar_sections::i18n::EnglishCatalog));

    assert!(valid_internal("/docs/getting-started", &ctx));
    assert!(valid_internal("/latest", &ctx));
    assert!(!valid_internal("/docs", &ctx));
}

#[test]
fn test_empty_path_segments_are_not_internal_routes() {
    let ctx = ctx_with(
        Arc::new(RouteTable::with_defaults()),
        Arc::new(sidebar_sections::i18n::EnglishCatalog),
    );
    assert!(!valid_internal("//u/alice", &ctx));
    assert!(!valid_internal("///latest", &ctx));
    assert!(!valid_internal("/latest//", &ctx));
    assert!(valid_internal("/u/alice", &ctx));

    let link = link(1, "Alice", "//u/alice", Segment::Primary);
    assert!(!link.external(&ctx));
    assert!(!link.valid(&ctx));
}

#[test]
fn test_bad_route_pattern_is_a_config_error() {
    let mut extra = BTreeMap::new();
    extra.insert("broken".to_string(), "no-leading-slash".to_string());
    assert!(RouteTable::from_config(&RoutesConfig { extra }).is_err());
}

#[test]
fn test_context_from_default_config() {
    let config = StaticConfig::default();
    let ctx = ValidationContext::from_config(&config).unwrap();
    let internal = link(1, "Home", "http://localhost:3000/latest", Segment::Primary);
    assert!(!internal.external(&ctx));
    assert_eq!(internal.path(&ctx), Some("/latest"));
    assert!(internal.valid(&ctx));
}

#[test]
fn test_messages_use_the_given_translator() {
    let ctx = ctx_with(Arc::new(RouteTable::with_defaults()), Arc::new(Shouty));
    let long = link(1, &"n".repeat(81), "/nowhere", Segment::Primary);
    assert_eq!(
        long.invalid_name_message(&ctx).as_deref(),
        Some("NAME ZU LANG (80)")
    );
    assert_eq!(long.invalid_value_message(&ctx).as_deref(), Some("UNGUELTIG"));
}

#[test]
fn test_length_limits_count_characters() {
    let ctx = ctx_with(
        Arc::new(RouteTable::with_defaults()),
        Arc::new(sidebar_sections::i18n::EnglishCatalog),
    );
    // 30 multi-byte characters are still within the title limit
    let section = Section {
        title: Some("é".repeat(30)),
        primary_links: vec![link(0, "Latest", "/latest", Segment::Primary)],
        ..Section::new()
    };
    assert!(section.valid(&ctx));
}

#[test]
fn test_external_check_accepts_any_parsable_url() {
    assert!(valid_external("https://example.com"));
    assert!(valid_external("ftp://files.example.com/a.zip"));
    assert!(!valid_external("example.com/page"));
    assert!(!valid_external("http://"));
}

// =============================================================================
// Reorder properties
// =============================================================================

fn section(primary: usize, secondary: usize) -> Section {
    let mut s = Section::new();
    for id in 0..primary {
        s.push_link(SectionLink::new(id as u64, Segment::Primary));
    }
    for id in primary..primary + secondary {
        s.push_link(SectionLink::new(id as u64, Segment::Secondary));
    }
    s
}

fn all_ids(s: &Section) -> Vec<u64> {
    let mut ids: Vec<u64> = s.all_links().map(|l| l.object_id).collect();
    ids.sort_unstable();
    ids
}

fn locate(s: &Section, object_id: u64) -> (Segment, usize) {
    for segment in [Segment::Primary, Segment::Secondary] {
        if let Some(idx) = s.links(segment).iter().position(|l| l.object_id == object_id) {
            return (segment, idx);
        }
    }
    panic!("link #{} missing", object_id);
}

proptest! {
    #[test]
    fn prop_reorder_keeps_every_link_once(
        primary in 1usize..6,
        secondary in 0usize..6,
        from_seed in any::<u64>(),
        to_seed in any::<u64>(),
        above in any::<bool>(),
    ) {
        let total = (primary + secondary) as u64;
        let from = from_seed % total;
        let to = to_seed % total;
        let mut s = section(primary, secondary);
        let before = all_ids(&s);

        s.reorder(from, to, above).unwrap();

        prop_assert_eq!(all_ids(&s), before);
        prop_assert_eq!(s.primary_links.len() + s.secondary_links.len(), total as usize);
        for segment in [Segment::Primary, Segment::Secondary] {
            prop_assert!(s.links(segment).iter().all(|l| l.segment == segment));
        }
    }

    #[test]
    fn prop_moved_link_lands_next_to_target(
        primary in 1usize..6,
        secondary in 0usize..6,
        from_seed in any::<u64>(),
        to_seed in any::<u64>(),
        above in any::<bool>(),
    ) {
        let total = (primary + secondary) as u64;
        let from = from_seed % total;
        let to = to_seed % total;
        prop_assume!(from != to);

        let mut s = section(primary, secondary);
        s.reorder(from, to, above).unwrap();

        let (from_segment, from_idx) = locate(&s, from);
        let (to_segment, to_idx) = locate(&s, to);
        prop_assert_eq!(from_segment, to_segment);
        if above {
            prop_assert_eq!(from_idx + 1, to_idx);
        } else {
            prop_assert_eq!(to_idx + 1, from_idx);
        }
    }
}

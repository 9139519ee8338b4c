//! Integration tests for page composition.
//!
//! The page is a pure function of content, theme and date, so these tests
//! compose it directly with a fixed clock.

use folio::content::{portfolio, Portfolio, Project};
use folio::page::{compose, SectionBody, SectionId};
use folio::state::ThemeMode;
use folio::traits::FixedClock;

fn clock(year: i32) -> FixedClock {
    FixedClock::ymd(year, 7, 1).unwrap()
}

#[test]
fn test_every_nav_target_has_a_section() {
    let page = compose(portfolio(), ThemeMode::Dark, &clock(2030));
    let anchors = page.section_anchors();
    for target in page.nav.targets() {
        assert!(anchors.contains(&target), "no section for nav target {target}");
    }
    assert_eq!(page.nav.links.len(), SectionId::ALL.len());
}

#[test]
fn test_nav_order_matches_section_order() {
    let page = compose(portfolio(), ThemeMode::Light, &clock(2030));
    let labels: Vec<&str> = page.nav.links.iter().map(|link| link.label).collect();
    assert_eq!(
        labels,
        vec!["About", "Skills", "Projects", "Experience", "Education", "Contact"]
    );
    let hrefs: Vec<&str> = page.nav.links.iter().map(|link| link.href).collect();
    assert_eq!(
        hrefs,
        vec!["#about", "#skills", "#projects", "#experience", "#education", "#contact"]
    );
}

#[test]
fn test_footer_follows_the_clock() {
    let before = compose(portfolio(), ThemeMode::Dark, &clock(2029));
    let after = compose(portfolio(), ThemeMode::Dark, &clock(2031));
    assert_eq!(before.footer.text(), "© 2029 Shrsti Garhewal. All rights reserved.");
    assert_eq!(after.footer.text(), "© 2031 Shrsti Garhewal. All rights reserved.");
}

#[test]
fn test_theme_only_changes_the_theme_fields() {
    let dark = compose(portfolio(), ThemeMode::Dark, &clock(2030));
    let light = compose(portfolio(), ThemeMode::Light, &clock(2030));
    assert_ne!(dark.root_scope, light.root_scope);
    assert_ne!(dark.nav.theme_toggle, light.nav.theme_toggle);
    assert_eq!(dark.sections, light.sections);
    assert_eq!(dark.hero, light.hero);
    assert_eq!(dark.footer, light.footer);
}

#[test]
fn test_project_without_links_has_no_link_group() {
    static PROJECTS: [Project; 1] = [Project {
        name: "Scratchpad",
        description: "Unreleased experiment.",
        stack: &["Rust"],
        links: &[],
    }];
    let content = Portfolio {
        projects: &PROJECTS,
        ..*portfolio()
    };

    let page = compose(&content, ThemeMode::Dark, &clock(2030));
    let Some(SectionBody::Projects(cards)) = page.section(SectionId::Projects).map(|s| &s.body)
    else {
        panic!("projects section missing");
    };
    assert_eq!(cards.len(), 1);
    assert!(cards[0].links.is_empty());
    assert_eq!(cards[0].tags, &["Rust"]);
}

#[test]
fn test_empty_collections_render_empty_sections() {
    let content = Portfolio {
        skills: &[],
        experience: &[],
        ..*portfolio()
    };
    let page = compose(&content, ThemeMode::Dark, &clock(2030));

    assert_eq!(page.sections.len(), SectionId::ALL.len());
    assert!(page
        .section(SectionId::Skills)
        .is_some_and(|section| section.body.keys().is_empty()));
    assert!(page
        .section(SectionId::Experience)
        .is_some_and(|section| section.body.keys().is_empty()));
}

#[test]
fn test_page_serializes_to_json() {
    let page = compose(portfolio(), ThemeMode::Dark, &clock(2030));
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["root_scope"], "dark");
    assert_eq!(json["footer"]["year"], 2030);
    assert_eq!(json["sections"].as_array().map(Vec::len), Some(6));
}

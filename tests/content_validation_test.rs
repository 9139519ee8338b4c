//! Integration tests for content validation.

use folio::content::validate::validate;
use folio::content::{portfolio, Portfolio, Project, SkillGroup};
use folio::error::ContentError;
use folio::page::{compose, SectionBody, SectionId};
use folio::state::ThemeMode;
use folio::traits::FixedClock;

#[test]
fn test_shipped_content_is_valid() {
    let errors = validate(portfolio());
    assert!(errors.is_empty(), "content errors: {errors:?}");
}

#[test]
fn test_card_keys_are_distinct_within_each_section() {
    let clock = FixedClock::ymd(2030, 1, 1).unwrap();
    let page = compose(portfolio(), ThemeMode::Dark, &clock);
    for section in &page.sections {
        let mut keys = section.body.keys();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total, "duplicate key in {}", section.anchor);
    }
}

#[test]
fn test_duplicate_project_is_reported() {
    static PROJECTS: [Project; 2] = [
        Project {
            name: "Twin",
            description: "First.",
            stack: &[],
            links: &[],
        },
        Project {
            name: "Twin",
            description: "Second.",
            stack: &[],
            links: &[],
        },
    ];
    let content = Portfolio {
        projects: &PROJECTS,
        ..*portfolio()
    };
    assert_eq!(
        validate(&content),
        vec![ContentError::DuplicateProject {
            name: "Twin".to_string()
        }]
    );
}

#[test]
fn test_every_violation_is_collected() {
    static SKILLS: [SkillGroup; 2] = [
        SkillGroup {
            group: "Frontend",
            items: &[],
        },
        SkillGroup {
            group: "Frontend",
            items: &[],
        },
    ];
    let mut content = Portfolio {
        skills: &SKILLS,
        ..*portfolio()
    };
    content.contact.email = " ";

    let errors = validate(&content);
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&ContentError::EmptyField {
        entity: "contact",
        field: "email"
    }));
    assert!(errors
        .iter()
        .any(|e| matches!(e, ContentError::DuplicateSkillGroup { group } if group == "Frontend")));
}

#[test]
fn test_project_bodies_follow_content_order() {
    let clock = FixedClock::ymd(2030, 1, 1).unwrap();
    let page = compose(portfolio(), ThemeMode::Dark, &clock);
    let Some(SectionBody::Projects(cards)) = page.section(SectionId::Projects).map(|s| &s.body)
    else {
        panic!("no projects section");
    };
    let names: Vec<&str> = cards.iter().map(|card| card.name).collect();
    let expected: Vec<&str> = portfolio().projects.iter().map(|p| p.name).collect();
    assert_eq!(names, expected);
}

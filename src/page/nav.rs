//! Navigation bar model.

use serde::Serialize;

use super::link::Link;
use super::section::{Section, SectionId};
use crate::content::Icon;
use crate::state::ThemeMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub section: SectionId,
    pub label: &'static str,
    pub href: &'static str,
}

/// Theme toggle control: shows the current indicator and requests a flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeToggle {
    pub indicator: Icon,
    pub label: &'static str,
}

impl ThemeToggle {
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self {
            indicator: mode.indicator(),
            label: "Toggle theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
    pub theme_toggle: ThemeToggle,
    /// Resume action; always the same constant reference
    pub resume: Link,
}

impl NavBar {
    /// Build the bar from the sections actually rendered, so link order and
    /// section order cannot drift apart.
    pub fn for_sections(
        brand: &'static str,
        sections: &[Section],
        theme: ThemeMode,
        resume_url: &'static str,
    ) -> Self {
        Self {
            brand,
            links: sections
                .iter()
                .map(|section| NavLink {
                    section: section.id,
                    label: section.title,
                    href: section.id.href(),
                })
                .collect(),
            theme_toggle: ThemeToggle::for_mode(theme),
            resume: Link::external("Resume", resume_url).with_icon(Icon::Download),
        }
    }

    /// Anchor identifiers targeted by the links, in order.
    pub fn targets(&self) -> Vec<&'static str> {
        self.links.iter().map(|link| link.section.anchor()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SectionBody;

    #[test]
    fn test_links_follow_section_order() {
        let sections = vec![
            Section::new(SectionId::Contact, SectionBody::Contact(Vec::new())),
            Section::new(SectionId::About, SectionBody::Prose("x")),
        ];
        let nav = NavBar::for_sections("brand", &sections, ThemeMode::Dark, "/r.pdf");
        assert_eq!(nav.targets(), vec!["contact", "about"]);
        assert_eq!(nav.links[0].href, "#contact");
        assert_eq!(nav.links[1].label, "About");
    }

    #[test]
    fn test_resume_opens_new_context() {
        let nav = NavBar::for_sections("brand", &[], ThemeMode::Light, "/r.pdf");
        assert_eq!(nav.resume.href, "/r.pdf");
        assert!(nav.resume.opens_new_context());
        assert_eq!(nav.theme_toggle.indicator, Icon::Moon);
    }
}

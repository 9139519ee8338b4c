//! Page composition.
//!
//! [`compose`] turns the static content, the current theme snapshot and a
//! clock into a [`Page`]: navigation bar, hero, the ordered sections and the
//! footer. It is a pure function; calling it again after a toggle or a
//! calendar change yields the updated page. Both the terminal renderer and
//! the HTML exporter draw from the same `Page`.

pub mod footer;
pub mod hero;
pub mod link;
pub mod nav;
pub mod section;

use serde::Serialize;

pub use footer::Footer;
pub use hero::Hero;
pub use link::{Link, LinkTarget, NEW_CONTEXT_REL};
pub use nav::{NavBar, NavLink, ThemeToggle};
pub use section::{
    BlockKey, EducationCard, ExperienceCard, ProjectCard, Section, SectionBody, SectionId,
    SkillCard,
};

use crate::content::Portfolio;
use crate::state::ThemeMode;
use crate::traits::Clock;

/// A fully composed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub theme: ThemeMode,
    /// Root scope flag derived from the theme
    pub root_scope: Option<&'static str>,
    pub nav: NavBar,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub footer: Footer,
}

impl Page {
    /// Anchor identifiers of the rendered sections, in order.
    pub fn section_anchors(&self) -> Vec<&'static str> {
        self.sections.iter().map(|section| section.anchor).collect()
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Every followable link in reading order: the resume action, hero
    /// shortcuts and socials, then links inside sections.
    pub fn links(&self) -> Vec<&Link> {
        let mut links = vec![&self.nav.resume];
        links.extend(self.hero.calls_to_action.iter());
        links.extend(self.hero.socials.iter());
        for section in &self.sections {
            links.extend(section.body.links());
        }
        links
    }
}

/// Compose the page. Section order is [`SectionId::ALL`].
pub fn compose(portfolio: &Portfolio, theme: ThemeMode, clock: &dyn Clock) -> Page {
    let sections: Vec<Section> = SectionId::ALL
        .into_iter()
        .map(|id| Section::new(id, section_body(portfolio, id)))
        .collect();

    let nav = NavBar::for_sections(portfolio.brand, &sections, theme, portfolio.resume_url);

    Page {
        theme,
        root_scope: theme.scope_class(),
        nav,
        hero: Hero::from_portfolio(portfolio),
        sections,
        footer: Footer::at(clock, portfolio.profile.name),
    }
}

fn section_body(portfolio: &Portfolio, id: SectionId) -> SectionBody {
    match id {
        SectionId::About => SectionBody::Prose(portfolio.about),
        SectionId::Skills => SectionBody::Skills(section::skill_cards(portfolio.skills)),
        SectionId::Projects => SectionBody::Projects(section::project_cards(portfolio.projects)),
        SectionId::Experience => {
            SectionBody::Experience(section::experience_cards(portfolio.experience))
        }
        SectionId::Education => {
            SectionBody::Education(section::education_cards(portfolio.education))
        }
        SectionId::Contact => SectionBody::Contact(section::contact_links(&portfolio.contact)),
    }
}

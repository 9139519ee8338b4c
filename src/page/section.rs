//! Sections and the cards inside them.
//!
//! A section is an anchor-addressable block: anchor, heading, optional icon
//! and a body bound to one content collection. Card lists are produced by
//! pure functions from the content records, each card keyed by its record's
//! natural unique key so reveal and focus state stay attached to the same
//! record across re-renders.

use serde::Serialize;

use super::link::Link;
use crate::content::{
    ContactInfo, EducationEntry, ExperienceEntry, Icon, Project, SkillGroup,
};

/// The fixed set of sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

impl SectionId {
    /// Page order. Also the navigation order.
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// Anchor identifier (case-sensitive).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// In-page href for this anchor.
    pub fn href(self) -> &'static str {
        match self {
            SectionId::About => "#about",
            SectionId::Skills => "#skills",
            SectionId::Projects => "#projects",
            SectionId::Experience => "#experience",
            SectionId::Education => "#education",
            SectionId::Contact => "#contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }

    pub fn icon(self) -> Option<Icon> {
        Some(match self {
            SectionId::About => Icon::User,
            SectionId::Skills => Icon::Code,
            SectionId::Projects => Icon::Rocket,
            SectionId::Experience => Icon::Briefcase,
            SectionId::Education => Icon::Star,
            SectionId::Contact => Icon::Mail,
        })
    }
}

/// Stable identity of a card: the record's natural unique key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BlockKey(String);

impl BlockKey {
    pub fn of(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Composite key. Parts are joined with the ASCII unit separator so two
    /// distinct pairs never produce the same key.
    pub fn pair(first: &str, second: &str) -> Self {
        Self(format!("{}\u{1f}{}", first, second))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCard {
    pub key: BlockKey,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub key: BlockKey,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceCard {
    pub key: BlockKey,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

impl ExperienceCard {
    pub fn heading(&self) -> String {
        format!("{} · {}", self.role, self.company)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationCard {
    pub key: BlockKey,
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

/// Section content, one variant per content collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum SectionBody {
    Prose(&'static str),
    Skills(Vec<SkillCard>),
    Projects(Vec<ProjectCard>),
    Experience(Vec<ExperienceCard>),
    Education(Vec<EducationCard>),
    Contact(Vec<Link>),
}

impl SectionBody {
    /// Keys of the cards in this body, in order. Prose and contact bodies have none.
    pub fn keys(&self) -> Vec<&BlockKey> {
        match self {
            SectionBody::Prose(_) | SectionBody::Contact(_) => Vec::new(),
            SectionBody::Skills(cards) => cards.iter().map(|c| &c.key).collect(),
            SectionBody::Projects(cards) => cards.iter().map(|c| &c.key).collect(),
            SectionBody::Experience(cards) => cards.iter().map(|c| &c.key).collect(),
            SectionBody::Education(cards) => cards.iter().map(|c| &c.key).collect(),
        }
    }

    /// Links inside the body, in order.
    pub fn links(&self) -> Vec<&Link> {
        match self {
            SectionBody::Projects(cards) => cards.iter().flat_map(|c| c.links.iter()).collect(),
            SectionBody::Contact(links) => links.iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// A rendered section: anchor identity, heading, icon slot and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub anchor: &'static str,
    pub title: &'static str,
    pub icon: Option<Icon>,
    pub body: SectionBody,
}

impl Section {
    pub fn new(id: SectionId, body: SectionBody) -> Self {
        Self {
            id,
            anchor: id.anchor(),
            title: id.title(),
            icon: id.icon(),
            body,
        }
    }
}

pub fn skill_cards(groups: &[SkillGroup]) -> Vec<SkillCard> {
    groups
        .iter()
        .map(|group| SkillCard {
            key: BlockKey::of(group.group),
            title: group.group,
            items: group.items,
        })
        .collect()
}

/// Project cards. Links always open in a new context; an empty link list is valid.
pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects
        .iter()
        .map(|project| ProjectCard {
            key: BlockKey::of(project.name),
            name: project.name,
            description: project.description,
            tags: project.stack,
            links: project
                .links
                .iter()
                .map(|link| Link::external(link.label, link.href).with_icon(Icon::ExternalLink))
                .collect(),
        })
        .collect()
}

pub fn experience_cards(entries: &[ExperienceEntry]) -> Vec<ExperienceCard> {
    entries
        .iter()
        .map(|entry| ExperienceCard {
            key: BlockKey::pair(entry.company, entry.role),
            role: entry.role,
            company: entry.company,
            period: entry.period,
            points: entry.points,
        })
        .collect()
}

pub fn education_cards(entries: &[EducationEntry]) -> Vec<EducationCard> {
    entries
        .iter()
        .map(|entry| EducationCard {
            key: BlockKey::pair(entry.school, entry.degree),
            degree: entry.degree,
            school: entry.school,
            period: entry.period,
        })
        .collect()
}

/// `mailto:` and `tel:` links for the contact section.
pub fn contact_links(contact: &ContactInfo) -> Vec<Link> {
    vec![
        Link::same_context(contact.email, contact.mailto_href()).with_icon(Icon::Mail),
        Link::same_context(contact.phone, contact.tel_href()).with_icon(Icon::Phone),
    ]
}

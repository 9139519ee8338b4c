//! Hero block: who, what, where, and how to reach out.

use serde::Serialize;

use super::link::Link;
use super::section::SectionId;
use crate::content::{Icon, Portfolio};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub avatar_url: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    /// In-page shortcuts ("View Projects", "Contact Me")
    pub calls_to_action: Vec<Link>,
    pub socials: Vec<Link>,
}

impl Hero {
    /// Every field is taken directly from the profile and contact records.
    pub fn from_portfolio(portfolio: &Portfolio) -> Self {
        let profile = &portfolio.profile;
        Self {
            badge: portfolio.badge,
            name: profile.name,
            title: profile.title,
            tagline: profile.tagline,
            avatar_url: profile.avatar_url,
            location: profile.location,
            phone: portfolio.contact.phone,
            calls_to_action: vec![
                Link::anchor("View Projects", SectionId::Projects).with_icon(Icon::Star),
                Link::anchor("Contact Me", SectionId::Contact).with_icon(Icon::Mail),
            ],
            socials: profile
                .socials
                .iter()
                .map(|social| Link::external(social.label, social.href).with_icon(social.icon))
                .collect(),
        }
    }

    /// Heading line, e.g. "Hi, I'm Ada — Engineer".
    pub fn heading(&self) -> String {
        format!("Hi, I'm {} — {}", self.name, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;

    #[test]
    fn test_hero_sources_profile_and_contact() {
        let hero = Hero::from_portfolio(portfolio());
        assert_eq!(hero.name, portfolio().profile.name);
        assert_eq!(hero.phone, portfolio().contact.phone);
        assert_eq!(hero.socials.len(), portfolio().profile.socials.len());
        assert!(hero.socials.iter().all(Link::opens_new_context));
        assert_eq!(
            hero.calls_to_action
                .iter()
                .filter_map(Link::anchor_target)
                .collect::<Vec<_>>(),
            vec![SectionId::Projects, SectionId::Contact]
        );
    }

    #[test]
    fn test_heading() {
        let hero = Hero::from_portfolio(portfolio());
        assert_eq!(
            hero.heading(),
            "Hi, I'm Shrsti Garhewal — Frontend Developer (React, Next.js)"
        );
    }
}

//! Static content model for the portfolio page.
//!
//! Every record here is `'static` data assembled at compile time. Nothing in
//! this module is mutated at runtime; renderers only ever read it through
//! [`portfolio()`].

mod data;
pub mod validate;

use serde::Serialize;

pub use data::{portfolio, PORTFOLIO, RESUME_URL};

/// Icon slot kinds used by content and by section headings.
///
/// Icon rendering itself is left to each renderer; an icon the renderer has
/// no glyph for simply shows nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    Phone,
    MapPin,
    Sun,
    Moon,
    ExternalLink,
    Download,
    Code,
    Briefcase,
    Rocket,
    Star,
    User,
}

/// A labelled external profile link shown on the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub avatar_url: &'static str,
    pub socials: &'static [SocialLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub group: &'static str,
    pub items: &'static [&'static str],
}

/// A plain labelled URL (project links).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub links: &'static [ProjectLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
}

impl ContactInfo {
    /// `mailto:` URI for the contact email.
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` URI for the contact phone.
    ///
    /// Only digits and a leading `+` survive; spacing and punctuation used
    /// for display are dropped.
    pub fn tel_href(&self) -> String {
        let mut number = String::with_capacity(self.phone.len());
        for ch in self.phone.trim().chars() {
            if ch.is_ascii_digit() || (ch == '+' && number.is_empty()) {
                number.push(ch);
            }
        }
        format!("tel:{}", number)
    }
}

/// The whole content model for one portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Portfolio {
    /// Short brand shown at the left of the navigation bar
    pub brand: &'static str,
    /// Availability badge shown above the hero heading
    pub badge: &'static str,
    /// Body of the About section
    pub about: &'static str,
    /// Static resume document reference
    pub resume_url: &'static str,
    pub profile: Profile,
    pub skills: &'static [SkillGroup],
    pub projects: &'static [Project],
    pub experience: &'static [ExperienceEntry],
    pub education: &'static [EducationEntry],
    pub contact: ContactInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_formatting() {
        let contact = ContactInfo {
            email: "a@b.c",
            phone: "+91 91742 91936",
        };
        assert_eq!(contact.tel_href(), "tel:+919174291936");
    }

    #[test]
    fn test_tel_href_ignores_inner_plus() {
        let contact = ContactInfo {
            email: "a@b.c",
            phone: "(555) 010+2",
        };
        assert_eq!(contact.tel_href(), "tel:5550102");
    }

    #[test]
    fn test_mailto_href() {
        assert_eq!(
            portfolio().contact.mailto_href(),
            "mailto:shrstigarhewal271627@gmail.com"
        );
    }

    #[test]
    fn test_resume_url_is_the_portfolio_reference() {
        assert_eq!(portfolio().resume_url, RESUME_URL);
    }
}

//! Links as the page model sees them.

use serde::Serialize;

use super::SectionId;
use crate::content::Icon;

/// `rel` carried by every link that opens a new browsing context, so the
/// opened page gets no reference back to this one.
pub const NEW_CONTEXT_REL: &str = "noopener noreferrer";

/// Where following a link lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// In-page jump to a section anchor; no reload, no state reset
    Anchor(SectionId),
    /// Handed to the current context's handler (`mailto:`, `tel:`)
    SameContext,
    /// Opened in a new, isolated browsing context
    NewContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: String,
    pub target: LinkTarget,
    pub icon: Option<Icon>,
}

impl Link {
    /// In-page link to a section.
    pub fn anchor(label: &'static str, section: SectionId) -> Self {
        Self {
            label,
            href: section.href().to_string(),
            target: LinkTarget::Anchor(section),
            icon: None,
        }
    }

    pub fn external(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
            target: LinkTarget::NewContext,
            icon: None,
        }
    }

    pub fn same_context(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
            target: LinkTarget::SameContext,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn opens_new_context(&self) -> bool {
        self.target == LinkTarget::NewContext
    }

    /// `rel` attribute value, present only for new-context links.
    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_context().then_some(NEW_CONTEXT_REL)
    }

    /// Section this link jumps to, if it is an in-page link.
    pub fn anchor_target(&self) -> Option<SectionId> {
        match self.target {
            LinkTarget::Anchor(section) => Some(section),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_link() {
        let link = Link::anchor("Projects", SectionId::Projects);
        assert_eq!(link.href, "#projects");
        assert_eq!(link.anchor_target(), Some(SectionId::Projects));
        assert_eq!(link.rel(), None);
    }

    #[test]
    fn test_external_link_is_isolated() {
        let link = Link::external("Live", "https://dgnews.co.in/");
        assert!(link.opens_new_context());
        assert_eq!(link.rel(), Some("noopener noreferrer"));
        assert_eq!(link.anchor_target(), None);
    }

    #[test]
    fn test_same_context_link() {
        let link = Link::same_context("Email", "mailto:a@b.c").with_icon(Icon::Mail);
        assert!(!link.opens_new_context());
        assert_eq!(link.icon, Some(Icon::Mail));
    }
}

//! Authoring checks for the static content model.
//!
//! Content is compiled in, so a broken record is an authoring mistake rather
//! than a runtime fault. Nothing in the render path calls this; the test
//! suite and `folio --check` do.

use std::collections::HashSet;
use std::hash::Hash;

use super::Portfolio;
use crate::error::ContentError;

/// Check every identity and presence rule, collecting all violations.
pub fn validate(portfolio: &Portfolio) -> Vec<ContentError> {
    let mut errors = Vec::new();

    let profile = &portfolio.profile;
    require(&mut errors, "profile", "name", profile.name);
    require(&mut errors, "profile", "title", profile.title);
    require(&mut errors, "contact", "email", portfolio.contact.email);
    require(&mut errors, "contact", "phone", portfolio.contact.phone);

    for label in duplicates(profile.socials.iter().map(|s| s.label)) {
        errors.push(ContentError::DuplicateSocialLabel {
            label: label.to_string(),
        });
    }

    for group in duplicates(portfolio.skills.iter().map(|s| s.group)) {
        errors.push(ContentError::DuplicateSkillGroup {
            group: group.to_string(),
        });
    }

    for name in duplicates(portfolio.projects.iter().map(|p| p.name)) {
        errors.push(ContentError::DuplicateProject {
            name: name.to_string(),
        });
    }

    for (company, role) in duplicates(portfolio.experience.iter().map(|e| (e.company, e.role))) {
        errors.push(ContentError::DuplicateExperience {
            company: company.to_string(),
            role: role.to_string(),
        });
    }

    for (school, degree) in duplicates(portfolio.education.iter().map(|e| (e.school, e.degree))) {
        errors.push(ContentError::DuplicateEducation {
            school: school.to_string(),
            degree: degree.to_string(),
        });
    }

    errors
}

fn require(
    errors: &mut Vec<ContentError>,
    entity: &'static str,
    field: &'static str,
    value: &str,
) {
    if value.trim().is_empty() {
        errors.push(ContentError::EmptyField { entity, field });
    }
}

/// Keys seen more than once, each reported once, in first-repeat order.
fn duplicates<K, I>(keys: I) -> Vec<K>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut repeated = Vec::new();
    for key in keys {
        if !seen.insert(key) && reported.insert(key) {
            repeated.push(key);
        }
    }
    repeated
}

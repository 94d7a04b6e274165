//! Portfolio content
//!
//! The content object is built once at startup, either from the embedded
//! portfolio ([`Content::builtin`]) or from a JSON5 file ([`Content::load`]),
//! and then shared read-only through an `Arc`.

use std::{collections::HashSet, path::Path};

use color_eyre::eyre::{bail, Result, WrapErr};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::domain::icon::Icon;

mod builtin;

/// Category label that matches every project
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub journey: Journey,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    #[strum(serialize = "LinkedIn")]
    LinkedIn,
    #[strum(serialize = "GitHub")]
    GitHub,
    #[strum(serialize = "Twitter")]
    Twitter,
}

impl SocialKind {
    pub fn icon(self) -> Icon {
        match self {
            SocialKind::LinkedIn => Icon::LinkedIn,
            SocialKind::GitHub => Icon::GitHub,
            SocialKind::Twitter => Icon::Twitter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent
    pub level: u8,
    #[serde(default)]
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub icon: Icon,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    #[serde(default)]
    pub education: Vec<Experience>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    /// School or company
    pub organization: String,
    pub location: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
}

/// Tabs of the journey section
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum JourneyTab {
    #[default]
    Education,
    Experience,
    Certifications,
}

impl Content {
    /// The portfolio shipped with the binary
    pub fn builtin() -> Self {
        builtin::content()
    }

    /// Read content from a JSON5 file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read content file {}", path.display()))?;
        let content: Self = json5::from_str(&raw)
            .wrap_err_with(|| format!("Failed to parse content file {}", path.display()))?;
        if let Some(id) = content.duplicate_project_id() {
            bail!(
                "Duplicate project id {id} in content file {}",
                path.display()
            );
        }
        Ok(content)
    }

    /// First project id that appears more than once
    fn duplicate_project_id(&self) -> Option<u32> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|p| p.id)
            .find(|id| !seen.insert(*id))
    }

    /// `"All"` followed by every distinct project category in order of first appearance
    pub fn project_categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for project in &self.projects {
            if !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        categories
    }

    /// Projects shown for the given category filter, in content order
    pub fn projects_in(&self, category: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .collect()
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn journey_len(&self, tab: JourneyTab) -> usize {
        match tab {
            JourneyTab::Education => self.journey.education.len(),
            JourneyTab::Experience => self.journey.experience.len(),
            JourneyTab::Certifications => self.journey.certifications.len(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builtin_is_well_formed() {
        let content = Content::builtin();
        assert!(!content.personal_info.full_name.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.testimonials.is_empty());
        assert!(content
            .skills
            .iter()
            .flat_map(|c| &c.skills)
            .all(|s| s.level <= 100));

        assert_eq!(content.duplicate_project_id(), None);
    }

    #[test]
    fn test_project_categories_are_distinct_and_ordered() {
        let content = Content::builtin();
        let categories = content.project_categories();
        assert_eq!(categories[0], ALL_CATEGORIES);
        let unique: HashSet<&String> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn test_projects_in_filters_by_category() {
        let content = Content::builtin();
        assert_eq!(content.projects_in(ALL_CATEGORIES).len(), content.projects.len());
        let full_stack = content.projects_in("Full Stack");
        assert!(!full_stack.is_empty());
        assert!(full_stack.iter().all(|p| p.category == "Full Stack"));
        assert!(content.projects_in("Embedded").is_empty());
    }

    #[test]
    fn test_load_json5_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{
                // minimal portfolio
                personal_info: {{
                    full_name: "Ada Lovelace",
                    title: "Analyst",
                    location: "London",
                    email: "ada@example.com",
                }},
                services: [
                    {{ name: "Engines", icon: "FaSteam", description: "Analytical ones" }},
                ],
            }}"#
        )?;

        let content = Content::load(file.path())?;
        assert_eq!(content.personal_info.full_name, "Ada Lovelace");
        assert_eq!(content.services[0].icon, Icon::Unknown);
        assert!(content.projects.is_empty());
        assert_eq!(content.project_categories(), vec![ALL_CATEGORIES.to_string()]);
        Ok(())
    }

    #[test]
    fn test_load_rejects_duplicate_project_ids() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{
                personal_info: {{
                    full_name: "Ada Lovelace",
                    title: "Analyst",
                    location: "London",
                    email: "ada@example.com",
                }},
                projects: [
                    {{ id: 7, title: "Engine", category: "Hardware", short_description: "a" }},
                    {{ id: 3, title: "Notes", category: "Writing", short_description: "b" }},
                    {{ id: 7, title: "Loom", category: "Hardware", short_description: "c" }},
                ],
            }}"#
        )?;

        let err = Content::load(file.path()).err().map(|e| e.to_string());
        assert!(err.is_some_and(|m| m.contains("Duplicate project id 7")));
        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Content::load(Path::new("/nonexistent/folio.json5"));
        assert!(err.is_err());
    }
}

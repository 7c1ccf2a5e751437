//! Blog articles. Bodies are typed blocks, not markup strings.

use std::fmt;
use std::str::FromStr;

use super::types::ArticleSection;

mod ai_consulting_for_business;
mod ai_implementation_services;
mod automation_case_studies;
mod enterprise_ai_solutions;
mod hire_ai_consultant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArticleSlug {
    AiConsultingForBusiness,
    AiImplementationServices,
    EnterpriseAiSolutions,
    HowToHireAiConsultant,
    AiBusinessAutomationCaseStudies,
}

impl ArticleSlug {
    pub const ALL: [ArticleSlug; 5] = [
        ArticleSlug::AiConsultingForBusiness,
        ArticleSlug::AiImplementationServices,
        ArticleSlug::EnterpriseAiSolutions,
        ArticleSlug::HowToHireAiConsultant,
        ArticleSlug::AiBusinessAutomationCaseStudies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleSlug::AiConsultingForBusiness => "ai-consulting-for-business",
            ArticleSlug::AiImplementationServices => "ai-implementation-services",
            ArticleSlug::EnterpriseAiSolutions => "enterprise-ai-solutions",
            ArticleSlug::HowToHireAiConsultant => "how-to-hire-ai-consultant",
            ArticleSlug::AiBusinessAutomationCaseStudies => "ai-business-automation-case-studies",
        }
    }

    pub fn article(&self) -> &'static Article {
        match self {
            ArticleSlug::AiConsultingForBusiness => &ai_consulting_for_business::ARTICLE,
            ArticleSlug::AiImplementationServices => &ai_implementation_services::ARTICLE,
            ArticleSlug::EnterpriseAiSolutions => &enterprise_ai_solutions::ARTICLE,
            ArticleSlug::HowToHireAiConsultant => &hire_ai_consultant::ARTICLE,
            ArticleSlug::AiBusinessAutomationCaseStudies => &automation_case_studies::ARTICLE,
        }
    }

    pub fn path(&self) -> String {
        format!("/blog/{}", self.as_str())
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSlug(pub String);

impl fmt::Display for UnknownSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no article with slug '{}'", self.0)
    }
}

impl std::error::Error for UnknownSlug {}

impl FromStr for ArticleSlug {
    type Err = UnknownSlug;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleSlug::ALL
            .into_iter()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| UnknownSlug(s.to_string()))
    }
}

/// Search and social overrides for an article page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleSeo {
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    /// Shorter card text for Twitter. Falls back to `og_description`.
    pub twitter_description: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub slug: ArticleSlug,
    pub category: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Teaser shown on the blog index.
    pub description: &'static str,
    pub publish_date: &'static str,
    pub read_time: &'static str,
    pub seo: ArticleSeo,
    pub sections: &'static [ArticleSection],
}

/// Articles in blog index order.
pub fn all() -> impl Iterator<Item = &'static Article> {
    ArticleSlug::ALL.into_iter().map(|slug| slug.article())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::{Block, Inline};

    #[test]
    fn slugs_round_trip_through_strings() {
        for slug in ArticleSlug::ALL {
            assert_eq!(slug.as_str().parse::<ArticleSlug>(), Ok(slug));
            assert_eq!(slug.to_string(), slug.as_str());
        }
        assert_eq!(
            "ai-consulting".parse::<ArticleSlug>(),
            Err(UnknownSlug("ai-consulting".to_string()))
        );
    }

    #[test]
    fn every_slug_resolves_to_its_own_article() {
        for slug in ArticleSlug::ALL {
            let article = slug.article();
            assert_eq!(article.slug, slug);
            assert!(!article.title.is_empty());
            assert!(!article.sections.is_empty());
            assert!(article.seo.title.ends_with("| Sathi Group"));
        }
    }

    #[test]
    fn sections_have_content() {
        for article in all() {
            for section in article.sections {
                assert!(!section.heading.is_empty(), "{}", article.slug);
                assert!(!section.blocks.is_empty(), "{}: {}", article.slug, section.heading);
            }
        }
    }

    #[test]
    fn links_are_absolute_or_site_paths() {
        fn check(inlines: &[Inline]) {
            for inline in inlines {
                if let Inline::Link { href, text } = inline {
                    assert!(!text.is_empty());
                    assert!(href.starts_with("https://") || href.starts_with('/'), "{}", href);
                }
            }
        }
        for article in all() {
            for section in article.sections {
                for block in section.blocks {
                    match block {
                        Block::Paragraph(inlines) => check(inlines),
                        Block::List(items) => items.iter().for_each(|item| check(item)),
                    }
                }
            }
        }
    }
}

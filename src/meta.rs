//! Search and social metadata for every route, plus the site-wide JSON-LD graph.

use serde::Serialize;
use yew_router::Routable;

use crate::config::{
    absolute_url, og_image_url, CONTACT_EMAIL, LOCALE, OG_IMAGE_HEIGHT, OG_IMAGE_WIDTH, SITE_NAME,
    SITE_URL,
};
use crate::content::home::{SERVICES, TEAM};
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub canonical: String,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub og_type: OgType,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
    pub image_alt: &'static str,
    pub indexable: bool,
}

/// How a tag is keyed in the document head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKey {
    Name(&'static str),
    Property(&'static str),
}

impl TagKey {
    pub fn attribute(&self) -> (&'static str, &'static str) {
        match *self {
            TagKey::Name(name) => ("name", name),
            TagKey::Property(property) => ("property", property),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub key: TagKey,
    pub content: String,
}

impl PageMeta {
    /// `<meta>` tags in the order they are written to the head.
    pub fn tags(&self) -> Vec<MetaTag> {
        let tag = |key, content: &str| MetaTag { key, content: content.to_string() };
        let image = og_image_url();
        vec![
            tag(TagKey::Name("description"), self.description),
            tag(
                TagKey::Name("robots"),
                if self.indexable { "index, follow" } else { "noindex" },
            ),
            tag(TagKey::Property("og:title"), self.og_title),
            tag(TagKey::Property("og:description"), self.og_description),
            tag(TagKey::Property("og:type"), self.og_type.as_str()),
            tag(TagKey::Property("og:url"), &self.canonical),
            tag(TagKey::Property("og:site_name"), SITE_NAME),
            tag(TagKey::Property("og:locale"), LOCALE),
            tag(TagKey::Property("og:image"), &image),
            tag(TagKey::Property("og:image:width"), &OG_IMAGE_WIDTH.to_string()),
            tag(TagKey::Property("og:image:height"), &OG_IMAGE_HEIGHT.to_string()),
            tag(TagKey::Property("og:image:alt"), self.image_alt),
            tag(TagKey::Name("twitter:card"), "summary_large_image"),
            tag(TagKey::Name("twitter:title"), self.twitter_title),
            tag(TagKey::Name("twitter:description"), self.twitter_description),
            tag(TagKey::Name("twitter:image"), &image),
        ]
    }
}

const DEFAULT_IMAGE_ALT: &str = "Sathi Group \u{2014} AI Consulting & Implementation";

pub fn for_route(route: &Route) -> PageMeta {
    let canonical = absolute_url(&route.to_path());
    match route {
        Route::Home => PageMeta {
            title: "Sathi Group \u{2014} Premium AI Advisory",
            description: "White-glove AI coaching, implementation, and transformation for individuals and enterprises. The companies that move now will own the next decade.",
            canonical,
            og_title: "Sathi Group \u{2014} Premium AI Advisory",
            og_description: "White-glove AI coaching, implementation, and transformation for individuals and enterprises.",
            og_type: OgType::Website,
            twitter_title: "Sathi Group \u{2014} Premium AI Advisory",
            twitter_description: "White-glove AI coaching, implementation, and transformation for individuals and enterprises.",
            image_alt: "Sathi Group \u{2014} We Build AI Tools For Your Business",
            indexable: true,
        },
        Route::ForBusiness => PageMeta {
            title: "Business Automation Solutions - Never Miss a Follow-Up Again",
            description: "Stop working evenings and weekends. We set up a digital employee that handles your admin, follow-ups, and operations 24/7. Get back 40+ hours per week.",
            canonical,
            og_title: "Your Business Runs Itself - Even When You're Not There",
            og_description: "Stop working evenings and weekends. Never miss another follow-up. Digital employee handles admin and operations 24/7.",
            og_type: OgType::Website,
            twitter_title: "Your Business Runs Itself - Even When You're Not There",
            twitter_description: "Stop working evenings and weekends. Never miss another follow-up. Digital employee handles admin and operations 24/7.",
            image_alt: DEFAULT_IMAGE_ALT,
            indexable: true,
        },
        Route::CaseStudies => PageMeta {
            title: "AI Automation Case Studies \u{2014} Real Deployments, Real Numbers | Sathi Group",
            description: "See how businesses across e-commerce, real estate, SaaS, marketing, legal, and hospitality deployed AI automation \u{2014} with specific ROI numbers, timelines, and implementation details.",
            canonical,
            og_title: "AI Automation Case Studies \u{2014} Real Deployments, Real Numbers",
            og_description: "Real AI deployment case studies with specific ROI numbers across multiple industries.",
            og_type: OgType::Website,
            twitter_title: "AI Automation Case Studies | Sathi Group",
            twitter_description: "Real AI deployments with real ROI numbers across multiple industries.",
            image_alt: "Sathi Group Case Studies \u{2014} AI Business Automation Results",
            indexable: true,
        },
        Route::Blog => PageMeta {
            title: "AI Business Insights & Guides | Sathi Group",
            description: "Expert guides on AI consulting, implementation services, enterprise AI solutions, and business automation. Learn how to leverage AI for competitive advantage.",
            canonical,
            og_title: "AI Business Insights & Guides | Sathi Group",
            og_description: "Expert guides on AI consulting, implementation, and business automation from Sathi Group.",
            og_type: OgType::Website,
            twitter_title: "AI Business Insights & Guides | Sathi Group",
            twitter_description: "Expert guides on AI consulting, implementation, and business automation from Sathi Group.",
            image_alt: DEFAULT_IMAGE_ALT,
            indexable: true,
        },
        Route::BlogPost { slug } => {
            let seo = &slug.article().seo;
            PageMeta {
                title: seo.title,
                description: seo.description,
                canonical,
                og_title: seo.og_title,
                og_description: seo.og_description,
                og_type: OgType::Article,
                twitter_title: seo.og_title,
                twitter_description: seo.twitter_description.unwrap_or(seo.og_description),
                image_alt: DEFAULT_IMAGE_ALT,
                indexable: true,
            }
        }
        Route::NotFound => PageMeta {
            title: "Page Not Found | Sathi Group",
            description: "The page you were looking for does not exist.",
            canonical: SITE_URL.to_string(),
            og_title: "Page Not Found | Sathi Group",
            og_description: "The page you were looking for does not exist.",
            og_type: OgType::Website,
            twitter_title: "Page Not Found | Sathi Group",
            twitter_description: "The page you were looking for does not exist.",
            image_alt: DEFAULT_IMAGE_ALT,
            indexable: false,
        },
    }
}

/// `{"@id": ...}` reference to another node in the graph.
#[derive(Serialize)]
struct NodeRef {
    #[serde(rename = "@id")]
    id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
}

#[derive(Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    id: String,
    name: &'static str,
    url: &'static str,
    email: &'static str,
    logo: String,
    founder: Vec<Person>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfessionalService {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    id: String,
    name: &'static str,
    url: &'static str,
    description: &'static str,
    email: &'static str,
    image: String,
    area_served: &'static str,
    service_type: Vec<&'static str>,
    provider: NodeRef,
}

#[derive(Serialize)]
struct WebSite {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    id: String,
    url: &'static str,
    name: &'static str,
    publisher: NodeRef,
}

#[derive(Serialize)]
struct Graph {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@graph")]
    graph: (Organization, ProfessionalService, WebSite),
}

fn node_id(fragment: &str) -> String {
    format!("{}/#{}", SITE_URL, fragment)
}

/// The JSON-LD document describing the business.
pub fn structured_data() -> serde_json::Result<String> {
    let organization = Organization {
        kind: "Organization",
        id: node_id("organization"),
        name: SITE_NAME,
        url: SITE_URL,
        email: CONTACT_EMAIL,
        logo: og_image_url(),
        founder: TEAM
            .iter()
            .map(|member| Person { kind: "Person", name: member.name, job_title: member.role })
            .collect(),
    };
    let service = ProfessionalService {
        kind: "ProfessionalService",
        id: node_id("service"),
        name: SITE_NAME,
        url: SITE_URL,
        description: "AI consulting, custom AI implementation, and team training for individuals, growth companies, and enterprises.",
        email: CONTACT_EMAIL,
        image: og_image_url(),
        area_served: "Worldwide",
        service_type: SERVICES.iter().map(|service| service.title).collect(),
        provider: NodeRef { id: node_id("organization") },
    };
    let website = WebSite {
        kind: "WebSite",
        id: node_id("website"),
        url: SITE_URL,
        name: SITE_NAME,
        publisher: NodeRef { id: node_id("organization") },
    };

    serde_json::to_string(&Graph {
        context: "https://schema.org",
        graph: (organization, service, website),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::articles::ArticleSlug;
    use serde_json::Value;

    #[test]
    fn every_public_route_has_a_canonical_under_the_site() {
        for route in Route::public() {
            let meta = for_route(&route);
            assert!(meta.canonical.starts_with(SITE_URL), "{}", meta.canonical);
            assert!(!meta.title.is_empty());
            assert!(!meta.description.is_empty());
            assert!(meta.indexable);
        }
        assert_eq!(for_route(&Route::Home).canonical, "https://sathigroup.ai");
        assert_eq!(for_route(&Route::Blog).canonical, "https://sathigroup.ai/blog");
    }

    #[test]
    fn articles_use_their_own_seo_and_article_type() {
        for slug in ArticleSlug::ALL {
            let meta = for_route(&Route::BlogPost { slug });
            let seo = &slug.article().seo;
            assert_eq!(meta.title, seo.title);
            assert_eq!(meta.og_title, seo.og_title);
            assert_eq!(meta.og_type, OgType::Article);
            assert_eq!(meta.canonical, format!("https://sathigroup.ai/blog/{}", slug));
        }
    }

    #[test]
    fn twitter_card_text_can_differ_from_open_graph() {
        let consulting = for_route(&Route::BlogPost { slug: ArticleSlug::AiConsultingForBusiness });
        assert_eq!(
            consulting.twitter_description,
            "Everything you need to know about AI consulting for business."
        );
        assert_ne!(consulting.twitter_description, consulting.og_description);

        let enterprise = for_route(&Route::BlogPost { slug: ArticleSlug::EnterpriseAiSolutions });
        assert_eq!(enterprise.twitter_description, enterprise.og_description);
    }

    #[test]
    fn not_found_is_not_indexed() {
        let tags = for_route(&Route::NotFound).tags();
        let robots = tags
            .iter()
            .find(|tag| tag.key == TagKey::Name("robots"))
            .map(|tag| tag.content.as_str());
        assert_eq!(robots, Some("noindex"));
    }

    #[test]
    fn tags_are_unique_per_key() {
        let tags = for_route(&Route::CaseStudies).tags();
        for (i, tag) in tags.iter().enumerate() {
            assert!(tags[i + 1..].iter().all(|other| other.key != tag.key), "{:?}", tag.key);
        }
        assert!(tags.contains(&MetaTag {
            key: TagKey::Property("og:image"),
            content: "https://sathigroup.ai/og-image.png".to_string(),
        }));
    }

    #[test]
    fn structured_data_describes_the_business() {
        let json = structured_data().expect("serializes");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["@context"], "https://schema.org");

        let graph = value["@graph"].as_array().expect("graph array");
        let kinds: Vec<&str> = graph.iter().filter_map(|node| node["@type"].as_str()).collect();
        assert_eq!(kinds, ["Organization", "ProfessionalService", "WebSite"]);

        assert_eq!(graph[0]["founder"].as_array().map(Vec::len), Some(TEAM.len()));
        assert_eq!(graph[1]["provider"]["@id"], graph[0]["@id"]);
        assert_eq!(graph[1]["serviceType"].as_array().map(Vec::len), Some(SERVICES.len()));
        assert_eq!(graph[2]["url"], SITE_URL);
    }
}

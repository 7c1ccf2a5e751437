use std::fmt::Write;

use chrono::NaiveDate;
use yew_router::Routable;

use crate::config::absolute_url;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

fn schedule(route: &Route) -> Option<(ChangeFrequency, f32)> {
    match route {
        Route::Home => Some((ChangeFrequency::Weekly, 1.0)),
        Route::CaseStudies => Some((ChangeFrequency::Weekly, 0.9)),
        Route::Blog => Some((ChangeFrequency::Weekly, 0.8)),
        Route::ForBusiness => Some((ChangeFrequency::Monthly, 0.8)),
        Route::BlogPost { .. } => Some((ChangeFrequency::Monthly, 0.7)),
        Route::NotFound => None,
    }
}

/// One entry per public route, all stamped with `last_modified`.
pub fn entries(last_modified: NaiveDate) -> Vec<SitemapEntry> {
    Route::public()
        .iter()
        .filter_map(|route| {
            let (change_frequency, priority) = schedule(route)?;
            Some(SitemapEntry {
                url: absolute_url(&route.to_path()),
                last_modified,
                change_frequency,
                priority,
            })
        })
        .collect()
}

pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing to a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            entry.url,
            entry.last_modified.format("%Y-%m-%d"),
            entry.change_frequency.as_str(),
            entry.priority
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt() -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        absolute_url("/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SITE_DOMAIN;
    use std::collections::HashSet;
    use url::Url;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).expect("valid date")
    }

    #[test]
    fn one_entry_per_public_route() {
        let entries = entries(date());
        assert_eq!(entries.len(), Route::public().len());
        assert_eq!(entries.len(), 9);

        let unique: HashSet<&str> = entries.iter().map(|entry| entry.url.as_str()).collect();
        assert_eq!(unique.len(), entries.len());
    }

    #[test]
    fn entries_are_absolute_urls_on_the_site() {
        for entry in entries(date()) {
            let url = Url::parse(&entry.url).expect("absolute url");
            assert_eq!(url.scheme(), "https");
            assert_eq!(url.host_str(), Some(SITE_DOMAIN));
            assert!(url.query().is_none());
            assert!(url.fragment().is_none());
        }
    }

    #[test]
    fn priorities_follow_page_importance() {
        let entries = entries(date());
        let find = |path: &str| {
            entries
                .iter()
                .find(|entry| entry.url == absolute_url(path))
                .map(|entry| (entry.change_frequency, entry.priority))
        };
        assert_eq!(find("/"), Some((ChangeFrequency::Weekly, 1.0)));
        assert_eq!(find("/case-studies"), Some((ChangeFrequency::Weekly, 0.9)));
        assert_eq!(find("/blog"), Some((ChangeFrequency::Weekly, 0.8)));
        assert_eq!(find("/for-business"), Some((ChangeFrequency::Monthly, 0.8)));
        assert_eq!(
            find("/blog/how-to-hire-ai-consultant"),
            Some((ChangeFrequency::Monthly, 0.7))
        );
    }

    #[test]
    fn xml_lists_every_entry() {
        let entries = entries(date());
        let xml = to_xml(&entries);
        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), entries.len());
        assert!(xml.contains("<loc>https://sathigroup.ai</loc>"));
        assert!(xml.contains("<lastmod>2025-02-14</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        assert!(robots_txt().contains("Sitemap: https://sathigroup.ai/sitemap.xml"));
    }
}

use log::info;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

pub mod config;
pub mod contact;
pub mod meta;
pub mod og_image;
pub mod sitemap;
pub mod styles;

pub mod content {
    pub mod articles;
    pub mod business;
    pub mod case_studies;
    pub mod home;
    pub mod types;
}

pub mod hooks {
    pub mod reveal;
    pub mod scroll;
    pub mod subscription;
}

pub mod components {
    pub mod article_page;
    pub mod counter;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod icons;
    pub mod nav;
    pub mod page_head;
    pub mod rich_text;
}

pub mod pages {
    pub mod blog;
    pub mod case_studies;
    pub mod for_business;
    pub mod home;
    pub mod not_found;
}

use components::page_head::PageHead;
use content::articles::ArticleSlug;
use pages::{
    blog::{Blog, BlogPost},
    case_studies::CaseStudies,
    for_business::ForBusiness,
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/for-business")]
    ForBusiness,
    #[at("/case-studies")]
    CaseStudies,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: ArticleSlug },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Every page that is linked publicly, in sitemap order.
    pub fn public() -> Vec<Route> {
        let mut routes = vec![Route::Home, Route::CaseStudies, Route::Blog, Route::ForBusiness];
        routes.extend(ArticleSlug::ALL.into_iter().map(|slug| Route::BlogPost { slug }));
        routes
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::ForBusiness => {
            info!("Rendering ForBusiness page");
            html! { <ForBusiness /> }
        }
        Route::CaseStudies => {
            info!("Rendering CaseStudies page");
            html! { <CaseStudies /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering BlogPost page for {}", slug);
            html! { <BlogPost {slug} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{styles::GLOBAL}</style>
            <PageHead />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq, Eq, Debug)]
pub struct ServerAppProps {
    pub path: String,
}

/// Renders one route without a browser, over an in-memory history. The render
/// tests drive it through `yew::ServerRenderer`.
#[function_component]
pub fn ServerApp(props: &ServerAppProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.path.as_str());

    html! {
        <Router history={history}>
            <style>{styles::GLOBAL}</style>
            <Switch<Route> render={switch} />
        </Router>
    }
}

#[cfg(test)]
pub(crate) mod render {
    use super::*;

    pub async fn page(path: &str) -> String {
        let path = path.to_string();
        yew::ServerRenderer::<ServerApp>::with_props(move || ServerAppProps { path })
            .render()
            .await
    }

    /// Escapes text the way the server renderer does.
    pub fn escaped(text: &str) -> String {
        text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
    }

    pub fn hrefs(html: &str) -> Vec<String> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(|href| href.replace("&amp;", "&"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::render::{escaped, hrefs, page};
    use super::*;
    use crate::content::case_studies::CASE_STUDIES;
    use crate::contact::query_param;

    #[test]
    fn article_routes_round_trip() {
        for slug in ArticleSlug::ALL {
            let route = Route::BlogPost { slug };
            assert_eq!(route.to_path(), slug.path());
            assert_eq!(Route::recognize(&slug.path()), Some(route));
        }
    }

    #[test]
    fn unknown_slug_is_not_an_article() {
        let route = Route::recognize("/blog/not-a-real-post");
        assert!(!matches!(route, Some(Route::BlogPost { .. })));
    }

    #[tokio::test]
    async fn every_article_renders_title_and_sections() {
        for slug in ArticleSlug::ALL {
            let article = slug.article();
            let html = page(&slug.path()).await;
            let h1 = format!(">{}</h1>", escaped(article.title));
            assert!(html.contains(&h1), "missing title for {}", slug);
            assert_eq!(
                html.matches("class=\"article-section-heading\"").count(),
                article.sections.len(),
                "section count for {}",
                slug
            );
        }
    }

    #[tokio::test]
    async fn case_studies_render_in_data_order() {
        let html = page("/case-studies").await;
        assert_eq!(html.matches("<article class=\"case-study").count(), CASE_STUDIES.len());

        let positions: Vec<usize> = CASE_STUDIES
            .iter()
            .map(|study| {
                html.find(&escaped(study.headline))
                    .unwrap_or_else(|| panic!("missing {}", study.headline))
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn every_mailto_link_has_a_subject() {
        let mut seen = 0;
        for route in Route::public() {
            let html = page(&route.to_path()).await;
            for href in hrefs(&html).into_iter().filter(|href| href.starts_with("mailto:")) {
                let subject = query_param(&href, "subject").unwrap_or_default();
                assert!(!subject.trim().is_empty(), "{} on {}", href, route.to_path());
                seen += 1;
            }
        }
        assert!(seen > 0);
    }

    #[tokio::test]
    async fn unknown_paths_render_not_found() {
        for path in ["/blog/not-a-real-post", "/nowhere"] {
            let html = page(path).await;
            assert!(html.contains("class=\"not-found\""), "{}", path);
        }
    }

    #[tokio::test]
    async fn home_sections_keep_their_anchors() {
        let html = page("/").await;
        let anchors = ["id=\"services\"", "id=\"use-cases\"", "id=\"approach\"", "id=\"team\"", "id=\"contact\""];
        let positions: Vec<usize> = anchors
            .iter()
            .map(|anchor| html.find(anchor).unwrap_or_else(|| panic!("missing {}", anchor)))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::article_page::ArticlePage;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav::{Nav, READING_LINKS};
use crate::contact::{ContactChannel, GENERAL_INQUIRY};
use crate::content::articles::{self, ArticleSlug};
use crate::hooks::scroll::use_initial_scroll;
use crate::Route;

const HERO_HEADLINE: &[&str] = &["AI strategy &", "implementation guides."];

#[function_component]
pub fn Blog() -> Html {
    use_initial_scroll();

    html! {
        <>
            <Nav
                links={READING_LINKS}
                action_label="Get in Touch"
                channel={ContactChannel::Email(GENERAL_INQUIRY)}
                solid={true}
            />
            <main class="blog-page">
                <Hero
                    eyebrow="INSIGHTS"
                    headline={HERO_HEADLINE}
                    lede="Practical, no-fluff articles on AI consulting, implementation, and business automation from the team at Sathi Group."
                />
                <section class="section">
                    <div class="container">
                        { for articles::all().map(|article| html! {
                            <Link<Route> to={Route::BlogPost { slug: article.slug }} classes="article-row">
                                <p class="eyebrow">{article.category}</p>
                                <div>
                                    <h2>{article.title}</h2>
                                    <p class="muted">{article.description}</p>
                                </div>
                            </Link<Route>>
                        }) }
                    </div>
                </section>
            </main>
            <Footer />
            <style>
                {r#"
                .article-row {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    padding: 2.5rem 0;
                    border-top: 1px solid rgba(212, 206, 195, 0.6);
                }
                .article-row .eyebrow {
                    color: var(--sand-400);
                }
                .article-row h2 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                    transition: color 0.3s;
                }
                .article-row:hover h2 {
                    color: var(--ink-light);
                }
                .article-row p {
                    margin: 0;
                }
                @media (min-width: 1024px) {
                    .article-row {
                        grid-template-columns: 2fr 10fr;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: ArticleSlug,
}

#[function_component]
pub fn BlogPost(props: &BlogPostProps) -> Html {
    let article = props.slug.article();

    html! {
        <ArticlePage
            category={article.category}
            title={article.title}
            subtitle={article.subtitle}
            publish_date={article.publish_date}
            read_time={article.read_time}
            sections={article.sections}
        />
    }
}

#[cfg(test)]
mod tests {
    use crate::content::articles::{self, ArticleSlug};
    use crate::render;

    #[tokio::test]
    async fn index_lists_every_article_in_order() {
        let html = render::page("/blog").await;
        let hrefs = render::hrefs(&html);
        let listed: Vec<&String> = hrefs
            .iter()
            .filter(|href| href.starts_with("/blog/"))
            .collect();
        let expected: Vec<String> = ArticleSlug::ALL.iter().map(|slug| slug.path()).collect();
        assert_eq!(listed, expected.iter().collect::<Vec<_>>());

        let mut cursor = 0;
        for article in articles::all() {
            let title = render::escaped(article.title);
            let found = html[cursor..]
                .find(&title)
                .unwrap_or_else(|| panic!("{} out of order", article.title));
            cursor += found + title.len();
        }
    }

    #[tokio::test]
    async fn headline_ampersand_is_escaped() {
        let html = render::page("/blog").await;
        assert!(html.contains("AI strategy &amp;"));
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cta::ContactLink;
use crate::components::footer::Footer;
use crate::components::icons::ArrowUpRight;
use crate::components::nav::{Nav, READING_LINKS};
use crate::components::rich_text::Blocks;
use crate::contact::{ContactChannel, GENERAL_INQUIRY};
use crate::content::types::ArticleSection;
use crate::hooks::scroll::use_initial_scroll;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ArticlePageProps {
    pub category: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub publish_date: &'static str,
    pub read_time: &'static str,
    pub sections: &'static [ArticleSection],
}

/// Shared template for long-form posts: header, body sections, further reading and a closing call to action.
#[function_component]
pub fn ArticlePage(props: &ArticlePageProps) -> Html {
    use_initial_scroll();
    let channel = ContactChannel::Email(GENERAL_INQUIRY);

    html! {
        <>
            <Nav links={READING_LINKS} action_label="Get in Touch" {channel} solid={true} />
            <main class="article-page">
                <section class="article-hero">
                    <div class="container narrow">
                        <p class="eyebrow">{props.category}</p>
                        <h1 class="display article-title">{props.title}</h1>
                        <p class="article-subtitle">{props.subtitle}</p>
                        <div class="article-byline">
                            <span>{props.publish_date}</span>
                            <span>{"\u{b7}"}</span>
                            <span>{props.read_time}</span>
                        </div>
                    </div>
                </section>

                <div class="container narrow article-body">
                    { for props.sections.iter().map(|section| html! {
                        <section class="article-section">
                            <h2 class="article-section-heading">{section.heading}</h2>
                            <div class="article-content">
                                <Blocks blocks={section.blocks} />
                            </div>
                        </section>
                    }) }

                    <div class="article-footer-block">
                        <h2>{"Continue Reading"}</h2>
                        <div class="continue-links">
                            <Link<Route> to={Route::CaseStudies} classes="link-underline">
                                {"\u{2192} View our case studies and client results"}
                            </Link<Route>>
                            <Link<Route> to={Route::Home} classes="link-underline">
                                {"\u{2192} Learn about our AI consulting services"}
                            </Link<Route>>
                            <Link<Route> to={Route::Blog} classes="link-underline">
                                {"\u{2192} Browse all insights"}
                            </Link<Route>>
                        </div>
                    </div>

                    <div class="article-footer-block">
                        <h2>{"Ready to Transform Your Business with AI?"}</h2>
                        <p class="muted">
                            {"Book a confidential consultation with our team to identify your highest-impact AI opportunities and get a concrete implementation roadmap."}
                        </p>
                        <ContactLink {channel} class="btn-primary">
                            {"BOOK YOUR CONSULTATION"}
                            <ArrowUpRight />
                        </ContactLink>
                    </div>
                </div>
            </main>
            <Footer />
            <style>
                {r#"
                .article-hero {
                    padding: 8rem 1.5rem 3rem;
                }
                .article-title {
                    margin-bottom: 1.5rem;
                }
                .article-subtitle {
                    font-size: 1.125rem;
                    line-height: 1.65;
                    color: var(--ink-muted);
                    margin: 0 0 1.5rem;
                }
                .article-byline {
                    display: flex;
                    gap: 1rem;
                    font-family: var(--font-mono);
                    font-size: 13px;
                    color: var(--sand-500);
                }
                .article-body {
                    padding: 3rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .article-section-heading {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .article-content {
                    color: var(--ink-muted);
                    line-height: 1.85;
                }
                .article-content p {
                    margin: 0 0 1rem;
                }
                .article-content strong {
                    color: var(--ink);
                    font-weight: 600;
                }
                .article-content ul {
                    margin: 0 0 1rem;
                    padding-left: 1.25rem;
                }
                .article-content li {
                    margin-bottom: 0.5rem;
                }
                .inline-link {
                    color: var(--ink);
                    text-decoration: underline;
                    text-underline-offset: 3px;
                    text-decoration-color: var(--sand-400);
                }
                .inline-link:hover {
                    text-decoration-color: var(--ink);
                }
                .article-footer-block {
                    border-top: 1px solid rgba(212, 206, 195, 0.6);
                    padding-top: 2.5rem;
                }
                .article-footer-block h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .article-footer-block .muted {
                    margin: 0 0 1.5rem;
                }
                .continue-links {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: var(--ink-muted);
                }
                "#}
            </style>
        </>
    }
}

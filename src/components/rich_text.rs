use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::types::{Block, Inline};
use crate::Route;

/// Where a link in authored text should go.
#[derive(Clone, Debug, PartialEq)]
pub enum LinkTarget {
    Internal(Route),
    External(&'static str),
}

/// Site paths the router knows become in-app links. Everything else opens in a new tab.
pub fn link_target(href: &'static str) -> LinkTarget {
    if href.starts_with('/') {
        match Route::recognize(href) {
            Some(Route::NotFound) | None => {}
            Some(route) => return LinkTarget::Internal(route),
        }
    }
    LinkTarget::External(href)
}

fn inline(run: &Inline) -> Html {
    match *run {
        Inline::Text(text) => html! { {text} },
        Inline::Strong(text) => html! { <strong>{text}</strong> },
        Inline::Break => html! { <br /> },
        Inline::Link { text, href } => match link_target(href) {
            LinkTarget::Internal(route) => html! {
                <Link<Route> to={route} classes="inline-link">{text}</Link<Route>>
            },
            LinkTarget::External(href) => html! {
                <a href={href} class="inline-link" target="_blank" rel="noopener noreferrer">{text}</a>
            },
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct RichTextProps {
    pub inlines: &'static [Inline],
}

#[function_component]
pub fn RichText(props: &RichTextProps) -> Html {
    html! { <>{ for props.inlines.iter().map(inline) }</> }
}

#[derive(Properties, PartialEq)]
pub struct BlocksProps {
    pub blocks: &'static [Block],
}

#[function_component]
pub fn Blocks(props: &BlocksProps) -> Html {
    html! {
        <>
            { for props.blocks.iter().map(|block| match *block {
                Block::Paragraph(inlines) => html! { <p><RichText {inlines} /></p> },
                Block::List(items) => html! {
                    <ul>
                        { for items.iter().map(|item| html! { <li><RichText inlines={*item} /></li> }) }
                    </ul>
                },
            }) }
        </>
    }
}

/// Renders a multi-line heading with `<br>` between the lines.
pub fn lines(lines: &'static [&'static str]) -> Html {
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            html! {
                <>
                    {*line}
                    if i < last {
                        <br />
                    }
                </>
            }
        })
        .collect::<Html>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::articles::ArticleSlug;

    #[test]
    fn site_paths_stay_in_app() {
        assert_eq!(link_target("/case-studies"), LinkTarget::Internal(Route::CaseStudies));
        assert_eq!(
            link_target("/blog/enterprise-ai-solutions"),
            LinkTarget::Internal(Route::BlogPost { slug: ArticleSlug::EnterpriseAiSolutions })
        );
    }

    #[test]
    fn unknown_paths_and_other_sites_open_externally() {
        assert_eq!(link_target("https://johann.fyi"), LinkTarget::External("https://johann.fyi"));
        assert_eq!(link_target("/no-such-page"), LinkTarget::External("/no-such-page"));
    }

    #[tokio::test]
    async fn markup_in_text_is_escaped() {
        static UNSAFE: &[Inline] = &[Inline::Text("<script>alert(1)</script>"), Inline::Strong("a & b")];

        #[function_component]
        fn Sample() -> Html {
            html! { <p><RichText inlines={UNSAFE} /></p> }
        }

        let html = yew::LocalServerRenderer::<Sample>::new().render().await;
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<strong>a &amp; b</strong>"));
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cta::ContactLink;
use crate::contact::ContactChannel;
use crate::hooks::scroll::{use_scrolled, NAV_SCROLL_THRESHOLD};
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum NavTarget {
    Page(Route),
    /// Anchor on the home page, e.g. `services` for `/#services`.
    Section(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

/// Link to a home page section, reachable from any page.
pub fn section_href(anchor: &str) -> String {
    format!("/#{}", anchor)
}

pub const HOME_LINKS: &[NavItem] = &[
    NavItem { label: "Approach", target: NavTarget::Section("services") },
    NavItem { label: "Case Studies", target: NavTarget::Page(Route::CaseStudies) },
    NavItem { label: "Team", target: NavTarget::Section("team") },
    NavItem { label: "Insights", target: NavTarget::Page(Route::Blog) },
    NavItem { label: "Contact", target: NavTarget::Section("contact") },
];

pub const BUSINESS_LINKS: &[NavItem] = &[
    NavItem { label: "Services", target: NavTarget::Section("services") },
    NavItem { label: "Use Cases", target: NavTarget::Section("use-cases") },
    NavItem { label: "Case Studies", target: NavTarget::Page(Route::CaseStudies) },
    NavItem { label: "For Business", target: NavTarget::Page(Route::ForBusiness) },
    NavItem { label: "Contact", target: NavTarget::Section("contact") },
];

pub const CASE_STUDY_LINKS: &[NavItem] = &[
    NavItem { label: "Home", target: NavTarget::Page(Route::Home) },
    NavItem { label: "Insights", target: NavTarget::Page(Route::Blog) },
];

pub const READING_LINKS: &[NavItem] = &[
    NavItem { label: "Home", target: NavTarget::Page(Route::Home) },
    NavItem { label: "Case Studies", target: NavTarget::Page(Route::CaseStudies) },
    NavItem { label: "Insights", target: NavTarget::Page(Route::Blog) },
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub links: &'static [NavItem],
    pub action_label: &'static str,
    pub channel: ContactChannel,
    /// Keep the background on even at the top of the page.
    #[prop_or_default]
    pub solid: bool,
}

#[function_component]
pub fn Nav(props: &NavProps) -> Html {
    let scrolled = use_scrolled(NAV_SCROLL_THRESHOLD);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = props.links.iter().map(|item| {
        let link = match &item.target {
            NavTarget::Page(route) => html! {
                <Link<Route> to={route.clone()} classes="nav-link link-underline">
                    {item.label}
                </Link<Route>>
            },
            NavTarget::Section(anchor) => html! {
                <a href={section_href(anchor)} class="nav-link link-underline">{item.label}</a>
            },
        };
        html! { <div onclick={close_menu.clone()}>{link}</div> }
    });

    html! {
        <nav class={classes!("top-nav", (props.solid || scrolled).then_some("scrolled"))}>
            <div class="nav-content container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"SATHI GROUP"}
                </Link<Route>>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for links }
                    <ContactLink channel={props.channel} class="nav-action">
                        {props.action_label}
                    </ContactLink>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    border-bottom: 1px solid transparent;
                    transition: background-color 500ms ease, border-color 500ms ease;
                }
                .top-nav.scrolled {
                    background: rgba(250, 249, 247, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom-color: var(--sand-200);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.25rem 1.5rem;
                }
                .nav-logo {
                    font-family: var(--font-mono);
                    font-size: 13px;
                    letter-spacing: 0.15em;
                    color: var(--ink-muted);
                    transition: color 200ms ease;
                }
                .nav-logo:hover,
                .nav-link:hover {
                    color: var(--ink);
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    font-size: 13px;
                    color: var(--ink-muted);
                    transition: color 200ms ease;
                }
                .nav-action {
                    font-family: var(--font-mono);
                    font-size: 13px;
                    letter-spacing: 0.05em;
                    border: 1px solid rgba(26, 25, 21, 0.2);
                    padding: 0.5rem 1rem;
                    transition: all 300ms ease;
                }
                .nav-action:hover {
                    background: var(--ink);
                    color: var(--sand-50);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }
                .burger-menu span {
                    display: block;
                    width: 20px;
                    height: 1px;
                    background: var(--ink);
                }
                @media (max-width: 640px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        background: var(--sand-50);
                        border-bottom: 1px solid var(--sand-200);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    fn link_to(links: &[NavItem], label: &str) -> Option<NavTarget> {
        links.iter().find(|item| item.label == label).map(|item| item.target.clone())
    }

    #[test]
    fn approach_opens_what_we_do() {
        assert_eq!(link_to(HOME_LINKS, "Approach"), Some(NavTarget::Section("services")));
        assert_eq!(section_href("services"), "/#services");
    }

    #[tokio::test]
    async fn home_section_links_land_on_rendered_sections() {
        let html = render::page("/").await;
        let what_we_do = html.find("WHAT WE DO").expect("services section");
        let services = html.find("id=\"services\"").expect("services anchor");
        assert!(services < what_we_do);

        for item in HOME_LINKS {
            if let NavTarget::Section(anchor) = item.target {
                assert!(html.contains(&format!("href=\"{}\"", section_href(anchor))));
            }
        }
        for item in HOME_LINKS.iter().chain(BUSINESS_LINKS) {
            if let NavTarget::Section(anchor) = item.target {
                assert!(html.contains(&format!("id=\"{}\"", anchor)), "{}", anchor);
            }
        }
    }
}

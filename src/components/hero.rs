use yew::prelude::*;

use crate::components::cta::ContactLink;
use crate::components::icons::ArrowUpRight;
use crate::components::rich_text::lines;
use crate::contact::ContactChannel;
use crate::hooks::scroll::{parallax_offset, use_scroll_y};

/// Share of the scroll distance the decoration follows.
const PARALLAX_RATE: f64 = 0.25;
const PARALLAX_MAX_PX: f64 = 160.0;

#[derive(Clone, Debug, PartialEq)]
pub struct HeroAction {
    pub label: &'static str,
    pub channel: ContactChannel,
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub eyebrow: &'static str,
    pub headline: &'static [&'static str],
    pub lede: &'static str,
    #[prop_or_default]
    pub action: Option<HeroAction>,
    #[prop_or_default]
    pub note: Option<&'static str>,
    /// Full-height layout with the drifting ring behind the text.
    #[prop_or_default]
    pub tall: bool,
}

#[function_component]
pub fn Hero(props: &HeroProps) -> Html {
    html! {
        <section class={classes!("hero", props.tall.then_some("hero-tall"))}>
            if props.tall {
                <ParallaxRing />
            }
            <div class="container hero-inner">
                <p class="eyebrow fade-up">{props.eyebrow}</p>
                <h1 class="display fade-up-1">
                    { lines(props.headline) }
                </h1>
                <div class="hero-lede fade-up-2">
                    <p>{props.lede}</p>
                </div>
                if let Some(action) = &props.action {
                    <div class="hero-action fade-up-3">
                        <ContactLink channel={action.channel} class="btn-primary">
                            {action.label}
                            <ArrowUpRight />
                        </ContactLink>
                    </div>
                }
                if let Some(note) = props.note {
                    <p class="hero-note fade-up-4">{note}</p>
                }
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 1.5rem 4rem;
                }
                .hero-tall {
                    min-height: 100svh;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                }
                .hero-inner {
                    position: relative;
                }
                .hero .eyebrow {
                    margin-bottom: 1.5rem;
                }
                .hero-lede {
                    display: grid;
                    grid-template-columns: 1fr;
                    margin-top: 2.5rem;
                }
                .hero-lede p {
                    font-size: 1.125rem;
                    line-height: 1.65;
                    color: var(--ink-muted);
                    margin: 0;
                }
                .hero-action {
                    margin-top: 3rem;
                }
                .hero-note {
                    margin-top: 2rem;
                    font-family: var(--font-mono);
                    font-size: 13px;
                    color: var(--sand-400);
                }
                .parallax-ring {
                    position: absolute;
                    top: 12%;
                    right: -8rem;
                    width: 36rem;
                    height: 36rem;
                    border: 1px solid var(--sand-200);
                    border-radius: 50%;
                    pointer-events: none;
                    will-change: transform;
                }
                @media (min-width: 1024px) {
                    .hero-lede {
                        grid-template-columns: repeat(12, 1fr);
                    }
                    .hero-lede p {
                        grid-column: 8 / span 5;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component]
fn ParallaxRing() -> Html {
    let scroll_y = use_scroll_y();
    let offset = parallax_offset(scroll_y, PARALLAX_RATE, PARALLAX_MAX_PX);

    html! {
        <div
            class="parallax-ring"
            aria-hidden="true"
            style={format!("transform: translate3d(0, {:.1}px, 0)", offset)}
        ></div>
    }
}

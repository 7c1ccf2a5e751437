use yew::prelude::*;

use crate::components::icons::ArrowUpRight;
use crate::components::rich_text::lines;
use crate::contact::ContactChannel;
use crate::hooks::reveal::{reveal_classes, use_in_view, SECTION_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct ContactLinkProps {
    pub channel: ContactChannel,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Outbound link to the mail client or the booking page.
#[function_component]
pub fn ContactLink(props: &ContactLinkProps) -> Html {
    html! {
        <a
            href={props.channel.href()}
            class={props.class.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub channel: ContactChannel,
    /// Headline, one entry per line.
    pub headline: &'static [&'static str],
    pub body: &'static str,
    pub button: &'static str,
    #[prop_or_default]
    pub note: Option<&'static str>,
}

#[function_component]
pub fn Cta(props: &CtaProps) -> Html {
    let (node, visible) = use_in_view(SECTION_THRESHOLD);

    html! {
        <section id="contact" class="cta">
            <div ref={node} class={classes!("container", reveal_classes(visible))}>
                <div class="rule"></div>
                <div class="cta-grid">
                    <h2 class="display cta-headline">
                        { lines(props.headline) }
                    </h2>
                    <div class="cta-aside">
                        <p class="muted">{props.body}</p>
                        <ContactLink channel={props.channel} class="btn-primary">
                            {props.button}
                            <ArrowUpRight />
                        </ContactLink>
                        if let Some(note) = props.note {
                            <p class="cta-note">{note}</p>
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .cta {
                    padding: 8rem 1.5rem;
                }
                .cta-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .cta-aside {
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    align-items: flex-start;
                    gap: 2rem;
                }
                .cta-aside .muted {
                    margin: 0;
                }
                .cta-note {
                    font-family: var(--font-mono);
                    font-size: 13px;
                    color: var(--sand-400);
                    margin: 0;
                }
                @media (min-width: 1024px) {
                    .cta-grid {
                        grid-template-columns: 2fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

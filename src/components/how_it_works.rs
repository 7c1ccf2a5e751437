use yew::prelude::*;

use crate::components::rich_text::lines;
use crate::content::types::Step;
use crate::hooks::reveal::{reveal_classes, stagger_style, use_in_view, SECTION_THRESHOLD};

const STEP_STAGGER_MS: u32 = 120;
const STEP_STAGGER_CAP_MS: u32 = 800;

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    #[prop_or_default]
    pub id: Option<&'static str>,
    pub heading: &'static [&'static str],
    #[prop_or_default]
    pub subheading: Option<&'static str>,
    pub steps: &'static [Step],
}

/// Numbered process steps beside a section heading.
#[function_component]
pub fn HowItWorks(props: &HowItWorksProps) -> Html {
    let (node, visible) = use_in_view(SECTION_THRESHOLD);

    html! {
        <section id={props.id} ref={node} class="section how-it-works">
            <div class="container">
                <div class="rule"></div>
                <div class="split">
                    <div>
                        <p class={classes!("eyebrow", reveal_classes(visible))}>{"PROCESS"}</p>
                        <h2 class={classes!("headline", reveal_classes(visible))}>
                            { lines(props.heading) }
                        </h2>
                        if let Some(subheading) = props.subheading {
                            <p class={classes!("muted", "how-subheading", reveal_classes(visible))}>{subheading}</p>
                        }
                    </div>
                    <div>
                        { for props.steps.iter().enumerate().map(|(i, step)| html! {
                            <div
                                class={classes!("step", reveal_classes(visible))}
                                style={stagger_style(i, STEP_STAGGER_MS, STEP_STAGGER_CAP_MS)}
                            >
                                <span class="step-number">{step.number}</span>
                                <div>
                                    <h3>{step.title}</h3>
                                    <p class="muted">{step.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .how-subheading {
                    margin-top: 1.5rem;
                }
                .step {
                    display: flex;
                    gap: 1.5rem;
                    padding: 2rem 0;
                    border-top: 1px solid rgba(212, 206, 195, 0.6);
                }
                .step-number {
                    font-family: var(--font-mono);
                    font-size: 13px;
                    color: var(--sand-400);
                    padding-top: 0.25rem;
                    flex-shrink: 0;
                }
                .step h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }
                .step p {
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}

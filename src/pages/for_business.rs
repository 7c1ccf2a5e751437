use yew::prelude::*;

use crate::components::cta::Cta;
use crate::components::footer::Footer;
use crate::components::hero::{Hero, HeroAction};
use crate::components::how_it_works::HowItWorks;
use crate::components::icons::{Check, Clock, Cross, Dollar};
use crate::components::nav::{Nav, BUSINESS_LINKS};
use crate::components::rich_text::lines;
use crate::contact::{ContactChannel, BUSINESS_CONSULTATION};
use crate::content::business::{
    COST_COMPARISON, DIGITAL_EMPLOYEE_TASKS, OUTCOMES, PAIN_POINTS, SAVINGS_DETAIL,
    SAVINGS_HEADLINE, STEPS,
};
use crate::content::types::CostColumn;
use crate::hooks::reveal::{
    reveal_classes, stagger_style, use_in_view, GRID_THRESHOLD, SECTION_THRESHOLD,
};
use crate::hooks::scroll::use_initial_scroll;

const HERO_HEADLINE: &[&str] = &["Your business runs itself.", "Even when you're not there."];
const STEPS_HEADING: &[&str] = &["Simple setup.", "Immediate results."];
const CTA_HEADLINE: &[&str] = &["Stop working in", "your business.", "Start working on it."];

const CHANNEL: ContactChannel = ContactChannel::Email(BUSINESS_CONSULTATION);

const LIST_STAGGER_MS: u32 = 80;
const LIST_STAGGER_CAP_MS: u32 = 800;

/// Two-digit ordinal shown beside each pain point.
fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[function_component]
fn PainPoints() -> Html {
    let (node, visible) = use_in_view(GRID_THRESHOLD);

    html! {
        <section ref={node} class="section">
            <div class="container">
                <div class={classes!("section-intro", reveal_classes(visible))}>
                    <p class="eyebrow">{"THE PROBLEM"}</p>
                    <h2 class="headline">{"Sound familiar?"}</h2>
                    <p class="muted intro-note">{"The problems that keep business owners up at night."}</p>
                </div>
                <div class="pain-grid">
                    { for PAIN_POINTS.iter().enumerate().map(|(i, pain)| html! {
                        <div
                            class={classes!("pain-point", reveal_classes(visible))}
                            style={stagger_style(i, LIST_STAGGER_MS, LIST_STAGGER_CAP_MS)}
                        >
                            <span class="pain-number">{ordinal(i)}</span>
                            <h3>{pain.title}</h3>
                            <p class="muted">{pain.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn outcome_icon(index: usize) -> Html {
    match index {
        0 => html! { <Clock /> },
        1 => html! { <Check /> },
        _ => html! { <Dollar /> },
    }
}

#[function_component]
fn Solution() -> Html {
    let (node, visible) = use_in_view(SECTION_THRESHOLD);

    html! {
        <section ref={node} class="section dark">
            <div class="container">
                <div class={classes!("section-intro", reveal_classes(visible))}>
                    <p class="eyebrow">{"THE SOLUTION"}</p>
                    <h2 class="headline">{"What your digital employee handles"}</h2>
                    <p class="muted intro-note">
                        {"We set up a digital employee that handles your repetitive tasks, follows up with customers, manages your schedule, and keeps your operations running smoothly\u{2014}without sick days, vacation requests, or salary negotiations."}
                    </p>
                </div>
                <div class="solution-grid">
                    <div>
                        { for DIGITAL_EMPLOYEE_TASKS.iter().enumerate().map(|(i, task)| html! {
                            <div
                                class={classes!("task", reveal_classes(visible))}
                                style={stagger_style(i, LIST_STAGGER_MS, LIST_STAGGER_CAP_MS)}
                            >
                                <Check />
                                <span>{*task}</span>
                            </div>
                        }) }
                    </div>
                    <div class={classes!("outcomes", reveal_classes(visible))}>
                        <h3>{"The result?"}</h3>
                        { for OUTCOMES.iter().enumerate().map(|(i, (lead, rest))| html! {
                            <div class="outcome">
                                { outcome_icon(i) }
                                <span class="muted"><strong>{*lead}</strong>{*rest}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn cost_column(column: &CostColumn) -> Html {
    html! {
        <div class={classes!("cost-column", column.favourable.then_some("favourable"))}>
            <div class="cost-title">
                if column.favourable {
                    <Check />
                } else {
                    <Cross />
                }
                <h3>{column.title}</h3>
            </div>
            <dl class="cost-lines">
                { for column.lines.iter().map(|line| html! {
                    <div class="cost-line">
                        <dt class="muted">{line.label}</dt>
                        <dd>{line.value}</dd>
                    </div>
                }) }
            </dl>
            <div class="cost-total">
                <span class="muted">{"Total monthly cost"}</span>
                <span class="cost-total-value">{column.total}</span>
            </div>
        </div>
    }
}

#[function_component]
fn CostComparison() -> Html {
    let (node, visible) = use_in_view(SECTION_THRESHOLD);

    html! {
        <section ref={node} class="section dark">
            <div class="container">
                <div class={classes!("section-intro", reveal_classes(visible))}>
                    <p class="eyebrow">{"THE MATH"}</p>
                    <h2 class="headline">{ lines(&["Compare the true cost of", "hiring vs. automation"]) }</h2>
                </div>
                <div class={classes!("cost-grid", reveal_classes(visible))}>
                    { for COST_COMPARISON.iter().map(cost_column) }
                </div>
                <div class={classes!("savings", reveal_classes(visible))}>
                    <h3>{SAVINGS_HEADLINE}</h3>
                    <p class="muted">{SAVINGS_DETAIL}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn ForBusiness() -> Html {
    use_initial_scroll();

    html! {
        <>
            <Nav links={BUSINESS_LINKS} action_label="Get in Touch" channel={CHANNEL} />
            <main class="business-page">
                <Hero
                    eyebrow="BUSINESS AUTOMATION \u{b7} DIGITAL EMPLOYEE \u{b7} OPERATIONS"
                    headline={HERO_HEADLINE}
                    lede="Stop working evenings and weekends. Never miss another follow-up. We set up a digital employee that handles your admin, customer follow-ups, and daily operations\u{2014}24 hours a day, 7 days a week."
                    action={HeroAction { label: "BOOK FREE CONSULTATION", channel: CHANNEL }}
                    note="Speak with Kate personally \u{2022} No salespeople \u{2022} 15-minute call"
                    tall={true}
                />
                <PainPoints />
                <Solution />
                <HowItWorks
                    heading={STEPS_HEADING}
                    subheading="No technical knowledge required."
                    steps={STEPS}
                />
                <CostComparison />
                <Cta
                    channel={CHANNEL}
                    headline={CTA_HEADLINE}
                    body="Book a 15-minute call with Kate. No sales pitch\u{2014}just an honest conversation about whether this makes sense for your business."
                    button="BOOK YOUR FREE CONSULTATION"
                    note="kate@sathigroup.ai \u{2022} Usually responds within 2 hours"
                />
            </main>
            <Footer />
            <style>
                {r#"
                .section-intro {
                    margin-bottom: 4rem;
                }
                .intro-note {
                    margin-top: 1.5rem;
                    max-width: 48rem;
                }
                .pain-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 0 3rem;
                }
                .pain-point {
                    padding: 2rem 0;
                    border-top: 1px solid rgba(212, 206, 195, 0.6);
                }
                .pain-number {
                    font-family: var(--font-mono);
                    font-size: 13px;
                    color: var(--sand-400);
                }
                .pain-point h3,
                .cost-title h3,
                .outcomes h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0.75rem 0;
                }
                .pain-point p {
                    margin: 0;
                }
                .solution-grid,
                .cost-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .task {
                    display: flex;
                    gap: 1rem;
                    padding: 1.5rem 0;
                    border-top: 1px solid var(--sand-800);
                    color: var(--sand-300);
                }
                .outcomes,
                .cost-column,
                .savings {
                    border-top: 1px solid var(--sand-800);
                    padding-top: 2rem;
                }
                .outcome {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .outcome strong {
                    color: var(--sand-100);
                }
                .cost-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .cost-lines {
                    margin: 1.5rem 0;
                }
                .cost-line,
                .cost-total {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }
                .cost-line dd {
                    margin: 0;
                    font-family: var(--font-mono);
                }
                .cost-total {
                    border-top: 1px solid var(--sand-800);
                    padding-top: 1rem;
                }
                .cost-total-value {
                    font-family: var(--font-mono);
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .savings {
                    margin-top: 3rem;
                }
                .savings h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                @media (min-width: 768px) {
                    .pain-grid,
                    .cost-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (min-width: 1024px) {
                    .pain-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .solution-grid {
                        grid-template-columns: 7fr 5fr;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn pain_points_are_numbered_from_one() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(5), "06");
    }

    #[tokio::test]
    async fn sections_render_in_order() {
        let html = render::page("/for-business").await;
        let positions: Vec<usize> = [
            "THE PROBLEM",
            "THE SOLUTION",
            "Immediate results.",
            "THE MATH",
            "id=\"contact\"",
        ]
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {}", marker)))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn contact_links_use_the_business_inquiry() {
        let html = render::page("/for-business").await;
        let expected = BUSINESS_CONSULTATION.href();
        let mailtos: Vec<String> = render::hrefs(&html)
            .into_iter()
            .filter(|href| href.starts_with("mailto:"))
            .collect();
        assert!(mailtos.len() >= 3);
        assert!(mailtos.iter().all(|href| *href == expected));
    }

    #[tokio::test]
    async fn both_cost_columns_render() {
        let html = render::page("/for-business").await;
        assert_eq!(html.matches("class=\"cost-column").count(), 2);
        assert_eq!(html.matches("class=\"cost-column favourable\"").count(), 1);
        assert!(html.contains(SAVINGS_HEADLINE));
    }
}

use yew::prelude::*;

use crate::components::cta::{ContactLink, Cta};
use crate::components::footer::Footer;
use crate::components::hero::{Hero, HeroAction};
use crate::components::how_it_works::HowItWorks;
use crate::components::icons::ArrowRight;
use crate::components::nav::{Nav, HOME_LINKS};
use crate::components::rich_text::{lines, RichText};
use crate::contact::ContactChannel;
use crate::content::home::{SERVICES, STEPS, TEAM, TIERS, USE_CASES};
use crate::hooks::reveal::{reveal_classes, stagger_style, use_in_view, SECTION_THRESHOLD};
use crate::hooks::scroll::use_initial_scroll;

const HERO_HEADLINE: &[&str] = &["The future satisfies", "no one who waits."];
const STEPS_HEADING: &[&str] = &["Three steps.", "Sixty days."];
const CTA_HEADLINE: &[&str] = &["The companies that", "move now will own", "the next decade."];

const STAGGER_MS: u32 = 120;
const STAGGER_CAP_MS: u32 = 800;

#[function_component]
fn Problem() -> Html {
    let (node, visible) = use_in_view(SECTION_THRESHOLD);

    html! {
        <section ref={node} class="section">
            <div class="container">
                <div class="rule"></div>
                <div class="split">
                    <div>
                        <p class={classes!("eyebrow", reveal_classes(visible))}>{"THE REALITY"}</p>
                        <h2 class={classes!("headline", reveal_classes(visible))}>
                            { lines(&["This isn't", "optional anymore."]) }
                        </h2>
                    </div>
                    <div class={classes!("prose", reveal_classes(visible))}>
                        <p class="lead">
                            {"Every week you delay, companies in your industry are deploying AI systems that permanently reduce their cost structure, accelerate their decision-making, and compound their advantage."}
                        </p>
                        <p class="muted">
                            {"This isn't a technology trend. It's a structural shift. The organizations that integrate AI into their operations now will set the pace for the next decade. The ones that don't will spend that decade trying to catch up \u{2014} if they survive long enough to try."}
                        </p>
                        <p class="muted">
                            {"The window for \u{201c}wait and see\u{201d} has closed. The question is no longer whether to adopt AI, but how fast you can move."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn Services() -> Html {
    let (node, visible) = use_in_view(SECTION_THRESHOLD);

    html! {
        <section id="services" ref={node} class="section dark">
            <div class="container">
                <div class={classes!("section-intro", reveal_classes(visible))}>
                    <p class="eyebrow">{"WHAT WE DO"}</p>
                    <h2 class="headline">{ lines(&["Cognitive leverage,", "deployed with precision."]) }</h2>
                </div>
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <div
                        class={classes!("service-row", reveal_classes(visible))}
                        style={stagger_style(i, STAGGER_MS, STAGGER_CAP_MS)}
                    >
                        <h3>{service.title}</h3>
                        <p class="muted">{service.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component]
fn UseCases() -> Html {
    let (node, visible) = use_in_view(SECTION_THRESHOLD);

    html! {
        <section id="use-cases" ref={node} class="section">
            <div class="container">
                <div class="rule"></div>
                <div class={classes!("section-intro", reveal_classes(visible))}>
                    <p class="eyebrow">{"USE CASES"}</p>
                    <h2 class="headline">{ lines(&["Where AI pays", "for itself first."]) }</h2>
                </div>
                <div class="card-grid">
                    { for USE_CASES.iter().enumerate().map(|(i, use_case)| html! {
                        <div
                            class={classes!("card", reveal_classes(visible))}
                            style={stagger_style(i, STAGGER_MS, STAGGER_CAP_MS)}
                        >
                            <h3>{use_case.title}</h3>
                            <p class="muted">{use_case.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn WhoItsFor() -> Html {
    let (node, visible) = use_in_view(SECTION_THRESHOLD);

    html! {
        <section ref={node} class="section">
            <div class="container">
                <div class="rule"></div>
                <div class={classes!("section-intro", reveal_classes(visible))}>
                    <p class="eyebrow">{"WHO IT'S FOR"}</p>
                    <h2 class="headline">{"Serious operators only."}</h2>
                </div>
                <div class="card-grid three">
                    { for TIERS.iter().enumerate().map(|(i, tier)| html! {
                        <div
                            class={classes!("card", reveal_classes(visible))}
                            style={stagger_style(i, STAGGER_MS, STAGGER_CAP_MS)}
                        >
                            <h3>{tier.label}</h3>
                            <p class="muted"><RichText inlines={tier.description} /></p>
                        </div>
                    }) }
                </div>
                <div class={classes!("apply-link", reveal_classes(visible))}>
                    <ContactLink channel={ContactChannel::Booking} class="text-link">
                        <span>{"APPLY FOR A CONSULTATION"}</span>
                        <ArrowRight />
                    </ContactLink>
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn Team() -> Html {
    let (node, visible) = use_in_view(SECTION_THRESHOLD);

    html! {
        <section id="team" ref={node} class="section dark">
            <div class={classes!("container", reveal_classes(visible))}>
                <div class="split">
                    <div>
                        <p class="eyebrow">{"LEADERSHIP"}</p>
                        <h2 class="headline">{ lines(&["Built by operators,", "for operators."]) }</h2>
                    </div>
                    <div>
                        { for TEAM.iter().map(|member| html! {
                            <div class="team-member">
                                <div class="team-heading">
                                    <h3>{member.name}</h3>
                                    <span class="team-role">{member.role}</span>
                                </div>
                                <p class="muted">{member.bio}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Home() -> Html {
    use_initial_scroll();

    html! {
        <>
            <Nav links={HOME_LINKS} action_label="Book a Call" channel={ContactChannel::Booking} />
            <main class="home-page">
                <Hero
                    eyebrow="AI ADVISORY \u{b7} IMPLEMENTATION \u{b7} TRANSFORMATION"
                    headline={HERO_HEADLINE}
                    lede="The gap between AI adopters and everyone else is widening every day. Sathi Group provides the strategic clarity and hands-on implementation to ensure you're on the right side of that divide."
                    action={HeroAction { label: "BOOK A CONSULTATION", channel: ContactChannel::Booking }}
                    tall={true}
                />
                <Problem />
                <Services />
                <UseCases />
                <HowItWorks
                    id="approach"
                    heading={STEPS_HEADING}
                    steps={STEPS}
                />
                <WhoItsFor />
                <Team />
                <Cta
                    channel={ContactChannel::Booking}
                    headline={CTA_HEADLINE}
                    body="Every day you wait, the gap widens. Book a confidential consultation to discuss how AI can transform your operations."
                    button="BOOK YOUR CONSULTATION"
                />
            </main>
            <Footer />
            <style>
                {r#"
                .section-intro {
                    margin-bottom: 4rem;
                }
                .prose p {
                    margin: 0 0 1.5rem;
                }
                .lead {
                    font-size: 1.125rem;
                    line-height: 1.75;
                }
                .service-row {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    padding: 2.5rem 0;
                    border-top: 1px solid var(--sand-800);
                }
                .service-row h3,
                .card h3,
                .team-heading h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0;
                }
                .service-row p,
                .card p {
                    margin: 0;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 0 3rem;
                }
                .card {
                    padding: 2rem 0;
                    border-top: 1px solid rgba(212, 206, 195, 0.6);
                }
                .card h3 {
                    margin-bottom: 0.75rem;
                }
                .apply-link {
                    margin-top: 3rem;
                }
                .text-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: var(--font-mono);
                    font-size: 13px;
                    letter-spacing: 0.05em;
                    color: var(--ink-muted);
                }
                .text-link:hover {
                    color: var(--ink);
                }
                .team-member {
                    padding: 2rem 0;
                    border-top: 1px solid var(--sand-800);
                }
                .team-heading {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: baseline;
                    gap: 0.25rem 1rem;
                    margin-bottom: 0.75rem;
                }
                .team-role {
                    font-size: 0.875rem;
                    color: var(--sand-500);
                }
                @media (min-width: 768px) {
                    .card-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (min-width: 1024px) {
                    .service-row {
                        grid-template-columns: 5fr 6fr;
                    }
                    .card-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </>
    }
}

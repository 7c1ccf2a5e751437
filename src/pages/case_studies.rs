use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::components::cta::Cta;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav::{Nav, CASE_STUDY_LINKS};
use crate::contact::ContactChannel;
use crate::content::case_studies::{CASE_STUDIES, HEADLINE_STATS};
use crate::content::types::CaseStudy;
use crate::hooks::reveal::{reveal_classes, use_in_view, CARD_THRESHOLD};
use crate::hooks::scroll::use_initial_scroll;

const HERO_HEADLINE: &[&str] = &["Real deployments.", "Real numbers."];
const CTA_HEADLINE: &[&str] = &["Your case study", "starts here."];

/// Kicker line above a card headline, e.g. `E-COMMERCE · CASE STUDY 01`.
pub fn card_kicker(study: &CaseStudy, index: usize) -> String {
    format!("{} \u{b7} CASE STUDY {:02}", study.label, index + 1)
}

#[derive(Properties, PartialEq)]
struct CaseStudyCardProps {
    study: CaseStudy,
    index: usize,
}

#[function_component]
fn CaseStudyCard(props: &CaseStudyCardProps) -> Html {
    let (node, visible) = use_in_view(CARD_THRESHOLD);
    let study = &props.study;

    html! {
        <article class={classes!("case-study", reveal_classes(visible))} ref={node}>
            <div class="rule"></div>
            <div class="split">
                <div>
                    <p class="eyebrow">{card_kicker(study, props.index)}</p>
                    <h2 class="headline">{study.headline}</h2>
                </div>
                <div class="case-study-body">
                    <div>
                        <p class="eyebrow">{"THE PROBLEM"}</p>
                        <p class="muted">{study.problem}</p>
                    </div>
                    <div>
                        <p class="eyebrow">{"WHAT WE BUILT"}</p>
                        <p class="muted">{study.solution}</p>
                    </div>
                    <div>
                        <p class="eyebrow">{"THE RESULT"}</p>
                        <p class="case-study-result">{study.result}</p>
                    </div>
                    <blockquote>
                        <p>{format!("\u{201c}{}\u{201d}", study.quote)}</p>
                        <footer class="attribution">{format!("\u{2014} {}", study.attribution.to_uppercase())}</footer>
                    </blockquote>
                </div>
            </div>
        </article>
    }
}

#[function_component]
pub fn CaseStudies() -> Html {
    use_initial_scroll();

    html! {
        <>
            <Nav links={CASE_STUDY_LINKS} action_label="Book a Call" channel={ContactChannel::Booking} />
            <main class="case-studies-page">
                <Hero
                    eyebrow="CASE STUDIES"
                    headline={HERO_HEADLINE}
                    lede="Every engagement below followed the same pattern: identify the highest-leverage AI opportunity, build and deploy production systems, and measure the impact in weeks \u{2014} not quarters."
                />
                <section class="stats-strip">
                    <div class="container stats-grid">
                        { for HEADLINE_STATS.iter().map(|stat| html! {
                            <AnimatedCounter stat={*stat} />
                        }) }
                    </div>
                </section>
                <section class="section">
                    <div class="container case-study-list">
                        { for CASE_STUDIES.iter().enumerate().map(|(index, study)| html! {
                            <CaseStudyCard study={*study} {index} />
                        }) }
                    </div>
                </section>
                <Cta
                    channel={ContactChannel::Booking}
                    headline={CTA_HEADLINE}
                    body="Book a confidential consultation. We'll assess your operations, identify the highest-impact AI opportunities, and show you exactly what's possible."
                    button="BOOK YOUR CONSULTATION"
                />
            </main>
            <Footer />
            <style>
                {r#"
                .stats-strip {
                    padding: 2rem 1.5rem 4rem;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    border-top: 1px solid var(--sand-200);
                    padding-top: 1.5rem;
                }
                .stat-value {
                    font-size: 2.5rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    font-variant-numeric: tabular-nums;
                }
                .stat-label {
                    font-family: var(--font-mono);
                    font-size: 12px;
                    color: var(--ink-muted);
                }
                .case-study-list {
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }
                .case-study .rule {
                    margin-bottom: 3rem;
                }
                .case-study-body > * + * {
                    margin-top: 2rem;
                }
                .case-study-body p {
                    margin: 0;
                    line-height: 1.75;
                }
                .case-study-body .eyebrow {
                    margin-bottom: 0.75rem;
                }
                .case-study-result {
                    font-weight: 500;
                }
                .case-study blockquote {
                    margin: 0;
                    border-left: 2px solid var(--sand-300);
                    padding: 0.5rem 0 0.5rem 1.5rem;
                    font-style: italic;
                }
                .attribution {
                    margin-top: 0.75rem;
                    font-family: var(--font-mono);
                    font-size: 12px;
                    font-style: normal;
                    letter-spacing: 0.1em;
                    color: var(--ink-muted);
                }
                @media (min-width: 1024px) {
                    .stats-grid {
                        grid-template-columns: repeat(4, 1fr);
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
    fn kicker_numbers_cards_from_one() {
        assert_eq!(card_kicker(&CASE_STUDIES[0], 0), "E-COMMERCE \u{b7} CASE STUDY 01");
        let last = CASE_STUDIES.len() - 1;
        assert!(card_kicker(&CASE_STUDIES[last], last).ends_with("CASE STUDY 06"));
    }

    #[tokio::test]
    async fn stats_strip_renders_final_values_for_screen_readers() {
        let html = render::page("/case-studies").await;
        assert_eq!(html.matches("class=\"stat\"").count(), HEADLINE_STATS.len());
        assert!(html.contains("aria-label=\"$45,840\""));
    }

    #[tokio::test]
    async fn attributions_are_upper_cased() {
        let html = render::page("/case-studies").await;
        for study in CASE_STUDIES {
            let attribution = format!("\u{2014} {}", study.attribution.to_uppercase());
            assert!(html.contains(&render::escaped(&attribution)), "{}", attribution);
        }
    }

    #[tokio::test]
    async fn cta_books_a_call() {
        let html = render::page("/case-studies").await;
        let hrefs = render::hrefs(&html);
        assert!(hrefs.iter().any(|href| href == "https://app.lemcal.com/@johann"));
        assert!(!hrefs.iter().any(|href| href.starts_with("mailto:")));
    }
}

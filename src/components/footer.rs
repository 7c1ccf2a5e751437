use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{SITE_DOMAIN, SITE_NAME};
use crate::Route;

#[function_component]
pub fn Footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <span class="footer-copy">{format!("\u{a9} {} {}", year, SITE_NAME)}</span>
                <div class="footer-links">
                    <Link<Route> to={Route::Blog} classes="footer-link">{"Insights"}</Link<Route>>
                    <Link<Route> to={Route::CaseStudies} classes="footer-link">{"Case Studies"}</Link<Route>>
                    <Link<Route> to={Route::ForBusiness} classes="footer-link">{"For Business"}</Link<Route>>
                </div>
                <span class="footer-domain">{SITE_DOMAIN}</span>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 2rem 1.5rem;
                    border-top: 1px solid var(--sand-200);
                }
                .footer-content {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-copy,
                .footer-link {
                    font-size: 12px;
                    color: var(--sand-500);
                }
                .footer-link:hover {
                    color: var(--ink);
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-domain {
                    font-family: var(--font-mono);
                    font-size: 11px;
                    letter-spacing: 0.05em;
                    color: var(--sand-400);
                }
                @media (min-width: 640px) {
                    .footer-content {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

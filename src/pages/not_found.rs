use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::icons::ArrowRight;
use crate::components::nav::{Nav, READING_LINKS};
use crate::contact::ContactChannel;
use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <>
            <Nav links={READING_LINKS} action_label="Book a Call" channel={ContactChannel::Booking} solid={true} />
            <main class="not-found">
                <div class="container">
                    <p class="eyebrow">{"404"}</p>
                    <h1 class="display">{"Page not found."}</h1>
                    <p class="muted">{"The page you're looking for doesn't exist or has moved."}</p>
                    <Link<Route> to={Route::Home} classes="btn-primary">
                        {"BACK TO HOME"}
                        <ArrowRight />
                    </Link<Route>>
                </div>
            </main>
            <Footer />
            <style>
                {r#"
                .not-found {
                    min-height: 80svh;
                    display: flex;
                    align-items: center;
                    padding: 8rem 1.5rem 4rem;
                }
                .not-found .muted {
                    margin: 2rem 0 3rem;
                }
                "#}
            </style>
        </>
    }
}

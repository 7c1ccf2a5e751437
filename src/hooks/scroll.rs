use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

use super::subscription::{mount, Detach, Subscription};

/// Scroll offset past which the nav bar switches to its solid background.
pub const NAV_SCROLL_THRESHOLD: f64 = 60.0;

pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Translation for a decoration drifting at `rate` of the scroll speed, clamped to `max`.
pub fn parallax_offset(scroll_y: f64, rate: f64, max: f64) -> f64 {
    (scroll_y.max(0.0) * rate).min(max)
}

pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl Detach for ScrollListener {
    fn detach(&self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}

/// Calls `handler` with the current offset now and on every window scroll.
fn on_scroll(mut handler: impl FnMut(f64) + 'static) -> Option<Subscription<ScrollListener>> {
    let window = web_sys::window()?;
    handler(window.scroll_y().unwrap_or(0.0));

    let listener_window = window.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        if let Ok(offset) = listener_window.scroll_y() {
            handler(offset);
        }
    });

    let mut options = AddEventListenerOptions::new();
    options.passive(true);

    match window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(()) => Some(Subscription::new(ScrollListener { window, callback })),
        Err(err) => {
            warn!("Failed to register scroll listener: {:?}", err);
            None
        }
    }
}

/// True while the page is scrolled further than `threshold` pixels. Toggles both ways.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                mount(move || {
                    on_scroll(move |offset| scrolled.set(is_past_threshold(offset, threshold)))
                })
            },
            threshold,
        );
    }

    *scrolled
}

#[hook]
pub fn use_scroll_y() -> f64 {
    let offset = use_state_eq(|| 0.0_f64);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| mount(move || on_scroll(move |y| offset.set(y))),
            (),
        );
    }

    *offset
}

/// Where a freshly mounted page should scroll to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Anchor(String),
}

/// Picks the mount scroll target from a location hash such as `#services`.
pub fn initial_scroll(hash: &str) -> ScrollTarget {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    if id.is_empty() {
        ScrollTarget::Top
    } else {
        ScrollTarget::Anchor(id.to_string())
    }
}

fn scroll_to(window: &Window, target: &ScrollTarget) {
    if let ScrollTarget::Anchor(id) = target {
        match window.document().and_then(|document| document.get_element_by_id(id)) {
            Some(element) => {
                element.scroll_into_view();
                return;
            }
            None => warn!("No element with id {:?} to scroll to", id),
        }
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

// Runs once per page mount, after the sections exist. A location hash wins over the top.
#[hook]
pub fn use_initial_scroll() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                let hash = window.location().hash().unwrap_or_default();
                scroll_to(&window, &initial_scroll(&hash));
            }
            || ()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_tracks_last_offset_both_ways() {
        let offsets = [0.0, 30.0, 60.0, 60.5, 400.0, 61.0, 59.9, 0.0, 1200.0];
        let expected = [false, false, false, true, true, true, false, false, true];
        let flags: Vec<bool> = offsets
            .iter()
            .map(|offset| is_past_threshold(*offset, NAV_SCROLL_THRESHOLD))
            .collect();
        assert_eq!(flags, expected);
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_past_threshold(60.0, 60.0));
        assert!(is_past_threshold(60.01, 60.0));
    }

    #[test]
    fn empty_hash_scrolls_to_top() {
        assert_eq!(initial_scroll(""), ScrollTarget::Top);
        assert_eq!(initial_scroll("#"), ScrollTarget::Top);
    }

    #[test]
    fn hash_scrolls_to_its_section() {
        assert_eq!(initial_scroll("#services"), ScrollTarget::Anchor("services".to_string()));
        assert_eq!(initial_scroll("#use-cases"), ScrollTarget::Anchor("use-cases".to_string()));
        assert_eq!(initial_scroll("contact"), ScrollTarget::Anchor("contact".to_string()));
    }

    #[test]
    fn parallax_is_clamped() {
        assert_eq!(parallax_offset(0.0, 0.25, 120.0), 0.0);
        assert_eq!(parallax_offset(100.0, 0.25, 120.0), 25.0);
        assert_eq!(parallax_offset(10_000.0, 0.25, 120.0), 120.0);
        assert_eq!(parallax_offset(-50.0, 0.25, 120.0), 0.0);
    }
}

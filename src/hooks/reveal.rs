use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::subscription::{mount, Detach, Subscription};

/// Fraction of a section that must be on screen before it fades in.
pub const SECTION_THRESHOLD: f64 = 0.15;
pub const GRID_THRESHOLD: f64 = 0.08;
pub const CARD_THRESHOLD: f64 = 0.1;

/// One-shot switch behind `use_in_view`. Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observer report. Returns true only for the report that flips the latch.
    pub fn record(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Detach for ObserverHandle {
    fn detach(&self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    element: &Element,
    threshold: f64,
    on_reveal: impl Fn() + 'static,
) -> Option<Subscription<ObserverHandle>> {
    let mut latch = RevealLatch::default();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if latch.record(intersecting) {
                observer.disconnect();
                debug!("element revealed");
                on_reveal();
            }
        },
    );

    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some(Subscription::new(ObserverHandle {
                observer,
                _callback: callback,
            }))
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, reveal disabled: {:?}", err);
            None
        }
    }
}

/// Returns a ref to attach to an element and whether that element has been seen.
///
/// The flag goes false -> true the first time at least `threshold` of the element
/// is visible and never goes back. Without an attached element the hook does nothing.
#[hook]
pub fn use_in_view(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let in_view = use_state_eq(|| false);

    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                mount(move || {
                    node.cast::<Element>()
                        .and_then(|element| observe_once(&element, threshold, move || in_view.set(true)))
                })
            },
            threshold,
        );
    }

    (node, *in_view)
}

/// Class list for an element that fades up once `visible`.
pub fn reveal_classes(visible: bool) -> Classes {
    classes!("reveal", visible.then_some("is-visible"))
}

/// Transition delay for the `index`-th item of a staggered list.
pub fn stagger_delay_ms(index: usize, step_ms: u32, cap_ms: u32) -> u32 {
    let slot = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
    slot.saturating_mul(step_ms).min(cap_ms)
}

pub fn stagger_style(index: usize, step_ms: u32, cap_ms: u32) -> String {
    format!("transition-delay: {}ms", stagger_delay_ms(index, step_ms, cap_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_ignores_reports_before_intersection() {
        let mut latch = RevealLatch::default();
        assert!(!latch.record(false));
        assert!(!latch.record(false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn latch_flips_once_and_stays() {
        let mut latch = RevealLatch::default();
        assert!(latch.record(true));
        assert!(latch.is_revealed());

        let later = [true, false, false, true, false];
        for intersecting in later {
            assert!(!latch.record(intersecting));
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn stagger_grows_by_step_until_cap() {
        assert_eq!(stagger_delay_ms(0, 120, 800), 120);
        assert_eq!(stagger_delay_ms(2, 120, 800), 360);
        assert_eq!(stagger_delay_ms(5, 80, 800), 480);
        assert_eq!(stagger_delay_ms(9, 80, 800), 800);
        assert_eq!(stagger_delay_ms(40, 80, 800), 800);
        assert_eq!(stagger_delay_ms(usize::MAX, 80, 800), 800);
    }

    #[test]
    fn reveal_classes_toggle_visibility() {
        assert_eq!(reveal_classes(false).to_string(), "reveal");
        assert_eq!(reveal_classes(true).to_string(), "reveal is-visible");
    }
}

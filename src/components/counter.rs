use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::content::types::Stat;
use crate::hooks::reveal::{use_in_view, CARD_THRESHOLD};

/// Frames in one count-up, at roughly 60fps.
pub const COUNTER_FRAMES: u32 = 90;
const FRAME_MS: u32 = 16;

/// Value shown on `frame` of a count-up to `target`. Eases out and lands exactly on `target`.
pub fn counter_frame(target: u32, frame: u32, frames: u32) -> u32 {
    if frames == 0 || frame >= frames {
        return target;
    }
    let t = f64::from(frame) / f64::from(frames);
    let eased = 1.0 - (1.0 - t).powi(3);
    let value = (f64::from(target) * eased).round();
    (value as u32).min(target)
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_stat(stat: &Stat, value: u32) -> String {
    format!("{}{}{}", stat.prefix, group_thousands(value), stat.suffix)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub stat: Stat,
}

#[function_component]
pub fn AnimatedCounter(props: &AnimatedCounterProps) -> Html {
    let (node, visible) = use_in_view(CARD_THRESHOLD);
    let value = use_state_eq(|| 0_u32);
    let finished = use_state_eq(|| false);
    let running = visible && !*finished;

    {
        let value = value.clone();
        let finished = finished.clone();
        let target = props.stat.value;
        use_effect_with_deps(
            move |running| {
                let interval = (*running).then(|| {
                    let mut frame = 0;
                    Interval::new(FRAME_MS, move || {
                        frame += 1;
                        value.set(counter_frame(target, frame, COUNTER_FRAMES));
                        if frame >= COUNTER_FRAMES {
                            finished.set(true);
                        }
                    })
                });
                move || drop(interval)
            },
            running,
        );
    }

    let stat = &props.stat;
    html! {
        <div ref={node} class="stat">
            <span class="stat-value" aria-label={format_stat(stat, stat.value)}>
                {format_stat(stat, *value)}
            </span>
            <span class="stat-label">{stat.label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_starts_at_zero_and_ends_on_target() {
        assert_eq!(counter_frame(45_840, 0, COUNTER_FRAMES), 0);
        assert_eq!(counter_frame(45_840, COUNTER_FRAMES, COUNTER_FRAMES), 45_840);
        assert_eq!(counter_frame(45_840, COUNTER_FRAMES + 7, COUNTER_FRAMES), 45_840);
        assert_eq!(counter_frame(12, 3, 0), 12);
    }

    #[test]
    fn count_never_goes_backwards_or_overshoots() {
        let target = 280;
        let frames: Vec<u32> = (0..=COUNTER_FRAMES)
            .map(|frame| counter_frame(target, frame, COUNTER_FRAMES))
            .collect();
        assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(frames.iter().all(|value| *value <= target));
    }

    #[test]
    fn count_front_loads_progress() {
        let halfway = counter_frame(1000, COUNTER_FRAMES / 2, COUNTER_FRAMES);
        assert!(halfway > 500);
    }

    #[test]
    fn stats_format_with_separators() {
        let stat = Stat { value: 45_840, prefix: "$", suffix: "", label: "saved" };
        assert_eq!(format_stat(&stat, 45_840), "$45,840");
        assert_eq!(format_stat(&stat, 0), "$0");
        assert_eq!(format_stat(&stat, 1_000_000), "$1,000,000");
        let pct = Stat { value: 280, prefix: "", suffix: "%", label: "growth" };
        assert_eq!(format_stat(&pct, 280), "280%");
    }
}

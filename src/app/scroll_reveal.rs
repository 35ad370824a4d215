use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::reveal::{RevealSet, RevealTarget};

const REVEAL_SELECTOR: &str = ".scroll-reveal";

/// Measures every reveal target currently in the document.
///
/// Returns `None` when there is no window to measure against. Elements whose
/// `data-reveal` key doesn't parse are skipped.
fn measure_targets() -> Option<(Vec<(RevealTarget, f64)>, f64)> {
    let viewport_height = window().inner_height().ok()?.as_f64()?;
    let nodes = document().query_selector_all(REVEAL_SELECTOR).ok()?;
    let measurements = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| {
            let target = el.get_attribute("data-reveal")?.parse().ok()?;
            Some((target, el.get_bounding_client_rect().top()))
        })
        .collect();
    Some((measurements, viewport_height))
}

/// Tracks which sections have scrolled into view.
///
/// The scroll listener is removed when the calling component is disposed.
pub fn use_scroll_reveal() -> RwSignal<RevealSet> {
    let reveal = RwSignal::new(RevealSet::new());

    let check = move || {
        let Some((measurements, viewport_height)) = measure_targets() else {
            return;
        };
        reveal.maybe_update(|set| {
            let newly = set.observe(measurements, viewport_height);
            if !newly.is_empty() {
                log::debug!("revealed {newly:?}");
            }
            !newly.is_empty()
        });
    };

    use_event_listener(use_window(), ev::scroll, move |_| check());

    // reveal anything already above the fold without waiting for a scroll
    Effect::new(move |_| check());

    reveal
}

//! Intersection observer wiring for active navigation and scroll
//! reveal.
//!
//! Browser-only: compiled under the `hydrate` feature. Observers and
//! their callbacks live for the page lifetime, so the closures are
//! leaked after construction.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::nav::NavState;
use crate::state::reveal::{RevealState, stagger_delay_ms};

/// Trigger band for the active-section observer: a section is active
/// while it crosses the 20%-40% strip of the viewport.
const NAV_ROOT_MARGIN: &str = "-20% 0px -60% 0px";
const NAV_THRESHOLD: f64 = 0.0;

/// Reveal trigger: 10% of the block visible, pulled in 30px from the
/// viewport bottom.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -30px 0px";
const REVEAL_THRESHOLD: f64 = 0.1;

/// Observe every `section[id]` on the page and fold intersection
/// batches into `nav`. A page without sections leaves the highlight
/// inert.
pub fn watch_sections(nav: RwSignal<NavState>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(sections) = document.query_selector_all("section[id]") else {
        return;
    };
    if sections.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let batch: Vec<(String, bool)> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                entry
                    .target()
                    .get_attribute("id")
                    .map(|id| (id, entry.is_intersecting()))
            })
            .collect();
        nav.update(|state| {
            state.apply_batch(batch.iter().map(|(id, hit)| (id.as_str(), *hit)));
        });
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(NAV_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(NAV_THRESHOLD));
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for index in 0..sections.length() {
        let section = sections
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok());
        if let Some(section) = section {
            observer.observe(&section);
        }
    }
}

thread_local! {
    static REVEAL_OBSERVER: RefCell<Option<RevealObserver>> = const { RefCell::new(None) };
}

/// Register a content block with the page-wide reveal observer,
/// creating it on first use. When the browser rejects the observer
/// configuration the block reveals immediately instead of staying
/// hidden.
pub fn watch_reveal(element: Element, state: RwSignal<RevealState>) {
    REVEAL_OBSERVER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = RevealObserver::new();
        }
        match slot.as_ref() {
            Some(observer) => observer.watch(element, state),
            None => state.update(|s| {
                s.reveal();
            }),
        }
    });
}

/// Page-wide one-shot reveal observer.
///
/// `Reveal` components register their root element together with the
/// signal projecting the `visible` class. An intersecting element is
/// unobserved immediately and its signal latched after a delay
/// staggered by its index within the callback batch.
struct RevealObserver {
    observer: IntersectionObserver,
    targets: Rc<RefCell<Vec<(Element, RwSignal<RevealState>)>>>,
}

impl RevealObserver {
    fn new() -> Option<Self> {
        let targets: Rc<RefCell<Vec<(Element, RwSignal<RevealState>)>>> = Rc::default();

        let callback_targets = Rc::clone(&targets);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut batch_index = 0;
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    observer.unobserve(&target);

                    let signal = callback_targets
                        .borrow()
                        .iter()
                        .find(|(element, _)| *element == target)
                        .map(|(_, signal)| *signal);
                    if let Some(signal) = signal {
                        gloo_timers::callback::Timeout::new(
                            stagger_delay_ms(batch_index),
                            move || {
                                signal.update(|state| {
                                    state.reveal();
                                });
                            },
                        )
                        .forget();
                    }
                    batch_index += 1;
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        callback.forget();

        Some(Self { observer, targets })
    }

    fn watch(&self, element: Element, state: RwSignal<RevealState>) {
        self.targets.borrow_mut().push((element.clone(), state));
        self.observer.observe(&element);
    }
}

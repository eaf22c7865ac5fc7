use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::anim::CounterSpec;

const REVEAL_THRESHOLD: f64 = 0.1;
const ONE_SHOT_THRESHOLD: f64 = 0.5;

/// Observes every element matched by `selector`. When `once` is set, each
/// element is unobserved on its first intersection, so `apply` runs at most
/// once per element; elements already in view trigger on the observer's
/// initial check.
fn observe_all(
    document: &Document,
    selector: &str,
    threshold: f64,
    once: bool,
    mut apply: impl FnMut(&Element) + 'static,
) {
    let Ok(targets) = document.query_selector_all(selector) else {
        return;
    };
    if targets.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                if once {
                    observer.unobserve(&target);
                }
                apply(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for index in 0..targets.length() {
        if let Some(element) = targets
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            observer.observe(&element);
        }
    }
}

pub fn init_reveals(document: &Document) {
    observe_all(document, "[data-aos]", REVEAL_THRESHOLD, false, |target| {
        let _ = target.class_list().add_1("aos-animate");
    });
}

pub fn init_skill_bars(document: &Document) {
    observe_all(
        document,
        ".skill-progress",
        ONE_SHOT_THRESHOLD,
        true,
        |target| {
            let Some(element) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            let Some(progress) = element.dataset().get("progress") else {
                return;
            };
            let _ = element.style().set_property("width", &format!("{progress}%"));
        },
    );
}

pub fn init_counters(document: &Document) {
    observe_all(
        document,
        ".highlight-number[data-count]",
        ONE_SHOT_THRESHOLD,
        true,
        |target| {
            let Some(element) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            let Some(spec) = counter_spec(element) else {
                return;
            };
            animate_counter(element.clone(), spec);
        },
    );
}

fn counter_spec(element: &HtmlElement) -> Option<CounterSpec> {
    let dataset = element.dataset();
    let target = dataset.get("count")?.parse::<f64>().ok()?;

    Some(CounterSpec {
        target,
        suffix: dataset.get("suffix").unwrap_or_default(),
        decimal: dataset.get("decimal").as_deref() == Some("true"),
    })
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn animate_counter(element: HtmlElement, spec: CounterSpec) {
    let Some(performance) = window().and_then(|win| win.performance()) else {
        return;
    };
    let started_at = performance.now();

    let frame: FrameSlot = Rc::new(RefCell::new(None));
    let scheduled = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let elapsed = now - started_at;
        element.set_text_content(Some(&spec.display_at(elapsed)));

        if spec.is_done(elapsed) {
            // Dropping the closure ends the loop.
            let _ = scheduled.borrow_mut().take();
            return;
        }
        request_frame(&scheduled);
    }));

    request_frame(&frame);
}

fn request_frame(slot: &FrameSlot) {
    let Some(win) = window() else {
        return;
    };
    if let Some(callback) = slot.borrow().as_ref() {
        let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

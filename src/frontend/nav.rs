use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::anim;

pub fn init(document: &Document) {
    init_scroll_state(document);
    init_anchor_scrolling(document);
}

fn collect_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let mut elements = Vec::new();
    let Ok(nodes) = document.query_selector_all(selector) else {
        return elements;
    };

    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            elements.push(element);
        }
    }
    elements
}

// One scroll listener drives both the navbar backdrop and the active-link
// highlight. It re-reads section geometry on every event so late layout
// shifts (images, fonts) never leave stale bands behind.
fn init_scroll_state(document: &Document) {
    let Some(navbar) = document.get_element_by_id("navbar") else {
        return;
    };
    let sections = collect_elements(document, "section[id]");
    let nav_links = collect_elements(document, ".nav-link");

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let Some(win) = window() else {
            return;
        };
        let scroll_y = win.page_y_offset().unwrap_or(0.0);

        let navbar_classes = navbar.class_list();
        if anim::navbar_scrolled(scroll_y) {
            let _ = navbar_classes.add_1("scrolled");
        } else {
            let _ = navbar_classes.remove_1("scrolled");
        }

        let bands: Vec<(String, f64, f64)> = sections
            .iter()
            .filter(|section| !section.id().is_empty())
            .map(|section| {
                (
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect();
        let band_refs: Vec<(&str, f64, f64)> = bands
            .iter()
            .map(|(id, top, height)| (id.as_str(), *top, *height))
            .collect();

        if let Some(active_id) = anim::active_section(scroll_y, &band_refs) {
            let active_href = format!("#{active_id}");
            for link in &nav_links {
                let is_active = link.get_attribute("href").as_deref() == Some(active_href.as_str());
                if is_active {
                    let _ = link.class_list().add_1("active");
                } else {
                    let _ = link.class_list().remove_1("active");
                }
            }
        }
    });

    if let Some(win) = window() {
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    // Listener lives for the page lifetime.
    on_scroll.forget();
}

fn init_anchor_scrolling(document: &Document) {
    for anchor in collect_elements(document, "a[href^='#']") {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        if href.len() <= 1 {
            continue;
        }

        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            scroll_to_anchor(&href);
        });
        let _ = anchor
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

fn scroll_to_anchor(href: &str) {
    let Some(win) = window() else {
        return;
    };
    let Some(target) = win
        .document()
        .and_then(|document| document.query_selector(href).ok().flatten())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(anim::anchor_scroll_target(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

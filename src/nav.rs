// Navbar wiring: mobile menu open/close and the scrolled style threshold.
// Every element here is optional; anything missing just skips its wiring.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, Window};

pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn wire(window: &Window, document: &Document) -> Result<(), JsValue> {
    wire_menu(document)?;
    wire_scroll(window, document)?;
    Ok(())
}

// Adds "scrolled" past the threshold, removes it at or below. Strictly
// greater-than: 50px itself does not count as scrolled.
pub fn apply_scroll_state(nav: &Element, scroll_y: f64) {
    let classes = nav.class_list();
    if scroll_y > SCROLL_THRESHOLD {
        let _ = classes.add_1("scrolled");
    } else {
        let _ = classes.remove_1("scrolled");
    }
}

fn wire_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let nav = match document.get_element_by_id("navbar") {
        Some(el) => el,
        None => return Ok(()),
    };
    let scroll_window = window.clone();
    let on_scroll = Closure::wrap(Box::new(move |_: Event| {
        let y = scroll_window.scroll_y().unwrap_or(0.0);
        apply_scroll_state(&nav, y);
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn wire_menu(document: &Document) -> Result<(), JsValue> {
    let nav = match document.get_element_by_id("navbar") {
        Some(el) => el,
        None => return Ok(()),
    };
    let menu_btn = match document.query_selector(".menu-btn")? {
        Some(el) => el,
        None => return Ok(()),
    };

    let mut passive = AddEventListenerOptions::new();
    passive.passive(true);

    // Some mobile browsers are finicky: bind both click and touchend
    let toggle_nav = nav.clone();
    let on_toggle = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        event.stop_propagation();
        let _ = toggle_nav.class_list().toggle("open");
    }) as Box<dyn FnMut(Event)>);
    menu_btn.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    menu_btn.add_event_listener_with_callback("touchend", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    // Tapping a nav link closes the menu outright, not a toggle
    let close_nav = nav.clone();
    let on_link = Closure::wrap(Box::new(move |_: Event| {
        let _ = close_nav.class_list().remove_1("open");
    }) as Box<dyn FnMut(Event)>);
    let links = document.query_selector_all(".nav-links a")?;
    for i in 0..links.length() {
        if let Some(link) = links.item(i) {
            link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref())?;
            link.add_event_listener_with_callback_and_add_event_listener_options(
                "touchend",
                on_link.as_ref().unchecked_ref(),
                &passive,
            )?;
        }
    }
    on_link.forget();

    // Tap outside closes the menu
    let outside_nav = nav;
    let on_outside = Closure::wrap(Box::new(move |_: Event| {
        let _ = outside_nav.class_list().remove_1("open");
    }) as Box<dyn FnMut(Event)>);
    document.add_event_listener_with_callback("click", on_outside.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        on_outside.as_ref().unchecked_ref(),
        &passive,
    )?;
    on_outside.forget();

    // Keep taps inside the dropdown from bubbling to the outside-close handler
    if let Some(container) = document.query_selector(".nav-links")? {
        let on_inside = Closure::wrap(Box::new(move |event: Event| {
            event.stop_propagation();
        }) as Box<dyn FnMut(Event)>);
        container.add_event_listener_with_callback("click", on_inside.as_ref().unchecked_ref())?;
        container.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            on_inside.as_ref().unchecked_ref(),
            &passive,
        )?;
        on_inside.forget();
    }

    Ok(())
}

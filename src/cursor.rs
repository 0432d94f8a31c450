// Custom cursor: a dot that tracks the pointer directly and a follower ring
// that eases to the same spot through the Web Animations API. Touch devices
// get neither; the elements are hidden and nothing is wired.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

const FOLLOWER_DURATION_MS: f64 = 500.0;
const HOVER_BACKGROUND: &str = "rgba(198, 168, 124, 0.1)";
const FOLLOWER_BORDER: &str = "#c6a87c";

// web-sys keeps Element.animate behind its unstable cfg, so bind the two-arg
// form directly; keyframes and options are plain objects either way.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = web_sys::HtmlElement)]
    type AnimatableElement;

    #[wasm_bindgen(method)]
    fn animate(this: &AnimatableElement, keyframes: &JsValue, options: &JsValue) -> JsValue;
}

pub fn wire(window: &Window, document: &Document) -> Result<(), JsValue> {
    let cursor = query_html(document, ".cursor")?;
    let follower = query_html(document, ".cursor-follower")?;

    // Disable on touch devices: prevents odd tap behavior and saves frames
    if is_touch_device(window) {
        if let Some(el) = &cursor {
            el.style().set_property("display", "none")?;
        }
        if let Some(el) = &follower {
            el.style().set_property("display", "none")?;
        }
        return Ok(());
    }

    match (cursor, follower) {
        (Some(cursor), Some(follower)) => wire_pointer(document, cursor, follower),
        _ => Ok(()),
    }
}

// The non-touch wiring: dot tracking, follower easing, hover styling.
pub fn wire_pointer(
    document: &Document,
    cursor: HtmlElement,
    follower: HtmlElement,
) -> Result<(), JsValue> {
    wire_mousemove(document, cursor.clone(), follower.clone())?;
    wire_hover(document, cursor, follower)?;
    Ok(())
}

fn is_touch_device(window: &Window) -> bool {
    window
        .match_media("(hover: none), (pointer: coarse)")
        .ok()
        .and_then(|query| query)
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn wire_mousemove(
    document: &Document,
    cursor: HtmlElement,
    follower: HtmlElement,
) -> Result<(), JsValue> {
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        let left = format!("{}px", event.client_x());
        let top = format!("{}px", event.client_y());

        let style = cursor.style();
        let _ = style.set_property("left", &left);
        let _ = style.set_property("top", &top);

        // The follower eases to the pointer over 500ms and stays there
        if let (Ok(keyframe), Ok(options)) = (follow_keyframe(&left, &top), follow_options()) {
            let _ = follower
                .unchecked_ref::<AnimatableElement>()
                .animate(&keyframe, &options);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

fn follow_keyframe(left: &str, top: &str) -> Result<JsValue, JsValue> {
    let keyframe = js_sys::Object::new();
    js_sys::Reflect::set(&keyframe, &"left".into(), &left.into())?;
    js_sys::Reflect::set(&keyframe, &"top".into(), &top.into())?;
    Ok(keyframe.into())
}

fn follow_options() -> Result<JsValue, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &"duration".into(),
        &JsValue::from_f64(FOLLOWER_DURATION_MS),
    )?;
    js_sys::Reflect::set(&options, &"fill".into(), &"forwards".into())?;
    Ok(options.into())
}

// Links and buttons swell both cursor elements and tint the follower while
// hovered; leaving restores the resting look.
fn wire_hover(
    document: &Document,
    cursor: HtmlElement,
    follower: HtmlElement,
) -> Result<(), JsValue> {
    let links = document.query_selector_all("a, .btn")?;

    let enter_cursor = cursor.clone();
    let enter_follower = follower.clone();
    let on_enter = Closure::wrap(Box::new(move |_: MouseEvent| {
        let _ = enter_cursor.style().set_property("transform", "scale(2)");
        let follower_style = enter_follower.style();
        let _ = follower_style.set_property("transform", "scale(2)");
        let _ = follower_style.set_property("border-color", "transparent");
        let _ = follower_style.set_property("background", HOVER_BACKGROUND);
    }) as Box<dyn FnMut(MouseEvent)>);

    let on_leave = Closure::wrap(Box::new(move |_: MouseEvent| {
        let _ = cursor.style().set_property("transform", "scale(1)");
        let follower_style = follower.style();
        let _ = follower_style.set_property("transform", "scale(1)");
        let _ = follower_style.set_property("border-color", FOLLOWER_BORDER);
        let _ = follower_style.set_property("background", "transparent");
    }) as Box<dyn FnMut(MouseEvent)>);

    for i in 0..links.length() {
        if let Some(link) = links.item(i) {
            link.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
            link.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        }
    }
    on_enter.forget();
    on_leave.forget();
    Ok(())
}

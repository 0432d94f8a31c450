// Page effects for the marketing site: mobile nav toggle, custom cursor,
// navbar scroll styling, and the canvas lattice animation. The JS side calls
// `start()` once the DOM is ready and may hold onto the returned handle to
// stop the animation on teardown.

pub mod animation;
pub mod color;
pub mod cursor;
pub mod field;
pub mod nav;
pub mod particle;
pub mod render;
mod utils;

use crate::animation::AnimationLoop;
use crate::field::Field;
use crate::render::CanvasSurface;
use crate::utils::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, Event, HtmlCanvasElement, Window};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Handle returned to JS; keeps the animation loop alive and cancellable.
#[wasm_bindgen]
pub struct PageEffects {
    animation: AnimationLoop,
}

#[wasm_bindgen]
impl PageEffects {
    pub fn stop(&self) {
        self.animation.stop();
    }
}

#[wasm_bindgen]
pub fn start() -> Result<PageEffects, JsValue> {
    utils::set_panic_hook();
    let _timer = Timer::new("lattice-page::start");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    init_scroll_reveal(&window)?;
    nav::wire(&window, &document)?;
    cursor::wire(&window, &document)?;

    // The lattice canvas is the one hard precondition on the page
    let canvas = document
        .get_element_by_id("lattice-canvas")
        .ok_or_else(|| JsValue::from_str("missing #lattice-canvas element"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let (width, height) = viewport_size(&window)?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let mut field = Field::new(width, height);
    field.init();
    console::log_1(&format!("lattice field: {} particles", field.len()).into());
    let field = Rc::new(RefCell::new(field));

    wire_resize(&window, &canvas, Rc::clone(&field))?;

    let surface = CanvasSurface::new(context, canvas);
    let animation = AnimationLoop::start(&window, field, surface)?;
    Ok(PageEffects { animation })
}

// The page may load the AOS scroll-reveal library; when it is present on the
// window, initialize it to animate each element once. Absent or oddly shaped,
// skip it like any other optional page feature.
pub fn init_scroll_reveal(window: &Window) -> Result<(), JsValue> {
    let aos = js_sys::Reflect::get(window.as_ref(), &"AOS".into())?;
    if aos.is_undefined() || aos.is_null() {
        return Ok(());
    }
    let init = match js_sys::Reflect::get(&aos, &"init".into())?.dyn_into::<js_sys::Function>() {
        Ok(init) => init,
        Err(_) => return Ok(()),
    };
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"once".into(), &JsValue::TRUE)?;
    init.call1(&aos, &options)?;
    Ok(())
}

// Resizing the viewport resizes the canvas and replaces the particle set; the
// running loop just reads the new field on its next tick.
fn wire_resize(
    window: &Window,
    canvas: &HtmlCanvasElement,
    field: Rc<RefCell<Field>>,
) -> Result<(), JsValue> {
    let resize_window = window.clone();
    let resize_canvas = canvas.clone();
    let on_resize = Closure::wrap(Box::new(move |_: Event| {
        let _timer = Timer::new("lattice-page::resize");
        if let Ok((width, height)) = viewport_size(&resize_window) {
            resize_canvas.set_width(width as u32);
            resize_canvas.set_height(height as u32);
            field.borrow_mut().resize(width, height);
        }
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height))
}

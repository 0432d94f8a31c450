// Self-rescheduling requestAnimationFrame loop driving the field, one tick
// per frame. The original page animates forever; `stop` is the one addition,
// so a host can tear the loop down on navigation.

use crate::field::Field;
use crate::render::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub struct AnimationLoop {
    frame_id: Rc<Cell<Option<i32>>>,
    // holds the tick closure alive for as long as the loop may fire
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationLoop {
    pub fn start(
        window: &Window,
        field: Rc<RefCell<Field>>,
        mut surface: CanvasSurface,
    ) -> Result<AnimationLoop, JsValue> {
        let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let cb_frame_id = Rc::clone(&frame_id);
        let cb_tick = Rc::clone(&tick);
        let cb_window = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if cb_frame_id.get().is_none() {
                // stopped between frames
                return;
            }
            // schedule the next frame first, like the original loop; nothing
            // else writes to the canvas within a turn so ordering is free
            if let Some(tick) = cb_tick.borrow().as_ref() {
                match cb_window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                    Ok(id) => cb_frame_id.set(Some(id)),
                    Err(_) => cb_frame_id.set(None),
                }
            }
            field.borrow_mut().tick(&mut surface);
        }) as Box<dyn FnMut()>));

        {
            let tick_ref = tick.borrow();
            let tick_fn = tick_ref
                .as_ref()
                .ok_or_else(|| JsValue::from_str("animation callback missing"))?;
            let id = window.request_animation_frame(tick_fn.as_ref().unchecked_ref())?;
            frame_id.set(Some(id));
        }

        Ok(AnimationLoop {
            frame_id,
            _tick: tick,
        })
    }

    // Cancels the pending frame; a tick already queued by the browser bails
    // out when it sees the cleared id.
    pub fn stop(&self) {
        if let Some(id) = self.frame_id.replace(None) {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

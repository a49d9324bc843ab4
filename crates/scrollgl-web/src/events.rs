//! Window event wiring. Each listener forwards into the scene host; nothing
//! here mutates state directly.

use crate::scene::SceneHost;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn add_window_listener<E>(name: &str, mut handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let Some(window) = web::window() else { return };
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn register(host: &Rc<RefCell<SceneHost>>) {
    {
        let host = host.clone();
        add_window_listener("resize", move |_: web::Event| {
            host.borrow_mut().on_resize();
        });
    }
    {
        let host = host.clone();
        add_window_listener("wheel", move |ev: web::WheelEvent| {
            host.borrow_mut().on_wheel(ev.delta_y(), ev.delta_mode());
        });
    }
    {
        let host = host.clone();
        add_window_listener("scroll", move |_: web::Event| {
            if let Some(w) = web::window() {
                if let Ok(y) = w.scroll_y() {
                    host.borrow_mut().on_scroll(y as f32);
                }
            }
        });
    }
    {
        let host = host.clone();
        add_window_listener("pointerdown", move |ev: web::PointerEvent| {
            host.borrow_mut().on_pointer_down(ev.client_y() as f32);
        });
    }
    {
        let host = host.clone();
        add_window_listener("pointermove", move |ev: web::PointerEvent| {
            host.borrow_mut()
                .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        });
    }
    {
        let host = host.clone();
        add_window_listener("pointerup", move |_: web::PointerEvent| {
            host.borrow_mut().on_pointer_up();
        });
    }
    {
        let host = host.clone();
        add_window_listener("touchstart", move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                host.borrow_mut().on_pointer_down(touch.client_y() as f32);
            }
        });
    }
    {
        let host = host.clone();
        add_window_listener("touchmove", move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                host.borrow_mut()
                    .on_pointer_move(touch.client_x() as f32, touch.client_y() as f32);
            }
        });
    }
    {
        let host = host.clone();
        add_window_listener("touchend", move |_: web::TouchEvent| {
            host.borrow_mut().on_pointer_up();
        });
    }
}

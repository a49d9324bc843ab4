//! Fire-and-forget image loading.
//!
//! Each media's `<img>` source is re-fetched into an offscreen image, decoded
//! through a 2D canvas into RGBA bytes, and handed back to the scene host.
//! There is no retry and no timeout: a load that never settles leaves the
//! item on its placeholder indefinitely.

use crate::scene::SceneHost;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn spawn_loads(host: &Rc<RefCell<SceneHost>>) {
    // Collect before iterating: spawn_one re-borrows the host on its error
    // path, and a for-loop scrutinee would hold the Ref until the loop ends.
    let sources = host.borrow().media_sources();
    for (index, src) in sources {
        spawn_one(host, index, src);
    }
}

fn spawn_one(host: &Rc<RefCell<SceneHost>>, index: usize, src: String) {
    let image = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::error!("[texture] image element error: {:?}", e);
            host.borrow_mut().texture_failed(index);
            return;
        }
    };
    image.set_cross_origin(Some("anonymous"));

    {
        let host = host.clone();
        let image_for_load = image.clone();
        let onload = Closure::wrap(Box::new(move || {
            match decode_pixels(&image_for_load) {
                Some((width, height, pixels)) => {
                    host.borrow_mut().texture_loaded(index, width, height, &pixels);
                }
                None => host.borrow_mut().texture_failed(index),
            }
        }) as Box<dyn FnMut()>);
        let _ = image.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref());
        onload.forget();
    }
    {
        let host = host.clone();
        let onerror = Closure::wrap(Box::new(move || {
            host.borrow_mut().texture_failed(index);
        }) as Box<dyn FnMut()>);
        let _ = image.add_event_listener_with_callback("error", onerror.as_ref().unchecked_ref());
        onerror.forget();
    }

    image.set_src(&src);
}

/// Draw the decoded image onto a scratch canvas and read it back as RGBA.
fn decode_pixels(image: &web::HtmlImageElement) -> Option<(u32, u32, Vec<u8>)> {
    let width = image.natural_width();
    let height = image.natural_height();
    if width == 0 || height == 0 {
        return None;
    }

    let document = crate::dom::window_document()?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: web::CanvasRenderingContext2d =
        canvas.get_context("2d").ok()??.dyn_into().ok()?;
    ctx.draw_image_with_html_image_element(image, 0.0, 0.0)
        .ok()?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .ok()?;

    Some((width, height, data.data().0))
}

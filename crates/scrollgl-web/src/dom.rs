//! Thin DOM queries. Everything layout-related is converted to plain
//! `scrollgl-core` values at the boundary so the mapping logic stays
//! browser-free.

use crate::constants::{MAX_DPR, MEDIA_SELECTOR};
use scrollgl_core::{LayoutRect, ScreenSize};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn screen_size() -> ScreenSize {
    let Some(w) = web::window() else {
        return ScreenSize::new(1.0, 1.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    ScreenSize::new(width as f32, height as f32)
}

/// Keep the canvas backing store at CSS size times devicePixelRatio
/// (capped; anything past 2x is wasted fill rate on these effects).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DPR);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Document-relative layout box from offset geometry. Unlike
/// `getBoundingClientRect` this does not bake the current scroll position
/// into the result, so a resize while scrolled yields the same base
/// placement as one at the top of the page.
pub fn element_offset_rect(el: &web::HtmlElement) -> LayoutRect {
    LayoutRect::new(
        el.offset_left() as f32,
        el.offset_top() as f32,
        el.offset_width() as f32,
        el.offset_height() as f32,
    )
}

/// Marked media elements paired with their `<img>` descendants. A selector
/// matching nothing is fine and yields an empty gallery.
pub fn media_elements(document: &web::Document) -> Vec<(web::HtmlElement, web::HtmlImageElement)> {
    let mut out = Vec::new();
    let Ok(list) = document.query_selector_all(MEDIA_SELECTOR) else {
        return out;
    };
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let img = match el.query_selector("img") {
            Ok(Some(n)) => n.dyn_into::<web::HtmlImageElement>().ok(),
            _ => None,
        };
        match img {
            Some(img) => out.push((el, img)),
            None => log::warn!("[dom] media element without an <img> descendant, skipping"),
        }
    }
    out
}

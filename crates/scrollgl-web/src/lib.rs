#![cfg(target_arch = "wasm32")]

mod constants;
mod dom;
mod events;
mod media;
mod observer;
mod render;
mod scene;
mod texture;

use constants::CANVAS_ID;
use instant::Instant;
use scrollgl_core::GalleryConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollgl starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID} canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let gpu = render::GpuState::new(canvas.clone()).await?;

    let host = Rc::new(RefCell::new(scene::SceneHost::new(
        canvas,
        gpu,
        &document,
        GalleryConfig::default(),
    )));

    texture::spawn_loads(&host);
    observer::observe_media(&host)?;
    events::register(&host);
    run_frame_loop(host);

    Ok(())
}

/// The single requestAnimationFrame driver. Items never schedule their own
/// callbacks; everything updates inside this one tick.
fn run_frame_loop(host: Rc<RefCell<scene::SceneHost>>) {
    let mut last = Instant::now();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();

    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;

        host.borrow_mut().frame(dt);

        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

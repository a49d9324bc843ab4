//! Scene host: owns the camera/renderer, the view state and the media list,
//! and drives the per-frame update of every item. Items never schedule their
//! own frames and never touch the canvas.

use crate::constants::{LOADED_CLASS, LOADING_CLASS, LOOP_MODE_ATTR, VISIBLE_CLASS};
use crate::dom;
use crate::media::{Media, ScrollMode};
use crate::render::GpuState;
use scrollgl_core::{
    normalize_wheel, GalleryConfig, PointerFollow, ScrollState, ViewState, CAMERA_FOV_DEGREES,
    CAMERA_Z,
};
use web_sys as web;

pub struct SceneHost {
    canvas: web::HtmlCanvasElement,
    gpu: GpuState,
    config: GalleryConfig,
    view: ViewState,
    scroll: ScrollState,
    pointer: PointerFollow,
    medias: Vec<Media>,
    pending_loads: usize,
    /// Carousel demos accumulate wheel/drag input themselves; page-follow
    /// demos track the document's own scroll position instead.
    loop_drive: bool,
}

impl SceneHost {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        gpu: GpuState,
        document: &web::Document,
        config: GalleryConfig,
    ) -> Self {
        let view = ViewState::compute(dom::screen_size(), CAMERA_FOV_DEGREES, CAMERA_Z);

        let elements = dom::media_elements(document);
        if elements.is_empty() {
            log::info!("[scene] no media elements matched; empty gallery");
        }
        let count = elements.len();

        let medias: Vec<Media> = elements
            .into_iter()
            .enumerate()
            .map(|(index, (el, img))| {
                let mode = match el.get_attribute(LOOP_MODE_ATTR).as_deref() {
                    Some("loop") => ScrollMode::Loop,
                    _ => ScrollMode::Follow,
                };
                Media::new(el, &img, mode, index, count, &view, &config, gpu.create_item())
            })
            .collect();

        if let Some(root) = document.document_element() {
            let classes = root.class_list();
            if medias.is_empty() {
                let _ = classes.add_1(LOADED_CLASS);
            } else {
                let _ = classes.add_1(LOADING_CLASS);
            }
        }

        let loop_drive = medias.iter().any(|m| m.mode == ScrollMode::Loop);

        Self {
            canvas,
            gpu,
            scroll: ScrollState::new(config.ease, config.wheel_speed, config.drag_speed),
            pointer: PointerFollow::new(config.pointer_ease),
            pending_loads: medias.len(),
            config,
            view,
            medias,
            loop_drive,
        }
    }

    pub fn media_sources(&self) -> Vec<(usize, String)> {
        self.medias
            .iter()
            .map(|m| (m.index, m.image_src.clone()))
            .collect()
    }

    pub fn media_elements(&self) -> Vec<(usize, web::HtmlElement)> {
        self.medias
            .iter()
            .map(|m| (m.index, m.element.clone()))
            .collect()
    }

    /// Window resize: recompute the view pair once, resize the surface once,
    /// then push the new state to every item in the same invocation.
    pub fn on_resize(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        self.view = ViewState::compute(dom::screen_size(), CAMERA_FOV_DEGREES, CAMERA_Z);
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        for media in &mut self.medias {
            media.on_resize(&self.view, &self.config);
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64, delta_mode: u32) {
        if self.loop_drive {
            self.scroll.on_wheel(normalize_wheel(delta_y, delta_mode));
        }
    }

    /// Native document scroll; drives the page-follow galleries.
    pub fn on_scroll(&mut self, scroll_y: f32) {
        if !self.loop_drive {
            self.scroll.target = scroll_y;
        }
    }

    pub fn on_pointer_down(&mut self, y: f32) {
        if self.loop_drive {
            self.scroll.begin_drag(y);
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.scroll.drag_to(y);
        self.pointer.set_target(
            x / self.view.screen.width.max(1.0),
            y / self.view.screen.height.max(1.0),
        );
    }

    pub fn on_pointer_up(&mut self) {
        self.scroll.end_drag();
    }

    /// One animation-frame tick: advance the drive signals, update every
    /// item's uniforms, then issue a single render for the whole scene.
    pub fn frame(&mut self, dt: f32) {
        self.scroll.tick();
        self.pointer.tick();

        for media in &mut self.medias {
            media.update(&self.scroll, &self.pointer, &self.view, &self.config, dt);
        }

        let items = self
            .medias
            .iter()
            .filter(|m| !m.is_disposed())
            .map(|m| (&m.gpu, &m.uniforms));
        if let Err(e) = self.gpu.render(items) {
            log::error!("render error: {:?}", e);
        }
    }

    /// IntersectionObserver callback target. Unknown or disposed ids no-op.
    pub fn set_visibility(&mut self, index: usize, visible: bool) {
        let Some(media) = self.medias.get_mut(index) else {
            return;
        };
        media.set_visible(visible);
        if !media.is_disposed() {
            let classes = media.element.class_list();
            let _ = if visible {
                classes.add_1(VISIBLE_CLASS)
            } else {
                classes.remove_1(VISIBLE_CLASS)
            };
        }
    }

    /// Image decode resolved. Guarded: a late arrival for a disposed item
    /// only decrements the preload counter.
    pub fn texture_loaded(&mut self, index: usize, width: u32, height: u32, pixels: &[u8]) {
        if let Some(media) = self.medias.get_mut(index) {
            if !media.is_disposed() {
                self.gpu.upload_pixels(&mut media.gpu, width, height, pixels);
                media.set_image_size(width, height);
            }
        }
        self.note_load_settled();
    }

    /// Failed decode: the item keeps its placeholder forever, but the
    /// preloader must not wait on it.
    pub fn texture_failed(&mut self, index: usize) {
        log::warn!("[texture] image {} failed to load; keeping placeholder", index);
        self.note_load_settled();
    }

    fn note_load_settled(&mut self) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
        if self.pending_loads == 0 {
            if let Some(root) = dom::window_document().and_then(|d| d.document_element()) {
                let classes = root.class_list();
                let _ = classes.remove_1(LOADING_CLASS);
                let _ = classes.add_1(LOADED_CLASS);
            }
        }
    }
}

//! One DOM element mirrored by a textured world-space plane.

use crate::dom;
use crate::render::ItemGpu;
use scrollgl_core::{
    map_range, GalleryConfig, LoopItem, MediaUniforms, Placement, PointerFollow, ScrollState,
    ViewState, REVEAL_RATE_PER_SEC, TIME_STEP,
};
use web_sys as web;

/// How scroll moves this plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// Track the page scroll one-to-one (converted to world units).
    Follow,
    /// Carousel strip that wraps around for an infinite-loop illusion.
    Loop,
}

pub struct Media {
    pub element: web::HtmlElement,
    pub image_src: String,
    pub mode: ScrollMode,
    pub index: usize,
    pub count: usize,
    pub placement: Placement,
    pub uniforms: MediaUniforms,
    pub gpu: ItemGpu,
    loop_item: Option<LoopItem>,
    reveal_target: f32,
    disposed: bool,
}

impl Media {
    pub fn new(
        element: web::HtmlElement,
        image: &web::HtmlImageElement,
        mode: ScrollMode,
        index: usize,
        count: usize,
        view: &ViewState,
        config: &GalleryConfig,
        gpu: ItemGpu,
    ) -> Self {
        let mut media = Self {
            element,
            image_src: image.src(),
            mode,
            index,
            count,
            placement: Placement::default(),
            uniforms: MediaUniforms::default(),
            gpu,
            loop_item: None,
            reveal_target: 0.0,
            disposed: false,
        };
        media.on_resize(view, config);
        media
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Mark the item dead; later callbacks (late texture loads, observer
    /// entries) become no-ops.
    pub fn destroy(&mut self) {
        self.disposed = true;
    }

    /// Recompute scale and position from the element's live layout box and
    /// the freshly computed view. Resize-only: per-frame ticks never re-read
    /// the DOM.
    pub fn on_resize(&mut self, view: &ViewState, config: &GalleryConfig) {
        if self.disposed {
            return;
        }
        if !self.element.is_connected() {
            // Removed from the document since construction; treat as already
            // destroyed rather than reading a detached layout box.
            log::info!("[media] element {} detached, disposing item", self.index);
            self.destroy();
            return;
        }

        let rect = dom::element_offset_rect(&self.element);
        self.placement = Placement::from_rect(rect, view);

        self.uniforms.plane_size = [self.placement.scale.x, self.placement.scale.y];
        self.uniforms.viewport_size = [view.world.width, view.world.height];
        self.uniforms.position = [self.placement.position.x, self.placement.position.y];

        if self.mode == ScrollMode::Loop {
            let slot = self.placement.scale.y + config.padding;
            let base_y = slot * self.index as f32;
            let half = self.placement.scale.y / 2.0;
            let total = slot * self.count as f32;
            match &mut self.loop_item {
                Some(item) => item.relayout(base_y, half, total),
                None => self.loop_item = Some(LoopItem::new(base_y, half, total)),
            }
        }
    }

    /// Per-frame tick: move the plane and refresh shader values. Scale and
    /// base position are untouched here.
    pub fn update(
        &mut self,
        scroll: &ScrollState,
        pointer: &PointerFollow,
        view: &ViewState,
        config: &GalleryConfig,
        dt: f32,
    ) {
        if self.disposed {
            return;
        }

        let y = match (self.mode, &mut self.loop_item) {
            (ScrollMode::Loop, Some(item)) => {
                item.update(scroll.current, scroll.direction(), view.world.height)
            }
            _ => {
                // Page scroll in CSS px -> world units; content moves up as
                // the page scrolls down.
                let world_scroll = scroll.current * view.world.height / view.screen.height.max(1.0);
                self.placement.position.y + world_scroll
            }
        };

        self.uniforms.position = [self.placement.position.x, y];
        self.uniforms.time += TIME_STEP;
        self.uniforms.speed = scroll.velocity();
        self.uniforms.strength = map_range(
            y,
            -view.world.height,
            view.world.height,
            config.strength_min,
            config.strength_max,
        );
        self.uniforms.pointer = [pointer.current.x, pointer.current.y];

        // Ease the reveal toward its observer-driven target.
        let step = REVEAL_RATE_PER_SEC * dt;
        let delta = self.reveal_target - self.uniforms.reveal;
        self.uniforms.reveal += delta.clamp(-step, step);
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.disposed {
            return;
        }
        self.reveal_target = if visible { 1.0 } else { 0.0 };
    }

    /// Texture decode finished. Called at most once, possibly never.
    pub fn set_image_size(&mut self, width: u32, height: u32) {
        if self.disposed {
            return;
        }
        self.uniforms.image_size = [width as f32, height as f32];
    }
}

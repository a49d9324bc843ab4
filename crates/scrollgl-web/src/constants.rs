// DOM contract and renderer tuning for the web front-end.

// Element wiring
pub const CANVAS_ID: &str = "gl";
pub const MEDIA_SELECTOR: &str = "[data-gl-media]";
pub const LOOP_MODE_ATTR: &str = "data-gl-mode"; // "loop" selects the carousel variant
pub const INTERSECT_ID_ATTR: &str = "data-intersect-id";

// CSS side channel
pub const VISIBLE_CLASS: &str = "is-visible";
pub const LOADING_CLASS: &str = "loading";
pub const LOADED_CLASS: &str = "loaded";

// Renderer
pub const MAX_DPR: f64 = 2.0;
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.03,
    a: 1.0,
};

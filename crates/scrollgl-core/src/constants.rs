// Shared tuning constants for the gallery demos. Per-demo overrides go
// through `GalleryConfig`; these are the defaults every demo starts from.

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_Z: f32 = 20.0;

// Scroll
pub const SCROLL_EASE: f32 = 0.1; // lerp factor per frame toward the target
pub const WHEEL_SPEED: f32 = 0.005; // wheel px -> world units
pub const DRAG_SPEED: f32 = 0.1; // touch-drag px -> world units
pub const WHEEL_LINE_HEIGHT_PX: f64 = 16.0;
pub const WHEEL_PAGE_HEIGHT_PX: f64 = 800.0;

// Per-frame shader clock increment (fixed step, matches the visual tuning of
// the time-driven noise in the shaders rather than wall-clock dt)
pub const TIME_STEP: f32 = 0.04;

// Gallery layout
pub const GALLERY_PADDING: f32 = 0.8; // world units between looped items

// Scroll-position -> distortion strength mapping range
pub const STRENGTH_MIN: f32 = 5.0;
pub const STRENGTH_MAX: f32 = 15.0;

// Pointer smoothing
pub const POINTER_EASE: f32 = 0.1;

// Visibility reveal damping (per second, applied against dt)
pub const REVEAL_RATE_PER_SEC: f32 = 1.2;

/// Per-demo numeric knobs. Plain data; demos construct one and hand it to the
/// scene host.
#[derive(Clone, Copy, Debug)]
pub struct GalleryConfig {
    pub ease: f32,
    pub wheel_speed: f32,
    pub drag_speed: f32,
    pub padding: f32,
    pub strength_min: f32,
    pub strength_max: f32,
    pub pointer_ease: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            ease: SCROLL_EASE,
            wheel_speed: WHEEL_SPEED,
            drag_speed: DRAG_SPEED,
            padding: GALLERY_PADDING,
            strength_min: STRENGTH_MIN,
            strength_max: STRENGTH_MAX,
            pointer_ease: POINTER_EASE,
        }
    }
}

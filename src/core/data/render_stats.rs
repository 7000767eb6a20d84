use std::time::Duration;

/// Statistics recorded after each render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStats {
    /// Wall-clock time of the whole render (all progressive levels).
    pub render_time: Duration,
    /// Reference view width divided by current view width.
    pub zoom_level: f64,
    /// Centre of the rendered view in coordinate space.
    pub center: (f64, f64),
    /// Full canvas resolution as (width, height).
    pub resolution: (u32, u32),
    /// Cumulative scalar-field cache hits for this renderer.
    pub cache_hits: u64,
    /// Cumulative scalar-field cache misses for this renderer.
    pub cache_misses: u64,
}

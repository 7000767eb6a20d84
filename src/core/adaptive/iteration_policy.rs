use crate::core::data::bounds::Bounds;

/// Hard ceiling for escape-time iteration budgets.
pub const ESCAPE_TIME_ITERATION_CAP: u32 = 2000;

/// Hard ceiling for chaos-game sample budgets.
pub const IFS_SAMPLE_CAP: u64 = 10_000_000;

/// Zoom level relative to a family's reference view: the reference width
/// divided by the current width. 1.0 at the default view, larger when
/// zoomed in.
#[must_use]
pub fn zoom_level(current: Bounds, reference: Bounds) -> f64 {
    reference.width() / current.width()
}

/// Escape-time budget scaled with the decade of the zoom level and capped
/// at [`ESCAPE_TIME_ITERATION_CAP`].
#[must_use]
pub fn escape_time_budget(base: u32, zoom_level: f64) -> u32 {
    let scaled = f64::from(base) * (1.0 + zoom_level.max(1.0).log10());

    (scaled as u32).min(ESCAPE_TIME_ITERATION_CAP)
}

/// Chaos-game sample budget scaled sub-linearly with zoom, capped at ten
/// times the base and at [`IFS_SAMPLE_CAP`].
#[must_use]
pub fn ifs_sample_budget(base: u64, zoom_level: f64) -> u64 {
    let scale = zoom_level.powf(0.75).max(1.0);
    let scaled = (base as f64 * scale) as u64;

    scaled.min(base.saturating_mul(10).min(IFS_SAMPLE_CAP))
}

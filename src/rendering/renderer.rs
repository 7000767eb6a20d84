use log::{debug, info};
use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::upsample_bilinear::upsample_bilinear;
use crate::core::adaptive::iteration_policy;
use crate::core::data::bounds::Bounds;
use crate::core::data::colour_image::ColourImage;
use crate::core::data::parameters::{ParamValue, Params};
use crate::core::data::render_stats::RenderStats;
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::fractals::escape_time::{DEFAULT_MAX_ITER, MAX_ITER};
use crate::core::fractals::family::{ComputeError, FamilyType, FractalFamily};
use crate::core::fractals::family_kinds::FamilyKinds;
use crate::core::fractals::ifs::ITERATIONS;
use crate::rendering::colour_mapping::mapper::ColourMapper;
use crate::viewport::viewport_state::ViewportState;

/// Downsample factors of the coarse-to-fine ladder; the final level is
/// always full resolution.
pub const PROGRESSIVE_LEVELS: &[u32] = &[8, 4, 2, 1];

const DEFAULT_IFS_ITERATIONS: i64 = 100_000;

#[derive(Debug)]
pub enum RenderError {
    Compute(ComputeError),
    Cancelled(Cancelled),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compute(err) => write!(f, "compute error: {}", err),
            Self::Cancelled(c) => write!(f, "{}", c),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compute(err) => Some(err),
            Self::Cancelled(c) => Some(c),
        }
    }
}

impl From<ComputeError> for RenderError {
    fn from(err: ComputeError) -> Self {
        Self::Compute(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    bounds: Bounds,
    resolution: Resolution,
    params: Params,
}

#[derive(Debug)]
struct CachedField {
    key: CacheKey,
    field: ScalarField,
}

/// Progressive render pipeline: owns a fractal family, its viewport and
/// colour mapper, resolves budgets through the adaptive policy and keeps
/// the last scalar field so palette-only changes skip recomputation.
pub struct Renderer {
    kind: FamilyKinds,
    family: Box<dyn FractalFamily>,
    viewport: ViewportState,
    colour_mapper: ColourMapper,
    adaptive: bool,
    cache: Option<CachedField>,
    cache_hits: u64,
    cache_misses: u64,
    stats: Option<RenderStats>,
}

impl Renderer {
    #[must_use]
    pub fn new(kind: FamilyKinds, resolution: Resolution) -> Self {
        let family = kind.create();
        let viewport = ViewportState::new(family.default_bounds(), resolution);

        Self {
            kind,
            family,
            viewport,
            colour_mapper: ColourMapper::default(),
            adaptive: true,
            cache: None,
            cache_hits: 0,
            cache_misses: 0,
            stats: None,
        }
    }

    #[must_use]
    pub fn family_kind(&self) -> FamilyKinds {
        self.kind
    }

    #[must_use]
    pub fn family(&self) -> &dyn FractalFamily {
        self.family.as_ref()
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    #[must_use]
    pub fn colour_mapper(&self) -> &ColourMapper {
        &self.colour_mapper
    }

    pub fn colour_mapper_mut(&mut self) -> &mut ColourMapper {
        &mut self.colour_mapper
    }

    /// Disabling passes caller budgets through verbatim.
    pub fn set_adaptive(&mut self, adaptive: bool) {
        self.adaptive = adaptive;
    }

    #[must_use]
    pub fn stats(&self) -> Option<&RenderStats> {
        self.stats.as_ref()
    }

    /// Renders the current (or given) view to a colour image.
    pub fn render(
        &mut self,
        bounds: Option<Bounds>,
        progressive: bool,
        params: &Params,
    ) -> Result<ColourImage, RenderError> {
        self.render_cancelable(bounds, progressive, params, &NeverCancel, |_| {})
    }

    /// Like [`Renderer::render`], with a cancellation token polled at
    /// progressive level boundaries and an observer invoked after every
    /// level with the current displayable image.
    pub fn render_cancelable<C: CancelToken>(
        &mut self,
        bounds: Option<Bounds>,
        progressive: bool,
        params: &Params,
        cancel: &C,
        mut on_level: impl FnMut(&ColourImage),
    ) -> Result<ColourImage, RenderError> {
        if let Some(bounds) = bounds {
            self.viewport.set_bounds(bounds);
        }

        let start = Instant::now();
        let bounds = self.viewport.bounds();
        let resolution = self.viewport.resolution();
        let resolved = self.resolve_params(params);
        let key = CacheKey {
            bounds,
            resolution,
            params: resolved.clone(),
        };

        let cached = self
            .cache
            .as_ref()
            .filter(|cached| cached.key == key)
            .map(|cached| cached.field.clone());

        let image = match cached {
            Some(field) => {
                self.cache_hits += 1;
                debug!("scalar field cache hit, re-deriving colours only");

                let image = self.colour_mapper.map_field(&field, true);
                on_level(&image);
                image
            }
            None => {
                self.cache_misses += 1;

                if progressive {
                    self.render_ladder(resolution, bounds, &resolved, key, cancel, &mut on_level)?
                } else {
                    let field = self.family.compute(resolution, bounds, &resolved)?;
                    let image = self.colour_mapper.map_field(&field, true);

                    self.cache = Some(CachedField { key, field });
                    on_level(&image);
                    image
                }
            }
        };

        let elapsed = start.elapsed();

        self.stats = Some(RenderStats {
            render_time: elapsed,
            zoom_level: self.viewport.zoom_level(),
            center: self.viewport.center(),
            resolution: (resolution.width(), resolution.height()),
            cache_hits: self.cache_hits,
            cache_misses: self.cache_misses,
        });

        info!(
            "rendered {} at {}x{} in {:?}",
            self.family.display_name(),
            resolution.width(),
            resolution.height(),
            elapsed
        );

        Ok(image)
    }

    fn render_ladder<C: CancelToken>(
        &mut self,
        resolution: Resolution,
        bounds: Bounds,
        resolved: &Params,
        key: CacheKey,
        cancel: &C,
        on_level: &mut impl FnMut(&ColourImage),
    ) -> Result<ColourImage, RenderError> {
        let mut current = None;

        for &level in PROGRESSIVE_LEVELS {
            if cancel.is_cancelled() {
                return Err(RenderError::Cancelled(Cancelled));
            }

            let reduced = resolution.scaled_down(level);
            let field = self.family.compute(reduced, bounds, resolved)?;
            let field = if field.resolution() == resolution {
                field
            } else {
                upsample_bilinear(&field, resolution)
            };

            let image = self.colour_mapper.map_field(&field, true);

            if level == 1 {
                // only the full-resolution field is cached
                self.cache = Some(CachedField {
                    key: key.clone(),
                    field,
                });
            }

            on_level(&image);
            current = Some(image);
        }

        match current {
            Some(image) => Ok(image),
            // PROGRESSIVE_LEVELS is a non-empty constant
            None => unreachable!("progressive ladder produced no image"),
        }
    }

    /// Fills in schema defaults, clamps caller values, drops unknown names
    /// and applies the adaptive budget policy for the family's category.
    fn resolve_params(&self, params: &Params) -> Params {
        let schema = self.family.parameters();
        let mut resolved = Params::new();

        for (name, descriptor) in &schema {
            let value = match params.get(name) {
                Some(value) => descriptor.clamp(value.clone()),
                None => descriptor.default.clone(),
            };

            resolved.insert(name, value);
        }

        if self.adaptive {
            self.apply_adaptive(&mut resolved);
        }

        resolved
    }

    fn apply_adaptive(&self, resolved: &mut Params) {
        let zoom =
            iteration_policy::zoom_level(self.viewport.bounds(), self.family.default_bounds());

        match self.family.family_type() {
            FamilyType::EscapeTime => {
                let base = resolved.int_or(MAX_ITER, DEFAULT_MAX_ITER);

                if base > 0 {
                    let base = u32::try_from(base).unwrap_or(u32::MAX);
                    let effective = iteration_policy::escape_time_budget(base, zoom);

                    resolved.insert(MAX_ITER, ParamValue::Int(i64::from(effective)));
                }
            }
            FamilyType::Ifs => {
                let base = resolved.int_or(ITERATIONS, DEFAULT_IFS_ITERATIONS);

                if base > 0 {
                    let effective = iteration_policy::ifs_sample_budget(base as u64, zoom);

                    resolved.insert(ITERATIONS, ParamValue::Int(effective as i64));
                }
            }
            FamilyType::Deterministic => {}
        }
    }
}

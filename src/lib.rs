mod controllers;
mod core;
mod rendering;
mod storage;
mod viewport;

pub use crate::controllers::showcase::showcase_controller;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::data::affine_transform::AffineTransform;
pub use crate::core::data::bounds::{Bounds, BoundsError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::colour_image::ColourImage;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::parameters::{ParamValue, ParameterDescriptor, ParameterSchema, Params};
pub use crate::core::data::render_stats::RenderStats;
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::data::scalar_field::ScalarField;
pub use crate::core::data::transform_set::{TransformSet, TransformSetError};
pub use crate::core::fractals::family::{ComputeError, FamilyType, FractalFamily};
pub use crate::core::fractals::family_kinds::FamilyKinds;
pub use crate::rendering::colour_mapping::mapper::ColourMapper;
pub use crate::rendering::colour_mapping::palette_kinds::PaletteKinds;
pub use crate::rendering::renderer::{PROGRESSIVE_LEVELS, RenderError, Renderer};
pub use crate::storage::write_ppm::write_ppm;
pub use crate::viewport::viewport_state::{ViewportError, ViewportState};

use crate::core::actions::ports::transform_selector::TransformSelector;
use crate::core::data::bounds::Bounds;
use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;
use crate::core::data::transform_set::TransformSet;

/// Burn-in iterations discarded before accumulation so the running point
/// settles onto the attractor.
#[must_use]
pub fn burn_in_length(iterations: u64) -> u64 {
    (iterations / 100).min(100)
}

/// Runs one sequential chaos-game chain and accumulates raw visit weights.
///
/// Interior points are splatted bilinearly across the four enclosing
/// cells; points within one cell of a canvas edge deposit into a single
/// cell; points off the canvas are dropped. Rows are flipped so row 0 sits
/// at y_max.
///
/// The result is unnormalised so that independent chains can be summed
/// before [`normalise_density`].
pub fn accumulate_density<S: TransformSelector>(
    resolution: Resolution,
    bounds: Bounds,
    iterations: u64,
    transforms: &TransformSet,
    seed_point: (f64, f64),
    selector: &mut S,
) -> ScalarField {
    let width = resolution.width();
    let height = resolution.height();
    let span_x = f64::from(width - 1);
    let span_y = f64::from(height - 1);
    let cumulative = transforms.cumulative();
    let skip = burn_in_length(iterations);

    let mut field = ScalarField::new(resolution);
    let (mut x, mut y) = seed_point;

    for i in 0..iterations {
        let index = selector.next_index(cumulative);
        let (next_x, next_y) = transforms.apply(index, x, y);
        x = next_x;
        y = next_y;

        if i < skip {
            continue;
        }

        let fx = (x - bounds.x_min()) / bounds.width() * span_x;
        let fy = (y - bounds.y_min()) / bounds.height() * span_y;
        let px = fx.floor();
        let py = fy.floor();

        if px >= 0.0 && py >= 0.0 && px + 1.0 < f64::from(width) && py + 1.0 < f64::from(height) {
            let px = px as u32;
            let py = py as u32;
            let dx = (fx - f64::from(px)) as f32;
            let dy = (fy - f64::from(py)) as f32;
            let row = height - 1 - py;

            field.deposit(px, row, (1.0 - dx) * (1.0 - dy));
            field.deposit(px + 1, row, dx * (1.0 - dy));
            field.deposit(px, row - 1, (1.0 - dx) * dy);
            field.deposit(px + 1, row - 1, dx * dy);
        } else if px >= 0.0 && py >= 0.0 && px < f64::from(width) && py < f64::from(height) {
            field.deposit(px as u32, height - 1 - py as u32, 1.0);
        }
    }

    field
}

/// Compresses accumulated visit counts into a [0, 1] density: log1p on
/// every cell, then divide by the maximum (no-op on an all-zero field).
pub fn normalise_density(field: &mut ScalarField) {
    for value in field.values_mut() {
        *value = value.ln_1p();
    }

    let (_, max) = field.min_max();

    if max > 0.0 {
        for value in field.values_mut() {
            *value /= max;
        }
    }
}

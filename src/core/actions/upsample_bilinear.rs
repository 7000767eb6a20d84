use crate::core::data::resolution::Resolution;
use crate::core::data::scalar_field::ScalarField;

/// Resamples a scalar field to a larger resolution with bilinear
/// interpolation, used to stretch coarse progressive levels to the full
/// canvas.
#[must_use]
pub fn upsample_bilinear(source: &ScalarField, target: Resolution) -> ScalarField {
    let src_res = source.resolution();

    if src_res == target {
        return source.clone();
    }

    let src_w = src_res.width();
    let src_h = src_res.height();
    let scale_x = ratio(src_w, target.width());
    let scale_y = ratio(src_h, target.height());

    let mut result = ScalarField::new(target);
    let target_w = target.width() as usize;

    for (index, cell) in result.values_mut().iter_mut().enumerate() {
        let ty = (index / target_w) as u32;
        let tx = (index % target_w) as u32;

        let sx = f64::from(tx) * scale_x;
        let sy = f64::from(ty) * scale_y;
        let x0 = sx.floor() as u32;
        let y0 = sy.floor() as u32;
        let x1 = (x0 + 1).min(src_w - 1);
        let y1 = (y0 + 1).min(src_h - 1);
        let dx = (sx - f64::from(x0)) as f32;
        let dy = (sy - f64::from(y0)) as f32;

        let top = source.value_at(x0, y0) * (1.0 - dx) + source.value_at(x1, y0) * dx;
        let bottom = source.value_at(x0, y1) * (1.0 - dx) + source.value_at(x1, y1) * dx;

        *cell = top * (1.0 - dy) + bottom * dy;
    }

    result
}

fn ratio(source: u32, target: u32) -> f64 {
    if target <= 1 {
        0.0
    } else {
        f64::from(source - 1) / f64::from(target - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: i32, height: i32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_same_resolution_is_identity() {
        let field =
            ScalarField::from_values(resolution(2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();

        assert_eq!(upsample_bilinear(&field, resolution(2, 2)), field);
    }

    #[test]
    fn test_corners_are_preserved() {
        let field =
            ScalarField::from_values(resolution(2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let scaled = upsample_bilinear(&field, resolution(5, 5));

        assert_eq!(scaled.value_at(0, 0), 1.0);
        assert_eq!(scaled.value_at(4, 0), 2.0);
        assert_eq!(scaled.value_at(0, 4), 3.0);
        assert_eq!(scaled.value_at(4, 4), 4.0);
    }

    #[test]
    fn test_midpoint_interpolates() {
        let field =
            ScalarField::from_values(resolution(2, 1), vec![0.0, 1.0]).unwrap();
        let scaled = upsample_bilinear(&field, resolution(3, 1));

        assert_eq!(scaled.value_at(1, 0), 0.5);
    }

    #[test]
    fn test_single_source_cell_fills_target() {
        let field = ScalarField::from_values(resolution(1, 1), vec![0.75]).unwrap();
        let scaled = upsample_bilinear(&field, resolution(4, 4));

        assert!(scaled.values().iter().all(|&v| v == 0.75));
    }
}

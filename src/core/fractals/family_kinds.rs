use crate::core::fractals::analytic::sierpinski_gasket::SierpinskiGasket;
use crate::core::fractals::escape_time::burning_ship::BurningShip;
use crate::core::fractals::escape_time::julia::Julia;
use crate::core::fractals::escape_time::mandelbrot::Mandelbrot;
use crate::core::fractals::family::FractalFamily;
use crate::core::fractals::ifs::barnsley_fern::BarnsleyFern;
use crate::core::fractals::ifs::chaos_seeded_sierpinski::ChaosSeededSierpinski;
use crate::core::fractals::ifs::dragon_curve::DragonCurve;
use crate::core::fractals::ifs::sierpinski::SierpinskiTriangle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilyKinds {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    SierpinskiTriangle,
    BarnsleyFern,
    DragonCurve,
    SierpinskiGasket,
    SierpinskiChaos,
}

impl FamilyKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::SierpinskiTriangle,
        Self::BarnsleyFern,
        Self::DragonCurve,
        Self::SierpinskiGasket,
        Self::SierpinskiChaos,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Set",
            Self::Julia => "Julia Set",
            Self::BurningShip => "Burning Ship",
            Self::SierpinskiTriangle => "Sierpinski Triangle",
            Self::BarnsleyFern => "Barnsley Fern",
            Self::DragonCurve => "Dragon Curve",
            Self::SierpinskiGasket => "Sierpinski Gasket",
            Self::SierpinskiChaos => "Sierpinski Triangle (Chaos Game)",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning_ship",
            Self::SierpinskiTriangle => "sierpinski",
            Self::BarnsleyFern => "fern",
            Self::DragonCurve => "dragon",
            Self::SierpinskiGasket => "sierpinski_gasket",
            Self::SierpinskiChaos => "sierpinski_chaos",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(name))
    }

    /// Unknown names fall back to the default family instead of failing,
    /// keeping interactive callers robust.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    #[must_use]
    pub fn create(self) -> Box<dyn FractalFamily> {
        match self {
            Self::Mandelbrot => Box::new(Mandelbrot),
            Self::Julia => Box::new(Julia),
            Self::BurningShip => Box::new(BurningShip),
            Self::SierpinskiTriangle => Box::new(SierpinskiTriangle),
            Self::BarnsleyFern => Box::new(BarnsleyFern),
            Self::DragonCurve => Box::new(DragonCurve),
            Self::SierpinskiGasket => Box::new(SierpinskiGasket),
            Self::SierpinskiChaos => Box::new(ChaosSeededSierpinski),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_kind() {
        for &kind in FamilyKinds::ALL {
            assert_eq!(FamilyKinds::from_name(kind.id()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(
            FamilyKinds::from_name("MANDELBROT"),
            Some(FamilyKinds::Mandelbrot)
        );
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(
            FamilyKinds::parse_or_default("menger_sponge"),
            FamilyKinds::Mandelbrot
        );
    }

    #[test]
    fn test_created_families_report_matching_display_names() {
        for &kind in FamilyKinds::ALL {
            assert_eq!(kind.create().display_name(), kind.display_name());
        }
    }

    #[test]
    fn test_created_families_have_valid_default_bounds() {
        for &kind in FamilyKinds::ALL {
            let bounds = kind.create().default_bounds();

            assert!(bounds.width() > 0.0);
            assert!(bounds.height() > 0.0);
        }
    }
}

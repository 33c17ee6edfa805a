//! Projection of (dip, pitch) angle pairs onto the classification plane.
//!
//! The diagram's angular origin is ambiguous from dip/strike convention
//! alone, so the projection is selectable: the two diamond conventions are
//! reflections of each other across the 45° axis, and a third variant
//! reproduces the vertically exaggerated "kite" figure used by some
//! reference drawings.

use serde::Serialize;

/// Vertical exaggeration factor of the kite-shaped diagram variant.
pub const KITE_EXAGGERATION: f64 = 1.7;

/// Angular convention used to place a (dip, pitch) pair in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// θ = radians(90 − dip), point normalized onto the unit diamond.
    /// Usually matches the published Rickard diagram.
    Rickard,
    /// θ = radians(dip), point normalized onto the unit diamond.
    Polar,
    /// θ = radians(dip), no diamond normalization; y is scaled by
    /// [`KITE_EXAGGERATION`]. Full-pitch points land on an ellipse-like
    /// kite rather than the diamond boundary.
    Kite,
}

impl Convention {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rickard" => Some(Convention::Rickard),
            "polar" => Some(Convention::Polar),
            "kite" => Some(Convention::Kite),
            _ => None,
        }
    }

    /// All selectable conventions
    pub fn all() -> [Convention; 3] {
        [Convention::Rickard, Convention::Polar, Convention::Kite]
    }

    pub fn label(self) -> &'static str {
        match self {
            Convention::Rickard => "rickard",
            Convention::Polar => "polar",
            Convention::Kite => "kite",
        }
    }

    /// Whether full-pitch points land on the unit diamond |x|+|y| = 1.
    pub fn is_diamond(self) -> bool {
        !matches!(self, Convention::Kite)
    }

    /// Height of the plotting area above the x-axis (1.0 for the diamond,
    /// [`KITE_EXAGGERATION`] for the kite).
    pub fn apex_height(self) -> f64 {
        if self.is_diamond() {
            1.0
        } else {
            KITE_EXAGGERATION
        }
    }

    fn theta_radians(self, dip_deg: f64) -> f64 {
        match self {
            Convention::Rickard => (90.0 - dip_deg).to_radians(),
            Convention::Polar | Convention::Kite => dip_deg.to_radians(),
        }
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A point in the plane of the classification diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiamondPoint {
    pub x: f64,
    pub y: f64,
}

impl DiamondPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// L1 norm |x| + |y|; equals 1 for full-pitch points under the diamond
    /// conventions.
    pub fn l1_norm(&self) -> f64 {
        self.x.abs() + self.y.abs()
    }
}

/// Distance from the origin to the plotting-area outline in the direction
/// θ: the unit diamond |x|+|y| = 1 for the diamond conventions, the kite
/// |x|+|y|/1.7 = 1 for the kite variant. Defined as 0 when the denominator
/// is 0, which cannot occur for finite θ but guards NaN/Inf propagation.
pub fn boundary_radius(convention: Convention, theta: f64) -> f64 {
    let (c, s) = (theta.cos().abs(), theta.sin().abs());
    let denom = if convention.is_diamond() {
        c + s
    } else {
        c + s / KITE_EXAGGERATION
    };
    if denom == 0.0 {
        0.0
    } else {
        1.0 / denom
    }
}

/// Project a (dip, pitch) pair onto the classification plane.
///
/// Dip may be any real value; it is interpreted modulo 360° by the
/// trigonometric functions. Pitch is expected in [0, 90] and is clamped
/// into that range through the radius term rather than rejected.
pub fn project(dip_deg: f64, pitch_deg: f64, convention: Convention) -> DiamondPoint {
    let theta = convention.theta_radians(dip_deg);
    let r = (pitch_deg / 90.0).clamp(0.0, 1.0);

    let (c, s) = (theta.cos(), theta.sin());
    match convention {
        Convention::Rickard | Convention::Polar => {
            // Equal angular spacing in θ maps to equal-length wedges along
            // the diamond's edges, not the circle's.
            let t = boundary_radius(convention, theta);
            DiamondPoint::new(r * t * c, r * t * s)
        }
        Convention::Kite => DiamondPoint::new(r * c, KITE_EXAGGERATION * r * s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pitch_projects_to_origin_for_any_dip() {
        for convention in Convention::all() {
            for dip in [-180.0, -37.5, 0.0, 30.0, 90.0, 123.0, 180.0, 720.0] {
                let p = project(dip, 0.0, convention);
                assert_eq!(p.x, 0.0, "dip {} {}", dip, convention);
                assert_eq!(p.y, 0.0, "dip {} {}", dip, convention);
            }
        }
    }

    #[test]
    fn full_pitch_lands_on_diamond_boundary() {
        // |x| + |y| = 1 must hold for every dip under both diamond
        // conventions.
        for convention in [Convention::Rickard, Convention::Polar] {
            let mut dip = -180.0;
            while dip <= 180.0 {
                let p = project(dip, 90.0, convention);
                assert!(
                    (p.l1_norm() - 1.0).abs() < 1e-9,
                    "dip {} {}: |x|+|y| = {}",
                    dip,
                    convention,
                    p.l1_norm()
                );
                dip += 0.25;
            }
        }
    }

    #[test]
    fn kite_full_pitch_lies_on_unit_ellipse() {
        // The kite locus (cos θ, 1.7 sin θ) is an ellipse-like curve: it
        // touches the kite outline at the apexes and bulges past the
        // straight edges in between, unlike the diamond conventions.
        let mut dip = -180.0;
        while dip <= 180.0 {
            let p = project(dip, 90.0, Convention::Kite);
            let e = p.x * p.x + (p.y / KITE_EXAGGERATION).powi(2);
            assert!((e - 1.0).abs() < 1e-9, "dip {}: {}", dip, e);
            dip += 0.25;
        }

        let p = project(90.0, 90.0, Convention::Kite);
        assert!((p.x).abs() < 1e-9);
        assert!((p.y - KITE_EXAGGERATION).abs() < 1e-9);
    }

    #[test]
    fn kite_projection_matches_formula() {
        let p = project(30.0, 90.0, Convention::Kite);
        let theta = 30.0_f64.to_radians();
        assert!((p.x - theta.cos()).abs() < 1e-12);
        assert!((p.y - KITE_EXAGGERATION * theta.sin()).abs() < 1e-12);
    }

    #[test]
    fn polar_and_rickard_are_reflections_across_45_degrees() {
        // θ_polar(dip) = θ_rickard(90 − dip), so the projected points must
        // coincide up to rounding.
        for dip in [-170.0, -45.0, 0.0, 12.0, 30.0, 60.0, 90.0, 145.0] {
            for pitch in [10.0, 45.0, 90.0] {
                let a = project(dip, pitch, Convention::Polar);
                let b = project(90.0 - dip, pitch, Convention::Rickard);
                assert!((a.x - b.x).abs() < 1e-12, "dip {} pitch {}", dip, pitch);
                assert!((a.y - b.y).abs() < 1e-12, "dip {} pitch {}", dip, pitch);
            }
        }
    }

    #[test]
    fn out_of_range_pitch_clamps_through_radius() {
        let over = project(30.0, 180.0, Convention::Rickard);
        let full = project(30.0, 90.0, Convention::Rickard);
        assert_eq!(over, full);

        let under = project(30.0, -15.0, Convention::Rickard);
        assert_eq!(under, DiamondPoint::new(0.0, 0.0));
    }

    #[test]
    fn convention_from_str_is_case_insensitive() {
        assert_eq!(Convention::from_str("rickard"), Some(Convention::Rickard));
        assert_eq!(Convention::from_str("Polar"), Some(Convention::Polar));
        assert_eq!(Convention::from_str("KITE"), Some(Convention::Kite));
        assert_eq!(Convention::from_str("cartesian"), None);
    }

    #[test]
    fn boundary_radius_known_values() {
        // Along an axis the circle already touches the diamond.
        assert!((boundary_radius(Convention::Rickard, 0.0) - 1.0).abs() < 1e-12);
        // At 45° the diamond edge midpoint is 1/√2 from the origin.
        let t = boundary_radius(Convention::Polar, std::f64::consts::FRAC_PI_4);
        assert!((t - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
        // The kite outline reaches 1.7 at the vertical apex.
        let apex = boundary_radius(Convention::Kite, std::f64::consts::FRAC_PI_2);
        assert!((apex - KITE_EXAGGERATION).abs() < 1e-12);
    }
}

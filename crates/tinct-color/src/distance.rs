//! Color difference metrics.
//!
//! The CIE formulas operate on CIE Lab coordinates (D65). Parameterizations:
//!
//! - **CIE94** uses the graphic-arts constants (kL = 1, K1 = 0.045,
//!   K2 = 0.015). The chroma weighting uses the geometric mean of both
//!   chromas, which CIE 116-1995 allows when neither sample is the reference,
//!   and keeps the metric symmetric.
//! - **CIEDE2000** follows Sharma, Wu & Dalal (2005) with kL = kC = kH = 1.
//! - **OkLab** is the plain Euclidean distance in OkLab.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ColorError;
use crate::space::{normalize_hue, normalize_name};
use crate::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Metric {
    /// Euclidean distance in the gamma-encoded RGB cube.
    Rgb,
    /// Euclidean distance in OkLab.
    Oklab,
    /// Euclidean distance in CIE Lab.
    Cie76,
    /// Weighted CIE Lab distance, graphic-arts parameters.
    Cie94,
    /// CIEDE2000; the most perceptually faithful of the set.
    #[default]
    Ciede2000,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Rgb,
        Metric::Oklab,
        Metric::Cie76,
        Metric::Cie94,
        Metric::Ciede2000,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Rgb => "rgb",
            Metric::Oklab => "oklab",
            Metric::Cie76 => "cie76",
            Metric::Cie94 => "cie94",
            Metric::Ciede2000 => "ciede2000",
        }
    }

    /// Human-facing label, e.g. `CIEDE2000`.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Rgb => "RGB",
            Metric::Oklab => "OkLab",
            Metric::Cie76 => "CIE76",
            Metric::Cie94 => "CIE94",
            Metric::Ciede2000 => "CIEDE2000",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let metric = match normalize_name(s).as_str() {
            "rgb" => Metric::Rgb,
            "oklab" => Metric::Oklab,
            "cie76" | "de76" => Metric::Cie76,
            "cie94" | "de94" => Metric::Cie94,
            "ciede2000" | "de2000" => Metric::Ciede2000,
            _ => {
                return Err(ColorError::UnknownVariant {
                    kind: "metric",
                    name: s.to_string(),
                    expected: "rgb, oklab, cie76, cie94, ciede2000",
                })
            }
        };
        Ok(metric)
    }
}

impl TryFrom<String> for Metric {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Distance between two colors. Alpha is ignored.
///
/// ```rust
/// use tinct_color::{distance, Color, Metric};
///
/// let red: Color = "#ff0000".parse().unwrap();
/// let green: Color = "#00ff00".parse().unwrap();
/// assert_eq!(distance(red, red, Metric::Ciede2000), 0.0);
/// assert!(distance(red, green, Metric::Rgb) > 0.0);
/// ```
pub fn distance(a: Color, b: Color, metric: Metric) -> f64 {
    match metric {
        Metric::Rgb => euclidean(a.components(), b.components()),
        Metric::Oklab => delta_e_ok(a.oklab(), b.oklab()),
        Metric::Cie76 => delta_e_76(a.lab(), b.lab()),
        Metric::Cie94 => delta_e_94(a.lab(), b.lab()),
        Metric::Ciede2000 => delta_e_2000(a.lab(), b.lab()),
    }
}

impl Color {
    /// Shorthand for [`distance`].
    pub fn distance(self, other: Color, metric: Metric) -> f64 {
        distance(self, other, metric)
    }
}

fn euclidean(a: [f64; 3], b: [f64; 3]) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

/// ΔE*ab (1976): Euclidean distance between Lab coordinates.
pub fn delta_e_76(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    euclidean(lab1, lab2)
}

/// Euclidean distance between OkLab coordinates.
pub fn delta_e_ok(oklab1: [f64; 3], oklab2: [f64; 3]) -> f64 {
    euclidean(oklab1, oklab2)
}

/// ΔE*94, graphic-arts weighting.
pub fn delta_e_94([l1, a1, b1]: [f64; 3], [l2, a2, b2]: [f64; 3]) -> f64 {
    const K1: f64 = 0.045;
    const K2: f64 = 0.015;

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let dl = l1 - l2;
    let dc = c1 - c2;
    let da = a1 - a2;
    let db = b1 - b2;
    // ΔH² can dip below zero through rounding
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let c_mean = (c1 * c2).sqrt();
    let sc = 1.0 + K1 * c_mean;
    let sh = 1.0 + K2 * c_mean;

    let dc = dc / sc;
    (dl * dl + dc * dc + dh_sq / (sh * sh)).sqrt()
}

/// CIEDE2000 (kL = kC = kH = 1).
pub fn delta_e_2000([l1, a1, b1]: [f64; 3], [l2, a2, b2]: [f64; 3]) -> f64 {
    const POW25_7: f64 = 6_103_515_625.0; // 25^7

    // Chroma compensation of a*
    let c_bar = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());
    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;

    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = prime_hue(a1p, b1);
    let h2p = prime_hue(a2p, b2);
    let chroma_product = c1p * c2p;

    // Differences
    let dlp = l2 - l1;
    let dcp = c2p - c1p;
    let dhp = if chroma_product == 0.0 {
        0.0
    } else {
        let d = h2p - h1p;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let dhp_big = 2.0 * chroma_product.sqrt() * (dhp / 2.0).to_radians().sin();

    // Means
    let lbp = (l1 + l2) / 2.0;
    let cbp = (c1p + c2p) / 2.0;
    let hbp = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    // Weighting functions
    let t = 1.0 - 0.17 * (hbp - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hbp).to_radians().cos()
        + 0.32 * (3.0 * hbp + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hbp - 63.0).to_radians().cos();
    let d_theta = 30.0 * (-((hbp - 275.0) / 25.0).powi(2)).exp();
    let cbp7 = cbp.powi(7);
    let rc = 2.0 * (cbp7 / (cbp7 + POW25_7)).sqrt();
    let lbp_50 = (lbp - 50.0).powi(2);
    let sl = 1.0 + 0.015 * lbp_50 / (20.0 + lbp_50).sqrt();
    let sc = 1.0 + 0.045 * cbp;
    let sh = 1.0 + 0.015 * cbp * t;
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    let l_term = dlp / sl;
    let c_term = dcp / sc;
    let h_term = dhp_big / sh;
    (l_term * l_term + c_term * c_term + h_term * h_term + rt * c_term * h_term)
        .max(0.0)
        .sqrt()
}

fn prime_hue(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} ± {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    // =====================================================================
    // CIEDE2000 reference pairs (Sharma, Wu & Dalal 2005)
    // =====================================================================

    #[test]
    fn ciede2000_blue_region() {
        close(
            delta_e_2000([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485]),
            2.0425,
            1e-4,
        );
    }

    #[test]
    fn ciede2000_near_neutral() {
        close(delta_e_2000([50.0, 0.0, 0.0], [50.0, -1.0, 2.0]), 2.3669, 1e-4);
    }

    #[test]
    fn ciede2000_green_region() {
        close(
            delta_e_2000([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387]),
            1.2644,
            1e-4,
        );
    }

    #[test]
    fn ciede2000_is_symmetric_on_reference_pairs() {
        let pairs = [
            ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485]),
            ([50.0, 2.5, 0.0], [73.0, 25.0, -18.0]),
            ([22.7233, 20.0904, -46.6940], [23.0331, 14.9730, -42.5619]),
        ];
        for (x, y) in pairs {
            close(delta_e_2000(x, y), delta_e_2000(y, x), 1e-9);
        }
    }

    // =====================================================================
    // CIE76 / CIE94
    // =====================================================================

    #[test]
    fn cie76_is_lab_euclidean() {
        close(delta_e_76([50.0, 0.0, 0.0], [53.0, 4.0, 0.0]), 5.0, 1e-12);
    }

    #[test]
    fn cie94_matches_cie76_for_pure_lightness() {
        close(delta_e_94([40.0, 0.0, 0.0], [50.0, 0.0, 0.0]), 10.0, 1e-12);
    }

    #[test]
    fn cie94_against_neutral_is_plain_chroma() {
        // one side achromatic: both weights collapse to 1
        close(delta_e_94([50.0, 0.0, 0.0], [50.0, -1.0, 2.0]), 5f64.sqrt(), 1e-12);
    }

    #[test]
    fn cie94_discounts_chroma_at_high_chroma() {
        let de94 = delta_e_94([50.0, 60.0, 0.0], [50.0, 70.0, 0.0]);
        let de76 = delta_e_76([50.0, 60.0, 0.0], [50.0, 70.0, 0.0]);
        assert!(de94 < de76, "{} vs {}", de94, de76);
    }

    // =====================================================================
    // Dispatch
    // =====================================================================

    #[test]
    fn identical_colors_are_zero_apart() {
        let c = Color::rgb(0.3, 0.6, 0.1);
        for metric in Metric::ALL {
            assert_eq!(distance(c, c, metric), 0.0, "{}", metric);
        }
    }

    #[test]
    fn black_and_white_in_rgb() {
        close(distance(Color::BLACK, Color::WHITE, Metric::Rgb), 3f64.sqrt(), 1e-12);
    }

    #[test]
    fn alpha_does_not_contribute() {
        let c = Color::rgb(0.3, 0.6, 0.1);
        assert_eq!(distance(c, c.with_alpha(0.2), Metric::Cie76), 0.0);
    }

    #[test]
    fn metric_names() {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>().unwrap(), metric);
        }
        assert_eq!("CIE-DE2000".parse::<Metric>().unwrap(), Metric::Ciede2000);
        assert_eq!(Metric::Ciede2000.label(), "CIEDE2000");
        assert!("cie2001".parse::<Metric>().is_err());
    }
}

use serde::{Deserialize, Serialize};

/// Value Object - linear map from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a data value to a pixel offset.
    ///
    /// A collapsed domain maps everything to the middle of the range and a
    /// NaN domain maps everything to NaN.
    pub fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + normalize(self.domain, value) * (r1 - r0)
    }

    /// Convert a pixel offset back to a data value
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        d0 + normalize(self.range, px) * (d1 - d0)
    }

    /// Round-valued ticks inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || !d0.is_finite() || !d1.is_finite() {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }

        let (lo, hi) = if d0 < d1 { (d0, d1) } else { (d1, d0) };
        let increment = TickIncrement::new(lo, hi, count);
        let mut ticks = increment.ticks_between(lo, hi);
        if d0 > d1 {
            ticks.reverse();
        }
        ticks
    }

    /// Distance between consecutive ticks for `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        if !d0.is_finite() || !d1.is_finite() || d0 == d1 {
            return 0.0;
        }
        TickIncrement::new(d0.min(d1), d0.max(d1), count.max(1)).step()
    }
}

fn normalize((a, b): (f64, f64), value: f64) -> f64 {
    let span = b - a;
    if span.is_nan() {
        f64::NAN
    } else if span == 0.0 {
        0.5
    } else {
        (value - a) / span
    }
}

/// Tick spacing of 1, 2 or 5 times a power of ten.
///
/// Negative powers are kept as an integer divisor so that `3 / 10` yields
/// `0.3` instead of the drifting `3 * 0.1`.
struct TickIncrement {
    power: i32,
    factor: f64,
}

impl TickIncrement {
    fn new(lo: f64, hi: f64, count: usize) -> Self {
        let rough_step = (hi - lo) / count as f64;
        let power = rough_step.log10().floor() as i32;
        let normalized = if power >= 0 {
            rough_step / 10f64.powi(power)
        } else {
            rough_step * 10f64.powi(-power)
        };

        let factor = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };

        Self { power, factor }
    }

    fn step(&self) -> f64 {
        if self.power >= 0 {
            self.factor * 10f64.powi(self.power)
        } else {
            1.0 / self.inverse()
        }
    }

    fn inverse(&self) -> f64 {
        10f64.powi(-self.power) / self.factor
    }

    fn ticks_between(&self, lo: f64, hi: f64) -> Vec<f64> {
        if self.power >= 0 {
            let step = self.step();
            let first = (lo / step).ceil() as i64;
            let last = (hi / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        } else {
            let inverse = self.inverse();
            let first = (lo * inverse).ceil() as i64;
            let last = (hi * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        }
    }
}

fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        0
    } else {
        (-step.log10() - 1e-9).ceil() as usize
    }
}

/// Tick text with thousands separators and as many decimals as the step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let formatted = format!("{:.*}", tick_decimals(step), value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Multiplicative padding applied to the extent of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPadding {
    pub lower: f64,
    pub upper: f64,
}

impl Default for DomainPadding {
    fn default() -> Self {
        Self { lower: 0.8, upper: 1.2 }
    }
}

/// Visual attributes shared by every point. Metric switches never touch these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub radius: f64,
    pub fill: String,
    pub opacity: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self { radius: 20.0, fill: "blue".to_string(), opacity: 0.5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_domain_maps_to_mid_range() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.map(5.0), 50.0);
        assert_eq!(scale.map(123.0), 50.0);
    }

    #[test]
    fn nan_domain_maps_to_nan() {
        let scale = LinearScale::new((f64::NAN, f64::NAN), (0.0, 100.0));
        assert!(scale.map(1.0).is_nan());
        assert!(scale.ticks(10).is_empty());
    }

    #[test]
    fn invert_undoes_map() {
        let scale = LinearScale::new((80.0, 240.0), (0.0, 820.0));
        let px = scale.map(150.0);
        assert!((scale.invert(px) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_stay_inside_domain() {
        let scale = LinearScale::new((80.0, 240.0), (0.0, 820.0));
        assert_eq!(
            scale.ticks(10),
            vec![80.0, 100.0, 120.0, 140.0, 160.0, 180.0, 200.0, 220.0, 240.0]
        );
    }

    #[test]
    fn fractional_ticks_are_exact_decimals() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(ticks.len(), 11);
    }

    #[test]
    fn reversed_domain_gives_descending_ticks() {
        let scale = LinearScale::new((10.0, 0.0), (0.0, 100.0));
        let ticks = scale.ticks(5);
        assert_eq!(ticks.first(), Some(&10.0));
        assert_eq!(ticks.last(), Some(&0.0));
    }

    #[test]
    fn format_tick_groups_thousands() {
        assert_eq!(format_tick(1_234_567.0, 100_000.0), "1,234,567");
        assert_eq!(format_tick(-40_000.0, 5_000.0), "-40,000");
        assert_eq!(format_tick(7.5, 0.5), "7.5");
        assert_eq!(format_tick(999.0, 1.0), "999");
    }
}

use super::color::Rgb;
use crate::core::error::ColorError;

/// One labelled value in a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Datum {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        value: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Descending by value; equal values keep their input order.
pub fn sort_descending(series: &[Datum]) -> Vec<&Datum> {
    let mut sorted: Vec<&Datum> = series.iter().collect();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));
    sorted
}

/// A donut segment, ready for `stroke-dasharray` / `stroke-dashoffset`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub key: String,
    pub label: String,
    pub color: String,
    pub value: f64,
    /// Fraction of the series total, 0..=1.
    pub share: f64,
    pub length: f64,
    pub offset: f64,
}

pub fn radial(series: &[Datum], circumference: f64) -> Vec<ArcSegment> {
    let total: f64 = series.iter().map(|datum| datum.value).sum();
    let mut offset = 0.0;

    sort_descending(series)
        .into_iter()
        .map(|datum| {
            let share = if total > 0.0 { datum.value / total } else { 0.0 };
            let length = share * circumference;
            let segment = ArcSegment {
                key: datum.key.clone(),
                label: datum.label.clone(),
                color: datum.color.clone(),
                value: datum.value,
                share,
                length,
                offset,
            };
            offset += length;
            segment
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub key: String,
    pub label: String,
    pub color: String,
    pub value: f64,
    /// Width relative to the largest item, 0..=1.
    pub fill: f64,
}

pub fn bars(series: &[Datum]) -> Vec<BarRow> {
    let max = series
        .iter()
        .map(|datum| datum.value)
        .fold(0.0_f64, f64::max);

    sort_descending(series)
        .into_iter()
        .map(|datum| BarRow {
            key: datum.key.clone(),
            label: datum.label.clone(),
            color: datum.color.clone(),
            value: datum.value,
            fill: if max > 0.0 { datum.value / max } else { 0.0 },
        })
        .collect()
}

/// Percentage widths for a stacked bar.
///
/// Every segment is held at or above `floor_pct` so a tiny or negative part
/// stays visible; the last segment absorbs whatever remains, so widths always
/// sum to 100. A non-positive `overall_total` yields all zeros.
pub fn stacked(values: &[f64], overall_total: f64, floor_pct: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    if overall_total <= 0.0 || !overall_total.is_finite() {
        return vec![0.0; values.len()];
    }

    let count = values.len();
    let floor = floor_pct.clamp(0.0, 100.0 / count as f64);
    let mut remaining = 100.0;
    let mut widths = Vec::with_capacity(count);

    for (index, value) in values.iter().enumerate() {
        if index + 1 == count {
            widths.push(remaining);
            break;
        }
        let reserved = floor * (count - index - 1) as f64;
        let raw = value / overall_total * 100.0;
        let width = raw.max(floor).min(remaining - reserved);
        widths.push(width);
        remaining -= width;
    }

    widths
}

/// Map opacity for a region sourcing `count` materials when the busiest
/// region sources `max_count`.
pub fn choropleth_opacity(count: usize, max_count: usize, min_opacity: f64) -> f64 {
    let t = if max_count <= 1 {
        1.0
    } else {
        (count.saturating_sub(1) as f64 / (max_count - 1) as f64).clamp(0.0, 1.0)
    };
    min_opacity + t * (1.0 - min_opacity)
}

/// Blend from white toward `base` according to the region's intensity.
pub fn choropleth_fill(
    base: &str,
    count: usize,
    max_count: usize,
    min_opacity: f64,
) -> Result<Rgb, ColorError> {
    let color = Rgb::parse(base)?;
    Ok(color.from_white(choropleth_opacity(count, max_count, min_opacity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn series(values: &[f64]) -> Vec<Datum> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Datum::new(format!("k{i}"), format!("L{i}"), *v, "#000000"))
            .collect()
    }

    #[test]
    fn radial_segments_cover_circumference_in_descending_order() {
        let circumference = 2.0 * PI * 86.0;
        let segments = radial(&series(&[3.0, 10.0, 0.5, 6.5]), circumference);

        let total: f64 = segments.iter().map(|s| s.length).sum();
        assert!((total - circumference).abs() < 1e-9);
        assert!(segments.windows(2).all(|w| w[0].value >= w[1].value));

        let mut running = 0.0;
        for segment in &segments {
            assert!((segment.offset - running).abs() < 1e-9);
            running += segment.length;
        }
    }

    #[test]
    fn radial_ties_keep_input_order() {
        let segments = radial(&series(&[2.0, 5.0, 2.0]), 100.0);
        let keys: Vec<_> = segments.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["k1", "k0", "k2"]);
    }

    #[test]
    fn radial_zero_total_yields_zero_lengths() {
        let segments = radial(&series(&[0.0, 0.0]), 100.0);
        assert!(segments.iter().all(|s| s.length == 0.0 && s.offset == 0.0));
    }

    #[test]
    fn bars_largest_fills_completely() {
        let rows = bars(&series(&[4.0, 8.0, 2.0]));
        assert_eq!(rows[0].fill, 1.0);
        assert_eq!(rows[1].fill, 0.5);
        assert_eq!(rows[2].fill, 0.25);
    }

    #[test]
    fn bars_all_zero_yield_zero_fill() {
        let rows = bars(&series(&[0.0, 0.0]));
        assert!(rows.iter().all(|row| row.fill == 0.0));
    }

    #[test]
    fn stacked_splits_proportionally() {
        let widths = stacked(&[25.0, 75.0], 100.0, 1.0);
        assert_eq!(widths, vec![25.0, 75.0]);
        let sum: f64 = stacked(&[10.0, 30.0, 60.0], 100.0, 1.0).iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn stacked_floors_tiny_first_segment() {
        let widths = stacked(&[0.2, 99.8], 100.0, 1.0);
        assert_eq!(widths[0], 1.0);
        assert!((widths[1] - 99.0).abs() < 1e-9);
    }

    #[test]
    fn stacked_clamps_negative_remainder_to_floor() {
        // Extraction exceeds the reported total: manufacturing would be negative.
        let widths = stacked(&[120.0, -20.0], 100.0, 1.0);
        assert!((widths[0] - 99.0).abs() < 1e-9);
        assert!((widths[1] - 1.0).abs() < 1e-9);
        assert!(widths.iter().all(|w| *w >= 1.0));
    }

    #[test]
    fn stacked_zero_total_is_empty_bar() {
        assert_eq!(stacked(&[1.0, 2.0], 0.0, 1.0), vec![0.0, 0.0]);
    }

    #[test]
    fn choropleth_extremes() {
        assert_eq!(choropleth_opacity(5, 5, 0.3), 1.0);
        assert!((choropleth_opacity(1, 5, 0.3) - 0.3).abs() < 1e-12);
        assert_eq!(choropleth_opacity(1, 1, 0.3), 1.0);
        assert!((choropleth_opacity(3, 5, 0.3) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn choropleth_fill_at_max_is_category_color() {
        let fill = choropleth_fill("#3fa7d6", 4, 4, 0.3).unwrap();
        assert_eq!(fill.to_hex(), "#3fa7d6");
        assert!(choropleth_fill("oops", 1, 4, 0.3).is_err());
    }
}

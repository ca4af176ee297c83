// File: crates/strata-core/src/data.rs
// Summary: Chart item and data collection models with index-wise interpolation.

use crate::lerp::{lerp_f64, lerp_option_f64, threshold};

/// One datum: a value span (optional `min` up to `max`) plus an opaque
/// payload carried through for renderers and tooltips.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartItem<T: Clone> {
    pub min: Option<f64>,
    pub max: f64,
    pub value: T,
}

impl<T: Clone> ChartItem<T> {
    pub fn new(max: f64, value: T) -> Self {
        Self { min: None, max, value }
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Numeric fields interpolate linearly; the payload has no continuous
    /// blend and switches at the midpoint.
    pub fn lerp(a: &ChartItem<T>, b: &ChartItem<T>, t: f64) -> ChartItem<T> {
        ChartItem {
            min: lerp_option_f64(a.min, b.min, t),
            max: lerp_f64(a.max, b.max, t),
            value: threshold(&a.value, &b.value, t),
        }
    }
}

/// Ordered collection of chart items with cached value extrema.
///
/// The extrema are read by decorations that size themselves from the data
/// (e.g. the widest value-axis label).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData<T: Clone> {
    items: Vec<ChartItem<T>>,
    min_value: f64,
    max_value: f64,
}

impl<T: Clone> ChartData<T> {
    pub fn new(items: Vec<ChartItem<T>>) -> Self {
        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        for item in &items {
            min_value = min_value.min(item.min.unwrap_or(0.0)).min(item.max);
            max_value = max_value.max(item.max);
        }
        if !min_value.is_finite() || !max_value.is_finite() {
            min_value = 0.0;
            max_value = 0.0;
        }
        Self { items, min_value, max_value }
    }

    pub fn items(&self) -> &[ChartItem<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Index-wise interpolation. Items present only in `b` appear as-is;
    /// items present only in `a` are dropped, mirroring the decoration
    /// matching policy.
    pub fn lerp(a: &ChartData<T>, b: &ChartData<T>, t: f64) -> ChartData<T> {
        let mut items = Vec::with_capacity(b.items.len());
        for (index, target) in b.items.iter().enumerate() {
            match a.items.get(index) {
                Some(source) => items.push(ChartItem::lerp(source, target, t)),
                None => items.push(target.clone()),
            }
        }
        ChartData::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrema_cover_min_and_max() {
        let data = ChartData::new(vec![
            ChartItem::new(4.0, ()).with_min(-2.0),
            ChartItem::new(9.0, ()),
        ]);
        assert_eq!(data.min_value(), -2.0);
        assert_eq!(data.max_value(), 9.0);
    }

    #[test]
    fn lerp_is_target_biased_on_length_mismatch() {
        let a = ChartData::new(vec![ChartItem::new(0.0, 'a')]);
        let b = ChartData::new(vec![ChartItem::new(10.0, 'b'), ChartItem::new(5.0, 'c')]);
        let mid = ChartData::lerp(&a, &b, 0.25);
        assert_eq!(mid.len(), 2);
        assert_eq!(mid.items()[0].max, 2.5);
        assert_eq!(mid.items()[1].max, 5.0);

        let back = ChartData::lerp(&b, &a, 0.25);
        assert_eq!(back.len(), 1);
    }
}

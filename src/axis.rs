//! Grid tick placement and tick label formatting.

use std::sync::Arc;

use crate::view::Range;

/// Default number of major ticks aimed for across an axis.
pub const DEFAULT_TICK_TARGET: usize = 8;

/// Pick a "nice" tick interval (1, 2 or 5 times a power of ten) for a range.
pub fn nice_interval(range: Range, target_count: usize) -> Option<f64> {
    if !range.is_valid() || target_count == 0 {
        return None;
    }
    let rough = range.span() / target_count as f64;
    let magnitude = 10f64.powf(rough.log10().floor());
    let normalized = rough / magnitude;
    let step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    Some(step * magnitude)
}

/// Tick positions inside `range`, aligned to multiples of a nice interval.
///
/// Zero is always a tick when the range contains it.
pub fn ticks(range: Range, target_count: usize) -> Vec<f64> {
    let Some(interval) = nice_interval(range, target_count) else {
        return Vec::new();
    };
    let first = (range.min / interval).ceil() as i64;
    let last = (range.max / interval).floor() as i64;
    (first..=last).map(|i| i as f64 * interval).collect()
}

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Shortest representation, without trailing zeros.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => {
                // Avoid printing "-0" for ticks that land on the origin.
                let value = if value == 0.0 { 0.0 } else { value };
                if value.abs() >= 1e12 {
                    return format!("{value:e}");
                }
                let rounded = (value * 1e6).round() / 1e6;
                format!("{rounded}")
            }
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

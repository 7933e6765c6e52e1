//! Day-over-day TVL change shown next to each chain.

use shared::dto::llama::Chain;

/// Arrow direction of a TVL change.
///
/// `Down` doubles as the flat/unknown fallback: a chain with no previous-day
/// figure renders the same as one that lost value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
}

/// Signed direction plus absolute percentage change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TvlChange {
    pub direction: ChangeDirection,
    /// Absolute change in percent, never negative for positive previous values
    pub percent: f64,
}

impl TvlChange {
    /// The zero-display path used when there is no usable previous value
    pub const FLAT: TvlChange = TvlChange {
        direction: ChangeDirection::Down,
        percent: 0.0,
    };

    /// Two-decimal percentage text, e.g. `20.00%`
    pub fn text(&self) -> String {
        format!("{:.2}%", self.percent)
    }

    pub fn is_up(&self) -> bool {
        self.direction == ChangeDirection::Up
    }

    /// Change for a chain's current vs previous-day TVL
    pub fn for_chain(chain: &Chain) -> Self {
        tvl_change(chain.tvl, chain.tvl_prev_day)
    }
}

/// Compute the change from `previous` to `current`.
///
/// A missing or zero `previous` short-circuits to [`TvlChange::FLAT`] before
/// any division. A missing `current` counts as zero.
///
/// ```rust
/// use terminal::pipeline::{tvl_change, ChangeDirection};
///
/// let change = tvl_change(Some(120.0), Some(100.0));
/// assert_eq!(change.direction, ChangeDirection::Up);
/// assert_eq!(change.text(), "20.00%");
///
/// assert_eq!(tvl_change(Some(120.0), None).text(), "0.00%");
/// ```
pub fn tvl_change(current: Option<f64>, previous: Option<f64>) -> TvlChange {
    let previous = match previous {
        Some(p) if p != 0.0 => p,
        _ => return TvlChange::FLAT,
    };
    let current = current.unwrap_or(0.0);

    let direction = if current > previous {
        ChangeDirection::Up
    } else {
        ChangeDirection::Down
    };

    TvlChange {
        direction,
        percent: (current - previous).abs() / previous * 100.0,
    }
}

//! Markup policy calculation.
//!
//! Contracts bill costs under one of several markup formulas. The two
//! ten-percent formulas are deliberately distinct: OH+Profit computes both
//! components off the base (x1.20), while Ten-and-Ten compounds the second
//! ten percent on the first (x1.21). The one-cent-per-dollar difference is
//! contractual, not a rounding artifact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::CostMarkup;

/// Returns the overhead/profit component rate (10%).
pub fn oh_profit_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// The markup formula applied to a category's base cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupPolicy {
    /// 10% overhead plus 10% profit, each computed independently off the
    /// base: `billed = base + base*0.10 + base*0.10 = base * 1.20`.
    OverheadAndProfit,
    /// Ten-and-Ten compounding: `billed = base * 1.10 * 1.10 = base * 1.21`.
    TenAndTen,
    /// Flat percentage markup: `billed = base * (1 + pct/100)`.
    Flat(Decimal),
    /// No markup; the cost is re-billed verbatim.
    PassThrough,
}

/// The overhead and profit components of a markup calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupComponents {
    /// The overhead component.
    pub overhead: Decimal,
    /// The profit component.
    pub profit: Decimal,
}

impl MarkupPolicy {
    /// Computes the overhead and profit components for a base cost.
    ///
    /// For [`MarkupPolicy::Flat`] the whole markup is reported as overhead;
    /// [`MarkupPolicy::PassThrough`] has zero components.
    pub fn components(&self, base: Decimal) -> MarkupComponents {
        match self {
            MarkupPolicy::OverheadAndProfit => MarkupComponents {
                overhead: base * oh_profit_rate(),
                profit: base * oh_profit_rate(),
            },
            MarkupPolicy::TenAndTen => {
                let overhead = base * oh_profit_rate();
                // The second ten percent compounds on the first
                let profit = (base + overhead) * oh_profit_rate();
                MarkupComponents { overhead, profit }
            }
            MarkupPolicy::Flat(pct) => MarkupComponents {
                overhead: base * *pct / Decimal::ONE_HUNDRED,
                profit: Decimal::ZERO,
            },
            MarkupPolicy::PassThrough => MarkupComponents {
                overhead: Decimal::ZERO,
                profit: Decimal::ZERO,
            },
        }
    }

    /// Applies the markup to a base cost, returning the billed total.
    pub fn apply(&self, base: Decimal) -> Decimal {
        let components = self.components(base);
        base + components.overhead + components.profit
    }

    /// Returns the markup amount alone (`apply(base) - base`).
    pub fn markup_amount(&self, base: Decimal) -> Decimal {
        let components = self.components(base);
        components.overhead + components.profit
    }
}

impl From<CostMarkup> for MarkupPolicy {
    fn from(markup: CostMarkup) -> Self {
        match markup {
            CostMarkup::OhProfit => MarkupPolicy::OverheadAndProfit,
            CostMarkup::TenAndTen => MarkupPolicy::TenAndTen,
        }
    }
}

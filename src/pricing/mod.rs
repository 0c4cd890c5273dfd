//! Pricing and aggregation logic for the T&M billing engine.
//!
//! This module contains the rate resolvers (labor, equipment, materials),
//! the markup policies, the rental pass-through exemption, entry submission
//! pricing, the billing-category partition, and the three aggregation paths:
//! invoice generation over a date range, the single-day daily report, and
//! the per-union fringe summary.

mod buckets;
mod daily_report;
mod entry_pricing;
mod equipment_rate;
mod exemption;
mod invoice;
mod labor_rate;
mod markup;
mod material_price;
mod union_fringe;

pub use buckets::{CategoryTotals, partition_entries};
pub use daily_report::{CategoryBreakdown, DailyReport, build_daily_report};
pub use entry_pricing::price_entry;
pub use equipment_rate::resolve_equipment_rate;
pub use exemption::is_rental_pass_through;
pub use invoice::{generate_invoice, round_money};
pub use labor_rate::{night_shift_differential, resolve_labor_rate};
pub use markup::{MarkupComponents, MarkupPolicy, oh_profit_rate};
pub use material_price::resolve_material_price;
pub use union_fringe::{UnionFringeSummary, build_union_fringe_summary, fringe_markup_percent};

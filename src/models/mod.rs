//! Core data models for the T&M billing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod entry;
mod invoice;
mod submission;

pub use employee::Employee;
pub use entry::{DailyEntry, EquipmentLine, LaborLine, MaterialLine, PassThroughExpense, RatePeriod};
pub use invoice::{BillingCategory, Invoice, InvoiceLineItem};
pub use submission::{EntrySubmission, EquipmentInput, LaborInput, MaterialInput};

//! Production-company dashboard
//!
//! A read-only reporting pass: [`fetch`] loads the catalog and its forum
//! chain, then pure stages derive totals ([`kpi`]), breakdowns
//! ([`categories`]), the weekly post series ([`weekly`]) and the per-content
//! table with rankings ([`ranking`]).

pub mod categories;
pub mod fetch;
pub mod kpi;
pub mod ranking;
pub mod service;
pub mod types;
pub mod weekly;

pub use fetch::{fetch_snapshot, DashboardSnapshot};
pub use service::DashboardService;
pub use types::{ContentTableRow, CountEntry, DashboardResult, Kpis, WeeklyCount};

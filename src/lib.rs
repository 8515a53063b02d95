//! dashcat: Catalog dashboard-server workbooks into a JSON snapshot and a searchable static page.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, CategoryReport, FetchOptions, FetchOutcome, FetchReport, RenderOptions,
    RenderOutcome, fetch, fetch_at, render, render_at,
};

//! Backend wire types and HTTP client for the gateway console.
//!
//! Every endpoint answers with the same JSON envelope
//! `{ success, message?, data }`; [`envelope`] decodes it and [`client`]
//! fetches it. UI code depends on the [`ConsoleApi`] trait so it can be
//! driven by an in-memory fake in tests.

pub mod client;
pub mod envelope;
pub mod error;
pub mod models;

mod lenient;

pub use client::{ConsoleApi, HttpConsoleApi};
pub use error::ApiError;
pub use models::{PlanEntry, PlanFeature, SiteStatus, SubscriptionPlan};

//! Application state for the salary report API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::SalaryConfig;
use crate::store::Store;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// database handle and the salary settings.
#[derive(Clone)]
pub struct AppState {
    /// The backing store.
    store: Store,
    /// Salary calculation settings.
    salary: Arc<SalaryConfig>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: Store, salary: SalaryConfig) -> Self {
        Self {
            store,
            salary: Arc::new(salary),
        }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the configured overtime rate per hour.
    pub fn overtime_hourly_rate(&self) -> Decimal {
        self.salary.overtime_hourly_rate
    }
}

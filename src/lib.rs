//! gofinances - terminal personal-finance dashboard
//!
//! This library reads a user's transactions from a namespaced key-value
//! store and turns them into the dashboard: income, expense and balance
//! cards with their last-transaction labels, plus a formatted transaction
//! list. The same summary backs the TUI and the non-interactive commands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `locale`: Currency and date formatting per locale
//! - `models`: Stored records, money and the summary view models
//! - `storage`: Key-value store and the transaction repository
//! - `reports`: Aggregation of stored records into the dashboard summary
//! - `services`: Business logic layer (loading, registering)
//! - `refresh`: Refresh triggers and the latest-pass-wins dashboard state
//! - `display`, `export`, `cli`: Non-interactive output
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use gofinances::config::{FinancePaths, Settings};
//! use gofinances::models::UserId;
//! use gofinances::services::DashboardService;
//! use gofinances::storage::open_file_store;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = open_file_store(&paths)?;
//! let summary = DashboardService::new(store.as_ref(), &settings)
//!     .load_and_aggregate(&UserId::parse("42")?)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod locale;
pub mod models;
pub mod refresh;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{FinanceError, FinanceResult};

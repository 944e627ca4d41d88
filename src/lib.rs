//! # Strategy Pyramid
//!
//! Client-side engine for a strategy-planning workspace. A session holds a
//! nine-tier strategy pyramid, a SOCC analysis (strengths, opportunities,
//! considerations, constraints), strategic tensions and a stakeholder map.
//! The backend owns the records; this crate validates input, talks to the
//! CRUD API and derives the analytical views.
//!
//! ## Features
//!
//! - **Opportunity Viability**: score and rank opportunities from three 1-5 inputs
//! - **Traceability**: rate how well each iconic commitment traces back to the vision
//! - **Horizon Ordering**: order commitments and team objectives by horizon and date
//! - **Stakeholder Grid**: place stakeholders by interest and influence
//! - **Delete Confirmation**: two-step press-to-delete with an expiring window
//!
//! ## Architecture
//!
//! ```text
//! CLI → AppState (snapshots) → StrategyApi → Strategy backend (HTTP)
//!            ↓
//!        scoring (pure)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use strategy_pyramid::{AppState, Config, StrategyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = StrategyClient::new(&config.api, config.request.clone())?;
//!     let mut state = AppState::new(client, "session-1");
//!     state.refresh_pyramid().await?;
//!     println!("{:?}", state.traceability_summary());
//!     Ok(())
//! }
//! ```

/// Remote strategy API trait and HTTP client.
pub mod api;
/// Command-line interface.
pub mod cli;
/// Configuration management.
pub mod config;
/// Two-step delete confirmation.
pub mod confirm;
/// Error types and result aliases for the application.
pub mod error;
/// Strategy records and input validation.
pub mod model;
/// Viability, traceability and horizon ordering.
pub mod scoring;
/// Session snapshots with refetch-after-write.
pub mod state;

pub use api::{StrategyApi, StrategyClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

//! Bot backend and business logic.
//!
//! This module contains the complete implementation of the statistics dashboard bot:
//! the Discord integration, the growth history, the dashboard publisher and the
//! optional JSON status surface.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers for the status surface
//! - **Service Layer** (`service/`) - Growth estimation, statistics and dashboard publishing
//! - **Data Layer** (`data/`) - File-backed snapshot store
//! - **Model Layer** (`model/`) - Domain models for snapshots and guild statistics
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state for the status surface
//! - **Startup** (`startup`) - Logger, growth tracker and status server initialization
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Periodic dashboard updates and debounced refreshes
//! - **Bot** (`bot/`) - Discord bot event handlers and integration
//!
//! # Update Flow
//!
//! 1. **Scheduler** or a debounced **Bot** event starts an update cycle
//! 2. **Service** collects statistics from the gateway cache
//! 3. **Service** records a snapshot through the **Data** layer and estimates growth
//! 4. **Service** builds the embed and sends or edits the dashboard message

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;

//! # RiggerConnect API
//!
//! A labor marketplace REST service for the rigging and heavy-lift industry:
//! jobs, workers, bookings, payments, documents, compliance, feedback,
//! reports, and background automation behind a single versioned API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, repository and
//!   collaborator traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores and
//!   external collaborator implementations
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Response Contract
//!
//! Every endpoint responds with the uniform envelope: successes carry
//! `{"success": true, "data": ...}`, failures
//! `{"success": false, "message": ...}` with a status from the fixed error
//! taxonomy (400 validation, 401 auth, 404 not found, 500 dependency).
//!
//! ## Quick Start
//!
//! ```bash
//! export JWT_SECRET="change-me"
//! export ADMIN_PASSWORD="change-me-too"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration and existence checks between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and the error-classification chain
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the connection pool)
//! - **Startup** (`startup`) - Database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and dispatches to a controller, or to the
//!    not-found fallback
//! 2. **Controller** coerces path, query and body input into params, calls the service
//! 3. **Service** runs existence checks and calls repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response
//!
//! Any failure along the way is an `AppError`, converted to a `{msg}` response by the
//! error layer.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

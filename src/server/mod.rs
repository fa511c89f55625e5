//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the room-escape reservation service,
//! including API endpoints, validation rules, data access, and infrastructure. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation rules and orchestration of data operations
//! - **Data Layer** (`data/`) - Database queries returning entity models
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request extractors such as the logged-in member
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token manager)
//! - **Startup** (`startup`) - Tracing, database connection, admin seeding
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Parsing, cookies, JWT and password hashing helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** converts the DTO into params (rejecting malformed input), calls service
//! 3. **Service** runs existence/duplicate/past checks, then delegates to the data layer
//! 4. **Data** issues the query and returns entity models
//! 5. **Service** converts entities into domain models
//! 6. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints, business
//! logic, data access and startup plumbing. The backend uses Axum as the web framework
//! and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO wrapping
//! - **Service Layer** (`service/`) - Existence checks and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route configuration, API documentation and sitemap
//!
//! # Request Flow
//!
//! 1. **Router** trims a trailing slash and routes the request to a controller
//! 2. **Controller** extracts path parameters and calls the service
//! 3. **Service** checks referenced rows exist and calls repositories
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Service** converts domain models to DTOs
//! 6. **Controller** wraps the DTO in its response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the inspection system: API endpoints,
//! business rules, data access and the report export pipeline. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Report** (`report/`) - Inspection report assembly, page layout, PDF and DOCX output
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token settings, report logo)
//! - **Startup** (`startup`) - Database connection, migrations and asset loading
//! - **Router** (`router`) - Axum route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** converts DTOs to params, calls the service
//! 3. **Service** applies business rules and orchestrates repositories
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod report;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

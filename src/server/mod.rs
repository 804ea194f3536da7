//! Fleet logistics back office.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access checks, form
//!   parsing and DTO conversion
//! - **Service Layer** (`service/`) - Fleet scoping and business rules
//! - **Data Layer** (`data/`) - Database queries and entity-to-model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application errors, flashes and HTTP mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the auth guard
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** asks the `AuthGuard` for the `Viewer` and its fleet scope
//! 3. **Controller** turns the form or query into validated params
//! 4. **Service** checks that referenced rows are in scope, then calls the
//!    repository
//! 5. **Data** runs the queries, in a transaction where rules span rows
//! 6. **Controller** answers with a page DTO, or flashes the outcome and
//!    redirects

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

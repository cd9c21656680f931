//! Beers Domain
//!
//! Read-side domain for the brewery's beer catalog: single lookups and
//! filtered, paginated listings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Query contract (trait + repository-backed implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, filters, query parameters
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_beers::{handlers, seed, InMemoryBeerRepository, RepositoryBeerService};
//!
//! let repository = InMemoryBeerRepository::with_beers(seed::sample_beers());
//! let service = RepositoryBeerService::new(repository);
//!
//! // Create Axum router
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use error::{BeerError, BeerResult};
pub use handlers::ApiDoc;
pub use models::{Beer, BeerFilter, BeerListQuery, BeerStyle};
pub use repository::{BeerRepository, InMemoryBeerRepository};
pub use service::{BeerService, RepositoryBeerService};

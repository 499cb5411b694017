//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Each entity has its own factory module
//! with both a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let event = factory::event::create_event(&db, "100").await?;
//!     let permitted = factory::permitted_role::create_permitted_role(&db, "100", "200").await?;
//!
//!     // Customize via the builder
//!     let event = factory::event::EventFactory::new(&db, "100")
//!         .short_name("LP1")
//!         .is_completed(true)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod event;
pub mod helpers;
pub mod permitted_role;

// Re-export commonly used factory functions for concise usage
pub use event::create_event;
pub use permitted_role::create_permitted_role;

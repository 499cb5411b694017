//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! for testing purposes. These factories create valid Serenity objects by
//! deserializing JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_message;
//!
//! #[tokio::test]
//! async fn test_reply_dispatch() {
//!     let message = create_test_message(1, 200, 300, "hello");
//!     // Feed into the message dispatcher...
//! }
//! ```

pub mod message;

// Re-export commonly used functions for convenience
pub use message::create_test_message;

//! # avatarhub-core - Core Domain Types
//!
//! Foundation crate for AvatarHub. Provides the avatar domain model, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`avatar`)
//! - [`Avatar`] - A displayed avatar profile
//! - [`AvatarId`] - Unique numeric identity of an avatar
//! - [`AvatarStatus`] - `Active` or `Inactive`
//! - [`seed_avatars()`] - The fixed seed list used when no data file is configured
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use avatarhub_core::prelude::*;
//! ```

pub mod avatar;
pub mod error;
pub mod logging;
pub mod prelude;

pub use avatar::{seed_avatars, Avatar, AvatarId, AvatarStatus, PLACEHOLDER_IMAGE};
pub use error::{Error, Result, ResultExt};

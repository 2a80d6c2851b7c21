//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **Error Types**: Centralized error handling (see [`error`] module)
//! - **Service Traits**: The chain boundary the app talks through (see [`service`] module)
//!
//! ## Dependency Injection
//!
//! `AppState` holds an `Arc<dyn ChainService>`. Production wires in
//! [`lib_evm::RpcClient`]; tests hand the app an in-memory fake:
//!
//! ```rust,ignore
//! use terminal::core::service::ChainService;
//!
//! let chain: Arc<dyn ChainService> = Arc::new(RpcClient::builder().build()?);
//! let app = App::with_service(config, chain);
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ChainService;

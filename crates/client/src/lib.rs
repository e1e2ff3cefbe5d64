//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Session worker, timers and event bus)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: Composition root, lifecycle management, layer coordination
//! - **Runtime**: Game rules, timed transitions, event emission
//! - **Frontend**: User interaction, event consumption, rendering (via RuntimeHandle only)

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives an already-running runtime and a frontend
/// 2. Client::run() hands a RuntimeHandle to the frontend (blocking)
/// 3. On frontend exit, the runtime is shut down once every handle is gone
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits, then stop the runtime.
    ///
    /// # Errors
    ///
    /// Returns the frontend error if it failed, otherwise any shutdown error.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(runtime.handle()).await;
        if let Err(err) = &frontend_result {
            tracing::error!("Frontend error: {:#}", err);
        }

        // The frontend consumed its handle, so the worker can drain and stop.
        let shutdown_result = runtime.shutdown().await;

        frontend_result?;
        shutdown_result?;
        Ok(())
    }
}

//! Global Tokio runtime for background queries.
//!
//! egui owns the main thread, while reqwest and the query cache need a tokio
//! context. `main` enters this runtime before starting the event loop, so
//! `tokio::spawn` from the UI thread lands here.
//!
//! ```rust,no_run
//! use terminal::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! tokio::spawn(async {
//!     // network work
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

/// Worker threads for network tasks
const WORKER_THREADS: usize = 2;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .worker_threads(WORKER_THREADS)
        .thread_name("llama-io")
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime for async HTTP operations")
});

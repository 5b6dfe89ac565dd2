//! Process shutdown handling.
//!
//! Callbacks are registered explicitly and run once, in registration order,
//! when an interrupt or termination signal arrives. The server keeps no open
//! connections or buffers of its own, so hooks are typically just log lines.

use std::future::Future;
use tracing::{debug, info, warn};

/// The signal that triggered shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / Ctrl+C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl std::fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interrupt => write!(f, "SIGINT"),
            Self::Terminate => write!(f, "SIGTERM"),
        }
    }
}

type Hook = Box<dyn FnOnce(ShutdownSignal) + Send>;

/// Ordered set of named shutdown callbacks.
#[derive(Default)]
pub struct ShutdownHooks {
    hooks: Vec<(String, Hook)>,
}

impl ShutdownHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback to run on shutdown.
    pub fn register<F>(&mut self, name: impl Into<String>, hook: F)
    where
        F: FnOnce(ShutdownSignal) + Send + 'static,
    {
        self.hooks.push((name.into(), Box::new(hook)));
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every callback once, consuming the set.
    pub fn run(self, signal: ShutdownSignal) {
        info!("Received {}, shutting down", signal);
        for (name, hook) in self.hooks {
            debug!("Running shutdown hook: {}", name);
            hook(signal);
        }
    }
}

/// Wait for SIGINT or SIGTERM.
pub async fn wait_for_signal() -> std::io::Result<ShutdownSignal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res.map(|_| ShutdownSignal::Interrupt),
            _ = terminate.recv() => Ok(ShutdownSignal::Terminate),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(ShutdownSignal::Interrupt)
    }
}

/// Resolve with the first shutdown signal.
///
/// If the handlers cannot be installed this never resolves, so a server
/// racing against it keeps serving until its session ends.
pub async fn shutdown_requested() -> ShutdownSignal {
    signal_or_pending(wait_for_signal()).await
}

async fn signal_or_pending<F>(listen: F) -> ShutdownSignal
where
    F: Future<Output = std::io::Result<ShutdownSignal>>,
{
    match listen.await {
        Ok(signal) => signal,
        Err(e) => {
            warn!("Failed to listen for shutdown signals: {}", e);
            std::future::pending().await
        }
    }
}

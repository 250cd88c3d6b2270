//! Synchronous facade over [`Client`]
//!
//! A [`Session`] owns a private current-thread Tokio runtime and blocks the
//! calling thread for each request. It must not be used from inside another
//! async runtime.
//!
//! ```rust,no_run
//! use sofascrape::{ClientConfig, blocking::Session};
//!
//! # fn main() -> sofascrape::Result<()> {
//! let count = Session::scoped(ClientConfig::default(), |session| {
//!     let live = session.get("/api/v1/sport/football/events/live")?;
//!     live.select("events")?.len()
//! })?;
//! # let _ = count;
//! # Ok(())
//! # }
//! ```

use crate::{client::Client, config::ClientConfig, error::Result, response::ApiResponse};
use std::future::Future;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Blocking session: a [`Client`] plus the runtime that drives it.
///
/// Dropping the session (or calling [`close`](Self::close)) shuts the
/// runtime down and releases its connections.
#[derive(Debug)]
pub struct Session {
    client: Client,
    runtime: Runtime,
}

impl Session {
    /// Build a client from `config` and start a runtime for it.
    pub fn open(config: ClientConfig) -> Result<Self> {
        Self::with_client(Client::from_config(config)?)
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        debug!(base_url = client.base_url(), "session opened");
        Ok(Self { client, runtime })
    }

    /// The async client, e.g. for building requests by hand.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// GET an arbitrary API path.
    pub fn get(&self, path: &str) -> Result<ApiResponse> {
        self.runtime.block_on(self.client.get(path))
    }

    /// Run an async call against the client and wait for it.
    ///
    /// ```rust,no_run
    /// # use sofascrape::{ClientConfig, blocking::Session};
    /// # fn main() -> sofascrape::Result<()> {
    /// let session = Session::open(ClientConfig::default())?;
    /// let lineups = session.call(|client| async move {
    ///     client.events().lineups(11_352_380).await
    /// })?;
    /// # let _ = lineups;
    /// # Ok(())
    /// # }
    /// ```
    pub fn call<F, Fut, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(Client) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.runtime.block_on(f(self.client.clone()))
    }

    /// Close the session.
    pub fn close(self) {
        drop(self);
    }

    /// Open a session, run `f`, and close the session on every exit path.
    pub fn scoped<T, F>(config: ClientConfig, f: F) -> Result<T>
    where
        F: FnOnce(&Session) -> Result<T>,
    {
        let session = Self::open(config)?;
        let result = f(&session);
        session.close();
        result
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!(base_url = self.client.base_url(), "session closed");
    }
}

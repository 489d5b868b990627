//! Astrarium API client.
//!
//! Typed async access to the Astrarium backend. Responses come back as the
//! snapshot types in [`astrarium_logic::entities`], ready to be turned into
//! dashboard views.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `client` | [`AstrariumClient`]: one method per backend endpoint |
//! | `config` | [`ClientConfig`]: base URL and timeout, from env or defaults |
//! | `error` | [`ClientError`] and the crate `Result` alias |
//! | `session` | Bearer token [`Session`] and its [`TokenStore`] backends |

pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use client::AstrariumClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};

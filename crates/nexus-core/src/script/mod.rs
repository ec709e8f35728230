//! Server-side scripts as RPC endpoints
//!
//! A named script is installed once (create-if-missing) and then invoked
//! with a JSON argument. The server answers with an envelope whose `result`
//! field is itself a JSON-encoded string, decoded a second time here.
//!
//! - **transport**: the seam to the HTTP layer and its opaque error
//! - **channel**: install-if-missing and invoke with JSON framing
//! - **catalog**: script bodies stored on disk as `<name>.groovy`

mod catalog;
mod channel;
mod transport;

pub use catalog::ScriptCatalog;
pub use channel::ScriptChannel;
pub use transport::{ScriptResponse, ScriptTransport, TransportError};

// Application layer - the presentation collaborator of the ledger.
// Holds the transient form state and view toggle that the ledger
// deliberately knows nothing about.

pub mod draft;
pub mod error;
pub mod session;

pub use draft::*;
pub use error::*;
pub use session::*;

//! The retrieval coordination core.
//!
//! A retrieval session accepts requests for WSDL locations, runs each one
//! as its own asynchronous operation with a timeout, and routes the single
//! terminal outcome of every operation through a fixed pipeline: completed
//! services are applied to the shared container one at a time, transport
//! failures and timeouts are reported as recoverable, and any other fault
//! latches the session and is forwarded to the host as fatal.

mod latch;
mod operation;
mod registry;
mod request;
mod session;

pub use latch::FaultLatch;
pub use operation::RetrieveOutcome;
pub use registry::InFlightRegistry;
pub use request::{RequestOrigin, RetrievalRequest};
pub use session::{FailureCause, RetrievalSession, SessionEvent};

//! wsdlview Application - Retrieval coordination core
//!
//! This crate owns the asynchronous WSDL-retrieval machinery:
//! - Port traits (interfaces for the WSDL source, update source and
//!   settings persistence)
//! - The retrieval session: in-flight tracking, timeout handling,
//!   serialized completion application and the fault policy
//! - The service container the session populates
//! - The advisory update check

pub mod container;
pub mod error;
pub mod ports;
pub mod retrieval;
pub mod update;

pub use container::ServiceContainer;
pub use error::SubmitError;
pub use ports::{SettingsStore, SourceError, StoreError, UpdateInfo, UpdateSource, WsdlSource};
pub use retrieval::{
    FailureCause, FaultLatch, InFlightRegistry, RequestOrigin, RetrievalRequest, RetrievalSession,
    RetrieveOutcome, SessionEvent,
};
pub use update::UpdateCheck;

//! Retrieval session.
//!
//! The session glues the registry, the fault latch, the container and the
//! ports into one fixed pipeline: submission runs the duplicate checks and
//! spawns the operation; the operation's single terminal outcome is routed
//! back through the fault policy and the serialized completion path; the
//! host observes everything through a single-consumer event stream.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use wsdlview_domain::{UserSettings, WebService, WsdlLocation};

use crate::container::ServiceContainer;
use crate::error::SubmitError;
use crate::ports::{SettingsStore, WsdlSource};

use super::latch::FaultLatch;
use super::operation::{self, RetrieveOutcome};
use super::registry::InFlightRegistry;
use super::request::{RequestOrigin, RetrievalRequest};

/// Why a retrieval failed recoverably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// The operation exceeded its timeout.
    Timeout,
    /// The document could not be fetched.
    Transport {
        /// Transport error description.
        message: String,
    },
}

/// Events the session reports to its host.
///
/// Exactly one event is emitted per surfaced terminal outcome; outcomes
/// suppressed by the fault policy (late timeouts and completions after a
/// fatal fault) emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A service finished retrieval and is now in the container.
    Added {
        /// WSDL location the service was retrieved from.
        location: String,
        /// Service name.
        name: String,
        /// Number of operations the service exposes.
        method_count: usize,
    },
    /// A retrieval failed recoverably; the session continues.
    RetrievalFailed {
        /// WSDL location that failed.
        location: String,
        /// What went wrong.
        cause: FailureCause,
    },
    /// A retrieval faulted fatally. The latch is tripped and the host is
    /// expected to shut down; the session itself never exits the process.
    Fatal {
        /// WSDL location that faulted.
        location: String,
        /// Fault description.
        message: String,
    },
}

struct SessionInner<S, P> {
    source: S,
    store: P,
    settings: Arc<Mutex<UserSettings>>,
    registry: InFlightRegistry,
    latch: FaultLatch,
    container: Mutex<ServiceContainer>,
    completion_gate: tokio::sync::Mutex<()>,
    events: UnboundedSender<SessionEvent>,
}

/// A WSDL retrieval session.
///
/// Cheap to clone; clones share all state.
pub struct RetrievalSession<S, P> {
    inner: Arc<SessionInner<S, P>>,
}

impl<S, P> Clone for RetrievalSession<S, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, P> RetrievalSession<S, P>
where
    S: WsdlSource + 'static,
    P: SettingsStore + 'static,
{
    /// Creates a session over the given source and settings store.
    ///
    /// Returns the session and the receiving end of its event stream.
    #[must_use]
    pub fn new(
        source: S,
        store: P,
        settings: Arc<Mutex<UserSettings>>,
    ) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let session = Self {
            inner: Arc::new(SessionInner {
                source,
                store,
                settings,
                registry: InFlightRegistry::new(),
                latch: FaultLatch::new(),
                container: Mutex::new(ServiceContainer::new()),
                completion_gate: tokio::sync::Mutex::new(()),
                events,
            }),
        };
        (session, receiver)
    }

    /// Submits a retrieval request.
    ///
    /// On acceptance the operation is spawned and its terminal outcome
    /// will surface on the event stream; the caller never blocks on it.
    ///
    /// # Errors
    ///
    /// Returns a `SubmitError` when the request is rejected: the file
    /// location does not exist, the service was already retrieved, or a
    /// retrieval for the same location is still running.
    pub async fn submit(
        &self,
        location: WsdlLocation,
        origin: RequestOrigin,
    ) -> Result<(), SubmitError> {
        // URL syntax is validated when the location is parsed; the
        // file-exists check happens here because it is too slow to run on
        // user input.
        if let Some(path) = location.file_path() {
            if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
                return Err(SubmitError::MissingFile(location.to_string()));
            }
        }

        let key = location.to_string();

        if lock_unpoisoned(&self.inner.container).contains(&key) {
            return Err(SubmitError::AlreadyAdded(key));
        }

        if !self.inner.registry.try_accept(&key) {
            return Err(SubmitError::AlreadyInFlight(key));
        }

        tracing::info!(wsdl = %key, "start adding wsdl");

        let (proxy, timeout) = {
            let settings = lock_unpoisoned(&self.inner.settings);
            (settings.proxy.clone(), settings.retrieve_timeout())
        };
        let request = RetrievalRequest::new(location, origin, proxy, timeout);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome = operation::run(&request, &inner.source).await;
            inner.resolve(&request, outcome).await;
        });

        Ok(())
    }

    /// Submits every location on the startup list, if startup loading is
    /// enabled. Rejected or unparseable entries are logged and skipped.
    ///
    /// Returns the number of accepted submissions.
    pub async fn load_startup(&self) -> usize {
        let locations = {
            let settings = lock_unpoisoned(&self.inner.settings);
            if !settings.startup_wsdls.enabled {
                return 0;
            }
            settings.startup_wsdls.locations.clone()
        };

        let mut accepted = 0;
        for raw in locations {
            match WsdlLocation::parse(&raw) {
                Ok(location) => match self.submit(location, RequestOrigin::Startup).await {
                    Ok(()) => accepted += 1,
                    Err(error) => tracing::error!(wsdl = %raw, %error, "startup wsdl rejected"),
                },
                Err(error) => tracing::error!(wsdl = %raw, %error, "invalid startup wsdl"),
            }
        }
        accepted
    }

    /// Removes a resolved service from the container.
    pub fn remove(&self, location: &str) -> Option<WebService> {
        lock_unpoisoned(&self.inner.container).remove(location)
    }

    /// Whether a service retrieved from `location` is already present.
    #[must_use]
    pub fn is_added(&self, location: &str) -> bool {
        lock_unpoisoned(&self.inner.container).contains(location)
    }

    /// Snapshot of all resolved services, ordered by location.
    #[must_use]
    pub fn services(&self) -> Vec<WebService> {
        lock_unpoisoned(&self.inner.container).snapshot()
    }

    /// Whether no retrieval is currently in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.inner.registry.is_empty()
    }

    /// Whether a fatal fault has occurred in this session.
    #[must_use]
    pub fn fault_occurred(&self) -> bool {
        self.inner.latch.is_tripped()
    }
}

impl<S, P> SessionInner<S, P>
where
    S: WsdlSource + 'static,
    P: SettingsStore + 'static,
{
    /// Routes a terminal outcome through the fault policy.
    async fn resolve(&self, request: &RetrievalRequest, outcome: RetrieveOutcome) {
        let key = request.location.to_string();
        match outcome {
            RetrieveOutcome::Complete(service) => self.apply_completion(&key, service).await,

            RetrieveOutcome::TimedOut => {
                // A timeout racing a fatal fault is noise: the session is
                // about to shut down anyway, so it is not surfaced.
                if self.latch.is_tripped() {
                    tracing::debug!(wsdl = %key, "suppressing timeout after fatal fault");
                    return;
                }
                self.registry.release(&key);
                tracing::error!(wsdl = %key, "timeout adding wsdl");
                tracing::info!(wsdl = %key, "finish adding wsdl");
                self.emit(SessionEvent::RetrievalFailed {
                    location: key,
                    cause: FailureCause::Timeout,
                });
            }

            RetrieveOutcome::TransportFailed(message) => {
                // Always surfaced, tripped latch or not.
                self.registry.release(&key);
                tracing::error!(wsdl = %key, %message, "could not retrieve wsdl");
                tracing::info!(wsdl = %key, "finish adding wsdl");
                self.emit(SessionEvent::RetrievalFailed {
                    location: key,
                    cause: FailureCause::Transport { message },
                });
            }

            RetrieveOutcome::Failed(message) => {
                self.latch.trip();
                if request.is_startup() {
                    self.disable_startup_load().await;
                }
                self.registry.release(&key);
                tracing::error!(wsdl = %key, %message, "fatal fault while adding wsdl");
                self.emit(SessionEvent::Fatal {
                    location: key,
                    message,
                });
            }
        }
    }

    /// Applies one completed retrieval to the shared container.
    ///
    /// Completions program-wide are serialized through the completion
    /// gate, so two of them can never interleave their effects. The latch
    /// is re-checked under the gate; a completion landing after a fatal
    /// fault is dropped without trace.
    async fn apply_completion(&self, key: &str, service: WebService) {
        let _serialized = self.completion_gate.lock().await;

        if self.latch.is_tripped() {
            tracing::debug!(wsdl = %key, "discarding completion after fatal fault");
            return;
        }

        // Pace tree population so services appear one at a time.
        let settle = lock_unpoisoned(&self.settings).settle_delay();
        if !settle.is_zero() {
            tokio::time::sleep(settle).await;
        }

        let name = service.name.clone();
        let method_count = service.methods.len();
        lock_unpoisoned(&self.container).populate(service);
        self.registry.release(key);

        tracing::info!(wsdl = %key, "finish adding wsdl");
        self.emit(SessionEvent::Added {
            location: key.to_string(),
            name,
            method_count,
        });
    }

    /// Durably disables startup loading after a fatal startup fault.
    ///
    /// A fatal fault during startup loading would otherwise recur on
    /// every launch, and the session never gets far enough for the user
    /// to remove the offending entry. Persistence failures are swallowed
    /// so the original fault still reaches the host.
    async fn disable_startup_load(&self) {
        let snapshot = {
            let mut settings = lock_unpoisoned(&self.settings);
            settings.startup_wsdls.enabled = false;
            settings.clone()
        };
        if let Err(error) = self.store.save(&snapshot).await {
            tracing::warn!(%error, "could not persist disabled startup wsdl list");
        }
    }

    fn emit(&self, event: SessionEvent) {
        // The host may have stopped listening; that is its choice.
        let _ = self.events.send(event);
    }
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

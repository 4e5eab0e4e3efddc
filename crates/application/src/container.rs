//! Resolved-service container.
//!
//! Holds every service that finished retrieval, keyed by its WSDL
//! location. The session mutates it only inside the serialized completion
//! path; reads (duplicate checks, display snapshots) may happen from
//! anywhere.

use std::collections::HashMap;

use wsdlview_domain::WebService;

/// Mapping from WSDL location to its parsed service description.
#[derive(Debug, Default)]
pub struct ServiceContainer {
    services: HashMap<String, WebService>,
}

impl ServiceContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a service under its location, replacing any previous entry.
    pub fn populate(&mut self, service: WebService) {
        self.services.insert(service.location.clone(), service);
    }

    /// Whether a service retrieved from `location` is present.
    #[must_use]
    pub fn contains(&self, location: &str) -> bool {
        self.services.contains_key(location)
    }

    /// Looks up a service by location.
    #[must_use]
    pub fn get(&self, location: &str) -> Option<&WebService> {
        self.services.get(location)
    }

    /// Removes and returns the service stored under `location`.
    pub fn remove(&mut self, location: &str) -> Option<WebService> {
        self.services.remove(location)
    }

    /// Number of resolved services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the container is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Cloned snapshot of all services, ordered by location for stable
    /// display.
    #[must_use]
    pub fn snapshot(&self) -> Vec<WebService> {
        let mut services: Vec<WebService> = self.services.values().cloned().collect();
        services.sort_by(|a, b| a.location.cmp(&b.location));
        services
    }
}

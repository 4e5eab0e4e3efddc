//! One retrieval operation.

use wsdlview_domain::WebService;

use crate::ports::{SourceError, WsdlSource};

use super::request::RetrievalRequest;

/// The terminal outcome of a retrieval operation.
///
/// Exactly one outcome is produced per operation. Exclusivity is
/// structural: the operation is a single future that resolves once, and
/// the timeout wrapper yields `TimedOut` only when no other outcome
/// resolved first.
#[derive(Debug, Clone, PartialEq)]
pub enum RetrieveOutcome {
    /// Fetch and parse succeeded.
    Complete(WebService),
    /// The operation exceeded its configured timeout.
    TimedOut,
    /// The document could not be fetched. Recoverable.
    TransportFailed(String),
    /// The document was fetched but could not be used. Fatal to the
    /// session.
    Failed(String),
}

/// Runs the fetch+parse for `request` against `source`, enforcing the
/// request's timeout.
pub(crate) async fn run<S: WsdlSource>(request: &RetrievalRequest, source: &S) -> RetrieveOutcome {
    let retrieve = source.retrieve(&request.location, &request.proxy);
    match tokio::time::timeout(request.timeout, retrieve).await {
        Ok(Ok(service)) => RetrieveOutcome::Complete(service),
        Ok(Err(SourceError::Transport(message))) => RetrieveOutcome::TransportFailed(message),
        Ok(Err(SourceError::Document(message))) => RetrieveOutcome::Failed(message),
        Err(_elapsed) => RetrieveOutcome::TimedOut,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::future::Future;
    use std::time::Duration;

    use wsdlview_domain::{ProxyConfig, WsdlLocation};

    use super::*;
    use crate::retrieval::request::RequestOrigin;

    /// Source that resolves to a fixed result after a delay.
    struct DelayedSource {
        delay: Duration,
        result: Result<(), SourceError>,
    }

    impl WsdlSource for DelayedSource {
        fn retrieve(
            &self,
            location: &WsdlLocation,
            _proxy: &ProxyConfig,
        ) -> impl Future<Output = Result<WebService, SourceError>> + Send {
            let delay = self.delay;
            let result = self.result.clone();
            let location = location.to_string();
            async move {
                tokio::time::sleep(delay).await;
                result.map(|()| WebService::new(location, "Svc", Vec::new()))
            }
        }
    }

    fn request(timeout_ms: u64) -> RetrievalRequest {
        RetrievalRequest::new(
            WsdlLocation::parse("http://example.com/svc?wsdl").unwrap(),
            RequestOrigin::User,
            ProxyConfig::default(),
            Duration::from_millis(timeout_ms),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_completes_within_timeout() {
        let source = DelayedSource {
            delay: Duration::from_millis(100),
            result: Ok(()),
        };
        let outcome = run(&request(3_000), &source).await;
        assert!(matches!(outcome, RetrieveOutcome::Complete(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out() {
        let source = DelayedSource {
            delay: Duration::from_millis(5_000),
            result: Ok(()),
        };
        let outcome = run(&request(3_000), &source).await;
        assert_eq!(outcome, RetrieveOutcome::TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_maps_to_recoverable_channel() {
        let source = DelayedSource {
            delay: Duration::from_millis(10),
            result: Err(SourceError::Transport("connection refused".to_string())),
        };
        let outcome = run(&request(3_000), &source).await;
        assert_eq!(
            outcome,
            RetrieveOutcome::TransportFailed("connection refused".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_document_failure_maps_to_fatal_channel() {
        let source = DelayedSource {
            delay: Duration::from_millis(10),
            result: Err(SourceError::Document("not a wsdl document".to_string())),
        };
        let outcome = run(&request(3_000), &source).await;
        assert_eq!(
            outcome,
            RetrieveOutcome::Failed("not a wsdl document".to_string())
        );
    }

    /// Sweep fetch delays across the timeout boundary: every run must
    /// produce exactly one outcome, and it is either `Complete` or
    /// `TimedOut`, never anything else.
    #[tokio::test(start_paused = true)]
    async fn test_timeout_race_yields_single_outcome() {
        for delay_ms in [1u64, 24, 25, 26, 50, 100] {
            let source = DelayedSource {
                delay: Duration::from_millis(delay_ms),
                result: Ok(()),
            };
            let outcome = run(&request(25), &source).await;
            match outcome {
                RetrieveOutcome::Complete(_) | RetrieveOutcome::TimedOut => {}
                other => panic!("unexpected outcome for delay {delay_ms}: {other:?}"),
            }
        }
    }
}

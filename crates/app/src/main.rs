//! wsdlview - Main Entry Point
//!
//! Headless host for the retrieval session: loads settings, retrieves
//! startup-configured and command-line WSDLs, prints the resulting
//! service tree and persists settings on exit.

use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wsdlview_application::{
    FailureCause, RequestOrigin, RetrievalSession, SessionEvent, UpdateCheck,
};
use wsdlview_domain::{UserSettings, WsdlLocation};
use wsdlview_infrastructure::{HttpUpdateSource, HttpWsdlSource, SettingsRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let repository = SettingsRepository::new();
    let settings = Arc::new(Mutex::new(repository.load().await?));

    let (session, mut events) = RetrievalSession::new(
        HttpWsdlSource::new(),
        repository.clone(),
        Arc::clone(&settings),
    );

    spawn_update_check(&settings);

    let mut outstanding = session.load_startup().await;

    for raw in std::env::args().skip(1) {
        match WsdlLocation::parse(&raw) {
            Ok(location) => match session.submit(location, RequestOrigin::User).await {
                Ok(()) => outstanding += 1,
                Err(error) => tracing::error!(%error, "wsdl rejected"),
            },
            Err(error) => tracing::error!(wsdl = %raw, %error, "invalid wsdl location"),
        }
    }

    let mut fatal = false;
    while outstanding > 0 {
        let Some(event) = events.recv().await else {
            break;
        };
        outstanding -= 1;
        match event {
            SessionEvent::Added {
                location,
                name,
                method_count,
            } => {
                tracing::info!(wsdl = %location, %name, method_count, "service added");
            }
            SessionEvent::RetrievalFailed { location, cause } => match cause {
                FailureCause::Timeout => {
                    tracing::warn!(wsdl = %location, "retrieval timed out");
                }
                FailureCause::Transport { message } => {
                    tracing::warn!(wsdl = %location, %message, "retrieval failed");
                }
            },
            SessionEvent::Fatal { location, message } => {
                tracing::error!(wsdl = %location, %message, "fatal fault, shutting down");
                fatal = true;
                break;
            }
        }
    }

    if !fatal {
        print_tree(&session.services());
    }

    let snapshot = settings
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    if let Err(error) = repository.save(&snapshot).await {
        tracing::warn!(%error, "could not save settings");
    }

    if fatal {
        std::process::exit(1);
    }
    Ok(())
}

/// Fires the advisory update check in the background. Its outcome is
/// only ever a log line.
fn spawn_update_check(settings: &Arc<Mutex<UserSettings>>) {
    let snapshot = settings
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    if !snapshot.update_check.enabled {
        return;
    }
    tokio::spawn(async move {
        let check = UpdateCheck::new(HttpUpdateSource::new());
        if let Some(info) = check.check(env!("CARGO_PKG_VERSION"), &snapshot).await {
            tracing::info!(
                version = %info.version,
                download = %info.download_url,
                "a newer release is available"
            );
        }
    });
}

/// Prints the resolved services as an indented tree.
fn print_tree(services: &[wsdlview_domain::WebService]) {
    if services.is_empty() {
        println!("no services retrieved");
        return;
    }
    for service in services {
        println!("{} [{}]", service.name, service.location);
        for method in &service.methods {
            match &method.soap_action {
                Some(action) => println!("    {} ({action})", method.name),
                None => println!("    {}", method.name),
            }
        }
    }
}

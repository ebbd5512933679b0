//! Host bridge
//!
//! Side effects the interpreter asks for but never performs. A host either
//! handles [`HostRequest`]s itself or hands them to [`RequestDispatcher`],
//! which turns them into [`PanelEvent`]s on a channel.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// Outward side-effect request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// Navigate to a URI in a new context (tab, window)
    OpenExternal { uri: String },
    /// Show the visual panel for a section after `delay`
    SwitchPanel { section: String, delay: Duration },
    /// Reset any side panel
    ClearPanel,
}

/// What the rendering layer observes once a request has been carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    OpenExternal(String),
    Switched(String),
    Cleared,
}

/// Delivers host requests as panel events
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    events: UnboundedSender<PanelEvent>,
}

impl RequestDispatcher {
    pub fn new(events: UnboundedSender<PanelEvent>) -> Self {
        Self { events }
    }

    /// Deliver a request. Delayed panel switches run on a detached timer task;
    /// the returned handle can be aborted if the host goes away first.
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, request: HostRequest) -> Option<JoinHandle<()>> {
        match request {
            HostRequest::SwitchPanel { section, delay } if !delay.is_zero() => {
                let events = self.events.clone();
                Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    debug!(%section, "switching panel");
                    // receiver gone means the host unmounted
                    let _ = events.send(PanelEvent::Switched(section));
                }))
            }
            HostRequest::SwitchPanel { section, .. } => {
                let _ = self.events.send(PanelEvent::Switched(section));
                None
            }
            HostRequest::OpenExternal { uri } => {
                let _ = self.events.send(PanelEvent::OpenExternal(uri));
                None
            }
            HostRequest::ClearPanel => {
                let _ = self.events.send(PanelEvent::Cleared);
                None
            }
        }
    }
}

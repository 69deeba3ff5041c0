use log::{debug, info, warn};

use super::hit::{
    GrantReceiver, GrantedSource, HitTestBackend, HitTestSourceKind, SessionGeneration,
};

/// One hit-test source request and where it stands
#[derive(Debug)]
pub enum GrantSlot {
    Pending(GrantReceiver),
    Granted(GrantedSource),
    Failed,
    /// Never requested because the platform cannot provide it
    Unsupported,
}

impl GrantSlot {
    pub fn source(&self) -> Option<&GrantedSource> {
        match self {
            GrantSlot::Granted(source) => Some(source),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, GrantSlot::Pending(_))
    }

    /// Poll a pending grant without blocking. A grant carrying a different
    /// generation is stale and is discarded.
    fn poll(&mut self, kind: HitTestSourceKind, generation: SessionGeneration) {
        let GrantSlot::Pending(receiver) = self else {
            return;
        };

        match receiver.try_recv() {
            Ok(None) => {}
            Ok(Some(Ok(source))) if source.generation != generation => {
                debug!(
                    "dropping stale {:?} grant from {:?} (current {:?})",
                    kind, source.generation, generation
                );
                *self = GrantSlot::Failed;
            }
            Ok(Some(Ok(source))) => {
                info!("{:?} hit-test source granted (handle {})", kind, source.handle);
                *self = GrantSlot::Granted(source);
            }
            Ok(Some(Err(e))) => {
                warn!("{:?} hit-test source request failed: {}", kind, e);
                *self = GrantSlot::Failed;
            }
            Err(_) => {
                warn!("{:?} hit-test source request was cancelled by the platform", kind);
                *self = GrantSlot::Failed;
            }
        }
    }
}

/// Sources belonging to one presenting session
#[derive(Debug)]
pub struct ActiveSession {
    pub generation: SessionGeneration,
    pub viewer: GrantSlot,
    pub transient: GrantSlot,
}

/// XR session state. Requests live inside the presenting variant, so ending
/// the session drops them and any late grant has nowhere to land.
#[derive(Debug)]
pub enum SessionState {
    NoSession,
    Presenting(ActiveSession),
}

/// Coarse lifecycle phase for hosts and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NoSession,
    AwaitingHitTestSource,
    HitTestActive,
}

/// Drives `NoSession -> AwaitingHitTestSource -> HitTestActive -> NoSession`
#[derive(Debug)]
pub struct SessionLifecycle {
    state: SessionState,
    next_generation: u64,
    want_transient: bool,
}

impl SessionLifecycle {
    /// `want_transient` requests a transient-input source when the platform supports it
    pub fn new(want_transient: bool) -> Self {
        Self {
            state: SessionState::NoSession,
            next_generation: 0,
            want_transient,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            SessionState::NoSession => SessionPhase::NoSession,
            SessionState::Presenting(active) if active.viewer.source().is_some() => {
                SessionPhase::HitTestActive
            }
            SessionState::Presenting(_) => SessionPhase::AwaitingHitTestSource,
        }
    }

    pub fn generation(&self) -> Option<SessionGeneration> {
        match &self.state {
            SessionState::Presenting(active) => Some(active.generation),
            SessionState::NoSession => None,
        }
    }

    /// Enter a presenting session and request the hit-test sources.
    ///
    /// Requests are made only on the transition out of `NoSession`; calling
    /// this again while presenting is a no-op.
    pub fn begin(&mut self, backend: &mut dyn HitTestBackend) -> SessionGeneration {
        if let SessionState::Presenting(active) = &self.state {
            return active.generation;
        }

        self.next_generation += 1;
        let generation = SessionGeneration(self.next_generation);

        let viewer = GrantSlot::Pending(
            backend.request_hit_test_source(HitTestSourceKind::Viewer, generation),
        );
        let transient = if self.want_transient && backend.supports_transient_input() {
            GrantSlot::Pending(
                backend.request_hit_test_source(HitTestSourceKind::TransientInput, generation),
            )
        } else {
            GrantSlot::Unsupported
        };

        info!(
            "session {:?} started, transient input {}",
            generation,
            if transient.is_pending() { "requested" } else { "unavailable" }
        );
        self.state = SessionState::Presenting(ActiveSession {
            generation,
            viewer,
            transient,
        });
        generation
    }

    /// Leave the session, dropping both sources and any pending requests
    pub fn end(&mut self) {
        if let SessionState::Presenting(active) = &self.state {
            info!("session {:?} ended", active.generation);
        }
        self.state = SessionState::NoSession;
    }

    /// Check pending grants; called once per frame
    pub fn poll(&mut self) {
        if let SessionState::Presenting(active) = &mut self.state {
            let generation = active.generation;
            active.viewer.poll(HitTestSourceKind::Viewer, generation);
            active.transient.poll(HitTestSourceKind::TransientInput, generation);
        }
    }

    pub fn viewer_source(&self) -> Option<&GrantedSource> {
        match &self.state {
            SessionState::Presenting(active) => active.viewer.source(),
            SessionState::NoSession => None,
        }
    }

    pub fn transient_source(&self) -> Option<&GrantedSource> {
        match &self.state {
            SessionState::Presenting(active) => active.transient.source(),
            SessionState::NoSession => None,
        }
    }
}

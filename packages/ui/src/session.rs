//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] constructs the [`SessionManager`] at application
//! start, loads any persisted session into memory, and exposes a
//! [`SessionContext`] handle through Dioxus context. Every protected view
//! reads the same handle; there is no other source of truth for "who is
//! logged in".
//!
//! There is no token expiry, refresh, or revocation: a session stays valid
//! in the UI until explicit logout. A server-side session that has expired
//! surfaces as request errors without clearing the local session.

use dioxus::prelude::*;
use store::{Session, SessionManager, SessionStore, UserPatch};

/// Session state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
}

fn manager() -> SessionManager<impl SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionManager::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionManager::new(store::MemoryStore::new())
    }
}

/// Handle to the shared session state.
///
/// The in-memory copy keeps the full record (photo included); every write
/// re-derives the persisted copy with the photo stripped.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: Signal<AuthState>,
}

impl SessionContext {
    /// The current user, or `None` when logged out.
    pub fn current(&self) -> Option<Session> {
        self.state.read().user.clone()
    }

    /// Store the user after a successful login or registration.
    pub fn login(&mut self, session: Session) {
        manager().save(&session);
        self.state.set(AuthState {
            user: Some(session),
        });
    }

    /// Clear both the persisted and the in-memory session.
    pub fn logout(&mut self) {
        manager().clear();
        self.state.set(AuthState::default());
    }

    /// Merge profile changes into the current session.
    ///
    /// A logged-out update is a no-op; the caller should not reach this
    /// state because every profile view sits behind the navigation gate.
    pub fn update(&mut self, patch: UserPatch) {
        let Some(base) = self.current() else {
            tracing::warn!("profile update with no active session, ignoring");
            return;
        };
        let merged = patch.apply(&base);
        manager().save(&merged);
        self.state.set(AuthState { user: Some(merged) });
    }
}

/// Get the session handle.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Provider component that manages session state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| AuthState {
        user: manager().load(),
    });

    use_context_provider(|| SessionContext { state });

    rsx! {
        {children}
    }
}

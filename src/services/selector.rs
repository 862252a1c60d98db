//! Profile selector - the single piece of runtime state
//!
//! Holds the active profile in a `watch` channel. The view that owns the
//! selector writes through `select`; renderers hold a receiver and redraw when
//! `has_changed()` reports a new value.

use crate::domain::error::MetricsError;
use crate::domain::types::Profile;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Active traveler profile plus change notification
pub struct ProfileSelector {
    tx: watch::Sender<Profile>,
}

impl ProfileSelector {
    pub fn new(initial: Profile) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Currently active profile
    pub fn current(&self) -> Profile {
        *self.tx.borrow()
    }

    /// Make `profile` active. Returns true if the selection changed;
    /// subscribers are only notified on change.
    pub fn select(&self, profile: Profile) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == profile {
                false
            } else {
                *current = profile;
                true
            }
        });

        if changed {
            info!(profile = %profile, "profile_selected");
        } else {
            debug!(profile = %profile, "profile_unchanged");
        }
        changed
    }

    /// Select by identifier; unknown identifiers leave the selection as is
    pub fn select_id(&self, id: &str) -> Result<Profile, MetricsError> {
        match id.parse::<Profile>() {
            Ok(profile) => {
                self.select(profile);
                Ok(profile)
            }
            Err(e) => {
                warn!(id = %id, current = %self.current(), "profile_selection_rejected");
                Err(e)
            }
        }
    }

    /// Advance to the next profile in display order
    pub fn cycle(&self) -> Profile {
        let next = self.current().next();
        self.select(next);
        next
    }

    /// Receiver for redraw notifications
    pub fn subscribe(&self) -> watch::Receiver<Profile> {
        self.tx.subscribe()
    }
}

impl Default for ProfileSelector {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

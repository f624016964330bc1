use gloo_timers::callback::Timeout;

/// Delay between a successful submission and the navigation away from the
/// auth shell.
pub const REDIRECT_DELAY_MS: u32 = 3_000;

/// Replace the current history entry with the application root, so the form
/// is not reachable with the back button afterwards.
pub fn replace_with_root() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().replace("/") {
            log::warn!("failed to navigate to root: {err:?}");
        }
    }
}

/// Owned handle for the deferred post-success navigation. Dropping or
/// cancelling the handle stops a redirect that has not fired yet.
#[derive(Default)]
pub struct RedirectTimer {
    pending: Option<Timeout>,
}

impl RedirectTimer {
    /// Schedule (or reschedule) the redirect. An earlier pending timeout is
    /// dropped, so at most one navigation fires.
    pub fn schedule(&mut self) {
        self.pending = Some(Timeout::new(REDIRECT_DELAY_MS, replace_with_root));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_starts_unscheduled() {
        assert!(!RedirectTimer::default().is_scheduled());
    }
}

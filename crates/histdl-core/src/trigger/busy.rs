//! Busy indicator shown while a submission is pending.

/// Something the user can see while a download is in flight (a spinner, a
/// status line). `show` and `hide` are called in pairs by [`BusyGuard`].
pub trait BusyIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Indicator that does nothing (non-interactive use).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBusyIndicator;

impl BusyIndicator for NoBusyIndicator {
    fn show(&self) {}
    fn hide(&self) {}
}

/// Shows the indicator on creation and hides it when dropped, so every exit
/// path (error, early return, unwinding) hides it exactly once.
pub struct BusyGuard<'a> {
    indicator: &'a dyn BusyIndicator,
}

impl<'a> BusyGuard<'a> {
    pub fn show(indicator: &'a dyn BusyIndicator) -> Self {
        indicator.show();
        Self { indicator }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

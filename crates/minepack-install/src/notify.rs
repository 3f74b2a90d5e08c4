/// Host-supplied handle to a persistent progress surface.
///
/// The installer calls `show` before any work, `update` for every progress
/// step, `report_transient` for non-fatal degradations, and `dismiss`
/// exactly once after the terminal outcome, success or not. What the host
/// renders (notification, progress bar, nothing) is its own concern.
pub trait ProgressNotifier: Send + Sync {
    fn show(&self);
    fn update(&self, percent: u8);
    fn dismiss(&self);
    /// Surface a non-fatal error without interrupting the run.
    fn report_transient(&self, message: &str);
}

/// Notifier for hosts without a progress surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl ProgressNotifier for NullNotifier {
    fn show(&self) {}
    fn update(&self, _percent: u8) {}
    fn dismiss(&self) {}
    fn report_transient(&self, _message: &str) {}
}

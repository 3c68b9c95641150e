const APP_NAME: &str = "Dotpad";

pub fn send(body: impl Into<String>) {
    let body = body.into();
    if let Err(err) = notify_rust::Notification::new()
        .appname(APP_NAME)
        .summary("Exported")
        .body(&body)
        .show()
    {
        tracing::warn!("system notification failed: {err}");
    }
}

/// Delivers user-facing acknowledgements.
pub trait Notifier {
    fn notify(&self, body: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, body: &str) {
        send(body);
    }
}

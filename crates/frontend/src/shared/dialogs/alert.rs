/// Blocking browser alert for submit failures.
///
/// Falls back to the log when no window is available.
pub fn alert(message: &str) {
    log::warn!("alert: {}", message);
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("window.alert failed: {:?}", e);
            }
        }
        None => log::error!("no window to show alert: {}", message),
    }
}

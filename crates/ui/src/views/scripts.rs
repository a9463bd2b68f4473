/// Sends `navigator.onLine` on each online/offline transition.
///
/// Nothing is sent at startup, so a configured offline state stands until the
/// webview reports a real transition.
pub(super) const CONNECTIVITY_SCRIPT: &str = r#"
    const report = () => dioxus.send(navigator.onLine);
    window.addEventListener("online", report);
    window.addEventListener("offline", report);
    await new Promise(() => {});
"#;

//! Script side of the bridge.
//!
//! Messages flow in both directions over one envelope, `{kind, payload}`:
//! - **JS -> Rust**: forwarding functions installed by [`forward_script`] call
//!   `window.ipc.postMessage(JSON.stringify({...}))`, which reaches the
//!   `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: [`js_dispatch_message`] produces a script that runs every
//!   handler the page subscribed for that kind.

use pdfview_common::BrowserEventKind;

/// Installs `window.pdfview` before any page script runs.
///
/// `subscribe`/`_dispatch` carry host commands into the page. `trigger` and
/// `subscribeToMessageEvent` are the page-local event bus for browser events;
/// `_forward` attaches the host forwarder for one kind, at most once.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    if (window.pdfview) {
        return;
    }

    var commandHandlers = {};
    var eventListeners = {};
    var forwarders = {};
    var nextId = 1;

    function listFor(table, kind) {
        if (!table[kind]) {
            table[kind] = [];
        }
        return table[kind];
    }

    function remove(table, kind, id) {
        var list = table[kind];
        if (!list) {
            return;
        }
        table[kind] = list.filter(function(entry) { return entry.id !== id; });
    }

    function run(list, payload) {
        (list || []).slice().forEach(function(entry) {
            try {
                entry.fn(payload);
            } catch (e) {
                console.error('[pdfview] handler failed', e);
            }
        });
    }

    window.pdfview = {
        subscribe: function(kind, fn) {
            var id = nextId++;
            listFor(commandHandlers, kind).push({ id: id, fn: fn });
            return function() { remove(commandHandlers, kind, id); };
        },
        _dispatch: function(kind, payload) {
            run(commandHandlers[kind], payload);
        },
        subscribeToMessageEvent: function(kind, fn) {
            var id = nextId++;
            listFor(eventListeners, kind).push({ id: id, fn: fn });
            return function() { remove(eventListeners, kind, id); };
        },
        trigger: function(kind, payload) {
            run(eventListeners[kind], payload);
        },
        _forward: function(kind) {
            if (forwarders[kind]) {
                return false;
            }
            forwarders[kind] = this.subscribeToMessageEvent(kind, function(payload) {
                window.ipc.postMessage(JSON.stringify({
                    kind: kind,
                    payload: payload == null ? {} : payload
                }));
            });
            return true;
        },
        _release: function(kind) {
            var unsubscribe = forwarders[kind];
            if (unsubscribe) {
                unsubscribe();
                delete forwarders[kind];
            }
        }
    };
})();
"#;

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Script that runs every page handler subscribed to `kind`.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.pdfview._dispatch({}, {});",
        js_string(kind),
        payload_json,
    )
}

/// Script that forwards page-local `kind` events to the host.
pub fn forward_script(kind: BrowserEventKind) -> String {
    format!("window.pdfview._forward({});", js_string(kind.as_str()))
}

/// Script that detaches the host forwarders for `kinds`.
pub fn release_script(kinds: impl IntoIterator<Item = BrowserEventKind>) -> String {
    kinds
        .into_iter()
        .map(|kind| format!("window.pdfview._release({});", js_string(kind.as_str())))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_script_is_guarded() {
        assert!(BRIDGE_INIT_SCRIPT.contains("if (window.pdfview)"));
        assert!(BRIDGE_INIT_SCRIPT.contains("if (forwarders[kind])"));
        assert!(BRIDGE_INIT_SCRIPT.contains("window.ipc.postMessage"));
    }

    #[test]
    fn forwarder_sends_an_empty_body_for_null_payloads() {
        assert!(BRIDGE_INIT_SCRIPT.contains("payload: payload == null ? {} : payload"));
    }

    #[test]
    fn dispatch_escapes_kind_and_payload() {
        let js = js_dispatch_message("SET_PAGE", &serde_json::json!({"pageNumber": 3}));
        assert_eq!(js, r#"window.pdfview._dispatch("SET_PAGE", {"pageNumber":3});"#);

        let js = js_dispatch_message("x\"); alert(1); (\"", &serde_json::Value::Null);
        assert!(js.starts_with(r#"window.pdfview._dispatch("x\"); alert(1); (\"", null"#));
    }

    #[test]
    fn forward_and_release_name_the_kind() {
        assert_eq!(
            forward_script(BrowserEventKind::PagesCount),
            r#"window.pdfview._forward("PAGES_COUNT");"#
        );
        let release = release_script([BrowserEventKind::PageChanged, BrowserEventKind::SyncEditor]);
        assert_eq!(release.lines().count(), 2);
        assert!(release.contains(r#"_release("SYNC_EDITOR")"#));
    }
}

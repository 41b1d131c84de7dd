//! Page-side integration script.
//!
//! The browser runs the same command handling and event reporting as
//! [`ViewerIntegration`](crate::ViewerIntegration) in JavaScript, against the
//! pdf.js application object when the page hosts one and against the
//! built-in PDF `<embed>` otherwise. The constants the two share are filled
//! in from this crate when the script is built.

use serde_json::json;

use pdfview_common::HostCommandKind;

use crate::geometry::{MAX_SCALE, MIN_SCALE};
use crate::integration::LOAD_ERROR_MARKER;
use crate::theme::{OVERRIDES_STYLE_ID, THEME_STYLE_ID, VIEWER_CSS_OVERRIDES};

const TEMPLATE: &str = include_str!("../assets/viewer-bridge.js");
const CONFIG_SLOT: &str = "__PDFVIEW_CONFIG__";

/// Id of the `<embed>` the bootstrap page opens the document in.
pub const EMBED_ID: &str = "pdfviewDocument";

/// The viewer integration script, ready to run after the IPC bridge.
pub fn viewer_bridge_script() -> String {
    let kinds: Vec<&str> = HostCommandKind::ALL.iter().map(|k| k.as_str()).collect();
    let config = json!({
        "commandKinds": kinds,
        "minScale": MIN_SCALE,
        "maxScale": MAX_SCALE,
        "loadErrorMarker": LOAD_ERROR_MARKER,
        "themeStyleId": THEME_STYLE_ID,
        "overridesStyleId": OVERRIDES_STYLE_ID,
        "overridesCss": VIEWER_CSS_OVERRIDES,
        "embedId": EMBED_ID,
    });
    TEMPLATE.replacen(CONFIG_SLOT, &config.to_string(), 1)
}

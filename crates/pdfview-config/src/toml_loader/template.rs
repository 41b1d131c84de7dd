//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# pdfview configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[server]
# host = "127.0.0.1"
# port = 0                    # 0 = ephemeral
# token = "64fa8636-e686-4c63-9956-132d9471ce77"
# bundle_dir = "/path/to/web-view"
# entry_point = "index.html"
# document_extension = "pdf"

[viewer]
# default_scale = 1.0         # 0.25-10.0
# synctex_available = false
# show_toolbar = false

[theme]
# background = "#1e1f22"
# foreground = "#dfe1e5"
# icons = "#ced0d6"
# document_invert_intensity = 0   # 0-100

[window]
# title = "pdfview"
# width = 900
# height = 1100
# devtools = false

[logging]
# filter = "pdfview=info"
"##
}

//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Atelier Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[themes]
root = "themes"
# default_theme = "aurora"      # process default; ATELIER_DEFAULT_THEME overrides
# extensions = ["tsx", "ts", "jsx", "js"]
# max_chain_depth = 16          # 1-64

[domains]
# "shop.example.com" = "storefront"
# "*.example.com" = "aurora"    # every direct subdomain of example.com

[legacy]
# "template-3" = "aurora"       # merged over the built-in compatibility table

[signals]
# preview_cookie = "theme_preview"
# session_cookie = "theme"
# preview_max_age_secs = 3600          # 60-86400
# session_max_age_secs = 31536000      # 3600-63072000

[settings]
# path = "/var/lib/atelier/settings.toml"
# key = "template"

[logging]
# level = "info"                # trace, debug, info, warn, error
"##
    .to_string()
}

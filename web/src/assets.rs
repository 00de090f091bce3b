//! Static strings and asset paths used by the page components.

/// Public URL of the footer logo, relative to the served root.
/// Trunk copies `web/assets/` to `assets/` (see `index.html`).
pub const LOGO_FOOTER: &str = "assets/logo_footer.svg";
pub const LOGO_ALT: &str = "logo";

pub const BRAND_HREF: &str = "#";
pub const BRAND_TITLE: &str = "На-изи";

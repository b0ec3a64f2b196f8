//! Console HTML embedding.
//!
//! The Deskmind console is a single self-contained HTML file with all CSS
//! and JavaScript inlined. It provides 4 views: Chat Support, Knowledge
//! Base, FAQ Manager, and Dashboard.
//!
//! The HTML is embedded at compile time via `include_str!` so the binary has
//! no external file dependencies at runtime.

/// The complete self-contained console HTML.
///
/// A single HTML file with all CSS in `<style>` tags and all JavaScript in
/// `<script>` tags -- no CDN links, no npm packages, no build step. It talks
/// to the Deskmind API on the same origin and provides:
///
/// - **Chat**: conversation view with typing indicator, related-document
///   chips, and a language picker that reseeds the conversation
/// - **Documents**: searchable, category-filtered knowledge-base listing
/// - **FAQ**: searchable, category-filtered FAQ listing
/// - **Dashboard**: headline stat tiles and the recent-activity feed
///
/// Serve it from the `/ui` HTTP endpoint:
///
/// ```rust,ignore
/// use deskmind_ui::CONSOLE_HTML;
///
/// async fn ui_handler() -> axum::response::Html<&'static str> {
///     axum::response::Html(CONSOLE_HTML)
/// }
/// ```
pub const CONSOLE_HTML: &str = include_str!("../assets/console.html");

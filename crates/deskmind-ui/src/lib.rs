//! Embedded web console for Deskmind.

pub mod console;

pub use console::CONSOLE_HTML;

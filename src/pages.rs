//! Browser bindings
//!
//! Access to `contact-form-pages`: the DOM surface, the `fetch` transport,
//! CSRF lookup and the mount entry point. The browser types are only
//! available on `wasm32`.

// Re-export all contact-form-pages functionality
pub use contact_form_pages::*;

//! The view layer: templates, routes, and browser session plumbing.
//!
//! Two routable views exist: the private dashboard (session required,
//! redirects home otherwise) and the public task page (gated by the
//! task's public flag). The header affordance is a pure function of
//! session state.

pub mod pages;
pub mod routes;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - application: access policy for gated content
// - presentation: HTTP handlers and routing

pub mod application;
pub mod bootstrap;
pub mod presentation;

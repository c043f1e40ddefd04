// Adapters layer: concrete implementations for external collaborators
// (the remote project API and the rendered surface).

pub mod console;
pub mod http;

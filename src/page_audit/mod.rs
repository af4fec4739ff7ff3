/// Page audit bounded context
///
/// Extraction of form-like components from a captured page and the
/// heuristic checks run over them. Pure: no network, no filesystem.
pub mod domain;
pub mod policies;
pub mod services;

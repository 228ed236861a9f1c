//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream API client and the request-gate configuration; there
//! is no database here — the REST backend owns all persistence.

use crate::services::upstream::UpstreamService;

const DEFAULT_PROTECTED_PREFIX: &str = "/dashboard";

/// Path-prefix configuration for the request gate.
#[derive(Clone, Debug)]
pub struct GateConfig {
    /// Path prefix of the authenticated area (no trailing slash).
    pub protected_prefix: String,
}

impl GateConfig {
    /// Load from `PROTECTED_PREFIX`, defaulting to `/dashboard`.
    #[must_use]
    pub fn from_env() -> Self {
        let prefix = std::env::var("PROTECTED_PREFIX")
            .ok()
            .filter(|p| p.starts_with('/'))
            .unwrap_or_else(|| DEFAULT_PROTECTED_PREFIX.to_owned());
        Self { protected_prefix: prefix.trim_end_matches('/').to_owned() }
    }

    /// Whether `path` falls inside the protected area.
    #[must_use]
    pub fn protects(&self, path: &str) -> bool {
        path == self.protected_prefix
            || path
                .strip_prefix(&self.protected_prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamService,
    pub gate: GateConfig,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: UpstreamService, gate: GateConfig) -> Self {
        Self { upstream, gate }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::upstream::UpstreamConfig;

    /// Create a test `AppState` pointing at `base_url` (no live backend).
    #[must_use]
    pub fn test_app_state(base_url: &str) -> AppState {
        let config = UpstreamConfig { base_url: base_url.trim_end_matches('/').to_owned() };
        AppState::new(UpstreamService::new(config), GateConfig {
            protected_prefix: "/dashboard".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_protects_prefix_and_descendants() {
        let gate = GateConfig { protected_prefix: "/dashboard".to_owned() };
        assert!(gate.protects("/dashboard"));
        assert!(gate.protects("/dashboard/blogs"));
        assert!(gate.protects("/dashboard/blogs/edit/42"));
    }

    #[test]
    fn gate_ignores_lookalike_prefixes() {
        let gate = GateConfig { protected_prefix: "/dashboard".to_owned() };
        assert!(!gate.protects("/dashboards"));
        assert!(!gate.protects("/dash"));
        assert!(!gate.protects("/blogs"));
        assert!(!gate.protects("/"));
    }

    #[test]
    fn gate_config_normalizes_trailing_slash() {
        let gate = GateConfig { protected_prefix: "/admin".to_owned() };
        assert!(gate.protects("/admin/settings"));
        assert!(!gate.protects("/administrator"));
    }
}

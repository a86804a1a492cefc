//! Capability Probe
//!
//! A capability marker records that an externally-resolvable facility
//! (a vendor SDK module, a transport client) is linked into the running
//! process. Markers are registered at compile time via linkme and only
//! ever checked for presence, never instantiated.
//!
//! Provider entries declare the capability names they require; an
//! integration whose capabilities are absent is silently skipped during
//! wiring, before any credential validation runs.

/// Marker describing an externally-resolvable facility
pub struct Capability {
    /// Unique capability name (e.g., "openai-client", "http-transport")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

// Auto-collection via linkme distributed slices - provider crates submit
// markers at compile time, gated by their cargo features.
#[linkme::distributed_slice]
pub static CAPABILITIES: [Capability] = [..];

/// Check whether a capability marker is registered in this process
pub fn has_capability(name: &str) -> bool {
    CAPABILITIES.iter().any(|c| c.name == name)
}

/// Check whether every required capability is registered
///
/// An empty requirement list is trivially satisfied.
pub fn capabilities_present(required: &[&str]) -> bool {
    required.iter().all(|name| has_capability(name))
}

/// List all registered capabilities
///
/// Returns (name, description) tuples. Useful for CLI help and
/// diagnostics.
pub fn list_capabilities() -> Vec<(&'static str, &'static str)> {
    CAPABILITIES.iter().map(|c| (c.name, c.description)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_capability_is_not_found() {
        assert!(!has_capability("no-such-capability-xyz"));
    }

    #[test]
    fn empty_requirements_are_satisfied() {
        assert!(capabilities_present(&[]));
    }

    #[test]
    fn missing_requirement_fails_the_set() {
        assert!(!capabilities_present(&["no-such-capability-xyz"]));
    }
}

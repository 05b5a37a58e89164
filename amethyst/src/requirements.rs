use crate::capabilities::IntersectionCapabilities;

/// The caller's declared needs for a single intersection query.
///
/// Shapes must honor every forced field they advertise a capability for;
/// a query forcing something a shape cannot compute fails cleanly with the
/// record untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntersectionRequirements {
    normal: bool,
    uv: bool,
    first_only: bool,
    all_hits: bool,
    containers: bool,
    local_system: bool,
}

impl IntersectionRequirements {
    pub fn new() -> Self {
        IntersectionRequirements::default()
    }

    pub fn force_normal(mut self, yes: bool) -> Self {
        self.normal = yes;
        self
    }

    pub fn force_uv(mut self, yes: bool) -> Self {
        self.uv = yes;
        self
    }

    pub fn force_first_only(mut self, yes: bool) -> Self {
        self.first_only = yes;
        if yes {
            self.all_hits = false;
        }
        self
    }

    pub fn force_all_hits(mut self, yes: bool) -> Self {
        self.all_hits = yes;
        if yes {
            self.first_only = false;
        }
        self
    }

    pub fn force_containers(mut self, yes: bool) -> Self {
        self.containers = yes;
        self
    }

    pub fn force_local_system(mut self, yes: bool) -> Self {
        self.local_system = yes;
        self
    }

    pub fn needs_normal(&self) -> bool {
        self.normal
    }

    pub fn needs_uv(&self) -> bool {
        self.uv
    }

    pub fn needs_first_only(&self) -> bool {
        self.first_only
    }

    pub fn needs_all_hits(&self) -> bool {
        self.all_hits
    }

    pub fn needs_containers(&self) -> bool {
        self.containers
    }

    pub fn needs_local_system(&self) -> bool {
        self.local_system
    }

    /// The capabilities a shape must advertise to satisfy this query.
    pub fn capabilities_needed(&self) -> IntersectionCapabilities {
        let mut caps = IntersectionCapabilities::HIT_FIRST;

        if self.normal {
            caps |= IntersectionCapabilities::NORMAL_CALCULATION;
        }
        if self.uv {
            caps |= IntersectionCapabilities::UV_CALCULATION;
        }
        if self.all_hits {
            caps |= IntersectionCapabilities::HIT_ALL;
        }
        if self.local_system {
            caps |= IntersectionCapabilities::LOCAL_SYSTEM_CALCULATION;
        }

        caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_only_and_all_hits_are_exclusive() {
        let reqs = IntersectionRequirements::new()
            .force_first_only(true)
            .force_all_hits(true);

        assert!(reqs.needs_all_hits());
        assert!(!reqs.needs_first_only());

        let reqs = reqs.force_first_only(true);
        assert!(!reqs.needs_all_hits());
        assert!(reqs.needs_first_only());
    }

    #[test]
    fn test_capabilities_projection() {
        let reqs = IntersectionRequirements::new()
            .force_normal(true)
            .force_uv(true);
        let caps = reqs.capabilities_needed();

        assert!(caps.contains(IntersectionCapabilities::HIT_FIRST));
        assert!(caps.contains(IntersectionCapabilities::NORMAL_CALCULATION));
        assert!(caps.contains(IntersectionCapabilities::UV_CALCULATION));
        assert!(!caps.contains(IntersectionCapabilities::HIT_ALL));
    }
}

//! Bit-flag sets describing what a shape can compute for an intersection,
//! what kind of object it is, and what a texture can do with light.

use bitflags::bitflags;

bitflags! {
    /// What a shape is able to fill into an intersection record.
    pub struct IntersectionCapabilities: u32 {
        /// Can report the nearest hit.
        const HIT_FIRST = 1 << 0;
        /// Can report every hit along the ray, not just the nearest.
        const HIT_ALL = 1 << 1;
        /// Can compute the surface normal at the hit point.
        const NORMAL_CALCULATION = 1 << 2;
        /// Can compute (u, v) surface coordinates at the hit point.
        const UV_CALCULATION = 1 << 3;
        /// Can provide a full local coordinate frame at the hit point.
        const LOCAL_SYSTEM_CALCULATION = 1 << 4;
        /// Hit results may depend on the ray's time parameter.
        const TIME_SAMPLING = 1 << 5;
    }
}

bitflags! {
    /// Structural properties of a shape.
    pub struct ObjectCapabilities: u32 {
        /// Extends without bound in some direction (planes and friends).
        const NOT_FINITE = 1 << 0;
        /// Can be enclosed in a finite bound.
        const BOUNDABLE = 1 << 1;
        /// Changes over time.
        const MOVABLE = 1 << 2;
        /// A single primitive rather than a composite.
        const SIMPLE = 1 << 3;
        /// Contains other shapes.
        const CONTAINER = 1 << 4;
        /// Defined by an implicit function.
        const IMPLICIT = 1 << 5;
        /// Can be turned into a polygon mesh.
        const POLYGONIZATION = 1 << 6;
    }
}

bitflags! {
    /// How a texture interacts with incoming light.
    pub struct MaterialCapabilities: u32 {
        const DIFFUSE = 1 << 0;
        const REFLECTIVE = 1 << 1;
        const EMISSIVE = 1 << 2;
        const REFRACTIVE = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_ops() {
        let caps = IntersectionCapabilities::HIT_FIRST
            | IntersectionCapabilities::NORMAL_CALCULATION;

        assert!(caps.contains(IntersectionCapabilities::HIT_FIRST));
        assert!(!caps.contains(IntersectionCapabilities::UV_CALCULATION));

        let narrowed = caps & IntersectionCapabilities::NORMAL_CALCULATION;
        assert_eq!(narrowed, IntersectionCapabilities::NORMAL_CALCULATION);
    }
}

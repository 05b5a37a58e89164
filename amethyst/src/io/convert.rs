use geo::Scalar;

use crate::rgbcolor::Rgbcolor;

/// Map a `[0, 1]` color to 8-bit channels, clamping anything outside the
/// range.
pub fn color_to_bytes<T: Scalar>(c: &Rgbcolor<T>) -> Rgbcolor<u8> {
    Rgbcolor {
        r: channel_to_byte(c.r),
        g: channel_to_byte(c.g),
        b: channel_to_byte(c.b),
    }
}

/// Map 8-bit channels back into `[0, 1]` scalars.
pub fn color_from_bytes<T: Scalar>(c: &Rgbcolor<u8>) -> Rgbcolor<T> {
    let max = T::of(255.0);

    Rgbcolor::new(
        T::of(c.r as f64) / max,
        T::of(c.g as f64) / max,
        T::of(c.b as f64) / max,
    )
}

/// Gamma-correct a color: every channel is raised to `1 / gamma`.
pub fn gamma_convert<T: Scalar>(c: &Rgbcolor<T>, gamma: T) -> Rgbcolor<T> {
    let inv = T::one() / gamma;

    Rgbcolor::new(c.r.powf(inv), c.g.powf(inv), c.b.powf(inv))
}

fn channel_to_byte<T: Scalar>(v: T) -> u8 {
    let clamped = v.max(T::zero()).min(T::one());
    let scaled = clamped * T::of(255.0) + T::of(0.5);

    num_traits::cast::<T, u8>(scaled.floor()).unwrap_or(255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_tight() {
        let c = Rgbcolor::new(1.0, 0.0, 0.5);
        let bytes = color_to_bytes(&c);

        assert_eq!(bytes, Rgbcolor { r: 255, g: 0, b: 128 });

        let back: Rgbcolor<f64> = color_from_bytes(&bytes);
        assert!((back.r - c.r).abs() < 1.0 / 255.0);
        assert!((back.g - c.g).abs() < 1.0 / 255.0);
        assert!((back.b - c.b).abs() < 1.0 / 255.0);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let bytes = color_to_bytes(&Rgbcolor::new(2.0, -1.0, 0.999));
        assert_eq!(bytes.r, 255);
        assert_eq!(bytes.g, 0);
        assert_eq!(bytes.b, 255);
    }

    #[test]
    fn test_gamma() {
        let c = gamma_convert(&Rgbcolor::<f64>::new(0.25, 1.0, 0.0), 2.0);
        assert!((c.r - 0.5).abs() < 1e-12);
        assert_eq!(c.g, 1.0);
        assert_eq!(c.b, 0.0);
    }
}

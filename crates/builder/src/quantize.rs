use voxtex_common::VolumeDims;

/// Map requested volume extents to the extents actually allocated.
///
/// With `power_of_two` unset this is the identity. Otherwise each axis is
/// rounded up independently to the smallest power of two that covers it, so
/// the result is always >= the request on every axis. A zero axis rounds to 1;
/// callers treat zero-extent requests as not-yet-buildable before allocating.
pub fn quantize(requested: VolumeDims, power_of_two: bool) -> VolumeDims {
    if !power_of_two {
        return requested;
    }
    VolumeDims::new(
        requested.width.next_power_of_two(),
        requested.height.next_power_of_two(),
        requested.depth.next_power_of_two(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_flag_off() {
        for d in [
            VolumeDims::new(1, 1, 1),
            VolumeDims::new(3, 5, 7),
            VolumeDims::new(100, 200, 300),
        ] {
            assert_eq!(quantize(d, false), d);
        }
    }

    #[test]
    fn rounds_each_axis_up_independently() {
        assert_eq!(
            quantize(VolumeDims::new(3, 5, 9), true),
            VolumeDims::new(4, 8, 16)
        );
        assert_eq!(
            quantize(VolumeDims::new(17, 2, 1), true),
            VolumeDims::new(32, 2, 1)
        );
    }

    #[test]
    fn powers_of_two_are_fixed_points() {
        for w in [1u32, 2, 4, 8, 16, 256, 1024] {
            let d = VolumeDims::new(w, w, w);
            assert_eq!(quantize(d, true), d);
        }
    }

    #[test]
    fn smallest_covering_power_for_all_small_widths() {
        for w in 1u32..=64 {
            let q = quantize(VolumeDims::new(w, w, w), true).width;
            assert!(q.is_power_of_two());
            assert!(q >= w);
            // Smallest: the next power down must not cover w.
            if q > 1 {
                assert!(q / 2 < w);
            }
        }
    }

    #[test]
    fn zero_axis_rounds_to_one() {
        assert_eq!(
            quantize(VolumeDims::new(0, 3, 0), true),
            VolumeDims::new(1, 4, 1)
        );
    }
}

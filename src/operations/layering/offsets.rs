/// Offsets of the middle of each layer from the original bundle plane,
/// bottom to top, for layers `separation` apart.
///
/// The offsets are symmetric about zero. An odd count puts the middle layer
/// on the plane; an even count straddles it:
///
/// | layers | offsets (S = separation)     |
/// |--------|------------------------------|
/// | 1      | 0                            |
/// | 2      | -S/2, S/2                    |
/// | 3      | -S, 0, S                     |
/// | 4      | -3S/2, -S/2, S/2, 3S/2       |
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn layer_offsets(count: usize, separation: f64) -> Vec<f64> {
    let half = count / 2;
    let upper: Vec<f64> = if count % 2 == 0 {
        (1..=half)
            .map(|i| i as f64 * separation - separation / 2.0)
            .collect()
    } else {
        (1..=half).map(|i| i as f64 * separation).collect()
    };

    let mut offsets: Vec<f64> = upper.iter().rev().map(|d| -d).collect();
    if count % 2 == 1 {
        offsets.push(0.0);
    }
    offsets.extend(upper);
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_offsets(count: usize, expected: &[f64]) {
        let offsets = layer_offsets(count, 1.0);
        assert_eq!(offsets.len(), expected.len());
        for (got, want) in offsets.iter().zip(expected) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn no_layers() {
        assert!(layer_offsets(0, 1.0).is_empty());
    }

    #[test]
    fn one_layer_sits_on_the_plane() {
        assert_offsets(1, &[0.0]);
    }

    #[test]
    fn two_layers() {
        assert_offsets(2, &[-0.5, 0.5]);
    }

    #[test]
    fn three_layers() {
        assert_offsets(3, &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn four_layers() {
        assert_offsets(4, &[-1.5, -0.5, 0.5, 1.5]);
    }

    #[test]
    fn five_layers() {
        assert_offsets(5, &[-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn scales_with_separation() {
        let offsets = layer_offsets(2, 0.02);
        assert_relative_eq!(offsets[0], -0.01, epsilon = 1e-12);
        assert_relative_eq!(offsets[1], 0.01, epsilon = 1e-12);
    }

    #[test]
    fn offsets_are_strictly_increasing_and_symmetric() {
        for count in 1..12 {
            let offsets = layer_offsets(count, 0.3);
            assert_eq!(offsets.len(), count);
            for pair in offsets.windows(2) {
                assert!(pair[0] < pair[1]);
            }
            for (low, high) in offsets.iter().zip(offsets.iter().rev()) {
                assert_relative_eq!(*low, -*high, epsilon = 1e-12);
            }
            let has_zero = offsets.iter().any(|d| d.abs() < 1e-12);
            assert_eq!(has_zero, count % 2 == 1);
        }
    }
}

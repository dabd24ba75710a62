/// Full-scale magnitude of a signed 16-bit sample.
const FULL_SCALE: f64 = 32_768.0;

/// RMS of one block after normalizing each sample to [-1, 1] and applying
/// `gain`. Empty blocks report 0.0 rather than dividing by zero.
pub fn block_rms(samples: &[i16], gain: f32) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let gain = f64::from(gain);
    let sum: f64 = samples
        .iter()
        .map(|&s| {
            let x = f64::from(s) / FULL_SCALE * gain;
            x * x
        })
        .sum();
    (sum / samples.len() as f64).sqrt() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_is_exactly_zero() {
        let block = [0i16; 1920];
        assert_eq!(block_rms(&block, 1.0), 0.0);
        assert_eq!(block_rms(&block, 100.0), 0.0);
    }

    #[test]
    fn empty_block_is_zero() {
        assert_eq!(block_rms(&[], 1.0), 0.0);
    }

    #[test]
    fn constant_half_scale_block() {
        let block = [16_384i16; 480];
        let rms = block_rms(&block, 1.0);
        assert!((rms - 0.5).abs() < 1e-6);
    }

    #[test]
    fn gain_scales_the_reading() {
        let block = [16_384i16; 480];
        let rms = block_rms(&block, 2.0);
        assert!((rms - 1.0).abs() < 1e-6);
    }
}

//! PCM sample conversions between the speech format and a device format.

/// Decode 16-bit signed little-endian PCM. A trailing odd byte is dropped.
pub fn pcm16_le_to_samples(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Linearly resample mono audio from `from_rate` to `to_rate`.
pub fn resample_linear(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if samples.is_empty() || from_rate == 0 || to_rate == 0 || from_rate == to_rate {
        return samples.to_vec();
    }

    let ratio = f64::from(from_rate) / f64::from(to_rate);
    let out_len = (samples.len() as f64 / ratio).round().max(1.0) as usize;
    let last = samples.len() - 1;

    (0..out_len)
        .map(|i| {
            let pos = i as f64 * ratio;
            let idx = (pos.floor() as usize).min(last);
            let frac = pos - idx as f64;
            let a = f64::from(samples[idx]);
            let b = f64::from(samples[(idx + 1).min(last)]);
            (a + (b - a) * frac).round() as i16
        })
        .collect()
}

/// Duplicate each mono sample across `channels` interleaved channels.
pub fn interleave(mono: &[i16], channels: u16) -> Vec<i16> {
    let channels = usize::from(channels.max(1));
    mono.iter()
        .flat_map(|&sample| std::iter::repeat(sample).take(channels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_pairs() {
        let samples = pcm16_le_to_samples(&[0x01, 0x00, 0xff, 0xff, 0x00, 0x80, 0x7f]);
        assert_eq!(samples, vec![1, -1, i16::MIN]);
    }

    #[test]
    fn same_rate_is_unchanged() {
        let samples = vec![1, 2, 3, 4];
        assert_eq!(resample_linear(&samples, 24_000, 24_000), samples);
    }

    #[test]
    fn upsampling_doubles_length_and_interpolates() {
        let out = resample_linear(&[0, 100, 200], 24_000, 48_000);
        assert_eq!(out, vec![0, 50, 100, 150, 200, 200]);
    }

    #[test]
    fn downsampling_halves_length() {
        let out = resample_linear(&[0, 10, 20, 30, 40, 50], 48_000, 24_000);
        assert_eq!(out, vec![0, 20, 40]);
    }

    #[test]
    fn resample_length_tracks_rate_ratio() {
        let one_second = vec![0i16; 24_000];
        assert_eq!(resample_linear(&one_second, 24_000, 44_100).len(), 44_100);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(resample_linear(&[], 24_000, 48_000).is_empty());
    }

    #[test]
    fn interleave_repeats_per_channel() {
        assert_eq!(interleave(&[1, 2], 2), vec![1, 1, 2, 2]);
        assert_eq!(interleave(&[5], 1), vec![5]);
        assert_eq!(interleave(&[7], 0), vec![7]);
    }
}

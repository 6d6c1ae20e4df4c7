//! Blocking playback of a PCM clip on a `cpal` output stream.

use std::sync::mpsc::{sync_channel, SyncSender};
use std::time::Duration;

use cpal::traits::{DeviceTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample, StreamConfig};
use gamecast_common::PlatformError;
use ringbuf::HeapRb;
use tracing::{debug, info};

use super::device::find_output_device;
use super::pcm::{interleave, pcm16_le_to_samples, resample_linear};

/// Time left for the device to flush its last buffer after the queue empties.
const DRAIN_GRACE: Duration = Duration::from_millis(150);

type PlaybackSignal = Result<(), String>;

/// An opened output device that plays one clip at a time.
pub struct AudioPlayer {
    device: cpal::Device,
    config: cpal::SupportedStreamConfig,
}

impl AudioPlayer {
    /// Open the output device called `name` (`"default"` for the host default)
    /// in its default output configuration.
    pub fn open(name: &str) -> Result<Self, PlatformError> {
        let device = find_output_device(name)?;
        let config = device
            .default_output_config()
            .map_err(|e| PlatformError::AudioError(format!("no output config for {name}: {e}")))?;

        info!(
            device = name,
            sample_rate = config.sample_rate().0,
            channels = config.channels(),
            format = ?config.sample_format(),
            "opened audio output"
        );

        Ok(Self { device, config })
    }

    /// Play 16-bit little-endian mono PCM recorded at `sample_rate`, returning
    /// only after the whole clip has been handed to the device.
    pub fn play_pcm16(&self, pcm: &[u8], sample_rate: u32) -> Result<(), PlatformError> {
        let mono = pcm16_le_to_samples(pcm);
        if mono.is_empty() {
            debug!("skipping empty clip");
            return Ok(());
        }

        let device_rate = self.config.sample_rate().0;
        let samples = interleave(
            &resample_linear(&mono, sample_rate, device_rate),
            self.config.channels(),
        );

        let (done_tx, done_rx) = sync_channel::<PlaybackSignal>(2);
        let stream = match self.config.sample_format() {
            SampleFormat::I16 => self.build_stream::<i16>(samples, done_tx)?,
            SampleFormat::U16 => self.build_stream::<u16>(samples, done_tx)?,
            SampleFormat::F32 => self.build_stream::<f32>(samples, done_tx)?,
            other => {
                return Err(PlatformError::AudioError(format!(
                    "unsupported output sample format {other:?}"
                )));
            }
        };

        stream
            .play()
            .map_err(|e| PlatformError::AudioError(format!("failed to start playback: {e}")))?;

        match done_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(PlatformError::AudioError(format!("playback failed: {e}"))),
            Err(_) => {
                return Err(PlatformError::AudioError(
                    "playback stream closed before finishing".into(),
                ));
            }
        }

        std::thread::sleep(DRAIN_GRACE);
        drop(stream);
        Ok(())
    }

    fn build_stream<T>(
        &self,
        samples: Vec<i16>,
        done: SyncSender<PlaybackSignal>,
    ) -> Result<cpal::Stream, PlatformError>
    where
        T: SizedSample + FromSample<i16>,
    {
        let (mut producer, mut consumer) = HeapRb::<i16>::new(samples.len()).split();
        producer.push_slice(&samples);

        let config: StreamConfig = self.config.config();
        let error_tx = done.clone();
        let mut finished = false;

        self.device
            .build_output_stream(
                &config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    for slot in data.iter_mut() {
                        *slot = match consumer.pop() {
                            Some(sample) => T::from_sample(sample),
                            None => T::EQUILIBRIUM,
                        };
                    }
                    if !finished && consumer.is_empty() {
                        finished = true;
                        let _ = done.try_send(Ok(()));
                    }
                },
                move |err| {
                    let _ = error_tx.try_send(Err(err.to_string()));
                },
                None,
            )
            .map_err(|e| PlatformError::AudioError(format!("failed to build output stream: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "Requires audio hardware and is audible"]
    fn plays_short_tone_on_default_device() {
        let player = AudioPlayer::open("default").unwrap();
        let tone: Vec<u8> = (0..2400)
            .map(|i| ((i as f32 * 0.1).sin() * 8000.0) as i16)
            .flat_map(i16::to_le_bytes)
            .collect();
        player.play_pcm16(&tone, 24_000).unwrap();
    }

    #[test]
    #[ignore = "Requires audio hardware"]
    fn empty_clip_returns_immediately() {
        let player = AudioPlayer::open("default").unwrap();
        player.play_pcm16(&[], 24_000).unwrap();
    }
}

use hound::{WavReader, WavWriter};
use std::io::Cursor;

/// Silence inserted between consecutive segments
pub const DEFAULT_SILENCE_GAP_MS: u32 = 200;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no audio segments to assemble")]
    EmptyInput,
    #[error("wav processing failed: {0}")]
    Wav(#[from] hound::Error),
}

/// Joins per-chunk audio artifacts into one WAV artifact.
///
/// Segments are expected to share sample rate and channel layout, since they
/// come from the same synthesis backend; the assembler does not resample or
/// adjust loudness.
pub struct AudioAssembler {
    silence_gap_ms: u32,
}

impl AudioAssembler {
    pub fn new(silence_gap_ms: u32) -> Self {
        Self { silence_gap_ms }
    }

    /// Concatenate artifacts in input order with a fixed silence gap between
    /// consecutive segments (none before the first or after the last).
    ///
    /// A single artifact is returned as-is, skipping the decode/encode round
    /// trip entirely. Zero artifacts is an error: it means every chunk was
    /// skipped upstream and there is nothing to synthesize.
    pub fn assemble(&self, artifacts: &[Vec<u8>]) -> Result<Vec<u8>, AudioError> {
        if artifacts.is_empty() {
            return Err(AudioError::EmptyInput);
        }
        if artifacts.len() == 1 {
            return Ok(artifacts[0].clone());
        }

        let mut segments = Vec::with_capacity(artifacts.len());
        let mut spec = None;
        for artifact in artifacts {
            let mut reader = WavReader::new(Cursor::new(artifact))?;
            if spec.is_none() {
                spec = Some(reader.spec());
            }
            let samples = reader
                .samples::<i16>()
                .collect::<Result<Vec<_>, hound::Error>>()?;
            segments.push(samples);
        }
        // artifacts is non-empty, so spec has been set
        let spec = spec.ok_or(AudioError::EmptyInput)?;

        let gap_samples =
            (spec.sample_rate as u64 * self.silence_gap_ms as u64 / 1000) as usize
                * spec.channels as usize;

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for (index, samples) in segments.iter().enumerate() {
            if index > 0 {
                for _ in 0..gap_samples {
                    writer.write_sample(0i16)?;
                }
            }
            for sample in samples {
                writer.write_sample(*sample)?;
            }
        }
        writer.finalize()?;

        tracing::debug!(
            segment_count = artifacts.len(),
            gap_ms = self.silence_gap_ms,
            assembled_size = cursor.get_ref().len(),
            "audio segments assembled"
        );

        Ok(cursor.into_inner())
    }
}

impl Default for AudioAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_SILENCE_GAP_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: u32 = 22050;

    fn test_spec() -> hound::WavSpec {
        hound::WavSpec {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        }
    }

    fn wav_with_samples(value: i16, count: usize) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, test_spec()).unwrap();
        for _ in 0..count {
            writer.write_sample(value).unwrap();
        }
        writer.finalize().unwrap();
        cursor.into_inner()
    }

    fn decode(bytes: &[u8]) -> Vec<i16> {
        WavReader::new(Cursor::new(bytes))
            .unwrap()
            .samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_assemble_empty_input_fails() {
        let assembler = AudioAssembler::default();
        assert!(matches!(
            assembler.assemble(&[]),
            Err(AudioError::EmptyInput)
        ));
    }

    #[test]
    fn test_assemble_single_artifact_passthrough() {
        let assembler = AudioAssembler::default();
        let artifact = wav_with_samples(42, 100);
        let assembled = assembler.assemble(std::slice::from_ref(&artifact)).unwrap();
        assert_eq!(assembled, artifact);
    }

    #[test]
    fn test_assemble_inserts_200ms_gap() {
        let assembler = AudioAssembler::default();
        let a = wav_with_samples(1000, 50);
        let b = wav_with_samples(-1000, 70);
        let assembled = assembler.assemble(&[a, b]).unwrap();

        let samples = decode(&assembled);
        let gap = (SAMPLE_RATE as usize * 200) / 1000;
        assert_eq!(samples.len(), 50 + gap + 70);
    }

    #[test]
    fn test_assemble_preserves_order_with_silence_between() {
        let assembler = AudioAssembler::default();
        let a = wav_with_samples(1000, 50);
        let b = wav_with_samples(-1000, 70);
        let assembled = assembler.assemble(&[a, b]).unwrap();

        let samples = decode(&assembled);
        let gap = (SAMPLE_RATE as usize * 200) / 1000;
        assert!(samples[..50].iter().all(|s| *s == 1000));
        assert!(samples[50..50 + gap].iter().all(|s| *s == 0));
        assert!(samples[50 + gap..].iter().all(|s| *s == -1000));
    }

    #[test]
    fn test_assemble_three_segments_two_gaps() {
        let assembler = AudioAssembler::new(100);
        let gap = (SAMPLE_RATE as usize * 100) / 1000;
        let parts = [
            wav_with_samples(1, 10),
            wav_with_samples(2, 20),
            wav_with_samples(3, 30),
        ];
        let assembled = assembler.assemble(&parts).unwrap();
        assert_eq!(decode(&assembled).len(), 10 + 20 + 30 + 2 * gap);
    }
}

/// Sound engine: procedural investigation chimes via rodio.
///
/// All sounds are generated as in-memory WAV buffers at init time.
/// Playback is fire-and-forget (non-blocking) via rodio's Sink.
///
/// Compile with `--no-default-features` or without the "sound" feature
/// to disable audio entirely (the stub SoundEngine does nothing).

#[cfg(feature = "sound")]
mod inner {
    use std::io::Cursor;
    use std::sync::Arc;

    use rodio::{OutputStream, OutputStreamHandle, Sink};

    const SAMPLE_RATE: u32 = 22050;

    /// Pre-generated WAV buffers for each sound effect.
    pub struct SoundEngine {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        sfx_start: Arc<Vec<u8>>,
        sfx_accept: Arc<Vec<u8>>,
        sfx_reject: Arc<Vec<u8>>,
        sfx_unlock: Arc<Vec<u8>>,
        sfx_closed: Arc<Vec<u8>>,
    }

    impl SoundEngine {
        pub fn new() -> Option<Self> {
            let (stream, handle) = OutputStream::try_default().ok()?;

            Some(SoundEngine {
                _stream: stream,
                handle,
                sfx_start: Arc::new(make_wav(&gen_start())),
                sfx_accept: Arc::new(make_wav(&gen_accept())),
                sfx_reject: Arc::new(make_wav(&gen_reject())),
                sfx_unlock: Arc::new(make_wav(&gen_unlock())),
                sfx_closed: Arc::new(make_wav(&gen_case_closed())),
            })
        }

        fn play(&self, buf: &Arc<Vec<u8>>) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                let cursor = Cursor::new(buf.as_ref().clone());
                if let Ok(src) = rodio::Decoder::new(cursor) {
                    sink.append(src);
                    sink.detach(); // fire-and-forget
                }
            }
        }

        pub fn play_start(&self) { self.play(&self.sfx_start); }
        pub fn play_accept(&self) { self.play(&self.sfx_accept); }
        pub fn play_reject(&self) { self.play(&self.sfx_reject); }
        pub fn play_unlock(&self) { self.play(&self.sfx_unlock); }
        pub fn play_case_closed(&self) { self.play(&self.sfx_closed); }
    }

    // ════════════════════════════════════════════════════════════
    //  Waveform generators: all produce Vec<f32> mono samples
    // ════════════════════════════════════════════════════════════

    fn push_tone(samples: &mut Vec<f32>, freq: f32, duration: f32, volume: f32) {
        let n = (SAMPLE_RATE as f32 * duration) as usize;
        for i in 0..n {
            let t = i as f32 / SAMPLE_RATE as f32;
            let env = 1.0 - (i as f32 / n as f32).powf(0.5);
            // Sine + harmonics for a retro console timbre
            let wave = (t * freq * 2.0 * std::f32::consts::PI).sin() * 0.7
                + (t * freq * 2.0 * 2.0 * std::f32::consts::PI).sin() * 0.3;
            samples.push(wave * env * volume);
        }
    }

    /// Investigation start: two rising blips
    fn gen_start() -> Vec<f32> {
        let mut samples = Vec::new();
        push_tone(&mut samples, 523.0, 0.07, 0.25); // C5
        push_tone(&mut samples, 784.0, 0.12, 0.25); // G5
        samples
    }

    /// Evidence accepted: quick ascending arpeggio C6 -> E6 -> G6
    fn gen_accept() -> Vec<f32> {
        let mut samples = Vec::new();
        for &freq in &[1047.0_f32, 1319.0, 1568.0] {
            push_tone(&mut samples, freq, 0.05, 0.25);
        }
        samples
    }

    /// Evidence rejected: flat descending buzz
    fn gen_reject() -> Vec<f32> {
        let duration = 0.22;
        let n = (SAMPLE_RATE as f32 * duration) as usize;
        (0..n)
            .map(|i| {
                let t = i as f32 / n as f32;
                let freq = 300.0 - t * 120.0;
                let ti = i as f32 / SAMPLE_RATE as f32;
                let env = (1.0 - t).powf(0.7);
                // Square-ish wave for the harsh "denied" feel
                let wave = if (ti * freq * 2.0 * std::f32::consts::PI).sin() >= 0.0 { 1.0 } else { -1.0 };
                wave * env * 0.12
            })
            .collect()
    }

    /// Next level unlocked: bright two-note chime
    fn gen_unlock() -> Vec<f32> {
        let mut samples = Vec::new();
        push_tone(&mut samples, 784.0, 0.08, 0.25);  // G5
        push_tone(&mut samples, 1047.0, 0.15, 0.25); // C6
        samples
    }

    /// Case closed: ascending fanfare with a sustained final note
    fn gen_case_closed() -> Vec<f32> {
        let mut samples = Vec::new();
        for &freq in &[523.0_f32, 659.0, 784.0] {
            push_tone(&mut samples, freq, 0.1, 0.3); // C5, E5, G5
        }
        let last = 1047.0_f32; // C6
        let n = (SAMPLE_RATE as f32 * 0.35) as usize;
        for i in 0..n {
            let t = i as f32 / SAMPLE_RATE as f32;
            let env = 1.0 - (i as f32 / n as f32);
            let wave = (t * last * 2.0 * std::f32::consts::PI).sin();
            samples.push(wave * env * 0.3);
        }
        samples
    }

    // ════════════════════════════════════════════════════════════
    //  WAV encoder: wraps f32 samples into a valid WAV buffer
    // ════════════════════════════════════════════════════════════

    fn make_wav(samples: &[f32]) -> Vec<u8> {
        let num_channels: u16 = 1;
        let bits_per_sample: u16 = 16;
        let byte_rate = SAMPLE_RATE * (num_channels as u32) * (bits_per_sample as u32) / 8;
        let block_align = num_channels * bits_per_sample / 8;
        let data_size = samples.len() as u32 * 2; // 16-bit = 2 bytes per sample
        let file_size = 36 + data_size;

        let mut buf = Vec::with_capacity(44 + data_size as usize);

        // RIFF header
        buf.extend_from_slice(b"RIFF");
        buf.extend_from_slice(&file_size.to_le_bytes());
        buf.extend_from_slice(b"WAVE");

        // fmt chunk
        buf.extend_from_slice(b"fmt ");
        buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
        buf.extend_from_slice(&1u16.to_le_bytes());  // PCM format
        buf.extend_from_slice(&num_channels.to_le_bytes());
        buf.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
        buf.extend_from_slice(&byte_rate.to_le_bytes());
        buf.extend_from_slice(&block_align.to_le_bytes());
        buf.extend_from_slice(&bits_per_sample.to_le_bytes());

        // data chunk
        buf.extend_from_slice(b"data");
        buf.extend_from_slice(&data_size.to_le_bytes());

        for &s in samples {
            let clamped = s.max(-1.0).min(1.0);
            let val = (clamped * 32767.0) as i16;
            buf.extend_from_slice(&val.to_le_bytes());
        }

        buf
    }
}

// ════════════════════════════════════════════════════════════
//  Public API: compiles to no-ops when sound feature is off
// ════════════════════════════════════════════════════════════

#[cfg(feature = "sound")]
pub use inner::SoundEngine;

#[cfg(not(feature = "sound"))]
pub struct SoundEngine;

#[cfg(not(feature = "sound"))]
impl SoundEngine {
    pub fn new() -> Option<Self> { Some(SoundEngine) }
    pub fn play_start(&self) {}
    pub fn play_accept(&self) {}
    pub fn play_reject(&self) {}
    pub fn play_unlock(&self) {}
    pub fn play_case_closed(&self) {}
}

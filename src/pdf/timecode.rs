/*!
 * Timecode decoding and formatting.
 *
 * Script PDFs label narration cues with bare digit runs:
 * - 4 digits, MMSS: "3400" = 34 minutes 0 seconds
 * - 5 digits, HMMSS: "11111" = 1 hour 11 minutes 11 seconds
 * - 6 digits, HHMMSS: "015628" = 1 hour 56 minutes 28 seconds
 *
 * Timecodes carry no sub-second field, so the frames component of the
 * canonical `HH:MM:SS:FF` form is always zero.
 */

/// A decoded script timecode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timecode {
    /// Original digit run as it appeared in the PDF
    pub raw: String,
    /// Hours component after normalization
    pub hours: u32,
    /// Minutes component after normalization (0-59)
    pub minutes: u32,
    /// Seconds component (0-59)
    pub seconds: u32,
}

impl Timecode {
    /// Decode a 4-6 digit run into a timecode.
    ///
    /// Returns `None` when the run fails the length-specific range check -
    /// such runs are coincidental numbers, not timecodes:
    /// - 4 digits MMSS: minutes 0-99, seconds 0-59
    /// - 5 digits HMMSS: hour 0-9, minutes 0-59, seconds 0-59
    /// - 6 digits HHMMSS: hours 0-99, minutes 0-59, seconds 0-59
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() < 4 || raw.len() > 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let (hours, minutes, seconds) = match raw.len() {
            4 => {
                let minutes: u32 = raw[..2].parse().ok()?;
                let seconds: u32 = raw[2..].parse().ok()?;
                if seconds > 59 {
                    return None;
                }
                // MMSS supports timecodes past the hour mark (e.g. 7200 = 1:12:00)
                (minutes / 60, minutes % 60, seconds)
            }
            5 => {
                let hours: u32 = raw[..1].parse().ok()?;
                let minutes: u32 = raw[1..3].parse().ok()?;
                let seconds: u32 = raw[3..].parse().ok()?;
                if minutes > 59 || seconds > 59 {
                    return None;
                }
                (hours, minutes, seconds)
            }
            6 => {
                let hours: u32 = raw[..2].parse().ok()?;
                let minutes: u32 = raw[2..4].parse().ok()?;
                let seconds: u32 = raw[4..].parse().ok()?;
                if minutes > 59 || seconds > 59 {
                    return None;
                }
                (hours, minutes, seconds)
            }
            _ => return None,
        };

        Some(Timecode {
            raw: raw.to_string(),
            hours,
            minutes,
            seconds,
        })
    }

    /// Canonical `HH:MM:SS:00` form (frames always zero).
    pub fn formatted(&self) -> String {
        format!("{:02}:{:02}:{:02}:00", self.hours, self.minutes, self.seconds)
    }

    /// Absolute offset from the start of the program, in milliseconds.
    pub fn to_ms(&self) -> u64 {
        (u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds))
            * 1000
    }
}

/// Whether a digit run decodes to a valid timecode.
pub fn is_valid_timecode(raw: &str) -> bool {
    Timecode::parse(raw).is_some()
}

/// Convert milliseconds to an `HH:MM:SS:FF` timecode at the given frame rate.
pub fn ms_to_timecode(ms: u64, fps: f64) -> String {
    let total_seconds = ms / 1000;
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    let f = ((ms % 1000) as f64 / 1000.0 * fps) as u64;
    format!("{:02}:{:02}:{:02}:{:02}", h, m, s, f)
}

/// Convert an `HH:MM:SS:FF` timecode (drop-frame ";" separators accepted)
/// back to milliseconds at the given frame rate. Returns `None` for
/// malformed input.
pub fn timecode_to_ms(tc: &str, fps: f64) -> Option<u64> {
    let normalized = tc.replace(';', ":");
    let parts: Vec<&str> = normalized.split(':').collect();
    if parts.len() != 4 {
        return None;
    }

    let h: u64 = parts[0].parse().ok()?;
    let m: u64 = parts[1].parse().ok()?;
    let s: u64 = parts[2].parse().ok()?;
    let f: u64 = parts[3].parse().ok()?;

    Some(((h * 3600 + m * 60 + s) as f64 * 1000.0 + f as f64 / fps * 1000.0) as u64)
}

/// Convert milliseconds to a frame count at the given frame rate.
pub fn ms_to_frames(ms: u64, fps: f64) -> u64 {
    (ms as f64 / 1000.0 * fps) as u64
}

/// Convert a frame count to milliseconds at the given frame rate.
pub fn frames_to_ms(frames: u64, fps: f64) -> u64 {
    (frames as f64 / fps * 1000.0) as u64
}

/// Format a millisecond duration for log output (e.g. "2.5s", "3m 12.5s").
pub fn format_duration(ms: u64) -> String {
    let seconds = ms as f64 / 1000.0;
    if seconds < 60.0 {
        format!("{:.1}s", seconds)
    } else if seconds < 3600.0 {
        format!("{}m {:.1}s", (seconds as u64) / 60, seconds % 60.0)
    } else {
        let hours = (seconds as u64) / 3600;
        let minutes = ((seconds as u64) % 3600) / 60;
        format!("{}h {}m", hours, minutes)
    }
}

//! Injectable clock and message-id sources.
//!
//! A render reads each source exactly once, at the group-header step.
//! Production code uses [`SystemClock`] and [`SystemRandom`]; tests
//! substitute fixed implementations to pin `CreDtTm` and `MsgId` and assert
//! exact output strings.

use chrono::{DateTime, FixedOffset, Local};
use rand::RngCore;

/// Wall-clock source for the creation timestamp (`CreDtTm`).
pub trait Clock: Send + Sync {
    /// Current time with the local timezone offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Random identifier source for `MsgId`.
///
/// Uniqueness across concurrently generated documents is this source's
/// responsibility; the document builder never re-checks it.
pub trait MessageIdSource: Send + Sync {
    /// `byte_len` random bytes as a lowercase hex string of
    /// `2 * byte_len` characters.
    fn random_hex(&self, byte_len: usize) -> String;
}

/// Thread-local CSPRNG, hex-encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl MessageIdSource for SystemRandom {
    fn random_hex(&self, byte_len: usize) -> String {
        let mut buf = vec![0u8; byte_len];
        rand::thread_rng().fill_bytes(&mut buf);
        hex::encode(buf)
    }
}

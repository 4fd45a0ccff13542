//! Scripted RNG for deterministic spawn and combat tests

use rand::RngCore;

/// Raw draw that makes `random_bool` succeed and float draws land near 0.0
pub const DRAW_LOW: u64 = 0;
/// Raw draw that makes `random_bool` fail and float draws land near 1.0
pub const DRAW_HIGH: u64 = u64::MAX;

/// Replays a scripted sequence of raw draws; once the script is exhausted it
/// returns `DRAW_HIGH`, so every further Bernoulli roll fails.
pub struct ScriptRng {
    script: Vec<u64>,
    cursor: usize,
}

impl ScriptRng {
    pub fn new(script: Vec<u64>) -> Self {
        Self { script, cursor: 0 }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn next_raw(&mut self) -> u64 {
        let value = self.script.get(self.cursor).copied().unwrap_or(DRAW_HIGH);
        self.cursor += 1;
        value
    }
}

impl RngCore for ScriptRng {
    fn next_u32(&mut self) -> u32 {
        self.next_raw() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

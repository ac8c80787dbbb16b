//! Fire-and-forget delivery of rendered blocks to a visualiser.
//!
//! The audio side pushes into an `rtrb` ring and never waits: if the UI
//! falls behind, the rest of the block is dropped. The UI side keeps a
//! rolling window of the most recent samples.

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, PushError, RingBuffer};

/// Receiver for finished stereo blocks. Called from the audio thread, so
/// implementations must not block.
pub trait BlockSink {
    fn push_block(&mut self, left: &[f32], right: &[f32]);
}

/// Discards everything.
impl BlockSink for () {
    fn push_block(&mut self, _left: &[f32], _right: &[f32]) {}
}

/// Collects the left channel. Allocates; meant for offline rendering.
impl BlockSink for Vec<f32> {
    fn push_block(&mut self, left: &[f32], _right: &[f32]) {
        self.extend_from_slice(left);
    }
}

/// Both channels carry the same signal, so only the left one is sent.
#[cfg(feature = "rtrb")]
impl BlockSink for Producer<f32> {
    fn push_block(&mut self, left: &[f32], _right: &[f32]) {
        for &s in left {
            if let Err(PushError::Full(_)) = self.push(s) {
                break; // drop remainder if full
            }
        }
    }
}

/// UI half of the scope ring: the last `window` samples received.
#[cfg(feature = "rtrb")]
pub struct ScopeBuffer {
    rx: Consumer<f32>,
    samples: Vec<f32>,
    head: usize,
    received: u64,
}

/// Create a scope ring holding `blocks` windows of `window` samples.
#[cfg(feature = "rtrb")]
pub fn scope_channel(window: usize, blocks: usize) -> (Producer<f32>, ScopeBuffer) {
    let window = window.max(1);
    let (tx, rx) = RingBuffer::<f32>::new(window * blocks.max(1));
    let scope = ScopeBuffer {
        rx,
        samples: vec![0.0; window],
        head: 0,
        received: 0,
    };
    (tx, scope)
}

#[cfg(feature = "rtrb")]
impl ScopeBuffer {
    /// Drain everything waiting in the ring. Returns the number of samples
    /// taken.
    pub fn poll(&mut self) -> usize {
        let mut taken = 0;
        while let Ok(s) = self.rx.pop() {
            self.samples[self.head] = s;
            self.head = (self.head + 1) % self.samples.len();
            taken += 1;
        }
        self.received += taken as u64;
        taken
    }

    /// Window contents, oldest sample first.
    pub fn snapshot(&self, out: &mut Vec<f32>) {
        out.clear();
        out.extend_from_slice(&self.samples[self.head..]);
        out.extend_from_slice(&self.samples[..self.head]);
    }

    pub fn window(&self) -> usize {
        self.samples.len()
    }

    /// Total samples received since creation.
    pub fn received(&self) -> u64 {
        self.received
    }
}

#[cfg(all(test, feature = "rtrb"))]
mod tests {
    use super::*;

    #[test]
    fn scope_keeps_latest_window_in_order() {
        let (mut tx, mut scope) = scope_channel(4, 4);
        let block: Vec<f32> = (0..6).map(|i| i as f32).collect();
        tx.push_block(&block, &block);

        assert_eq!(scope.poll(), 6);
        let mut out = Vec::new();
        scope.snapshot(&mut out);
        assert_eq!(out, vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(scope.received(), 6);
    }

    #[test]
    fn full_ring_drops_instead_of_blocking() {
        let (mut tx, mut scope) = scope_channel(2, 1);
        tx.push_block(&[1.0, 2.0, 3.0, 4.0], &[0.0; 4]);
        assert_eq!(scope.poll(), 2);
        let mut out = Vec::new();
        scope.snapshot(&mut out);
        assert_eq!(out, vec![1.0, 2.0]);
    }

    #[test]
    fn vec_sink_collects_left() {
        let mut sink = Vec::new();
        sink.push_block(&[0.5, -0.5], &[9.0, 9.0]);
        assert_eq!(sink, vec![0.5, -0.5]);
    }
}

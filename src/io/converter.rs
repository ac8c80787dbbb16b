/// Write a planar stereo block into an interleaved device buffer.
///
/// Frame `i` of `out` starts at `i * channels`. A mono device gets the left
/// channel; with more than two channels the pair repeats (L R L R ...).
/// Frames of `out` past the end of the block are zeroed.
pub fn interleave(left: &[f32], right: &[f32], out: &mut [f32], channels: usize) {
    if channels == 0 {
        return;
    }
    let frames = left.len().min(right.len());
    for (i, frame) in out.chunks_mut(channels).enumerate() {
        if i >= frames {
            frame.fill(0.0);
            continue;
        }
        if channels == 1 {
            frame[0] = left[i];
            continue;
        }
        for (ch, s) in frame.iter_mut().enumerate() {
            *s = if ch % 2 == 0 { left[i] } else { right[i] };
        }
    }
}

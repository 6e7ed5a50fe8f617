//! Incremental JPEG frame extraction from an MJPEG byte stream.

/// JPEG start-of-image marker
const SOI: [u8; 2] = [0xFF, 0xD8];
/// JPEG end-of-image marker
const EOI: [u8; 2] = [0xFF, 0xD9];

/// Splits a raw MJPEG stream into individual JPEG frames.
///
/// Bytes are pushed in arbitrary chunks; complete frames (SOI..=EOI) are
/// returned as they become available. Garbage between frames is dropped.
#[derive(Default)]
pub struct MjpegSplitter {
    buffer: Vec<u8>,
}

impl MjpegSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of stream bytes, returning any completed frames
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Vec<u8>> {
        self.buffer.extend_from_slice(chunk);

        let mut frames = Vec::new();
        loop {
            let Some(start) = find_marker(&self.buffer, &SOI) else {
                // No frame start in sight; keep one byte in case the
                // buffer ends mid-marker.
                let keep = self.buffer.len().saturating_sub(1);
                self.buffer.drain(..keep);
                break;
            };

            let Some(end) = find_marker(&self.buffer[start + SOI.len()..], &EOI) else {
                // Incomplete frame; drop leading garbage and wait for more.
                self.buffer.drain(..start);
                break;
            };

            let frame_end = start + SOI.len() + end + EOI.len();
            frames.push(self.buffer[start..frame_end].to_vec());
            self.buffer.drain(..frame_end);
        }

        frames
    }
}

fn find_marker(haystack: &[u8], marker: &[u8; 2]) -> Option<usize> {
    haystack
        .windows(2)
        .position(|window| window == marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(payload: &[u8]) -> Vec<u8> {
        let mut frame = vec![0xFF, 0xD8];
        frame.extend_from_slice(payload);
        frame.extend_from_slice(&[0xFF, 0xD9]);
        frame
    }

    #[test]
    fn test_single_frame_in_one_chunk() {
        let mut splitter = MjpegSplitter::new();
        let frame = jpeg(&[1, 2, 3]);

        let frames = splitter.push(&frame);
        assert_eq!(frames, vec![frame]);
    }

    #[test]
    fn test_frame_split_across_chunks() {
        let mut splitter = MjpegSplitter::new();
        let frame = jpeg(&[9, 8, 7, 6]);

        let (first, second) = frame.split_at(3);
        assert!(splitter.push(first).is_empty());
        let frames = splitter.push(second);
        assert_eq!(frames, vec![frame]);
    }

    #[test]
    fn test_multiple_frames_in_one_chunk() {
        let mut splitter = MjpegSplitter::new();
        let a = jpeg(&[1]);
        let b = jpeg(&[2]);

        let mut stream = a.clone();
        stream.extend_from_slice(&b);

        let frames = splitter.push(&stream);
        assert_eq!(frames, vec![a, b]);
    }

    #[test]
    fn test_garbage_between_frames_is_dropped() {
        let mut splitter = MjpegSplitter::new();
        let frame = jpeg(&[5, 5]);

        let mut stream = vec![0x00, 0x01, 0x02];
        stream.extend_from_slice(&frame);

        let frames = splitter.push(&stream);
        assert_eq!(frames, vec![frame]);
    }
}

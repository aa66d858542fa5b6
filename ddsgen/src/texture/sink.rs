//! Destination for encoded bytes.

use std::io;

/// Receives encoded output one chunk at a time.
///
/// Encoders hand over the header and each mip level as they are produced,
/// so the whole texture never has to sit in memory. Every [`io::Write`]
/// is a sink.
pub trait ChunkSink {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()>;
}

impl<W: io::Write + ?Sized> ChunkSink for W {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.write_all(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_collects_chunks_in_order() {
        let mut out: Vec<u8> = Vec::new();
        out.write_chunk(b"DDS ").unwrap();
        out.write_chunk(&[1, 2]).unwrap();
        assert_eq!(out, b"DDS \x01\x02");
    }

    #[test]
    fn test_usable_as_trait_object() {
        let mut out = io::Cursor::new(Vec::new());
        let sink: &mut dyn ChunkSink = &mut out;
        sink.write_chunk(&[9; 3]).unwrap();
        assert_eq!(out.into_inner(), vec![9, 9, 9]);
    }
}

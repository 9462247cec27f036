// Dredge is an open source secret scanner for web archives.
// Copyright (C) 2024 Dredge ApS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Transparent streaming decompression, dispatched on magic bytes.

use std::io::{self, BufReader, Read};

use flate2::read::MultiGzDecoder;

// GZip (RFC 1952, section 2.3.1)
const MAGIC_GZIP: [u8; 2] = [0x1f, 0x8b];
// BZip2 (no formal spec exists)
const MAGIC_BZIP2: [u8; 2] = [0x42, 0x5a];
// XZ (the .xz file format, section 2.1.1.1)
const MAGIC_XZ: [u8; 6] = [0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00];
// ZStandard frame (RFC 8478, section 3.1.1)
const MAGIC_ZSTD_FRAME: [u8; 4] = [0x28, 0xb5, 0x2f, 0xfd];
// ZStandard skippable frame, trailing 3 bytes; the first byte is 0x50..=0x5f
// (RFC 8478, section 3.1.2)
const MAGIC_ZSTD_SKIPPABLE: [u8; 3] = [0x2a, 0x4d, 0x18];

/// Wrap `source` in a reader that transparently decompresses it. Inputs
/// shorter than the longest magic number pass through unchanged. The
/// returned reader owns the source; dropping it closes the stream.
pub fn reader(source: impl Read + Send + 'static) -> io::Result<Box<dyn Read + Send>> {
    let mut source = source;

    let mut magic = [0_u8; 6];
    let len = read_head(&mut source, &mut magic)?;

    let source = io::Cursor::new(magic[..len].to_vec()).chain(source);

    if len < magic.len() {
        return Ok(Box::new(source));
    }

    if magic[..2] == MAGIC_GZIP {
        // Common Crawl archives are per-record gzip members, so the decoder
        // has to keep going after the first member ends.
        Ok(Box::new(MultiGzDecoder::new(source)))
    } else if magic[..2] == MAGIC_BZIP2 {
        Ok(Box::new(bzip2::read::MultiBzDecoder::new(source)))
    } else if magic == MAGIC_XZ {
        Ok(Box::new(xz2::read::XzDecoder::new_multi_decoder(source)))
    } else if magic[..4] == MAGIC_ZSTD_FRAME {
        Ok(Box::new(zstd::stream::read::Decoder::new(source)?))
    } else if magic[0] & 0xf0 == 0x50 && magic[1..4] == MAGIC_ZSTD_SKIPPABLE {
        dictionary_reader(source)
    } else {
        Ok(Box::new(source))
    }
}

/// The `*.megawarc.warc.zstd` variant: a skippable frame holding a
/// zstd-compressed custom dictionary, prepended to the actual stream.
fn dictionary_reader(mut source: impl Read + Send + 'static) -> io::Result<Box<dyn Read + Send>> {
    // 4 magic bytes followed by the little-endian frame length
    let mut header = [0_u8; 8];
    source.read_exact(&mut header)?;

    let len = u32::from_le_bytes(header[4..8].try_into().unwrap()) as usize;

    let mut frame = vec![0_u8; len];
    source.read_exact(&mut frame)?;

    let dictionary = zstd::stream::decode_all(&frame[..])?;

    let decoder = zstd::stream::read::Decoder::with_dictionary(
        BufReader::new(source),
        &dictionary,
    )?;

    Ok(Box::new(decoder))
}

/// Read up to `head.len()` bytes, tolerating an early end of input. Returns
/// the number of bytes actually read.
fn read_head(source: &mut impl Read, head: &mut [u8]) -> io::Result<usize> {
    let mut len = 0;

    while len < head.len() {
        match source.read(&mut head[len..])? {
            0 => break,
            n => len += n,
        }
    }

    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &[u8] = b"WARC/1.0\r\nthe quick brown fox jumps over the lazy dog\n";

    fn read_all(r: Box<dyn Read + Send>) -> Vec<u8> {
        let mut r = r;
        let mut buf = Vec::new();
        r.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn passthrough() {
        assert_eq!(read_all(reader(SAMPLE).unwrap()), SAMPLE);
    }

    #[test]
    fn passthrough_short_input() {
        assert_eq!(read_all(reader(&b"ab"[..]).unwrap()), b"ab");
        assert_eq!(read_all(reader(&b""[..]).unwrap()), b"");
    }

    #[test]
    fn gzip_roundtrip() {
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(SAMPLE).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(read_all(reader(io::Cursor::new(compressed.clone())).unwrap()), SAMPLE);
    }

    #[test]
    fn multi_member_gzip() {
        let mut compressed = Vec::new();

        for chunk in [&b"first member | "[..], &b"second member"[..]] {
            let mut encoder =
                flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(chunk).unwrap();
            compressed.extend(encoder.finish().unwrap());
        }

        assert_eq!(
            read_all(reader(io::Cursor::new(compressed.clone())).unwrap()),
            b"first member | second member"
        );
    }

    #[test]
    fn bzip2_roundtrip() {
        let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
        encoder.write_all(SAMPLE).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(read_all(reader(io::Cursor::new(compressed.clone())).unwrap()), SAMPLE);
    }

    #[test]
    fn xz_roundtrip() {
        let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
        encoder.write_all(SAMPLE).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(read_all(reader(io::Cursor::new(compressed.clone())).unwrap()), SAMPLE);
    }

    #[test]
    fn zstd_roundtrip() {
        let compressed = zstd::stream::encode_all(SAMPLE, 0).unwrap();

        assert_eq!(read_all(reader(io::Cursor::new(compressed.clone())).unwrap()), SAMPLE);
    }

    #[test]
    fn concatenated_zstd_frames() {
        let mut compressed = zstd::stream::encode_all(&b"first frame | "[..], 0).unwrap();
        compressed.extend(zstd::stream::encode_all(&b"second frame"[..], 0).unwrap());

        assert_eq!(
            read_all(reader(io::Cursor::new(compressed.clone())).unwrap()),
            b"first frame | second frame"
        );
    }

    fn zstd_with_dictionary(data: &[u8], dictionary: &[u8]) -> Vec<u8> {
        // skippable frame: magic, length, zstd-compressed dictionary
        let compressed_dictionary = zstd::stream::encode_all(dictionary, 0).unwrap();

        let mut out = Vec::new();
        out.extend(0x184d2a50_u32.to_le_bytes());
        out.extend((compressed_dictionary.len() as u32).to_le_bytes());
        out.extend(&compressed_dictionary);

        let mut encoder =
            zstd::stream::write::Encoder::with_dictionary(Vec::new(), 0, dictionary).unwrap();
        encoder.write_all(data).unwrap();
        out.extend(encoder.finish().unwrap());

        out
    }

    #[test]
    fn zstd_skippable_frame_dictionary() {
        let dictionary = b"the quick brown fox jumps over the lazy dog WARC/1.0";
        let compressed = zstd_with_dictionary(SAMPLE, dictionary);

        // sanity: the stream really starts with a skippable frame
        assert_eq!(compressed[0] & 0xf0, 0x50);
        assert_eq!(&compressed[1..4], &MAGIC_ZSTD_SKIPPABLE);

        assert_eq!(read_all(reader(io::Cursor::new(compressed.clone())).unwrap()), SAMPLE);
    }
}

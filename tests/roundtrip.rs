//! End-to-end tests for the full codec pipeline.
//!
//! These verify compress -> decompress round-trips across input shapes
//! with different compression characteristics, plus the spec-level
//! properties: prefix freedom, deterministic tie-breaking, and corruption
//! detection on tampered streams.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use huffio::codebook::Codebook;
use huffio::frequency::FrequencyTable;
use huffio::tree::HuffmanTree;
use huffio::{compress_to_vec, decompress_to_vec, Error, HEADER_BYTES};

/// Generate test data with mixed compressibility: runs of one byte,
/// text-like sections from a small alphabet, and random sections.
fn generate_mixed_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let chunk_size = (size_bytes - data.len()).min(1024);
        match rng.gen_range(0..3u8) {
            0 => {
                let byte: u8 = rng.gen();
                data.extend(std::iter::repeat(byte).take(chunk_size));
            }
            1 => {
                let alphabet = b"abcdefghijklmnopqrstuvwxyz .!,\n";
                for _ in 0..chunk_size {
                    data.push(alphabet[rng.gen_range(0..alphabet.len())]);
                }
            }
            _ => {
                for _ in 0..chunk_size {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}

#[test]
fn test_round_trip_mixed_data() {
    for seed in [1, 42, 999] {
        for size in [1, 7, 100, 4096, 65536] {
            let input = generate_mixed_data(seed, size);
            let compressed = compress_to_vec(&input).unwrap();
            let restored = decompress_to_vec(&compressed).unwrap();
            assert_eq!(restored, input, "seed {seed}, size {size}");
        }
    }
}

#[test]
fn test_round_trip_empty() {
    let compressed = compress_to_vec(&[]).unwrap();
    assert!(compressed.is_empty());
    assert!(decompress_to_vec(&[]).unwrap().is_empty());
}

#[test]
fn test_single_repeated_byte() {
    // 1000 copies of one symbol: 1-bit code, 1000 bits, 125 payload bytes.
    let input = vec![0x41u8; 1000];
    let compressed = compress_to_vec(&input).unwrap();

    assert_eq!(compressed.len(), HEADER_BYTES + 125);
    assert_eq!(decompress_to_vec(&compressed).unwrap(), input);
}

#[test]
fn test_prefix_free_codes() {
    let input = generate_mixed_data(7, 10_000);
    let table = FrequencyTable::count(&input);
    let tree = HuffmanTree::build(&table).unwrap();
    let book = Codebook::from_tree(&tree);

    let codes: Vec<_> = book.codes().collect();
    assert_eq!(codes.len(), table.distinct());
    for (i, (_, a)) in codes.iter().enumerate() {
        for (b_byte, b) in codes.iter().skip(i + 1) {
            assert!(!a.is_prefix_of(b), "{a:?} prefixes code for {b_byte:#04x}");
            assert!(!b.is_prefix_of(a), "code for {b_byte:#04x} prefixes {a:?}");
        }
    }
}

#[test]
fn test_tie_break_determinism() {
    // Every symbol appears exactly four times: all tree merges are ties,
    // so the decoder only succeeds if it rebuilds the identical tree.
    let mut input = Vec::new();
    for _ in 0..4 {
        input.extend_from_slice(b"abcdefgh");
    }

    let compressed = compress_to_vec(&input).unwrap();
    assert_eq!(decompress_to_vec(&compressed).unwrap(), input);

    // Two independent compressions produce identical bytes.
    assert_eq!(compressed, compress_to_vec(&input).unwrap());
}

#[test]
fn test_all_256_symbols() {
    let mut input: Vec<u8> = (0..=255).collect();
    input.extend((0..=255).rev());

    let table = FrequencyTable::count(&input);
    assert_eq!(table.total(), input.len() as u64);

    let tree = HuffmanTree::build(&table).unwrap();
    let book = Codebook::from_tree(&tree);
    for byte in 0..=255u8 {
        assert!(book.code(byte).unwrap().len >= 1);
    }

    let compressed = compress_to_vec(&input).unwrap();
    assert_eq!(decompress_to_vec(&compressed).unwrap(), input);
}

#[test]
fn test_junk_payload_rejected() {
    // A table with two skewed symbols, followed by bits that never settle
    // on a code boundary the table's frequencies agree with.
    let mut table = FrequencyTable::new();
    for _ in 0..8 {
        table.record(b'x');
    }
    table.record(b'y');

    let mut stream = table.to_bytes();
    stream.extend_from_slice(&16u64.to_le_bytes());
    stream.extend_from_slice(&[0xFF, 0xFF]);

    assert!(matches!(
        decompress_to_vec(&stream),
        Err(Error::Malformed(_))
    ));
}

#[test]
fn test_truncated_stream_rejected() {
    let input = generate_mixed_data(3, 2000);
    let mut compressed = compress_to_vec(&input).unwrap();
    compressed.pop();

    assert!(matches!(
        decompress_to_vec(&compressed),
        Err(Error::Malformed(_))
    ));
}

#[test]
fn test_corrupted_payload_rejected() {
    // Flipping payload bits must never round-trip silently: either a
    // structural check fires or the frequency cross-check does.
    let input = b"mississippi mississippi mississippi".to_vec();
    let mut compressed = compress_to_vec(&input).unwrap();
    let target = HEADER_BYTES; // first payload byte
    compressed[target] ^= 0xFF;

    match decompress_to_vec(&compressed) {
        Err(Error::Malformed(_)) => {}
        Ok(restored) => assert_ne!(restored, input),
        Err(other) => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn test_compression_shrinks_skewed_input() {
    // Heavily skewed data should beat the 2056-byte header overhead.
    let mut input = vec![b'a'; 60_000];
    input.extend(vec![b'b'; 4_000]);

    let compressed = compress_to_vec(&input).unwrap();
    assert!(compressed.len() < input.len());
}

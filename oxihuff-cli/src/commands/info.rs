//! Info command implementation.

use oxihuff_codec::constants::{BITS_PER_INT, HUFF_TREE, PSEUDO_EOF};
use oxihuff_codec::decode::{check_magic, read_compressed_bits};
use oxihuff_codec::header::header_bits;
use oxihuff_codec::{CodeTable, read_header};
use oxihuff_core::{BitReader, BitWriter};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

#[derive(Debug, Serialize)]
struct CodeInfo {
    symbol: u16,
    label: String,
    length: usize,
    code: String,
}

#[derive(Debug, Serialize)]
struct StreamInfo {
    file: String,
    size: u64,
    magic: String,
    leaves: usize,
    depth: usize,
    header_bits: u64,
    body_bits: u64,
    original_size: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    codes: Vec<CodeInfo>,
}

fn symbol_label(symbol: u16) -> String {
    match symbol {
        PSEUDO_EOF => "EOF".to_string(),
        0x21..=0x7E => format!("'{}'", symbol as u8 as char),
        _ => format!("{:#04x}", symbol),
    }
}

pub fn cmd_info(
    file: &Path,
    show_codes: bool,
    show_tree: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = std::fs::metadata(file)?.len();
    let mut reader = BitReader::new(BufReader::new(File::open(file)?));

    check_magic(&mut reader)?;
    let tree = read_header(&mut reader)?;
    let body_start = reader.bits_read();
    let original_size = read_compressed_bits(&tree, &mut reader, &mut BitWriter::new(io::sink()))?;

    let codes = if show_codes || json {
        CodeTable::from_tree(&tree)
            .iter()
            .map(|(symbol, code)| CodeInfo {
                symbol,
                label: symbol_label(symbol),
                length: code.len(),
                code: code.to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let info = StreamInfo {
        file: file.display().to_string(),
        size,
        magic: format!("{:#010x}", HUFF_TREE),
        leaves: tree.leaf_count(),
        depth: tree.depth(),
        header_bits: header_bits(&tree),
        body_bits: reader.bits_read() - body_start,
        original_size,
        codes,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", info.file);
    println!("Size: {} bytes", info.size);
    println!("Magic: {} (tree header)", info.magic);
    println!("Original size: {} bytes", info.original_size);
    println!();
    println!("Code tree:");
    println!("  Leaves: {} (including EOF)", info.leaves);
    println!("  Depth: {}", info.depth);
    println!(
        "  Header: {} bits (+{} bits magic)",
        info.header_bits, BITS_PER_INT
    );
    println!("  Body: {} bits", info.body_bits);
    if info.original_size > 0 {
        println!(
            "  Average code length: {:.3} bits/byte",
            info.body_bits as f64 / info.original_size as f64
        );
    }

    if show_tree {
        println!();
        print!("{}", tree);
    }

    if show_codes {
        println!();
        println!("{:>6} {:>8} {:>6}  Code", "Symbol", "Label", "Length");
        println!("{}", "-".repeat(40));
        for code in &info.codes {
            println!(
                "{:>6} {:>8} {:>6}  {}",
                code.symbol, code.label, code.length, code.code
            );
        }
    }

    Ok(())
}

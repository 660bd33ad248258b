//! Basic usage example for rlpar
//!
//! Run with: cargo run --example basic_usage

use rlpar::*;

fn main() -> std::result::Result<(), Error> {
    println!("rlpar Basic Usage Example");
    println!("=========================");

    // Example 1: Scalars
    println!("\n1. Scalars:");
    {
        let cases = [
            ("byte 0x05", encode_byte(0x05)),
            ("byte 0x80", encode_byte(0x80)),
            ("string \"dog\"", encode_string("dog")),
            ("uint 1024", encode_uint(1024)),
            ("bool true", encode_bool(true)),
            ("bool false", encode_bool(false)),
            ("empty bytes", encode_bytes(&[])),
        ];

        for (name, wire) in &cases {
            println!("  {:<14} -> {:02x?}", name, wire);
        }
    }

    // Example 2: Building a nested list bottom-up
    println!("\n2. Nested List:");
    let wire = encode_array(&[
        encode_string("zw"),
        encode_array(&[encode_byte(0x04)]),
        encode_byte(0x01),
    ]);
    println!("  Encoded {} bytes: {:02x?}", wire.len(), wire);

    // Example 3: Decoding back into a value tree
    println!("\n3. Decoding:");
    {
        let value = decode(&wire)?;
        println!("  Decoded: {:?}", value);

        if let Some(items) = value.as_list() {
            println!("  First item as text: {:?}", items[0].to_utf8());
            println!("  Re-encoded matches: {}", value.encode() == wire);
        }
    }

    // Example 4: Inspecting a header without decoding the payload
    println!("\n4. Header Inspection:");
    {
        let long = encode_bytes(&[0xab; 1024]);
        let header = Header::classify(&long)?;
        println!(
            "  kind={:?}, offset={}, length={}, total={} bytes",
            header.kind,
            header.offset,
            header.length,
            header.encoded_len()
        );
    }

    // Example 5: Error reporting
    println!("\n5. Error Reporting:");
    {
        // the third element is a list whose child overruns it
        let broken = encode_array(&[
            encode_uint(1),
            encode_uint(2),
            vec![0xc2, 0x82, 0x61],
        ]);

        match decode(&broken) {
            Ok(value) => println!("  Unexpected success: {:?}", value),
            Err(err) => {
                println!("  Error: {}", err);
                println!("  Path: {:?}", err.element_path());
                println!("  Root cause: {}", err.root_cause());
            }
        }

        let trailing = [0x83, b'd', b'o', b'g', 0xff];
        match decode(&trailing) {
            Ok(value) => println!("  Unexpected success: {:?}", value),
            Err(err) => println!("  Strict: {}", err),
        }
        let lenient = DecoderConfig::default().with_trailing_bytes(true);
        println!("  Lenient: {:?}", decode_with(&trailing, lenient)?);
    }

    // Example 6: Wide lists
    println!("\n6. Wide List:");
    {
        let children: Vec<Vec<u8>> = (0..10_000u64).map(encode_uint).collect();
        let wire = encode_array(&children);

        let start = std::time::Instant::now();
        let value = decode(&wire)?;
        let elapsed = start.elapsed();

        let count = value.as_list().map_or(0, |items| items.len());
        println!(
            "  Decoded {} elements ({} bytes) in {:?}",
            count,
            wire.len(),
            elapsed
        );
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}

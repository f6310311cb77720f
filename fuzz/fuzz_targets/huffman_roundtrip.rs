#![no_main]
use huffman::{analyze, decode, encode, CodeTable, CodeTree, EncodedBits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<u8>, u16)| {
    let (input, noise, noise_len) = data;

    let freq = analyze(&input);
    let Some(tree) = CodeTree::build(&freq) else {
        return;
    };
    let table = CodeTable::generate(&tree);
    let bits = encode(&input, &table).unwrap();
    let output = decode(&bits, &tree, Some(input.len())).unwrap();
    assert_eq!(input, output);

    // Arbitrary bits must decode or fail cleanly, never panic.
    if let Some(garbage) = EncodedBits::from_bytes(&noise, (noise_len as usize).min(noise.len() * 8)) {
        let _ = decode(&garbage, &tree, None);
        let _ = decode(&garbage, &tree, Some(input.len()));
    }
});

use huffman::{analyze, decode, encode, CodeTable, CodeTree};

fn main() {
    let input = (0..100_000u64)
        .map(|i| b"etaoinshrdlu"[(i * i % 97 % 12) as usize])
        .collect::<Vec<u8>>();

    for _ in 0..200 {
        let freq = analyze(&input);
        let Some(tree) = CodeTree::build(&freq) else {
            return;
        };
        let table = CodeTable::generate(&tree);
        let bits = encode(&input, &table).unwrap();
        let out = decode(&bits, &tree, Some(input.len())).unwrap();
        assert_eq!(out.len(), input.len());
    }
}

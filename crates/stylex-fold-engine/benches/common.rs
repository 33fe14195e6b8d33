// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_stylex_source(blocks: usize, keys_per_block: usize) -> String {
    let mut content = String::from("import * as stylex from '@stylexjs/stylex';\n\n");

    for block in 0..blocks {
        content.push_str(&format!("const styles{block} = stylex.create({{\n"));
        for key in 0..keys_per_block {
            content.push_str(&format!("  key{key}: {{\n"));
            content.push_str("    color: 'red',\n");
            content.push_str("    ':hover': {\n      color: 'blue',\n    },\n");
            content.push_str("  },\n");
            content.push_str(&format!("  inline{key}: {{ opacity: 0.5 }},\n\n"));
        }
        content.push_str("});\n\n");
    }

    content
}

// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_talk(sections: usize) -> String {
    let mut doc = String::new();
    for s in 0..sections {
        doc.push_str(&format!("# Section {s}\n\n"));
        doc.push_str(
            "Opening words with `inline code` and **bold text**. A second sentence follows. \
             And a third one that runs on for quite a while before it finally stops.\n\n",
        );
        doc.push_str("Points to remember:\n\n");
        for i in 0..12 {
            doc.push_str(&format!("- point {i} with a short explanation\n"));
        }
        doc.push_str("\n[Bible: John 3:16-17]\n\n> A quoted line.\n> Another quoted line.\n\n");
        doc.push_str("```\nfn example() {}\n```\n\n");
    }
    doc
}

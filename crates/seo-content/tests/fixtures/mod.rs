#![allow(dead_code)]

/// Prepend a `---` frontmatter block built from `fields` to `body`.
pub fn with_frontmatter(fields: &[(&str, &str)], body: &str) -> String {
    let mut doc = String::from("---\n");
    for (key, value) in fields {
        doc.push_str(&format!("{}: {}\n", key, value));
    }
    doc.push_str("---\n\n");
    doc.push_str(body);
    doc
}

/// `word` repeated `count` times, separated by single spaces.
pub fn repeat_word(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}

/// Space-separated prose cycling through a fixed vocabulary until it is at
/// least `min_chars` long.
pub fn prose(min_chars: usize) -> String {
    const VOCAB: &[&str] = &[
        "affiliate", "members", "earn", "commission", "on", "every", "referral", "and", "tier",
        "upgrades", "unlock", "higher", "rates", "for", "active", "partners",
    ];
    let mut out = String::new();
    let mut i = 0;
    while out.len() < min_chars {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(VOCAB[i % VOCAB.len()]);
        i += 1;
    }
    out
}

/// A blog post mixing HTML, Markdown and a frontmatter block.
pub fn mixed_post() -> String {
    with_frontmatter(
        &[("title", "Panduan Kopi"), ("image", "/images/placeholder.png")],
        "# Panduan Kopi\n\n\
         <p>Kopi <strong>Gayo</strong> dari Aceh &amp; kopi Toraja.</p>\n\n\
         ![biji kopi](https://cdn.example.com/beans.jpg)\n\n\
         - roasting ringan\n\
         - roasting gelap\n\n\
         Baca [panduan lengkap](https://example.com/kopi) untuk kopi.",
    )
}

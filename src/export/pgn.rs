/// Movetext with numbered move pairs, e.g. `1. e4 e5 2. Nf3`.
pub fn pgn(sans: &[String]) -> String {
    sans.chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect::<Vec<String>>()
        .join(" ")
}

/// one study chapter with an empty tag section
pub fn chapter(sans: &[String]) -> String {
    format!("[]\n\n{}", pgn(sans))
}

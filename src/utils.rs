/// Greedy word wrap to lines of at most `width` characters.
///
/// Whitespace runs collapse to single spaces. Hyphenated words may break after
/// a hyphen, and words longer than `width` are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        for (i, piece) in hyphen_pieces(word).into_iter().enumerate() {
            // Pieces of one hyphenated word join without a space.
            let gap = if i == 0 { 1 } else { 0 };
            let mut piece = piece;

            // Long pieces fill the current line first, then continue on fresh ones.
            while piece.len() > width {
                let room = if line_len == 0 { width } else { width.saturating_sub(line_len + gap) };
                if room == 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                    continue;
                }
                if line_len > 0 && gap == 1 {
                    line.push(' ');
                }
                line.extend(piece.drain(..room));
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }

            if piece.is_empty() {
                continue;
            }
            if line_len > 0 && line_len + gap + piece.len() > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 && gap == 1 {
                line.push(' ');
                line_len += 1;
            }
            line_len += piece.len();
            line.extend(piece);
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Splits a word after each hyphen that sits between two letters or digits.
fn hyphen_pieces(word: &str) -> Vec<Vec<char>> {
    let chars: Vec<char> = word.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;
    for i in 1..chars.len().saturating_sub(1) {
        if chars[i] == '-' && chars[i - 1].is_alphanumeric() && chars[i + 1].is_alphanumeric() {
            pieces.push(chars[start..=i].to_vec());
            start = i + 1;
        }
    }
    pieces.push(chars[start..].to_vec());
    pieces
}

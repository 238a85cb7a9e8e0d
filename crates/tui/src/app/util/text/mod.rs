use unicode_width::UnicodeWidthChar;

pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0).max(1)
}

pub fn visual_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in line.split(' ') {
        let word_width = visual_width(word);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        // Words wider than the line are split by character.
        for ch in word.chars() {
            let ch_width = char_width(ch);
            if current_width + ch_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }
    lines.push(current);
    lines
}

pub fn truncate_to_width(text: &str, width: usize) -> String {
    if visual_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    if width <= 3 {
        return ".".repeat(width);
    }

    let target = width - 3;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > target {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::{truncate_to_width, visual_width, wrap_line};

    #[test]
    fn wrap_line_breaks_on_spaces() {
        assert_eq!(
            wrap_line("Send sound to the TV", 10),
            vec!["Send sound", "to the TV"]
        );
    }

    #[test]
    fn wrap_line_splits_long_words() {
        assert_eq!(wrap_line("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_line_zero_width_is_empty() {
        assert!(wrap_line("anything", 0).is_empty());
    }

    #[test]
    fn truncate_respects_wide_chars() {
        let truncated = truncate_to_width("日本語キーボード", 9);
        assert!(visual_width(&truncated) <= 9);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_to_width("Audio", 9), "Audio");
        assert_eq!(truncate_to_width("Overclocking", 2), "..");
    }
}

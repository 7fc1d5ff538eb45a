//! Line-preserving text chunking
//!
//! Limits are counted in characters, not bytes, since that is what message
//! sinks enforce.

/// Split `text` into trimmed chunks of at most `max_chars` characters
///
/// A chunk ends at the last line break inside the window. Only a single line
/// longer than the window is cut mid-line. Chunks that are empty after
/// trimming are dropped.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        let window_end = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let end = if window_end < rest.len() {
            match rest[..window_end].rfind('\n') {
                Some(newline) if newline > 0 => newline,
                _ => window_end,
            }
        } else {
            window_end
        };

        let chunk = rest[..end].trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        rest = rest[end..].trim_start();
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_text(count: usize, width: usize) -> String {
        (0..count)
            .map(|i| {
                let label = format!("line {:03} ", i);
                format!("{}{}", label, "x".repeat(width - label.len()))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_short_text_single_chunk() {
        assert_eq!(split_chunks("hello\nworld", 1900), vec!["hello\nworld"]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(split_chunks("", 1900).is_empty());
        assert!(split_chunks("  \n\n \t\n", 1900).is_empty());
    }

    #[test]
    fn test_trims_each_chunk() {
        assert_eq!(split_chunks("\n\n  hello  \n\n", 1900), vec!["hello"]);
    }

    #[test]
    fn test_report_of_5000_chars_gives_three_chunks() {
        // 62 lines of 79 chars plus newlines: 4959 characters
        let text = lines_text(62, 79);
        assert!(text.chars().count() > 4900);

        let chunks = split_chunks(&text, 1900);
        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 1900);
            assert!(chunk.lines().all(|l| l.len() == 79), "line was split");
        }
    }

    #[test]
    fn test_chunks_reconstruct_trimmed_text() {
        let text = lines_text(40, 50);
        let chunks = split_chunks(&text, 300);
        assert!(chunks.len() > 1);
        assert_eq!(chunks.join("\n"), text.trim());
    }

    #[test]
    fn test_no_chunk_exceeds_limit() {
        let text = lines_text(30, 37);
        for limit in [40, 64, 100, 333, 1000] {
            for chunk in split_chunks(&text, limit) {
                assert!(chunk.chars().count() <= limit, "limit {}", limit);
            }
        }
    }

    #[test]
    fn test_long_line_is_hard_split() {
        let text = "a".repeat(25);
        let chunks = split_chunks(&text, 10);
        assert_eq!(chunks, vec!["a".repeat(10), "a".repeat(10), "a".repeat(5)]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Each arrow is 3 bytes in UTF-8
        let text = format!("{}\n{}", "→".repeat(8), "→".repeat(8));
        let chunks = split_chunks(&text, 10);
        assert_eq!(chunks, vec!["→".repeat(8), "→".repeat(8)]);
    }

    #[test]
    fn test_blank_region_between_lines_is_skipped() {
        let text = format!("{}\n{}\n{}", "a".repeat(5), " ".repeat(30), "b".repeat(5));
        let chunks = split_chunks(&text, 8);
        assert_eq!(chunks, vec!["a".repeat(5), "b".repeat(5)]);
    }
}

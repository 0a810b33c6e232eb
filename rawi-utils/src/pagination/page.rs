//! Whitespace-preserving text wrapping for embed pages.

/// Split `text` into pages of at most `limit` characters, breaking only on
/// whitespace.
///
/// Words are never split: a single word longer than `limit` gets a page of
/// its own. Whitespace runs collapse to single spaces. Always returns at
/// least one page so callers can render page 1 unconditionally.
pub fn wrap_pages(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut pages: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0_usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= limit {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            pages.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }

    if pages.is_empty() {
        pages.push(String::new());
    }

    pages
}

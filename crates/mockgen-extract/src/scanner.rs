use std::ops::Range;

/// Find innermost brace blocks in `text`.
///
/// A block is a `{ ... }` span that contains no other brace outside string
/// literals and comments. Returned ranges include both braces and are in
/// source order. Braces inside `"..."`, `'...'` and `` `...` `` literals and
/// inside `//` or `/* */` comments are ignored.
pub fn scan_blocks(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut blocks = Vec::new();
    let mut open: Option<usize> = None;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'"' | b'\'' | b'`' => {
                idx = skip_string(bytes, idx);
                continue;
            }
            b'/' if bytes.get(idx + 1) == Some(&b'/') => {
                idx = skip_line_comment(bytes, idx);
                continue;
            }
            b'/' if bytes.get(idx + 1) == Some(&b'*') => {
                idx = skip_block_comment(bytes, idx);
                continue;
            }
            b'{' => open = Some(idx),
            b'}' => {
                if let Some(start) = open.take() {
                    blocks.push(start..idx + 1);
                }
            }
            _ => {}
        }
        idx += 1;
    }

    blocks
}

/// Returns the index just past the closing quote, or the end of input when
/// the literal is unterminated.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut idx = start + 1;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => idx += 2,
            byte if byte == quote => return idx + 1,
            _ => idx += 1,
        }
    }
    bytes.len()
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&byte| byte == b'\n')
        .map(|offset| start + offset + 1)
        .unwrap_or(bytes.len())
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start + 2..]
        .windows(2)
        .position(|window| window == b"*/")
        .map(|offset| start + 2 + offset + 2)
        .unwrap_or(bytes.len())
}

/// Split text into lines ending at `\n`, `\r` or `\r\n`
///
/// A trailing terminator does not start an extra empty line, so `""` has no
/// lines and `"a\n"` has one.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(|c| c == '\n' || c == '\r') {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

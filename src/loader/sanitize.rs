const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";
/// Ends the current section after `]]` and opens a new one before `>`.
const CDATA_CLOSE_SPLIT: &str = "]]]]><![CDATA[>";

/// Remove control characters that are invalid in an XML payload. Newline,
/// carriage return and tab are kept.
pub fn strip_control_chars(content: &str) -> String {
    content
        .chars()
        .filter(|&c| c as u32 >= 32 || matches!(c, '\n' | '\r' | '\t'))
        .collect()
}

/// Wrap `content` in a CDATA envelope. A literal `]]>` in the content is
/// split across two sections so it cannot terminate the envelope early.
pub fn wrap_cdata(content: &str) -> String {
    let escaped = content.replace(CDATA_CLOSE, CDATA_CLOSE_SPLIT);
    let mut wrapped = String::with_capacity(escaped.len() + CDATA_OPEN.len() + CDATA_CLOSE.len());
    wrapped.push_str(CDATA_OPEN);
    wrapped.push_str(&escaped);
    wrapped.push_str(CDATA_CLOSE);
    wrapped
}

pub fn sanitize(content: &str) -> String {
    wrap_cdata(&strip_control_chars(content))
}

//! Response rendering for the command-line tool.

use serde::de::IgnoredAny;

use crate::error_handling::DecodeError;

const INDENT: &[u8] = b"\t";

/// Renders a response body for display.
///
/// In raw mode the bytes are passed through unmodified. Otherwise the JSON is
/// re-indented with tabs. Tokens are copied as sent, so key order, duplicate
/// keys and number text are all preserved. A trailing newline is always
/// appended.
///
/// # Errors
///
/// Returns `DecodeError::Json` if the body is not valid JSON (pretty mode only).
pub fn render_output(data: &[u8], raw: bool) -> Result<Vec<u8>, DecodeError> {
    let mut out = if raw {
        data.to_vec()
    } else {
        serde_json::from_slice::<IgnoredAny>(data).map_err(DecodeError::Json)?;
        indent(data)
    };
    out.push(b'\n');
    Ok(out)
}

/// Re-indents a valid JSON document, one element per line.
fn indent(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    // Set after `{` or `[` until we know whether the container is empty
    let mut open = false;

    for &b in data {
        if in_string {
            out.push(b);
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
            continue;
        }
        if open && !matches!(b, b'}' | b']') {
            open = false;
            depth += 1;
            newline(&mut out, depth);
        }
        match b {
            b'"' => {
                in_string = true;
                out.push(b);
            }
            b'{' | b'[' => {
                out.push(b);
                open = true;
            }
            b',' => {
                out.push(b);
                newline(&mut out, depth);
            }
            b':' => out.extend_from_slice(b": "),
            b'}' | b']' => {
                if open {
                    open = false;
                } else {
                    depth = depth.saturating_sub(1);
                    newline(&mut out, depth);
                }
                out.push(b);
            }
            _ => out.push(b),
        }
    }
    out
}

fn newline(out: &mut Vec<u8>, depth: usize) {
    out.push(b'\n');
    for _ in 0..depth {
        out.extend_from_slice(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_raw_passes_bytes_through() {
        let out = render_output(b"{\"status\":0}", true).unwrap();
        assert_eq!(out, b"{\"status\":0}\n");

        // Raw mode doesn't care about validity
        let out = render_output(b"not json", true).unwrap();
        assert_eq!(out, b"not json\n");
    }

    #[test]
    fn test_render_pretty_uses_tabs_and_keeps_order() {
        let out = render_output(br#"{"status":"0","b":1,"a":[true,null]}"#, false).unwrap();
        let expected = "{\n\t\"status\": \"0\",\n\t\"b\": 1,\n\t\"a\": [\n\t\ttrue,\n\t\tnull\n\t]\n}\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_render_pretty_keeps_tokens_as_sent() {
        let out = render_output(
            br#"{"big":123456789012345678901234567890,"f":1.10,"e":1e3,"d":1,"d":2}"#,
            false,
        )
        .unwrap();
        let expected = "{\n\t\"big\": 123456789012345678901234567890,\n\t\"f\": 1.10,\n\t\"e\": 1e3,\n\t\"d\": 1,\n\t\"d\": 2\n}\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_render_pretty_normalizes_whitespace() {
        let input = b" {\n  \"a\" : { } ,\"b\":[ ],\r\n \"s\":\"x, y: {\\\"z\\\"} [\\\\]\"} ";
        let out = render_output(input, false).unwrap();
        let expected = "{\n\t\"a\": {},\n\t\"b\": [],\n\t\"s\": \"x, y: {\\\"z\\\"} [\\\\]\"\n}\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_render_pretty_scalar_body() {
        assert_eq!(render_output(b" 42 ", false).unwrap(), b"42\n");
    }

    #[test]
    fn test_render_pretty_rejects_invalid_json() {
        assert!(matches!(
            render_output(b"<html>", false),
            Err(DecodeError::Json(_))
        ));
        assert!(render_output(b"", false).is_err());
        assert!(render_output(br#"{"a":1}}"#, false).is_err());
    }
}

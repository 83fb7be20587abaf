// src/exec/command_line.rs

//! POSIX-safe rendering of an [`Invocation`] for logs and `--dry-run`.

use std::ffi::OsStr;

use crate::job::Invocation;

/// Quote `s` for a POSIX shell. Strings made only of safe characters are
/// returned as-is.
pub fn escape<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    if s.is_empty() {
        return "''".to_string();
    }
    if s.bytes().all(|b| {
        matches!(b,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' |
            b'_' | b'-' | b'.' | b'/' | b':' | b'@' | b'%' | b'='
        )
    }) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\"'\"'");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

fn escape_os(s: &OsStr) -> String {
    escape(s.to_string_lossy())
}

/// `program arg1 arg2 ...`, each word escaped.
pub fn render(invocation: &Invocation) -> String {
    let mut words = Vec::with_capacity(invocation.args.len() + 1);
    words.push(escape(&invocation.program));
    words.extend(invocation.args.iter().map(|a| escape_os(a)));
    words.join(" ")
}

/// Like [`render`], prefixed with `cd <dir> &&` when the tool runs from its
/// own directory.
pub fn render_with_cwd(invocation: &Invocation) -> String {
    match &invocation.cwd {
        Some(dir) => format!(
            "cd {} && {}",
            escape(dir.to_string_lossy()),
            render(invocation)
        ),
        None => render(invocation),
    }
}

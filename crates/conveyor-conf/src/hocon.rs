//! Line-oriented writer for the HOCON-like config syntax.
//!
//! Keys are trusted and written verbatim; values go through [`quote`] so
//! text containing substitution or structural characters survives the
//! downstream parser. Array appends use the `key = ${key} [ .. ]`
//! self-reference idiom, which extends an existing array-valued key
//! instead of replacing it.

/// Characters that force a value into quotes: substitution, structural
/// and comment tokens of the target syntax.
const FORBIDDEN_CHARS: &[char] = &[
    '$', '"', '{', '}', '[', ']', ':', '=', ',', '+', '#', '`', '^', '?', '!', '@', '*', '&', '\\',
];

/// Quotes a value when it contains syntactically significant characters.
///
/// Quoted values get embedded backslashes doubled; everything else is left
/// untouched and the downstream parser reads the text back verbatim.
pub fn quote(value: &str) -> String {
    if value.contains(FORBIDDEN_CHARS) {
        format!("\"{}\"", value.replace('\\', "\\\\"))
    } else {
        value.to_string()
    }
}

/// Accumulates the generated config document.
#[derive(Debug, Default)]
pub struct HoconWriter {
    buf: String,
}

impl HoconWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn comment(&mut self, text: &str) {
        self.buf.push_str("// ");
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// An empty `//` line, for paragraph breaks inside comment blocks.
    pub fn comment_break(&mut self) {
        self.buf.push_str("//\n");
    }

    pub fn include_required(&mut self, path: &str) {
        self.buf
            .push_str(&format!("include required(\"{path}\")\n"));
    }

    /// `key = value`, value quoted as needed.
    pub fn set(&mut self, key: &str, value: &str) {
        self.buf.push_str(&format!("{key} = {}\n", quote(value)));
    }

    /// `key = value` with the value written verbatim. For values that carry
    /// substitutions like `${app.fsname}` which quoting would deaden.
    pub fn set_raw(&mut self, key: &str, value: &str) {
        self.buf.push_str(&format!("{key} = {value}\n"));
    }

    /// `key += value`, the single-element append idiom.
    pub fn append(&mut self, key: &str, value: &str) {
        self.buf.push_str(&format!("{key} += {}\n", quote(value)));
    }

    /// `key = ${key} [ a, b, c ]` — append several elements on one line.
    pub fn append_array<I, S>(&mut self, key: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined: Vec<String> = items.into_iter().map(|s| quote(s.as_ref())).collect();
        self.buf
            .push_str(&format!("{key} = ${{{key}}} [ {} ]\n", joined.join(", ")));
    }

    /// Multi-line form of the append idiom, one indented element per line.
    pub fn append_array_block<I, S>(&mut self, key: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buf.push_str(&format!("{key} = ${{{key}}} [\n"));
        for item in items {
            self.buf.push_str(&format!("    {}\n", quote(item.as_ref())));
        }
        self.buf.push_str("]\n");
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

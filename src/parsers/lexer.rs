//! Single-pass import/export lexer
//!
//! Reads one source file code-point by code-point and extracts its imports,
//! exports and re-exports without building a syntax tree. Regex falls over
//! on comments and string context, and a full parser is far more machinery
//! than import extraction needs, so this sits in between: a hand-rolled
//! scanner that understands just enough of the language.
//!
//! The scanner is permissive by design: identifier characters are anything
//! outside a small terminator set, so syntactically invalid JavaScript can
//! still tokenize. Conditions that would silently corrupt the graph
//! (non-terminating strings, imports that never reach their path) fail the
//! whole file instead of returning a partial token.

use crate::error::{DependorError, Result};
use crate::models::token::FileToken;
use crate::utils::paths::{is_relative_import, join_import_path, parent_dir, to_path_key};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const EOF: char = '\0';

/// Keywords that introduce an exported declaration rather than name it
const DECLARATION_KEYWORDS: [&str; 7] =
    ["const", "let", "var", "function", "function*", "class", "type"];

/// Single-file scanner producing a [`FileToken`]
pub struct Lexer {
    chars: Vec<char>,
    /// Index of the code point in `ch`
    position: usize,
    /// Index of the next code point to read
    read_position: usize,
    ch: char,
    imports: HashMap<String, Vec<String>>,
    exports: Vec<String>,
    re_exports: Vec<String>,
    re_export_map: HashMap<String, String>,
    call_dir: String,
    file_path: String,
}

impl Lexer {
    /// Create a lexer over `source`, using `file_path` to join relative
    /// import strings against the file's directory
    pub fn new(source: &str, file_path: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let mut lexer = Self {
            chars: source.chars().collect(),
            position: 0,
            read_position: 0,
            ch: EOF,
            imports: HashMap::new(),
            exports: Vec::new(),
            re_exports: Vec::new(),
            re_export_map: HashMap::new(),
            call_dir: parent_dir(&file_path),
            file_path,
        };
        lexer.read_char();
        lexer
    }

    /// Create a lexer by reading `path` from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|source| DependorError::file_read_error(path, source))?;
        Ok(Self::new(&source, to_path_key(path)))
    }

    /// Scan the whole file and return its token.
    ///
    /// Never returns a partial token: any fatal condition drops the file.
    pub fn tokenize(mut self) -> Result<FileToken> {
        while self.ch != EOF {
            match self.ch {
                'i' | 'r' | 'e' => match self.read_identifier().as_str() {
                    "import" => self.read_import()?,
                    "require" => self.read_require()?,
                    "export" => self.read_export()?,
                    _ => {}
                },
                '/' => self.skip_comment(true)?,
                _ => self.read_char(),
            }
        }

        Ok(FileToken {
            file_path: self.file_path,
            imports: self.imports,
            exports: self.exports,
            re_exports: self.re_exports,
            re_export_map: self.re_export_map,
        })
    }

    /// Import clause: collect identifiers until the path string.
    ///
    /// Identifiers before the first `{` are default-import names and are
    /// recorded as `"default"`; `*` (a namespace import) is kept verbatim.
    /// `as` aliases keep the original name by skipping the alias. `)` ends a
    /// dynamic `import(expr)` that has no literal path.
    fn read_import(&mut self) -> Result<()> {
        let mut identifiers: Vec<String> = Vec::new();
        let mut in_braces = false;
        let mut skip_next = false;

        while self.ch != EOF {
            match self.ch {
                '{' => {
                    in_braces = true;
                    self.read_char();
                }
                '}' => {
                    in_braces = false;
                    self.read_char();
                }
                ')' => return Ok(()),
                '/' => self.skip_comment(false)?,
                c if is_quote(c) => {
                    let path = self.read_string()?;
                    self.imports.entry(path).or_default().extend(identifiers);
                    return Ok(());
                }
                c if is_identifier_end(c) => self.read_char(),
                _ => {
                    let ident = self.read_identifier();
                    match ident.as_str() {
                        "as" => skip_next = true,
                        "from" | "type" => {}
                        _ => {
                            if skip_next {
                                skip_next = false;
                            } else if in_braces || ident == "*" {
                                identifiers.push(ident);
                            } else {
                                identifiers.push("default".to_string());
                            }
                        }
                    }
                }
            }
        }

        Err(self.syntax_error("non-terminating import statement"))
    }

    /// Require clause: `require ( "path" )` with comments allowed anywhere.
    /// A `)` before the quote is a dynamic `require(expr)` and records
    /// nothing. The recorded path carries no identifiers.
    fn read_require(&mut self) -> Result<()> {
        self.skip_clause_trivia()?;
        if self.ch != '(' {
            // `require` used as a plain identifier, not a call
            return Ok(());
        }
        self.read_char();

        while self.ch != EOF {
            match self.ch {
                ')' => return Ok(()),
                '/' => self.skip_comment(false)?,
                c if is_quote(c) => {
                    let path = self.read_string()?;
                    self.imports.entry(path).or_default();
                    return Ok(());
                }
                _ => self.read_char(),
            }
        }

        Err(self.syntax_error("non-terminating require statement"))
    }

    /// Export clause: collect the exported identifiers, then decide between
    /// a regular export and a re-export.
    ///
    /// `as` and `:` (destructuring rename) make the next identifier replace
    /// the previous one, so the alias wins: `export { foo as bar }` records
    /// `bar`. A bare `default` outside braces is a default export. `from`
    /// (either mid-clause or after the closing `}`) switches to re-export
    /// handling.
    fn read_export(&mut self) -> Result<()> {
        let mut identifiers: Vec<String> = Vec::new();
        let mut seen_left_brace = false;
        let mut overwrite_last = false;
        let mut is_re_export = false;

        while self.ch != EOF {
            match self.ch {
                ';' | '(' | '=' => break,
                '{' => {
                    seen_left_brace = true;
                    self.read_char();
                }
                '}' => {
                    self.read_char();
                    if self.next_token_is_from()? {
                        is_re_export = true;
                    }
                    break;
                }
                ':' => {
                    overwrite_last = true;
                    self.read_char();
                }
                '/' => self.skip_comment(false)?,
                c if is_quote(c) => {
                    return Err(self.syntax_error("unexpected string in export statement"));
                }
                c if is_identifier_end(c) => self.read_char(),
                _ => {
                    let ident = self.read_identifier();
                    match ident.as_str() {
                        "as" => overwrite_last = true,
                        "from" => {
                            is_re_export = true;
                        }
                        "default" if !seen_left_brace => {
                            self.exports.push("default".to_string());
                            return Ok(());
                        }
                        "interface" => {
                            self.read_interface_export(&mut identifiers, &mut overwrite_last)?;
                            self.exports.extend(identifiers);
                            return Ok(());
                        }
                        _ => {
                            if !DECLARATION_KEYWORDS.contains(&ident.as_str()) {
                                push_export_identifier(
                                    &mut identifiers,
                                    ident,
                                    &mut overwrite_last,
                                );
                            }
                        }
                    }
                    if is_re_export {
                        break;
                    }
                }
            }
        }

        if !is_re_export {
            self.exports.extend(identifiers);
            return Ok(());
        }
        self.read_re_export(identifiers)
    }

    /// `export interface Name extends ... {`: the interface name is the only
    /// exported identifier. Everything up to the body is consumed, reading
    /// string-literal types as strings so quotes inside `extends` clauses do
    /// not trip the export-clause quote rule.
    fn read_interface_export(
        &mut self,
        identifiers: &mut Vec<String>,
        overwrite_last: &mut bool,
    ) -> Result<()> {
        self.skip_clause_trivia()?;
        let ident = self.read_identifier();
        if !ident.is_empty() {
            push_export_identifier(identifiers, ident, overwrite_last);
        }

        while !matches!(self.ch, EOF | '{' | ';' | '=') {
            match self.ch {
                '/' => self.skip_comment(false)?,
                c if is_quote(c) => {
                    self.read_string()?;
                }
                _ => self.read_char(),
            }
        }
        Ok(())
    }

    /// Re-export dispatch: require the quoted source path, then fill
    /// `re_exports` and `re_export_map`
    fn read_re_export(&mut self, identifiers: Vec<String>) -> Result<()> {
        loop {
            match self.ch {
                EOF | ';' | ')' => {
                    return Err(self.syntax_error("re-export is missing its source path"));
                }
                '/' => self.skip_comment(false)?,
                c if is_quote(c) => break,
                _ => self.read_char(),
            }
        }

        let path = self.read_string()?;
        if identifiers.is_empty() {
            return Err(self.syntax_error("re-export carries no identifiers"));
        }

        self.re_exports.push(path.clone());
        for ident in identifiers {
            if ident == "*" {
                self.re_export_map.insert(path.clone(), "*".to_string());
            } else {
                self.re_export_map.insert(ident, path.clone());
            }
        }
        Ok(())
    }

    /// Peek past whitespace and comments for the `from` keyword. The scan
    /// position is restored when the next token is anything else.
    fn next_token_is_from(&mut self) -> Result<bool> {
        let saved = (self.position, self.read_position, self.ch);
        loop {
            self.skip_whitespace();
            if self.ch == '/' && matches!(self.peek_char(), '/' | '*') {
                self.skip_comment(false)?;
            } else {
                break;
            }
        }

        if self.ch == 'f' && self.read_identifier() == "from" {
            return Ok(true);
        }

        (self.position, self.read_position, self.ch) = saved;
        Ok(false)
    }

    /// The maximal identifier starting at the current code point
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.ch != EOF && !is_identifier_end(self.ch) && !is_quote(self.ch) {
            self.read_char();
        }
        self.chars[start..self.position].iter().collect()
    }

    /// The verbatim contents between matched quotes, with relative paths
    /// joined against the file's directory. The closing quote is consumed.
    fn read_string(&mut self) -> Result<String> {
        self.read_char();
        let start = self.position;
        while self.ch != EOF && !is_quote(self.ch) {
            self.read_char();
        }

        if self.ch == EOF {
            return Err(self.syntax_error("non-terminating string"));
        }

        let raw: String = self.chars[start..self.position].iter().collect();
        self.read_char();

        if is_relative_import(&raw) {
            Ok(join_import_path(&self.call_dir, &raw))
        } else {
            Ok(raw)
        }
    }

    /// Skip a comment starting at the current `/`. At the top level a lone
    /// slash is regex or division and is stepped over; inside a clause it is
    /// a syntax error.
    fn skip_comment(&mut self, top_level: bool) -> Result<()> {
        match self.peek_char() {
            '/' => {
                self.skip_single_line_comment();
                Ok(())
            }
            '*' => {
                self.skip_multi_line_comment();
                Ok(())
            }
            _ => {
                if top_level {
                    self.read_char();
                    Ok(())
                } else {
                    Err(self.syntax_error(
                        "unexpected '/' that is neither a comment nor part of a string",
                    ))
                }
            }
        }
    }

    fn skip_single_line_comment(&mut self) {
        while self.ch != EOF && self.ch != '\n' && self.ch != '\r' {
            self.read_char();
        }
    }

    fn skip_multi_line_comment(&mut self) {
        self.read_char();
        self.read_char();
        while self.ch != EOF {
            if self.ch == '*' && self.peek_char() == '/' {
                self.read_char();
                self.read_char();
                return;
            }
            self.read_char();
        }
    }

    /// Skip whitespace and any comments between clause tokens
    fn skip_clause_trivia(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            if self.ch == '/' {
                self.skip_comment(false)?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_whitespace() {
            self.read_char();
        }
    }

    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.chars.len() {
            EOF
        } else {
            self.chars[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> char {
        self.chars.get(self.read_position).copied().unwrap_or(EOF)
    }

    fn syntax_error(&self, message: &str) -> DependorError {
        DependorError::syntax_error(&self.file_path, message)
    }
}

/// Append `ident`, or replace the last collected identifier when an alias
/// (`as`) or destructuring rename (`:`) is pending
fn push_export_identifier(identifiers: &mut Vec<String>, ident: String, overwrite_last: &mut bool) {
    if *overwrite_last && !identifiers.is_empty() {
        let last = identifiers.len() - 1;
        identifiers[last] = ident;
    } else {
        identifiers.push(ident);
    }
    *overwrite_last = false;
}

/// Characters ending an identifier run. `)` and `=` are included so that
/// dynamic `import(expr)` and glued initializers (`export const a=5`)
/// terminate where the clause rules expect them to.
fn is_identifier_end(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            '{' | '}' | ';' | ',' | '(' | ')' | '/' | '[' | ']' | ':' | '='
        )
}

fn is_quote(ch: char) -> bool {
    matches!(ch, '\'' | '"' | '`')
}

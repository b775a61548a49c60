//! Line input sources for the interactive menu.

use std::io::BufRead;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// A source of input lines. `None` means the input is exhausted.
pub trait LineInput {
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Interactive terminal input with line editing and in-session history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    return Some(line);
                }
                Err(ReadlineError::Interrupted) => {
                    eprintln!("  (Ctrl+C) Choose 9 to exit.");
                }
                Err(ReadlineError::Eof) => return None,
                Err(err) => {
                    log::error!("readline failed: {err}");
                    return None;
                }
            }
        }
    }
}

/// Input from any buffered reader (piped stdin, tests). Prompts are not echoed.
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineInput for ReaderInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                log::error!("failed to read input: {err}");
                None
            }
        }
    }
}

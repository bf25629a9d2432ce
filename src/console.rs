//! Terminal I/O collaborator.
//!
//! The session only needs line-based prompts plus typed reads; everything is
//! behind the [`Console`] trait so tests can drive a session from a script.

use std::io::{self, BufRead, Write};

use crate::Price;

/// Line-based console the session reads from and writes to.
pub trait Console {
    /// Write one line of output.
    fn print(&mut self, line: &str);

    /// Show a prompt (no trailing newline) and read one line of input.
    fn read_line(&mut self, prompt: &str) -> String;

    /// Prompt for an integer, re-reading in a loop until one parses.
    fn read_u32(&mut self, prompt: &str) -> u32 {
        loop {
            let line = self.read_line(prompt);
            match line.trim().parse() {
                Ok(n) => return n,
                Err(_) => self.print("Invalid number. Please try again."),
            }
        }
    }

    /// Prompt for a price, re-reading in a loop until a non-negative number
    /// parses.
    fn read_price(&mut self, prompt: &str) -> Price {
        loop {
            let line = self.read_line(prompt);
            match line.trim().parse() {
                Ok(price) => return price,
                Err(e) => self.print(&format!("Invalid price ({e}). Please try again.")),
            }
        }
    }
}

/// Console backed by stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn print(&mut self, line: &str) {
        println!("{line}");
    }

    fn read_line(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        io::stdout().flush().expect("failed to flush stdout");

        let mut buf = String::new();
        let bytes = io::stdin()
            .lock()
            .read_line(&mut buf)
            .expect("failed to read stdin");
        if bytes == 0 {
            // Input stream closed; nothing further can be prompted for.
            println!();
            std::process::exit(0);
        }
        buf.trim_end_matches(['\r', '\n']).to_string()
    }
}

/// Console driven by a prepared input script, recording the full transcript.
#[cfg(test)]
pub struct ScriptedConsole {
    input: std::collections::VecDeque<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(script: &[&str]) -> Self {
        Self {
            input: script.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> String {
        self.output.push(prompt.to_string());
        self.input
            .pop_front()
            .unwrap_or_else(|| panic!("console script exhausted at prompt: {prompt}"))
    }
}

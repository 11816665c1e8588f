use std::io::{self, BufRead, Write};

/// The console capability the interactive view talks to. Injected so the
/// view can be driven by a scripted double in tests.
pub trait Console {
    fn say(&mut self, line: &str);

    /// Prompt for one line of input. `None` means the input stream ended.
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// The real terminal: messages to stdout, input from stdin.
pub struct StdConsole {
    stdin: io::Stdin,
}

impl StdConsole {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        print!("{message}");
        io::stdout().flush().ok();
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

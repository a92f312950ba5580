use std::io::Write;
use std::path::PathBuf;
use std::process::{ChildStdin, Command, Stdio};

use tracing::{debug, warn};

use crate::config::PickerConfig;
use crate::error::Result;
use crate::launcher::lookup;

/// A dmenu-compatible picker: reads candidates on stdin, prints the chosen
/// line on stdout.
#[derive(Debug, Clone)]
pub struct Picker {
    program: PathBuf,
    config: PickerConfig,
}

impl Picker {
    /// Locate the picker program on `PATH`.
    pub fn new(config: &PickerConfig) -> Result<Self> {
        Ok(Self {
            program: lookup(&config.command)?,
            config: config.clone(),
        })
    }

    /// Command-line flags derived from the configuration.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["-l".to_string(), self.config.lines.to_string()];
        if self.config.early_grab {
            args.push("-f".into());
        }
        if self.config.case_insensitive {
            args.push("-i".into());
        }
        if self.config.bottom {
            args.push("-b".into());
        }
        if let Some(prompt) = self.config.prompt.as_deref().filter(|p| !p.is_empty()) {
            args.push("-p".into());
            args.push(prompt.to_string());
        }
        args
    }

    /// Offer `choices` one per line and return the selected line without its
    /// trailing newline.
    ///
    /// A dismissed picker, a non-zero exit or a failure to run the picker at
    /// all yield an empty string.
    pub fn choose<I, S>(&self, choices: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        let feed = (!choices.is_empty())
            .then(|| move |stdin: ChildStdin| write_lines(stdin, choices));
        self.or_nothing(self.run(feed))
    }

    /// Like [`Picker::choose`], but candidates are written as they arrive on
    /// `choices`. The picker's input is closed once every sender is gone.
    pub fn choose_stream(&self, choices: async_channel::Receiver<String>) -> String {
        let feed = move |stdin: ChildStdin| {
            write_lines(stdin, std::iter::from_fn(move || choices.recv_blocking().ok()));
        };
        self.or_nothing(self.run(Some(feed)))
    }

    /// Ask for free text: no candidates, no list.
    pub fn prompt(&self, prompt: &str) -> String {
        let picker = Self {
            program: self.program.clone(),
            config: PickerConfig {
                lines: 0,
                prompt: Some(prompt.to_string()),
                case_insensitive: false,
                ..self.config.clone()
            },
        };
        picker.choose(Vec::<String>::new())
    }

    fn or_nothing(&self, result: std::io::Result<String>) -> String {
        result.unwrap_or_else(|e| {
            warn!(program = %self.program.display(), "picker failed: {e}");
            String::new()
        })
    }

    /// Run the picker, handing its stdin to `feed` on a separate thread so a
    /// picker that answers before reading everything cannot deadlock us.
    /// Without `feed` the picker reads from the null device.
    fn run<F>(&self, feed: Option<F>) -> std::io::Result<String>
    where
        F: FnOnce(ChildStdin) + Send + 'static,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args()).stdout(Stdio::piped());
        cmd.stdin(if feed.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });
        let mut child = cmd.spawn()?;

        let feeder = child
            .stdin
            .take()
            .zip(feed)
            .map(|(stdin, feed)| std::thread::spawn(move || feed(stdin)));

        let output = child.wait_with_output()?;
        if let Some(feeder) = feeder {
            if feeder.join().is_err() {
                warn!(program = %self.program.display(), "picker input thread panicked");
            }
        }
        if !output.status.success() {
            debug!(status = %output.status, "picker returned no choice");
            return Ok(String::new());
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end_matches('\n').to_string())
    }
}

/// Write one candidate per line, stopping early if the picker hangs up.
fn write_lines<I: IntoIterator<Item = String>>(mut stdin: ChildStdin, lines: I) {
    for line in lines {
        if writeln!(stdin, "{line}").is_err() {
            break;
        }
    }
}

//! Guesser backed by an external program
//!
//! The program receives the request JSON on stdin and the rendered prompt in
//! `WORDLE_PROMPT`, and prints its reply on stdout. A small script that
//! forwards the prompt to a chat-completion API is enough to plug in a model.

use super::{Guesser, GuesserError, GuesserReply, GuesserRequest, parse_reply};
use log::{debug, trace, warn};
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Environment variable carrying the rendered prompt
pub const PROMPT_ENV: &str = "WORDLE_PROMPT";

#[derive(Debug, Clone)]
pub struct CommandGuesser {
    program: String,
    args: Vec<String>,
}

impl CommandGuesser {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Guesser for CommandGuesser {
    fn guess(&mut self, request: &GuesserRequest) -> Result<GuesserReply, GuesserError> {
        let payload = serde_json::to_string(request)?;
        debug!("running guesser {} with {payload}", self.program);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(PROMPT_ENV, request.prompt())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // A program that never reads stdin may exit before the write lands
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(payload.as_bytes()) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    debug!("guesser {} closed stdin early", self.program);
                }
                Err(e) => {
                    drop(stdin);
                    // Reap the child before reporting the write failure
                    let _ = child.wait();
                    return Err(e.into());
                }
                Ok(()) => {}
            }
        }

        let output = child.wait_with_output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        trace!("guesser stdout: {stdout}");

        if !output.status.success() {
            warn!(
                "guesser exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(GuesserError::ExitStatus(output.status));
        }

        parse_reply(&stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> CommandGuesser {
        CommandGuesser::new("sh", vec!["-c".to_string(), script.to_string()])
    }

    #[test]
    fn reads_reply_from_stdout() {
        let mut guesser = shell(r#"cat > /dev/null; echo '{"guess": "crane", "reason": "vowels"}'"#);
        let reply = guesser.guess(&GuesserRequest::default()).unwrap();

        assert_eq!(reply, GuesserReply::new("crane", "vowels"));
    }

    #[test]
    fn request_arrives_on_stdin() {
        // Echo the request's history back as the guess
        let mut guesser = shell(
            r#"read -r body; guess=$(echo "$body" | sed 's/.*"history":\["\([A-Z]*\)".*/\1/'); echo "{\"guess\": \"$guess\"}""#,
        );
        let request = GuesserRequest {
            history: vec!["SLATE".to_string()],
            feedback: vec![crate::core::Feedback::SOLVED],
        };

        assert_eq!(guesser.guess(&request).unwrap().guess, "SLATE");
    }

    #[test]
    fn program_ignoring_stdin_still_answers() {
        // Stdin is closed before the reply is printed, so the write may hit a
        // broken pipe
        let mut guesser = shell(r#"exec 0<&-; echo '{"guess": "CRANE"}'"#);
        for _ in 0..50 {
            assert_eq!(guesser.guess(&GuesserRequest::default()).unwrap().guess, "CRANE");
        }
    }

    #[test]
    fn prompt_is_exported() {
        let mut guesser = shell(
            r#"cat > /dev/null; case "$WORDLE_PROMPT" in *"Never repeat"*) echo '{"guess":"OK"}';; *) echo '{"error":"no prompt"}';; esac"#,
        );
        assert_eq!(guesser.guess(&GuesserRequest::default()).unwrap().guess, "OK");
    }

    #[test]
    fn error_payload_is_reported() {
        let mut guesser = shell(r#"cat > /dev/null; echo '{"error": "Bad response", "raw": null}'"#);
        assert!(matches!(
            guesser.guess(&GuesserRequest::default()),
            Err(GuesserError::Reported { .. })
        ));
    }

    #[test]
    fn non_zero_exit_is_a_failure() {
        let mut guesser = shell("cat > /dev/null; exit 3");
        assert!(matches!(
            guesser.guess(&GuesserRequest::default()),
            Err(GuesserError::ExitStatus(_))
        ));
    }

    #[test]
    fn missing_program_is_an_io_error() {
        let mut guesser = CommandGuesser::new("/nonexistent/wordle-guesser", vec![]);
        assert!(matches!(
            guesser.guess(&GuesserRequest::default()),
            Err(GuesserError::Io(_))
        ));
    }
}

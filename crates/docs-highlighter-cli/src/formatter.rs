use std::collections::BTreeMap;
use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use docs_highlighter_engine::{CodeFormatter, FormatError};

/// Runs an external program per language, code on stdin, result on stdout.
#[derive(Debug, Clone, Default)]
pub struct CommandFormatter {
    commands: BTreeMap<String, Vec<String>>,
}

impl CommandFormatter {
    pub fn new(commands: &BTreeMap<String, Vec<String>>) -> Self {
        Self {
            commands: commands
                .iter()
                .map(|(lang, cmd)| (lang.to_lowercase(), cmd.clone()))
                .collect(),
        }
    }
}

impl CodeFormatter for CommandFormatter {
    fn format(&self, language: &str, code: &str) -> Result<Option<String>, FormatError> {
        let Some((program, args)) = self
            .commands
            .get(&language.to_lowercase())
            .and_then(|cmd| cmd.split_first())
        else {
            return Ok(None);
        };
        let launch = |source| FormatError::Launch {
            program: program.clone(),
            source,
        };

        log::debug!("formatting {language} with {program}");
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(launch)?;

        // stdin is fed concurrently; a program streaming its output blocks on a full stdout pipe
        let writer = child.stdin.take().map(|mut stdin| {
            let code = code.to_owned();
            thread::spawn(move || stdin.write_all(code.as_bytes()))
        });
        let output = child.wait_with_output().map_err(launch)?;

        if let Some(writer) = writer {
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            // a program that exits without reading reports through its status
            if let Err(err) = written
                && err.kind() != ErrorKind::BrokenPipe
            {
                return Err(launch(err));
            }
        }

        if !output.status.success() {
            return Err(FormatError::Exit {
                program: program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout)
            .map(Some)
            .map_err(|source| FormatError::Output {
                program: program.clone(),
                source,
            })
    }
}

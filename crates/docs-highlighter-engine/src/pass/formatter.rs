use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to run formatter `{program}`")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("formatter `{program}` exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("formatter `{program}` produced non-UTF-8 output")]
    Output {
        program: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Reformats a code body on request (a bold `#format` directive).
pub trait CodeFormatter {
    /// Returns `Ok(None)` when no formatter is set up for `language`.
    fn format(&self, language: &str, code: &str) -> Result<Option<String>, FormatError>;
}

/// Formats nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFormatter;

impl CodeFormatter for NoFormatter {
    fn format(&self, _language: &str, _code: &str) -> Result<Option<String>, FormatError> {
        Ok(None)
    }
}

impl<F> CodeFormatter for F
where
    F: Fn(&str, &str) -> Result<Option<String>, FormatError>,
{
    fn format(&self, language: &str, code: &str) -> Result<Option<String>, FormatError> {
        self(language, code)
    }
}

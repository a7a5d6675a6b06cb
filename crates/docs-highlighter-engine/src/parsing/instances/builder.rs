use crate::models::{CodeInstance, InstanceConfig, Run};
use crate::parsing::{chars_from_text, eq_ignore_case, split_words};
use crate::style::StyleTables;

use super::{CODE_END, CODE_START, CONF_END, CONF_START, Diagnostic, Extracted, header::HeaderConfig};

#[derive(Debug)]
enum State {
    Idle,
    Header {
        opened_at: usize,
        conf_open: bool,
        header: HeaderConfig,
    },
    Body {
        opened_at: usize,
        start_index: usize,
        config: InstanceConfig,
        body: String,
    },
}

/// Feeds document runs through the `<code>` state machine one at a time.
///
/// Tags and directives only count in italic runs. Once the header is closed,
/// every run is body text until an italic run consisting of `</code>`.
pub struct InstanceBuilder<'t> {
    tables: &'t StyleTables,
    state: State,
    instances: Vec<CodeInstance>,
    diagnostics: Vec<Diagnostic>,
}

impl<'t> InstanceBuilder<'t> {
    pub fn new(tables: &'t StyleTables) -> Self {
        Self {
            tables,
            state: State::Idle,
            instances: vec![],
            diagnostics: vec![],
        }
    }

    pub fn push(&mut self, run: Run<'_>) {
        if let State::Body { .. } = self.state {
            self.consume_body_run(run);
            return;
        }

        if !run.italic {
            return;
        }

        for word in split_words(&chars_from_text(run.content, run.start_index)) {
            match &mut self.state {
                State::Idle => {
                    if eq_ignore_case(&word.content, CODE_START) {
                        log::debug!("instance opened at {}", word.index);
                        self.state = State::Header {
                            opened_at: word.index,
                            conf_open: false,
                            header: HeaderConfig::default(),
                        };
                    }
                }
                State::Header { conf_open, .. } if !*conf_open => {
                    *conf_open = eq_ignore_case(&word.content, CONF_START);
                }
                State::Header {
                    opened_at, header, ..
                } => {
                    if eq_ignore_case(&word.content, CONF_END) {
                        let config = std::mem::take(header).resolve();
                        log::debug!("header closed: {config:?}");
                        self.state = State::Body {
                            opened_at: *opened_at,
                            start_index: run.end_index,
                            config,
                            body: String::new(),
                        };
                        // the body starts after this run, so the rest of it is dropped
                        return;
                    }
                    header.apply(&word, run.bold, self.tables, &mut self.diagnostics);
                }
                State::Body { .. } => return,
            }
        }
    }

    fn consume_body_run(&mut self, run: Run<'_>) {
        let closes = run.italic && eq_ignore_case(run.content.trim(), CODE_END);
        if !closes {
            if let State::Body { body, .. } = &mut self.state {
                body.push_str(run.content);
            }
            return;
        }

        let State::Body {
            opened_at,
            start_index,
            config,
            body,
        } = std::mem::replace(&mut self.state, State::Idle)
        else {
            return;
        };

        match CodeInstance::new(config, start_index, body) {
            Ok(instance) => {
                log::debug!(
                    "instance {}..{} ({})",
                    instance.start_index(),
                    instance.end_index(),
                    instance.config.language
                );
                self.instances.push(instance);
            }
            Err(_) => {
                let diagnostic = Diagnostic::EmptyBody { at: opened_at };
                log::warn!("{diagnostic}");
                self.diagnostics.push(diagnostic);
            }
        }
    }

    pub fn finish(mut self) -> Extracted {
        // EOF: an open instance never got its closing tag
        match self.state {
            State::Idle => {}
            State::Header { opened_at, .. } | State::Body { opened_at, .. } => {
                let diagnostic = Diagnostic::Unterminated { at: opened_at };
                log::warn!("{diagnostic}");
                self.diagnostics.push(diagnostic);
            }
        }
        Extracted {
            instances: self.instances,
            diagnostics: self.diagnostics,
        }
    }
}

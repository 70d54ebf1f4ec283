use log::{debug, trace};

use super::MarkupOptions;
use super::blocks::Block;
use super::classify::{LineClass, LineKind};
use crate::error::MarkupError;
use crate::models::Section;

#[derive(Debug)]
enum State<'a> {
    /// Outside any block, collecting loose paragraph lines.
    Loose(Vec<&'a str>),
    /// Inside a `:::kind` block, collecting its body.
    Block(Block<'a>),
}

/// Phase 2 of markup parsing: consumes classified lines and emits sections
/// as blocks close and loose text is flushed.
pub struct SectionBuilder<'a> {
    options: &'a MarkupOptions,
    state: State<'a>,
    out: Vec<Section>,
}

impl<'a> SectionBuilder<'a> {
    pub fn new(options: &'a MarkupOptions) -> Self {
        Self {
            options,
            state: State::Loose(Vec::new()),
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineClass<'a>) -> Result<(), MarkupError> {
        trace!("line {}: {:?}", line.number, line.kind);

        if let State::Block(block) = &mut self.state {
            if line.kind == LineKind::End {
                return self.close_block();
            }
            block.body.push(line.raw);
            return Ok(());
        }

        match line.kind {
            LineKind::Directive(directive) => {
                self.flush_paragraph();
                debug!("opening {} block on line {}", directive.kind, line.number);
                self.state = State::Block(Block {
                    directive,
                    line: line.number,
                    body: vec![],
                });
            }
            // Stray `:::end` with no open block
            LineKind::End => {}
            LineKind::Unknown => {
                return Err(MarkupError::UnknownDirective {
                    line: line.number,
                    directive: line.raw.trim().to_string(),
                });
            }
            LineKind::Text => self.extend_paragraph(line.raw),
        }
        Ok(())
    }

    /// EOF flush: closes an unterminated block, flushes loose text and
    /// renumbers positions in emission order.
    pub fn finish(mut self) -> Result<Vec<Section>, MarkupError> {
        self.close_block()?;
        self.flush_paragraph();

        for (position, section) in self.out.iter_mut().enumerate() {
            section.position = position;
        }
        Ok(self.out)
    }

    fn extend_paragraph(&mut self, raw: &'a str) {
        match &mut self.state {
            State::Loose(lines) => lines.push(raw),
            State::Block(_) => {}
        }
    }

    fn flush_paragraph(&mut self) {
        let State::Loose(lines) = &mut self.state else {
            return;
        };
        let text = lines.join("\n");
        lines.clear();

        let text = text.trim();
        if !text.is_empty() {
            self.out.push(Section::paragraph(text).at(self.out.len()));
        }
    }

    fn close_block(&mut self) -> Result<(), MarkupError> {
        let prev = std::mem::replace(&mut self.state, State::Loose(Vec::new()));
        let block = match prev {
            State::Block(block) => block,
            loose => {
                self.state = loose; // put back loose lines
                return Ok(());
            }
        };

        debug!("closing {} block opened on line {}", block.directive.kind, block.line);
        if let Some(section) = block.into_section(self.options)? {
            self.out.push(section.at(self.out.len()));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::offsets::text_width16;

/// A snapshot of a host document, in the host's JSON shape.
///
/// Only the parts the engine reads are modelled. The host omits zero-valued
/// indices and false flags, so every field has a serde default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub body: Body,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// A top-level content block. Only paragraphs carry text the engine cares about;
/// tables, section breaks and the like deserialize with `paragraph: None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    #[serde(default)]
    pub start_index: usize,
    #[serde(default)]
    pub end_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    #[serde(default)]
    pub start_index: usize,
    #[serde(default)]
    pub end_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

/// A borrowed view of one text run with its UTF-16 position.
#[derive(Debug, Clone, Copy)]
pub struct Run<'a> {
    pub start_index: usize,
    pub end_index: usize,
    pub content: &'a str,
    pub bold: bool,
    pub italic: bool,
}

impl Document {
    /// Every text run of every paragraph, in document order.
    pub fn runs(&self) -> impl Iterator<Item = Run<'_>> {
        self.body
            .content
            .iter()
            .filter_map(|elem| elem.paragraph.as_ref())
            .flat_map(|par| par.elements.iter())
            .filter_map(|pe| {
                pe.text_run.as_ref().map(|tr| Run {
                    start_index: pe.start_index,
                    end_index: pe.end_index,
                    content: &tr.content,
                    bold: tr.text_style.bold,
                    italic: tr.text_style.italic,
                })
            })
    }
}

impl TextRun {
    pub fn new(content: impl Into<String>, text_style: TextStyle) -> Self {
        Self {
            content: content.into(),
            text_style,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, TextStyle::default())
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(
            content,
            TextStyle {
                bold: false,
                italic: true,
            },
        )
    }

    pub fn bold_italic(content: impl Into<String>) -> Self {
        Self::new(
            content,
            TextStyle {
                bold: true,
                italic: true,
            },
        )
    }
}

/// Assembles a [`Document`] from paragraphs of runs, assigning UTF-16 indices
/// the way the host does (the body starts at index 1).
#[derive(Debug)]
pub struct DocumentBuilder {
    next_index: usize,
    content: Vec<StructuralElement>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            next_index: 1,
            content: Vec::new(),
        }
    }

    pub fn paragraph(mut self, runs: impl IntoIterator<Item = TextRun>) -> Self {
        let start = self.next_index;
        let elements = runs
            .into_iter()
            .map(|tr| {
                let start_index = self.next_index;
                self.next_index += text_width16(&tr.content);
                ParagraphElement {
                    start_index,
                    end_index: self.next_index,
                    text_run: Some(tr),
                }
            })
            .collect();
        self.content.push(StructuralElement {
            start_index: start,
            end_index: self.next_index,
            paragraph: Some(Paragraph { elements }),
        });
        self
    }

    /// Shorthand for a paragraph holding a single run.
    pub fn line(self, run: TextRun) -> Self {
        self.paragraph([run])
    }

    pub fn build(self) -> Document {
        Document {
            document_id: String::new(),
            body: Body {
                content: self.content,
            },
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_host_json_with_omitted_defaults() {
        let json = r#"{
            "documentId": "abc",
            "body": { "content": [
                { "endIndex": 1, "sectionBreak": {} },
                { "startIndex": 1, "endIndex": 7, "paragraph": { "elements": [
                    { "startIndex": 1, "endIndex": 4, "textRun": { "content": "<a>", "textStyle": { "italic": true } } },
                    { "startIndex": 4, "endIndex": 7, "textRun": { "content": "b\n", "textStyle": {} } }
                ] } }
            ] }
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.document_id, "abc");
        assert_eq!(doc.body.content.len(), 2);
        assert!(doc.body.content[0].paragraph.is_none());

        let runs: Vec<_> = doc.runs().map(|r| (r.start_index, r.content, r.italic)).collect();
        assert_eq!(runs, vec![(1, "<a>", true), (4, "b\n", false)]);
    }

    #[test]
    fn builder_assigns_utf16_indices() {
        let doc = DocumentBuilder::new()
            .paragraph([TextRun::italic("😀 "), TextRun::plain("x\n")])
            .line(TextRun::plain("y\n"))
            .build();
        let spans: Vec<_> = doc.runs().map(|r| (r.start_index, r.end_index)).collect();
        assert_eq!(spans, vec![(1, 4), (4, 6), (6, 8)]);
        assert_eq!(doc.body.content[1].start_index, 6);
    }
}

//! Nested configuration skeleton.
//!
//! Walks the class graph depth-first from the root class and writes one
//! element per visited class:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Root>
//!     <x>int</x>
//!     <Child>
//!         <y>str</y>
//!     </Child>
//! </Root>
//! ```
//!
//! Names and types are written as XML text, so `&`, `<` and `>` are
//! escaped. The traversal keeps its own stack, and composition depth is
//! bounded only by memory.

use std::{borrow::Cow, collections::HashSet};

use log::{debug, trace};

use armillary_core::{
    identifier::Id,
    model::{ClassRecord, Model},
};

use super::{Error, Exporter};
use crate::config::RenderConfig;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Pending work of the depth-first traversal.
#[derive(Debug)]
enum Frame {
    /// Render `target` as a child of `owner`, unless it was already rendered.
    Enter { owner: Id, target: Id, depth: usize },
    /// Close the element of `name`.
    Leave { name: String, depth: usize },
}

/// Renders the root class and everything it composes as nested XML.
///
/// A class is rendered at most once per document. When a class is reached
/// again, through a cycle or a second parent, that branch is omitted.
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    indent_width: usize,
    xml_declaration: bool,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl TreeRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            indent_width: config.indent_width(),
            xml_declaration: config.xml_declaration(),
        }
    }

    /// Renders the document as lines, without line terminators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotFound`] if no class is flagged as root and
    /// [`Error::DanglingReference`] if the traversal reaches a class that is
    /// not in the model.
    pub fn render_lines(&self, model: &Model) -> Result<Vec<String>, Error> {
        let root = model.root().ok_or(Error::RootNotFound)?;
        debug!(root = root.name().to_string(); "Rendering configuration tree");

        let mut lines = Vec::new();
        if self.xml_declaration {
            lines.push(XML_DECLARATION.to_string());
        }

        let mut visited = HashSet::new();
        let mut stack = Vec::new();
        self.open_class(root, 0, &mut visited, &mut stack, &mut lines);

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Leave { name, depth } => {
                    lines.push(format!("{}</{name}>", self.indent(depth)));
                }
                Frame::Enter {
                    owner,
                    target,
                    depth,
                } => {
                    if visited.contains(&target) {
                        trace!(
                            owner = owner.to_string(),
                            target = target.to_string();
                            "Skipping visited class"
                        );
                        continue;
                    }
                    let child = model
                        .get(target)
                        .ok_or(Error::DanglingReference { owner, target })?;
                    self.open_class(child, depth, &mut visited, &mut stack, &mut lines);
                }
            }
        }

        debug!(classes = visited.len(), lines = lines.len(); "Configuration tree rendered");
        Ok(lines)
    }

    /// Writes the opening tag and attributes of `class`, then schedules its
    /// children and closing tag.
    ///
    /// Children are pushed in reverse so they pop in declaration order.
    fn open_class(
        &self,
        class: &ClassRecord,
        depth: usize,
        visited: &mut HashSet<Id>,
        stack: &mut Vec<Frame>,
        lines: &mut Vec<String>,
    ) {
        visited.insert(class.name());

        let name = escape_text(&class.name().to_string()).into_owned();
        let inner = self.indent(depth + 1);

        lines.push(format!("{}<{name}>", self.indent(depth)));
        for attribute in class.attributes() {
            lines.push(format!(
                "{inner}<{tag}>{}</{tag}>",
                escape_text(attribute.type_name()),
                tag = escape_text(attribute.name())
            ));
        }

        stack.push(Frame::Leave { name, depth });
        for relation in class.relations().iter().filter(|r| r.is_class()).rev() {
            stack.push(Frame::Enter {
                owner: class.name(),
                target: relation.target(),
                depth: depth + 1,
            });
        }
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}

/// Escapes the characters that would break XML text content.
fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}

impl Exporter for TreeRenderer {
    fn export(&self, model: &Model) -> Result<String, Error> {
        Ok(self.render_lines(model)?.join("\n"))
    }
}

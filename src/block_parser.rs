use crate::config::Config;
use crate::syntax::{NodeId, SyntaxKind, Tree};

mod attributes;
mod blockquotes;
mod code_blocks;
mod context;
mod headings;
mod horizontal_rules;
mod indented_code;
mod list_items;
pub mod list_types;
mod lists;
pub mod marker_utils;
mod paragraphs;
pub mod reader;
mod utils;

pub use context::{OpenBlock, ParseContext};
pub use reader::Reader;

use utils::{indent_width, is_blank};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Whether an opened block may hold child blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Children {
    Has,
    No,
}

/// Outcome of offering a line to an open block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue(Children),
    Close,
}

/// One kind of block.
///
/// The driver offers each line first to the blocks that are already open,
/// outermost first, through [`BlockRule::continue_block`]. Whatever is left
/// of the line after that is offered to the rules whose triggers match its
/// first non-space byte through [`BlockRule::open`].
pub trait BlockRule {
    fn name(&self) -> &'static str;

    /// Bytes that can start this block. An empty set means any line.
    fn triggers(&self) -> &'static [u8];

    /// Tries to start a block on the current line. The returned node is
    /// detached; the driver appends it to `parent`.
    fn open(
        &self,
        parent: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Option<(NodeId, Children)>;

    fn continue_block(
        &self,
        node: NodeId,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> Continuation;

    fn close(&self, _node: NodeId, _reader: &Reader<'_>, _pc: &mut ParseContext) {}

    fn can_interrupt_paragraph(&self) -> bool;

    fn can_accept_indented_line(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenResult {
    NoBlocksOpened,
    ParagraphContinuation,
    NewBlocksOpened,
}

/// Blank-line bookkeeping: whether line `line` was blank at nesting `level`.
#[derive(Debug, Clone, Copy)]
struct LineStat {
    line: isize,
    level: usize,
    is_blank: bool,
}

fn is_blank_line(line: isize, level: usize, stats: &[LineStat]) -> bool {
    let mut ret = true;
    let mut i = stats.len() as isize - 1 - level as isize;
    while i >= 0 {
        ret = false;
        let s = stats[i as usize];
        if s.line == line {
            if s.level < level && s.is_blank {
                return true;
            } else if s.level == level {
                return s.is_blank;
            }
        }
        if s.line < line {
            return ret;
        }
        i -= 1;
    }
    ret
}

pub struct BlockParser<'a> {
    input: &'a str,
    config: &'a Config,
    rules: Vec<Box<dyn BlockRule>>,
    triggered: Vec<Vec<usize>>,
    free: Vec<usize>,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str, config: &'a Config) -> Self {
        let mut rules: Vec<Box<dyn BlockRule>> = vec![
            Box::new(headings::SetextHeadingRule),
            Box::new(lists::ListRule),
            Box::new(list_items::ListItemRule),
            Box::new(horizontal_rules::ThematicBreakRule),
            Box::new(indented_code::IndentedCodeRule),
            Box::new(headings::AtxHeadingRule),
            Box::new(code_blocks::FencedCodeRule),
            Box::new(blockquotes::BlockQuoteRule),
        ];
        if config.extensions.block_attributes {
            rules.push(Box::new(attributes::BlockAttributeRule));
        }
        rules.push(Box::new(paragraphs::ParagraphRule));

        let mut triggered = vec![Vec::new(); 256];
        let mut free = Vec::new();
        for (idx, rule) in rules.iter().enumerate() {
            let triggers = rule.triggers();
            if triggers.is_empty() {
                free.push(idx);
            } else {
                for &b in triggers {
                    triggered[usize::from(b)].push(idx);
                }
            }
        }
        // Free rules are tried after the triggered ones for every byte.
        for bucket in triggered.iter_mut().filter(|b| !b.is_empty()) {
            bucket.extend_from_slice(&free);
        }

        Self {
            input,
            config,
            rules,
            triggered,
            free,
        }
    }

    pub fn parse(self) -> Tree {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        log::debug!("Starting block parse of {} bytes", self.input.len());

        let mut reader = Reader::new(self.input.as_bytes());
        let mut pc = ParseContext::new(self.config);
        let root = pc.tree.root();
        self.parse_blocks(root, &mut reader, &mut pc);

        if self.config.extensions.block_attributes {
            attributes::attach_block_attributes(&mut pc.tree);
        }
        pc.tree
    }

    fn parse_blocks(&self, root: NodeId, reader: &mut Reader<'_>, pc: &mut ParseContext) {
        pc.opened.clear();
        let mut stats: Vec<LineStat> = Vec::with_capacity(128);
        loop {
            let Some(skipped) = reader.skip_blank_lines() else {
                return;
            };
            let line = reader.line_number() as isize;
            if skipped != 0 {
                stats.clear();
                for level in 0..pc.opened.len() {
                    stats.push(LineStat {
                        line: line - 1,
                        level,
                        is_blank: true,
                    });
                }
            }
            let blank = is_blank_line(line - 1, 0, &stats);
            if self.open_blocks(root, blank, reader, pc) != OpenResult::NewBlocksOpened {
                return;
            }
            reader.advance_line();

            loop {
                let count = pc.opened.len();
                if count == 0 {
                    break;
                }
                let mut last_index = count - 1;
                for i in 0..count {
                    let block = pc.opened[i];
                    let Some(text) = reader.peek_line() else {
                        self.close_blocks(last_index, 0, reader, pc);
                        reader.advance_line();
                        return;
                    };
                    let line = reader.line_number() as isize;
                    stats.push(LineStat {
                        line,
                        level: i,
                        is_blank: is_blank(&text),
                    });
                    log::trace!("line {line} level {i}: {:?}", String::from_utf8_lossy(&text));

                    if pc.tree.kind(block.node) != SyntaxKind::PARAGRAPH {
                        match self.rules[block.rule].continue_block(block.node, reader, pc) {
                            Continuation::Continue(children) => {
                                if children == Children::Has && i == last_index {
                                    let blank = is_blank_line(line - 1, i, &stats);
                                    self.open_blocks(block.node, blank, reader, pc);
                                    break;
                                }
                                continue;
                            }
                            Continuation::Close => {}
                        }
                    }

                    let blank = is_blank_line(line - 1, i, &stats);
                    let parent = if i != 0 { pc.opened[i - 1].node } else { root };
                    let last_node = pc.opened[last_index].node;
                    let result = self.open_blocks(parent, blank, reader, pc);
                    if result != OpenResult::ParagraphContinuation {
                        // A rule may have replaced the last open block.
                        if pc.opened.get(last_index).map(|b| b.node) != Some(last_node) {
                            match last_index.checked_sub(1) {
                                Some(index) => last_index = index,
                                None => break,
                            }
                        }
                        if last_index >= i {
                            self.close_blocks(last_index, i, reader, pc);
                        }
                    }
                    break;
                }
                reader.advance_line();
            }
        }
    }

    fn open_blocks(
        &self,
        mut parent: NodeId,
        blank_line: bool,
        reader: &mut Reader<'_>,
        pc: &mut ParseContext,
    ) -> OpenResult {
        let mut result = OpenResult::NoBlocksOpened;
        let mut last_block = pc.last_opened_block();
        let continuable = last_block.is_some_and(|b| pc.tree.kind(b.node) == SyntaxKind::PARAGRAPH);

        'retry: loop {
            let Some(line) = reader.peek_line() else {
                break;
            };
            let (width, pos) = indent_width(&line, reader.line_offset());
            if line.first().is_none_or(|&b| b == b'\n') {
                break;
            }
            let candidates = match line.get(pos) {
                Some(&b) if !self.triggered[usize::from(b)].is_empty() => {
                    &self.triggered[usize::from(b)]
                }
                _ => &self.free,
            };

            for &idx in candidates {
                let rule = &self.rules[idx];
                if continuable
                    && result == OpenResult::NoBlocksOpened
                    && !rule.can_interrupt_paragraph()
                {
                    continue;
                }
                if width > 3 && !rule.can_accept_indented_line() {
                    continue;
                }
                last_block = pc.last_opened_block();
                if let Some((node, children)) = rule.open(parent, reader, pc) {
                    log::debug!(
                        "{} opened {:?} under {:?}",
                        rule.name(),
                        pc.tree.kind(node),
                        pc.tree.kind(parent)
                    );
                    pc.tree.node_mut(node).blank_previous_lines = blank_line;
                    if let Some(last) = last_block
                        && pc.tree.parent(last.node).is_none()
                    {
                        // The new block absorbed the previous one.
                        let inherited = pc.tree.node(last.node).blank_previous_lines;
                        pc.tree.node_mut(node).blank_previous_lines = inherited;
                        let last_pos = pc.opened.len() - 1;
                        self.close_blocks(last_pos, last_pos, reader, pc);
                    }
                    pc.tree.append_child(parent, node);
                    result = OpenResult::NewBlocksOpened;
                    pc.opened.push(OpenBlock { node, rule: idx });
                    if children == Children::Has {
                        parent = node;
                        continue 'retry;
                    }
                    break;
                }
            }
            break;
        }

        if result == OpenResult::NoBlocksOpened
            && continuable
            && let Some(last) = last_block
            && let Continuation::Continue(_) =
                self.rules[last.rule].continue_block(last.node, reader, pc)
        {
            result = OpenResult::ParagraphContinuation;
        }
        result
    }

    /// Closes `opened[to..=from]`, innermost first.
    fn close_blocks(&self, from: usize, to: usize, reader: &Reader<'_>, pc: &mut ParseContext) {
        for i in (to..=from).rev() {
            let block = pc.opened[i];
            // A detached block was absorbed by another one and needs no close.
            if block.node == pc.tree.root() || pc.tree.parent(block.node).is_some() {
                log::trace!("closing {:?}", pc.tree.kind(block.node));
                self.rules[block.rule].close(block.node, reader, pc);
            }
        }
        pc.opened.drain(to..=from);
    }
}

#[cfg(test)]
mod tests {
    mod blanklines;
    mod blockquotes;
    mod code_blocks;
    mod headings;
    mod helpers;
    mod lists;
    mod paragraphs;
}

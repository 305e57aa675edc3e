/// Structural kind of a block, derived from its line shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into blank-line-delimited blocks.
///
/// Every line is trimmed, consecutive blank lines collapse to a single
/// separator, and leading/trailing blank lines produce no blocks. An empty
/// document yields no blocks.
pub fn segment(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut block = String::new();

    for line in document.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !block.is_empty() {
                blocks.push(std::mem::take(&mut block));
            }
        } else {
            if !block.is_empty() {
                block.push('\n');
            }
            block.push_str(line);
        }
    }
    if !block.is_empty() {
        blocks.push(block);
    }
    blocks
}

/// Classify a block by its line shape. First rule wins.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.lines().collect();
    if lines.is_empty() {
        return BlockKind::Paragraph;
    }
    if lines[0].starts_with('#') {
        return BlockKind::Heading;
    }
    if lines[0].starts_with("```") && lines[lines.len() - 1].starts_with("```") {
        return BlockKind::Code;
    }
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if lines
        .iter()
        .all(|line| line.starts_with("- ") || line.starts_with("* "))
    {
        return BlockKind::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_on_blank_lines() {
        assert_eq!(
            segment("This is a block.\n\nThis is another block."),
            vec!["This is a block.", "This is another block."]
        );
    }

    #[test]
    fn collapses_consecutive_blank_lines() {
        assert_eq!(segment("one\n\n\n\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn trims_lines_and_surrounding_blanks() {
        assert_eq!(
            segment("\n\n  first line  \n  second line\n\n"),
            vec!["first line\nsecond line"]
        );
    }

    #[test]
    fn empty_document_yields_no_blocks() {
        assert_eq!(segment(""), Vec::<String>::new());
        assert_eq!(segment("\n\n  \n"), Vec::<String>::new());
    }

    #[test]
    fn segmentation_is_idempotent_over_rejoin() {
        let doc = "# Title\n\npara one\nstill para one\n\n- a\n- b";
        let blocks = segment(doc);
        let rejoined = blocks.join("\n\n");
        assert_eq!(segment(&rejoined), blocks);
    }

    #[test]
    fn classifies_headings() {
        assert_eq!(classify("# Heading"), BlockKind::Heading);
        assert_eq!(classify("### Deep heading"), BlockKind::Heading);
    }

    #[test]
    fn classifies_code_fences() {
        assert_eq!(classify("```\ncode\n```"), BlockKind::Code);
        assert_eq!(classify("```rust\nlet x = 1;\n```"), BlockKind::Code);
        // An unclosed fence falls through to paragraph.
        assert_eq!(classify("```\ncode"), BlockKind::Paragraph);
    }

    #[test]
    fn classifies_quotes() {
        assert_eq!(classify("> one\n> two"), BlockKind::Quote);
        assert_eq!(classify("> one\nplain"), BlockKind::Paragraph);
    }

    #[test]
    fn classifies_unordered_lists() {
        assert_eq!(classify("- a\n- b"), BlockKind::UnorderedList);
        assert_eq!(classify("* a\n- b"), BlockKind::UnorderedList);
        // Bare `+` markers are not supported.
        assert_eq!(classify("+ a\n+ b"), BlockKind::Paragraph);
    }

    #[test]
    fn ordered_lists_must_count_from_one() {
        assert_eq!(classify("1. a\n2. b\n3. c"), BlockKind::OrderedList);
        assert_eq!(classify("1. a\n3. b"), BlockKind::Paragraph);
        assert_eq!(classify("2. a\n3. b"), BlockKind::Paragraph);
    }

    #[test]
    fn everything_else_is_a_paragraph() {
        assert_eq!(classify("just some text"), BlockKind::Paragraph);
        assert_eq!(classify(""), BlockKind::Paragraph);
    }
}

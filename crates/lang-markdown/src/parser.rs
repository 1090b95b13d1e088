use once_cell::sync::Lazy;
use regex::Regex;
use symlens_api::{Range, RawNodeId, RawSymbolTree};

/// Kind code reported for every heading: LSP `SymbolKind::String`, the same
/// code markdown language servers such as Marksman use.
pub const HEADING_KIND: u32 = 15;

static ATX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?(?:[ \t]+#+)?[ \t]*$")
        .expect("ATX heading pattern must compile")
});

static SETEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}(=+|-+)[ \t]*$").expect("setext underline pattern must compile"));

static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}(`{3,}|~{3,})(.*)$").expect("code fence pattern must compile"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub title: String,
    /// First line of the heading.
    pub line: usize,
    /// Last line of the heading itself (the underline for setext headings).
    pub last_line: usize,
}

/// ATX and setext headings in document order, skipping fenced code.
pub fn scan_headings(source: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut fence: Option<(char, usize)> = None;
    let mut paragraph: Option<(usize, String)> = None;

    for (line_no, line) in source.lines().enumerate() {
        if let Some(caps) = FENCE.captures(line) {
            let marker = caps.get(1).map_or("", |m| m.as_str());
            let info = caps.get(2).map_or("", |m| m.as_str());
            let ch = if marker.starts_with('~') { '~' } else { '`' };
            match fence {
                None => {
                    fence = Some((ch, marker.len()));
                    paragraph = None;
                }
                Some((open, len)) if open == ch && marker.len() >= len && info.trim().is_empty() => {
                    fence = None;
                }
                Some(_) => {}
            }
            continue;
        }
        if fence.is_some() {
            continue;
        }

        if let Some(caps) = ATX.captures(line) {
            paragraph = None;
            let title = atx_title(caps.get(2).map_or("", |m| m.as_str()));
            // LSP symbol names must not be empty, so empty headings are not reported.
            if !title.is_empty() {
                headings.push(Heading {
                    level: caps[1].len(),
                    title: title.to_string(),
                    line: line_no,
                    last_line: line_no,
                });
            }
            continue;
        }

        if let Some(caps) = SETEXT.captures(line) {
            // Without a paragraph above, this is a thematic break.
            if let Some((start, title)) = paragraph.take() {
                let level = if caps[1].starts_with('=') { 1 } else { 2 };
                headings.push(Heading {
                    level,
                    title,
                    line: start,
                    last_line: line_no,
                });
            }
            continue;
        }

        let text = line.trim();
        if text.is_empty() {
            paragraph = None;
        } else if let Some((_, title)) = paragraph.as_mut() {
            title.push(' ');
            title.push_str(text);
        } else {
            paragraph = Some((line_no, text.to_string()));
        }
    }

    headings
}

/// Heading text with any closing sequence removed. A remainder made only of
/// `#` is itself the closing sequence, as in `# #`.
fn atx_title(raw: &str) -> &str {
    let title = raw.trim();
    if title.chars().all(|c| c == '#') {
        ""
    } else {
        title
    }
}

/// Build the raw symbol tree a markdown language server reports.
///
/// Each heading nests under the closest preceding heading of a lower level,
/// and its range spans its whole section up to the next heading of the same
/// or a higher level, trailing blank lines excluded.
pub fn heading_tree(source: &str) -> RawSymbolTree {
    let lines: Vec<&str> = source.lines().collect();
    let headings = scan_headings(source);

    let mut tree = RawSymbolTree::new();
    let mut open: Vec<(usize, RawNodeId)> = Vec::new();

    for (i, heading) in headings.iter().enumerate() {
        let end_line = section_end(&headings, i, &lines);
        let end_col = lines.get(end_line).map_or(0, |l| l.encode_utf16().count());

        while open.last().is_some_and(|(level, _)| *level >= heading.level) {
            open.pop();
        }
        let parent = open.last().map(|(_, id)| *id);
        let id = tree.push(
            parent,
            heading.title.clone(),
            HEADING_KIND,
            Range::new(heading.line, 0, end_line, end_col),
        );
        open.push((heading.level, id));
    }

    tree
}

fn section_end(headings: &[Heading], i: usize, lines: &[&str]) -> usize {
    let heading = &headings[i];
    let mut end = headings[i + 1..]
        .iter()
        .find(|next| next.level <= heading.level)
        .map_or(lines.len().saturating_sub(1), |next| next.line - 1);
    while end > heading.last_line && lines.get(end).is_some_and(|l| l.trim().is_empty()) {
        end -= 1;
    }
    end
}

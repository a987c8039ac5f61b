//! Table of contents generated from the page headings.

use docdom::text::slugify;
use docdom::{find_element_mut, Element};

/// Heading levels that get a TOC entry.
const TOC_LEVELS: std::ops::RangeInclusive<u8> = 2..=6;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Heading {
    level: u8,
    id: String,
    text: String,
}

/// Where a heading shallower than the previous one is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TocNesting {
    /// Back to the list the most recent nested list was opened from,
    /// however many levels the heading drops.
    #[default]
    Previous,
    /// Back to the innermost list opened at or above the heading's level.
    Level,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TocEntry {
    id: String,
    text: String,
    children: Vec<TocEntry>,
}

/// Give every `h2`-`h6` heading of `document` an ID derived from its text
/// and append a nested `li > a[href=#id]` list for them to the TOC root
/// `toc_id`. A heading deeper than the previous one opens a nested list
/// under the previous entry; a shallower one steps back out once.
///
/// Returns true if any nesting was created.
pub fn add_links_to_toc(document: &mut Element, toc_id: &str) -> bool {
    add_links_to_toc_with(document, toc_id, TocNesting::default())
}

/// [`add_links_to_toc`] with an explicit dedent rule.
pub fn add_links_to_toc_with(document: &mut Element, toc_id: &str, nesting: TocNesting) -> bool {
    let mut headings = Vec::new();
    collect_headings(document, &mut headings);

    let Some(toc) = find_element_mut(document, toc_id) else {
        log::debug!("[toc] root {toc_id} not found");
        return false;
    };

    let (entries, nested) = nest(headings, nesting);
    log::debug!("[toc] {} top-level entries, nested={}", entries.len(), nested);
    for entry in entries {
        toc.push_child(entry_element(entry));
    }
    nested
}

fn collect_headings(element: &mut Element, out: &mut Vec<Heading>) {
    if let Some(level) = element.tag.heading_level().filter(|l| TOC_LEVELS.contains(l)) {
        let text = element.text_content();
        let id = slugify(&text);
        element.id = id.clone();
        out.push(Heading { level, id, text });
    }
    for child in element.child_elements_mut() {
        collect_headings(child, out);
    }
}

fn nest(headings: Vec<Heading>, nesting: TocNesting) -> (Vec<TocEntry>, bool) {
    // Open lists, innermost last, tagged with the level that opened them.
    let mut stack: Vec<(u8, Vec<TocEntry>)> = vec![(0, Vec::new())];
    let mut nested = false;
    let mut previous: Option<u8> = None;
    // Stack depth of the list the latest nested list was opened from.
    let mut return_depth = 0;

    for heading in headings {
        if let Some(previous) = previous {
            let has_parent_entry = stack.last().is_some_and(|(_, list)| !list.is_empty());
            if heading.level > previous && has_parent_entry {
                nested = true;
                return_depth = stack.len().saturating_sub(1);
                stack.push((heading.level, Vec::new()));
            } else if heading.level < previous {
                match nesting {
                    TocNesting::Previous => {
                        while stack.len() > return_depth + 1 {
                            close_list(&mut stack);
                        }
                    }
                    TocNesting::Level => {
                        while stack.len() > 1
                            && stack.last().is_some_and(|(level, _)| *level > heading.level)
                        {
                            close_list(&mut stack);
                        }
                    }
                }
            }
        }
        previous = Some(heading.level);
        if let Some((_, list)) = stack.last_mut() {
            list.push(TocEntry {
                id: heading.id,
                text: heading.text,
                children: Vec::new(),
            });
        }
    }

    while stack.len() > 1 {
        close_list(&mut stack);
    }
    let entries = stack.pop().map(|(_, list)| list).unwrap_or_default();
    (entries, nested)
}

/// Move the innermost open list under the last entry of its parent list.
fn close_list(stack: &mut Vec<(u8, Vec<TocEntry>)>) {
    let Some((_, list)) = stack.pop() else {
        return;
    };
    if let Some(parent) = stack.last_mut().and_then(|(_, parent)| parent.last_mut()) {
        parent.children.extend(list);
    }
}

fn entry_element(entry: TocEntry) -> Element {
    let link = Element::anchor(entry.text).attr("href", format!("#{}", entry.id));
    let mut li = Element::li().child(link);
    if !entry.children.is_empty() {
        li.push_child(Element::ul().children(entry.children.into_iter().map(entry_element)));
    }
    li
}

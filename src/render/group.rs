//! Section grouping and read-more markup
//!
//! This module consumes the classified line sequence and re-emits it with
//! each heading's run of body paragraphs split into a visible prefix and a
//! collapsible suffix. Only the first two paragraphs of a section are shown
//! by default; the rest go behind a client-side "Read More" toggle.

use super::classify::TaggedLine;
use super::ids::SectionIds;

/// Body paragraphs shown before the read-more fold.
const VISIBLE_PARAGRAPHS: usize = 2;

/// Group classified lines into the final fragment sequence.
///
/// Consecutive `Body` lines are buffered as the current section; a
/// `Heading` closes the buffered section before being emitted itself, and
/// end-of-input closes a trailing section. The latter also covers body
/// paragraphs that open the document before any heading.
pub fn group_sections(lines: Vec<TaggedLine>, ids: &mut SectionIds) -> Vec<String> {
    let mut grouped = Vec::new();
    let mut section: Vec<String> = Vec::new();

    for line in lines {
        match line {
            TaggedLine::Heading(html) => {
                if !section.is_empty() {
                    flush_section(&mut grouped, std::mem::take(&mut section), ids);
                }
                grouped.push(html);
            }
            TaggedLine::Body(html) => {
                section.push(html);
            }
        }
    }

    if !section.is_empty() {
        flush_section(&mut grouped, section, ids);
    }

    grouped
}

/// Apply the section-rendering rule to a buffered run of body paragraphs.
///
/// Fewer than two paragraphs pass through unchanged. Otherwise the first
/// two are emitted as-is and any remainder is wrapped in the read-more
/// container. A section of exactly two paragraphs therefore gets no
/// container at all, not an empty one.
fn flush_section(out: &mut Vec<String>, paragraphs: Vec<String>, ids: &mut SectionIds) {
    if paragraphs.len() <= VISIBLE_PARAGRAPHS {
        out.extend(paragraphs);
        return;
    }

    let mut paragraphs = paragraphs.into_iter();
    out.extend(paragraphs.by_ref().take(VISIBLE_PARAGRAPHS));

    let section_id = ids.next_id();

    out.push(r#"<div class="read-more-container">"#.to_string());
    out.push(format!(
        r#"<div class="hidden-content" id="hidden_{section_id}" style="display: none;">"#
    ));
    out.extend(paragraphs);
    out.push("</div>".to_string());
    out.push(format!(
        r#"<button class="read-more-btn" onclick="toggleReadMore('{section_id}')">Read More</button>"#
    ));
    out.push("</div>".to_string());
}

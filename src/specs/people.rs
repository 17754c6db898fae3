// src/specs/people.rs

use crate::config::consts::{
    BREADCRUMBS_ID, COURSE_CRUMB_INDEX, NAME_CLASSES, RIGHT_CELL_CLASS, ROLE_CELL_INDEX,
    ROW_CLASSES, USER_ID_PREFIX,
};
use crate::core::html::{
    has_class, has_classes, inner_after_open_tag, next_tag_block_ci, open_tag, slice_between_ci,
    strip_tags, to_lower, attr_value_ci,
};
use crate::core::sanitize::normalize_entities;
use crate::page::{Cell, PeoplePage, RosterRow};

/// Parse one fetched people-page document into the page model.
pub fn parse_document(doc: &str) -> PeoplePage {
    PeoplePage {
        course_name: extract_course_name(doc),
        rows: extract_rows(doc),
    }
}

/// Course name from the breadcrumb container. The first crumb is the
/// account home; the course sits at a fixed position after it.
pub fn extract_course_name(doc: &str) -> Option<String> {
    let open_nav = join!("<nav id=\"", BREADCRUMBS_ID, "\"");
    let open_div = join!("<div id=\"", BREADCRUMBS_ID, "\"");
    let crumbs = slice_between_ci(doc, &open_nav, "</nav>")
        .or_else(|| slice_between_ci(doc, &open_div, "</div>"))?;

    let mut pos = 0usize;
    let mut index = 0usize;
    while let Some((li_s, li_e)) = next_tag_block_ci(crumbs, "<li", "</li>", pos) {
        let li = &crumbs[li_s..li_e];
        pos = li_e;
        if index == COURSE_CRUMB_INDEX {
            let txt = strip_tags(normalize_entities(&inner_after_open_tag(li)));
            if txt.is_empty() {
                return None;
            }
            return Some(txt);
        }
        index += 1;
    }
    None
}

/// All student roster rows in document order. Rows failing the structural
/// predicate (compound class signature + `user_<id>`) are not roster rows;
/// rows missing pieces inside still come back, with fields defaulted.
pub fn extract_rows(doc: &str) -> Vec<RosterRow> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        pos = tr_e;

        let tag = open_tag(tr);
        if !has_classes(tag, &ROW_CLASSES) {
            continue;
        }
        let Some(user_id) = user_id_from_tag(tag) else {
            continue;
        };

        let (cells, td_blocks) = extract_cells(tr);
        let role = td_blocks
            .get(ROLE_CELL_INDEX)
            .and_then(|td| nested_element_text(td))
            .unwrap_or_default();

        out.push(RosterRow {
            user_id,
            raw_name: name_text(tr),
            role,
            pfp_url: pfp_url(tr).unwrap_or_default(),
            cells,
        });
    }

    out
}

/// `id="user_123"` → `"123"`.
fn user_id_from_tag(tag: &str) -> Option<String> {
    let id = attr_value_ci(tag, "id")?;
    let rest = id.strip_prefix(USER_ID_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_string())
}

/// Cell model plus the raw `<td>` blocks (the latter for role lookup).
fn extract_cells(tr: &str) -> (Vec<Cell>, Vec<String>) {
    let mut cells = Vec::new();
    let mut blocks = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        let block = &tr[td_s..td_e];
        pos = td_e;
        cells.push(Cell {
            right_aligned: has_class(open_tag(block), RIGHT_CELL_CLASS),
            links: Vec::new(),
        });
        blocks.push(block.to_string());
    }
    (cells, blocks)
}

/// Display-name text from the element carrying the name class signature.
fn name_text(tr: &str) -> Option<String> {
    let lc = to_lower(tr);
    let at = lc.find(&to_lower(NAME_CLASSES[0]))?;
    let tag_start = tr[..at].rfind('<')?;

    let rest = &tr[tag_start + 1..];
    let name_end = rest.find(|c: char| c.is_ascii_whitespace() || c == '>')?;
    let tag_name = &rest[..name_end];
    if tag_name.is_empty() || tag_name.starts_with('/') {
        return None;
    }

    let close = join!("</", &to_lower(tag_name), ">");
    let (b_s, b_e) = next_tag_block_ci(tr, &join!("<", tag_name), &close, tag_start)?;
    let block = &tr[b_s..b_e];
    if !has_classes(open_tag(block), &NAME_CLASSES) {
        return None;
    }

    let txt = strip_tags(normalize_entities(&inner_after_open_tag(block)));
    if txt.is_empty() { None } else { Some(txt) }
}

/// First profile `<img>` src in the row, if any.
fn pfp_url(tr: &str) -> Option<String> {
    let lc = to_lower(tr);
    let at = lc.find("<img")?;
    let end = tr[at..].find('>')? + at;
    attr_value_ci(&tr[at..end], "src")
}

/// Text of the first element nested inside a `<td>` block.
fn nested_element_text(td: &str) -> Option<String> {
    let inner = inner_after_open_tag(td);
    let open = inner.find('<')?;
    let rest = &inner[open + 1..];
    let name_end = rest.find(|c: char| c.is_ascii_whitespace() || c == '>')?;
    let tag_name = &rest[..name_end];
    if tag_name.is_empty() || tag_name.starts_with('/') {
        return None;
    }

    let close = join!("</", &to_lower(tag_name), ">");
    let (b_s, b_e) = next_tag_block_ci(&inner, &join!("<", tag_name), &close, open)?;
    let txt = strip_tags(normalize_entities(&inner_after_open_tag(&inner[b_s..b_e])));
    if txt.is_empty() { None } else { Some(txt) }
}

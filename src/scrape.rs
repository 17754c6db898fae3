// src/scrape.rs
use std::{collections::HashSet, error::Error, thread, time::Duration};

use crate::config::consts::REQUEST_PAUSE_MS;
use crate::config::options::ScrapeOptions;
use crate::core::net;
use crate::page::PeoplePage;
use crate::progress::Progress;
use crate::specs::people;

/// People-page path for one course, one page of rows.
pub fn people_path(course: u32, page_no: u32) -> String {
    format!("courses/{}/users?page={}", course, page_no)
}

/// Fetch one course's roster page by page, appending rows as they arrive.
/// `on_chunk` fires after each appended chunk; the GUI routes it into the
/// watcher as a child-addition signal, keeping annotation consistent while
/// the page grows. Stops on the first empty or fully-duplicate page, or at
/// the page cap.
pub fn collect_roster(
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
    mut on_chunk: impl FnMut(&mut PeoplePage),
) -> Result<PeoplePage, Box<dyn Error>> {
    let course = scrape.course.ok_or("No course id set")?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(scrape.max_pages as usize);
        p.log("Fetching roster…");
    }

    let mut page = PeoplePage::default();
    let mut seen: HashSet<String> = HashSet::new();

    for n in 1..=scrape.max_pages {
        let doc = net::http_get(&people_path(course, n))?;
        let parsed = people::parse_document(&doc);

        if page.course_name.is_none() {
            page.course_name = parsed.course_name;
        }

        // Servers that ignore the page parameter replay the same rows;
        // keep only genuinely new ones and stop when a page adds none.
        let fresh: Vec<_> = parsed
            .rows
            .into_iter()
            .filter(|r| seen.insert(r.user_id.clone()))
            .collect();
        if fresh.is_empty() {
            break;
        }

        let count = fresh.len();
        page.append_rows(fresh);
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(n, count);
        }
        on_chunk(&mut page);

        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(page)
}

/// Offline variant for saved documents (fixtures, `--from-file`).
pub fn collect_from_document(doc: &str) -> PeoplePage {
    people::parse_document(doc)
}

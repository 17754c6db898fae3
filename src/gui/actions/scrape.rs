// src/gui/actions/scrape.rs
use std::time::Instant;

use crate::{
    gui::{app::App, progress::GuiProgress},
    roster, scrape,
};

pub fn fetch(app: &mut App) {
    let course: u32 = match app.state.gui.course_text.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            app.status("Enter a numeric course id");
            return;
        }
    };
    app.state.options.scrape.course = Some(course);

    logf!("Fetch: Begin course={}", course);

    let mut prog = GuiProgress::new(app.status.clone());

    // A fresh document starts a fresh page lifetime: forget old marks.
    app.watcher.reset();

    let opts = app.state.options.scrape.clone();
    let watcher = &mut app.watcher;
    let res = scrape::collect_roster(&opts, Some(&mut prog), |_page| {
        // each appended chunk is a child-addition signal
        watcher.children_added(Instant::now());
    });

    match res {
        Ok(mut page) => {
            // immediate pass; the debounced re-scan follows and is a no-op
            // unless rows arrived that this pass missed
            let stats = app.watcher.scan_now(&mut page);
            logf!(
                "Fetch: OK course={} rows={} injected={} skipped={}",
                course,
                page.rows.len(),
                stats.injected,
                stats.skipped
            );

            match roster::save_roster(&mut app.store, &page, true) {
                Ok((class, count)) => {
                    app.page = Some(page);
                    app.refresh_store_view();
                    app.select_class(&class);
                    app.status(format!("Saved {} student(s) to {}", count, class));
                }
                Err(e) => {
                    // user-facing: unresolved course or store failure
                    loge!("Save: Error course={}: {}", course, e);
                    app.status(format!("Error: {e}"));
                }
            }
        }
        Err(e) => {
            loge!("Fetch: Error course={}: {}", course, e);
            app.status(format!("Error: {e}"));
        }
    }
}

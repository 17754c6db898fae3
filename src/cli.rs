// src/cli.rs
use std::{env, error::Error, fs, io::BufRead, path::PathBuf};

use crate::config::options::{AppOptions, ExportFormat, ScrapeOptions};
use crate::core::markdown;
use crate::notes;
use crate::progress::Progress;
use crate::roster;
use crate::scrape;
use crate::store::{FileStore, StorePort};

#[derive(Default)]
struct Params {
    course: Option<u32>,
    from_file: Option<PathBuf>,
    list_classes: bool,
    show: Option<String>,
    with_notes: bool,
    html: bool,
    note: Option<(String, String)>, // (class, user id)
    export: Option<String>,
    out: Option<String>,
    format: Option<ExportFormat>,
    include_notes: bool,
    no_headers: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;
    let mut store = FileStore::new();

    if params.list_classes {
        for name in roster::class_names(&store)? {
            println!("{}", name);
        }
        return Ok(());
    }

    if let Some((class, user_id)) = &params.note {
        return edit_note(&mut store, class, user_id);
    }

    if let Some(class) = &params.show {
        return show_roster(&store, class, params.with_notes, params.html);
    }

    if let Some(class) = &params.export {
        return export_roster(&store, class, &params);
    }

    // fetch-and-save path
    let page = if let Some(path) = &params.from_file {
        let doc = fs::read_to_string(path)?;
        scrape::collect_from_document(&doc)
    } else if let Some(course) = params.course {
        let opts = ScrapeOptions { course: Some(course), ..ScrapeOptions::default() };
        let mut prog = CliProgress;
        scrape::collect_roster(&opts, Some(&mut prog), |_| {})?
    } else {
        return Err("Nothing to do. Try --help.".into());
    };

    let (class, count) = roster::save_roster(&mut store, &page, true)?;
    println!("Saved {} student(s) to {}", count, class);
    Ok(())
}

/* ---------------- subcommand bodies ---------------- */

/// The inline-prompt note surface.
fn edit_note(store: &mut FileStore, class: &str, user_id: &str) -> Result<(), Box<dyn Error>> {
    match notes::load_note(store, class, user_id)? {
        Some(note) if !note.is_empty() => println!("Current note:\n{}\n", note),
        _ => println!("No note yet.\n"),
    }

    println!("New note — finish with a line containing only '.', or enter nothing to cancel:");
    let stdin = std::io::stdin();
    match read_note(stdin.lock())? {
        None => {
            println!("Cancelled — nothing written.");
            Ok(())
        }
        Some(text) => {
            if notes::save_note(store, class, user_id, &text)? {
                println!("Note saved.");
                Ok(())
            } else {
                Err(format!("No student {} in class {}", user_id, class).into())
            }
        }
    }
}

fn read_note<R: BufRead>(reader: R) -> Result<Option<String>, Box<dyn Error>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line == "." {
            break;
        }
        lines.push(line);
    }
    if lines.is_empty() { Ok(None) } else { Ok(Some(lines.join("\n"))) }
}

fn show_roster(
    store: &FileStore,
    class: &str,
    with_notes: bool,
    html: bool,
) -> Result<(), Box<dyn Error>> {
    let Some(roster_list) = roster::load_roster(store, class)? else {
        println!("{}: no saved roster", class);
        return Ok(());
    };

    let all = store.get_all()?;
    for rec in &roster_list {
        let mut line = format!("{}\t{}\t{}", rec.user_id, rec.display_name(), rec.role);
        let also = roster::other_classes(&all, &rec.user_id, class);
        if !also.is_empty() {
            line.push_str(&format!("\t[also: {}]", also.join(", ")));
        }
        println!("{}", line);

        if with_notes && !rec.notes.is_empty() {
            let text = if html {
                markdown::render(&rec.notes)
            } else {
                markdown::render_text(&rec.notes)
            };
            for l in text.lines() {
                println!("    {}", l);
            }
        }
    }
    Ok(())
}

fn export_roster(store: &FileStore, class: &str, params: &Params) -> Result<(), Box<dyn Error>> {
    let Some(roster_list) = roster::load_roster(store, class)? else {
        return Err(format!("{}: no saved roster", class).into());
    };

    let mut options = AppOptions::default();
    if let Some(fmt) = &params.format {
        options.export.format = fmt.clone();
    }
    if let Some(out) = &params.out {
        options.export.set_path(out);
    }
    options.export.include_headers = !params.no_headers;
    options.export.include_notes = params.include_notes;

    let path = crate::file::write_export_single(&options.export, &roster_list)?;
    println!("Exported {} student(s) to {}", roster_list.len(), path.display());
    Ok(())
}

/* ---------------- argument parsing ---------------- */

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let mut args = env::args().skip(1);

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--course" => {
                let v: u32 = args.next().ok_or("Missing course id")?.parse()?;
                params.course = Some(v);
            }
            "--from-file" => {
                let v = args.next().ok_or("Missing value for --from-file")?;
                params.from_file = Some(PathBuf::from(v));
            }
            "--list-classes" => params.list_classes = true,
            "--show" => params.show = Some(args.next().ok_or("Missing class for --show")?),
            "--notes" => params.with_notes = true,
            "--html" => params.html = true,
            "--note" => {
                let v = args.next().ok_or("Missing value for --note")?;
                // user ids carry no ':'; class names may
                let (class, user_id) = v
                    .rsplit_once(':')
                    .ok_or("Expected --note <class>:<user id>")?;
                params.note = Some((s!(class), s!(user_id)));
            }
            "--export" => params.export = Some(args.next().ok_or("Missing class for --export")?),
            "-o" | "--out" => params.out = Some(args.next().ok_or("Missing output path")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Some(ExportFormat::Csv),
                    "tsv" => Some(ExportFormat::Tsv),
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-notes" => params.include_notes = true,
            "--no-headers" => params.no_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

/* ---------------- progress ---------------- */

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn page_done(&mut self, page: u32, rows: usize) {
        eprintln!("Page {}: {} student(s)", page, rows);
    }
}

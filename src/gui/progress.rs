// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    students: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, students: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap() = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, _max_pages: usize) {
        self.students = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn page_done(&mut self, page: u32, rows: usize) {
        self.students += rows;
        self.set_status(format!("Fetched page {} ({} students so far)", page, self.students));
    }
    fn finish(&mut self) {
        if self.students == 0 {
            self.set_status(s!("Fetch complete"));
        } else {
            self.set_status(format!("Fetch complete ({} students)", self.students));
        }
    }
}

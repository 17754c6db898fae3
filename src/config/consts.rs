// src/config/consts.rs

// Net config
pub const HOST: &str = "canvas.instructure.com";
pub const PREFIX: &str = "/";

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "rosters.json";

// People-page structure. One fixed layout; verify against the inspector
// when the site ships a redesign.
pub const ROW_CLASSES: [&str; 2] = ["al-hover-container", "StudentEnrollment"];
pub const NAME_CLASSES: [&str; 2] = ["roster_user_name", "student_context_card_trigger"];
pub const RIGHT_CELL_CLASS: &str = "right";
pub const USER_ID_PREFIX: &str = "user_";
pub const ROLE_CELL_INDEX: usize = 2; // role lives in the third <td>
pub const BREADCRUMBS_ID: &str = "breadcrumbs";
pub const COURSE_CRUMB_INDEX: usize = 1; // second crumb is the course name

// Breadcrumb text meaning "no course selected"
pub const NO_COURSE_SENTINEL: &str = "All Courses";

// Search links
pub const CAMPUS_KEYWORD: &str = "ucla";
pub const SEARCH_SITE: &str = "linkedin.com";
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search?q=";
pub const SEARCH_LABEL: &str = "Find on LinkedIn";

// Annotation re-scan debounce
pub const DEBOUNCE_MS: u64 = 100;

// Scrape
pub const MAX_ROSTER_PAGES: u32 = 25;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "roster";

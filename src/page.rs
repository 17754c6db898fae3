// src/page.rs
//
// In-memory model of the people page: the subtree the annotation engine
// scans and decorates. Rows come from specs::people or from test stubs;
// nothing here touches the network or the store.

/// A synthesized control attached to a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchLink {
    pub href: String,
    pub label: String,
    pub aria_label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub right_aligned: bool,
    pub links: Vec<SearchLink>,
}

/// One roster row. `raw_name` is `None` when the page row had no name
/// element (malformed row, skipped by the engine).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterRow {
    pub user_id: String,
    pub raw_name: Option<String>,
    pub role: String,
    pub pfp_url: String,
    pub cells: Vec<Cell>,
}

impl RosterRow {
    /// Bare row with one plain cell; enough for engine tests and benches.
    pub fn stub(user_id: &str, raw_name: &str) -> Self {
        Self {
            user_id: s!(user_id),
            raw_name: Some(s!(raw_name)),
            cells: vec![Cell::default()],
            ..Self::default()
        }
    }

    pub fn link_count(&self) -> usize {
        self.cells.iter().map(|c| c.links.len()).sum()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PeoplePage {
    /// Course name resolved from the breadcrumb, if the page had one.
    pub course_name: Option<String>,
    pub rows: Vec<RosterRow>,
}

impl PeoplePage {
    pub fn link_count(&self) -> usize {
        self.rows.iter().map(|r| r.link_count()).sum()
    }

    /// Append a freshly fetched chunk; row order is page order.
    pub fn append_rows(&mut self, mut rows: Vec<RosterRow>) {
        self.rows.append(&mut rows);
    }
}

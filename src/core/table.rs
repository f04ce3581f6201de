// src/core/table.rs
//
// Two-dimensional labeled table built from an HTML `<table>`.
//
// Shape rules:
// - Header: `<thead>` rows, or leading all-`<th>` rows when there is no thead.
//   Several header rows are flattened per column ("Rushing" + "Yds" → "Rushing Yds").
// - Body: every other `<tr>` of the table (tbody then tfoot, document order),
//   minus repeated header rows (`class="thead"` / `over_header`).
// - `colspan` repeats a cell across the columns it covers.
// - Rows are padded to the table width with `Cell::Empty`.

use std::fmt;

use scraper::{CaseSensitivity, ElementRef};

use super::html::{self, inline_text};

/// Row classes the site uses for header rows repeated inside the body.
const SKIP_ROW_CLASSES: &[&str] = &["thead", "over_header", "spacer"];

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// The value every absent cell becomes after normalization.
    pub const ZERO: Cell = Cell::Number(0.0);

    /// Classify raw cell text. Thousands separators are accepted ("1,234").
    pub fn parse(raw: &str) -> Cell {
        let t = raw.trim();
        if t.is_empty() {
            return Cell::Empty;
        }
        if let Some(n) = parse_number(t) {
            return Cell::Number(n);
        }
        Cell::Text(s!(t))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Text(t) => f.write_str(t),
        }
    }
}

fn parse_number(t: &str) -> Option<f64> {
    let first = t.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '-' | '+' | '.')) {
        return None;
    }
    let n = if t.contains(',') {
        if !t.chars().all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-' | '+')) {
            return None;
        }
        t.replace(',', "").parse::<f64>().ok()?
    } else {
        t.parse::<f64>().ok()?
    };
    n.is_finite().then_some(n)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl StatTable {
    /// Build from parts; rows are padded to the widest of header and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).chain([columns.len()]).max().unwrap_or(0);
        let mut columns = columns;
        columns.resize(width, s!());
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, Cell::Empty);
                r
            })
            .collect();
        Self { columns, rows }
    }

    /// Parse a `<table>` element.
    pub fn from_element(table: ElementRef<'_>) -> Self {
        let mut header_rows: Vec<Vec<String>> = Vec::new();
        let mut body_rows: Vec<Vec<Cell>> = Vec::new();

        let rows = table_rows(table);
        let has_thead = rows.iter().any(|(section, _)| *section == "thead");

        for (section, tr) in rows {
            if section == "thead" {
                header_rows.push(expand_labels(tr));
                continue;
            }
            // No thead: leading all-<th> rows are the header.
            if !has_thead && body_rows.is_empty() && section == "tbody" && is_all_th(tr) {
                header_rows.push(expand_labels(tr));
                continue;
            }
            if SKIP_ROW_CLASSES.iter().any(|c| tr.value().has_class(c, CaseSensitivity::CaseSensitive)) {
                continue;
            }
            let cells = expand_cells(tr);
            if !cells.is_empty() {
                body_rows.push(cells);
            }
        }

        Self::new(flatten_header(&header_rows), body_rows)
    }

    /// Parse the first `<table>` found in an HTML fragment.
    pub fn from_html(fragment: &str) -> Option<Self> {
        let doc = html::parse_fragment(fragment);
        html::elements(&doc)
            .find(|e| e.value().name() == "table")
            .map(Self::from_element)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` under the column labeled `column`.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let ix = self.column_index(column)?;
        self.rows.get(row)?.get(ix)
    }

    /// All cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let ix = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[ix]).collect())
    }

    pub fn has_empty(&self) -> bool {
        self.rows.iter().flatten().any(Cell::is_empty)
    }

    /// Replace every empty cell with `with`.
    pub fn fill_empty(&mut self, with: &Cell) {
        for cell in self.rows.iter_mut().flatten() {
            if cell.is_empty() {
                *cell = with.clone();
            }
        }
    }

    /// Consume and return the table with every empty cell set to zero.
    pub fn zero_filled(mut self) -> Self {
        self.fill_empty(&Cell::ZERO);
        self
    }

    /// Header (if requested) plus rows as display strings, for export.
    pub fn to_records(&self, include_headers: bool) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        if include_headers {
            out.push(self.columns.clone());
        }
        out.extend(self.rows.iter().map(|r| r.iter().map(Cell::to_string).collect()));
        out
    }
}

/* ---------- helpers ---------- */

/// `<tr>` elements owned by this table (nested tables excluded), tagged with
/// their section name. Bare rows are reported as "tbody".
fn table_rows(table: ElementRef<'_>) -> Vec<(&'static str, ElementRef<'_>)> {
    let mut out = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => out.push(("tbody", child)),
            name @ ("thead" | "tbody" | "tfoot") => {
                let section = match name {
                    "thead" => "thead",
                    "tfoot" => "tfoot",
                    _ => "tbody",
                };
                out.extend(
                    child
                        .children()
                        .filter_map(ElementRef::wrap)
                        .filter(|tr| tr.value().name() == "tr")
                        .map(|tr| (section, tr)),
                );
            }
            _ => {}
        }
    }
    out
}

fn cells_of(tr: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "th" | "td"))
}

fn is_all_th(tr: ElementRef<'_>) -> bool {
    let mut any = false;
    for c in cells_of(tr) {
        if c.value().name() != "th" {
            return false;
        }
        any = true;
    }
    any
}

fn colspan(cell: ElementRef<'_>) -> usize {
    cell.value()
        .attr("colspan")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

/// Header labels with colspan expanded. Spanned positions repeat the label.
fn expand_labels(tr: ElementRef<'_>) -> Vec<String> {
    let mut out = Vec::new();
    for c in cells_of(tr) {
        let label = inline_text(c);
        for _ in 0..colspan(c) {
            out.push(label.clone());
        }
    }
    out
}

fn expand_cells(tr: ElementRef<'_>) -> Vec<Cell> {
    let mut out = Vec::new();
    for c in cells_of(tr) {
        let cell = Cell::parse(&inline_text(c));
        for _ in 0..colspan(c) {
            out.push(cell.clone());
        }
    }
    out
}

/// One label per column: non-empty labels from each header row, joined by a space.
fn flatten_header(rows: &[Vec<String>]) -> Vec<String> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|i| {
            let parts: Vec<&str> = rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(String::as_str)
                .filter(|s| !s.is_empty())
                .collect();
            parts.join(" ")
        })
        .collect()
}

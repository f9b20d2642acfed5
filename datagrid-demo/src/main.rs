//! Scripted host for the data grid.
//!
//! Plays the part of a page that owns `page` and `page_size`, fetches one
//! page of bills at a time from an in-memory server, and feeds the grid's
//! intents back into fetches. Each step prints the grid as a text table.

mod server;

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::rc::Rc;

use datagrid::prelude::*;
use datagrid::view::{BodyRow, HeaderCell};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use server::{BillServer, Query};

/// Pixels per printed character.
const PX_PER_CHAR: f32 = 10.0;

/// An intent fired by the grid, queued until the host handles it.
#[derive(Debug, Clone)]
enum Intent {
    Page(PageChange),
    Sort(SortChange),
    Select(RowSelect),
}

/// The host: controlled props plus the last query it ran.
struct Host {
    server: BillServer,
    query: Query,
    intents: Rc<RefCell<VecDeque<Intent>>>,
}

impl Host {
    fn new(server: BillServer, page_size: usize) -> Self {
        Self {
            server,
            query: Query {
                sort: None,
                page: 0,
                limit: page_size,
            },
            intents: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    fn handlers(&self) -> GridHandlers {
        let pages = Rc::clone(&self.intents);
        let sorts = Rc::clone(&self.intents);
        let selects = Rc::clone(&self.intents);
        GridHandlers::new()
            .on_page_change(move |e| pages.borrow_mut().push_back(Intent::Page(*e)))
            .on_sort(move |e| sorts.borrow_mut().push_back(Intent::Sort(e.clone())))
            .on_row_select(move |e| selects.borrow_mut().push_back(Intent::Select(e.clone())))
    }

    /// Fetch the current query and hand the result to the grid.
    fn render(&self, grid: &mut TableController) -> Result<(), GridError> {
        let page = self.server.fetch(&self.query);
        let outcome = grid.update(GridProps {
            data: page.rows,
            record_count: page.total,
            page: self.query.page,
            page_size: self.query.limit,
        })?;
        if outcome.any() {
            info!("[host] grid adopted host values: {:?}", outcome);
        }
        Ok(())
    }

    /// Handle queued intents, then re-render.
    fn settle(&mut self, grid: &mut TableController) -> Result<(), GridError> {
        let intents: Vec<_> = self.intents.borrow_mut().drain(..).collect();
        for intent in intents {
            match intent {
                Intent::Page(e) => {
                    info!("[host] page change {:?}", e);
                    self.query.page = e.page;
                    self.query.limit = e.page_size;
                }
                Intent::Sort(e) => {
                    info!("[host] sort {} {}", e.sort_by, e.direction);
                    self.query.sort = Some((e.sort_by, e.direction));
                    self.query.page = e.page;
                    self.query.limit = e.page_size;
                }
                Intent::Select(e) => {
                    println!("  selected: {:?}", e.selected_ids);
                }
            }
        }
        self.render(grid)
    }
}

fn main() {
    let log_file = File::create("datagrid-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<(), GridError> {
    let config = GridConfig::new().page_size(10).sortable(true).dense(true);
    let mut host = Host::new(BillServer::with_bills(20), config.page_size);

    let labels: HashMap<String, String> = [
        ("bill.number", "Bill #"),
        ("amount", "Amount"),
        ("date", "Date"),
        ("status", "Status"),
        ("sort.by", "Sort by"),
        ("resize", "Resize"),
        ("page", "Page"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let mut grid = TableController::builder(vec![
        Column::new("bill_number").header_id("bill.number"),
        Column::new("bill_amount")
            .header_id("amount")
            .align(Alignment::Right)
            .cell(|value, _| format!("{:.2}", value.as_f64().unwrap_or(0.0))),
        Column::new("bill_date").header_id("date"),
        Column::new("bill_status")
            .header_id("status")
            .disable_sort_by()
            .max_width(200.0),
    ])
    .config(config)
    .row_id(RowIdStrategy::key("bill_number"))
    .labels(labels)
    .handlers(host.handlers())
    .build()?;

    host.render(&mut grid)?;
    print_step("mounted", &grid);

    grid.next_page();
    host.settle(&mut grid)?;
    print_step("next page", &grid);

    grid.toggle_sort("bill_amount");
    host.settle(&mut grid)?;
    grid.toggle_sort("bill_amount");
    host.settle(&mut grid)?;
    print_step("sorted by amount, descending", &grid);

    for id in grid.visible_ids().into_iter().take(2) {
        grid.toggle_row_selected(&id);
    }
    host.settle(&mut grid)?;
    print_step("two rows selected", &grid);

    grid.change_page_size(5);
    host.settle(&mut grid)?;
    print_step("page size 5", &grid);

    grid.begin_resize("bill_status", 0.0);
    grid.drag_resize(30.0);
    grid.drag_resize(400.0);
    if let Some((column, width)) = grid.end_resize() {
        println!("  resized {} to {}", column, width);
    }
    grid.last_page();
    host.settle(&mut grid)?;
    print_step("status widened, last page", &grid);

    Ok(())
}

fn print_step(title: &str, grid: &TableController) {
    let view = grid.view();
    println!();
    println!("== {} ==", title);
    println!("{}", header_line(&view.header));
    for row in &view.rows {
        println!("{}", row_line(row));
    }
    let footer = &view.footer;
    println!(
        "{} | {} {}/{} | rows per page {}",
        footer.total_label,
        footer.page_label,
        footer.page_index + 1,
        footer.page_count,
        footer.page_size
    );
}

fn header_line(header: &[HeaderCell]) -> String {
    header
        .iter()
        .map(|cell| {
            let text = match &cell.content {
                HeaderContent::Label(label) => {
                    let marker = match cell.sort {
                        SortState::Asc => " ^",
                        SortState::Desc => " v",
                        SortState::Unsorted => "",
                    };
                    format!("{}{}", label, marker)
                }
                HeaderContent::SelectAll(state) => check_glyph(*state).to_string(),
            };
            pad(&text, cell.width, cell.align)
        })
        .collect::<Vec<_>>()
        .join("|")
}

fn row_line(row: &BodyRow) -> String {
    let control = if row.is_selected() { "[x]" } else { "[ ]" };
    let mut parts = vec![pad(control, 56.0, Alignment::Center)];
    parts.extend(row.cells.iter().map(|c| pad(&c.text, c.width, c.align)));
    parts.join("|")
}

fn check_glyph(state: CheckState) -> &'static str {
    match state {
        CheckState::Unchecked => "[ ]",
        CheckState::Checked => "[x]",
        CheckState::Indeterminate => "[-]",
    }
}

fn pad(text: &str, width: f32, align: Alignment) -> String {
    let width = (width / PX_PER_CHAR) as usize;
    match align {
        Alignment::Left => format!("{:<width$}", text),
        Alignment::Center => format!("{:^width$}", text),
        Alignment::Right => format!("{:>width$}", text),
    }
}

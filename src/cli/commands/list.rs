use crate::cli::commands::filters::print_filters;
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::FilterCriteria;
use crate::core::table::{HEADERS, RenderedTable, TableRow, render};
use crate::errors::AppResult;
use crate::utils::colors::{color_for_priority, color_for_status, paint};
use crate::utils::table::{MAX_COL_WIDTH, Table, truncate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        service,
        priority,
        assign_to,
    } = cmd
    {
        let store = open_store(cfg)?;

        let criteria = FilterCriteria {
            service: service.clone(),
            priority: priority.map(|p| p.code().to_string()),
            assign_to: assign_to.clone(),
        };

        let table = if criteria.is_empty() {
            render(store.records(), None)
        } else {
            let subset = criteria.apply(store.records());
            render(store.records(), Some(subset.as_slice()))
        };

        print_table(&table);
        println!();
        print_filters(&table.filters);
    }
    Ok(())
}

pub(crate) fn print_table(table: &RenderedTable) {
    if table.rows.is_empty() {
        println!("No items to show.");
        return;
    }

    let mut out = Table::new(&HEADERS);
    for row in &table.rows {
        out.add_row(colored_cells(row));
    }
    print!("{}", out.render());
}

fn colored_cells(row: &TableRow) -> Vec<String> {
    let mut cells: Vec<String> = row
        .cells()
        .into_iter()
        .map(|c| truncate(&c, MAX_COL_WIDTH))
        .collect();

    cells[3] = paint(&cells[3], color_for_priority(row.priority));
    cells[5] = paint(&cells[5], color_for_status(row.status));
    cells
}

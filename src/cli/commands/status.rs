use crate::cli::commands::list::print_table;
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::table::render;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Advance the status of one item and show the refreshed table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { id } = cmd {
        let mut store = open_store(cfg)?;

        match store.cycle_status(*id)? {
            Some(next) => {
                ttlog_soft(
                    &store.backend().pool().conn,
                    "status",
                    &id.to_string(),
                    &format!("Status changed to {next}"),
                );
                success(format!("Item {id} is now {next}"));
                print_table(&render(store.records(), None));
            }
            None => info(format!("No item with id {id}.")),
        }
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::core::edit::edit_item;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Edit { id } = cmd {
        warning(edit_item(*id));
    }
    Ok(())
}

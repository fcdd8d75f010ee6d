use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing punchlist…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = DbPool::new(&cfg.database)?;

    ttlog_soft(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    );

    success(format!("Database initialized at {}", &cfg.database));
    Ok(())
}

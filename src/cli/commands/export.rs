use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { dir, force } = cmd {
        let store = open_store(cfg)?;
        let out_dir = expand_tilde(dir.as_deref().unwrap_or(&cfg.export_dir));

        let summary = ExportLogic::export(store.records(), &out_dir, *force, cfg.image_max_side)?;

        ttlog_soft(
            &store.backend().pool().conn,
            "export",
            &summary.path.to_string_lossy(),
            &format!(
                "Report exported ({} pages, {} photos skipped)",
                summary.pages, summary.skipped_images
            ),
        );
    }
    Ok(())
}

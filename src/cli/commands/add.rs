use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::capture::capture;
use crate::core::form::FormDraft;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::ui::messages::{photo, success};
use crate::utils::path::expand_tilde;

/// Submit the item form.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        description,
        room,
        service,
        priority,
        assign_to,
        date,
        comments,
        toggle,
        images,
    } = cmd
    {
        //
        // 1. Fill the draft
        //
        let mut draft = FormDraft::new();
        draft.description = description.clone();
        draft.room = room.clone();
        draft.service = service.clone();
        draft.priority = *priority;
        draft.assign_to = assign_to.clone();
        draft.date = date.clone();
        draft.comments = comments.clone();

        for _ in 0..*toggle {
            draft.toggle_status();
        }

        //
        // 2. Decode photos, previewing each one as it lands
        //
        if !images.is_empty() {
            let paths: Vec<_> = images.iter().map(|p| expand_tilde(p)).collect();
            let captured = capture(&paths, |img| {
                photo(format!(
                    "Photo {} ready: {} ({}, {} KB)",
                    img.index + 1,
                    img.source.display(),
                    img.uri.mime().unwrap_or("image"),
                    img.uri.approx_len() / 1024
                ));
            });
            draft.attach_images(captured);
        }

        //
        // 3. Store
        //
        let mut store = open_store(cfg)?;
        let record = store.create(draft)?;
        let (id, status, photos) = (record.id, record.status, record.photo_count());

        ttlog_soft(
            &store.backend().pool().conn,
            "add",
            &id.to_string(),
            &format!("Item added (status {status}, {photos} photos)"),
        );

        success(format!(
            "Item {id} added as #{} ({status}, {photos} 📸)",
            store.len()
        ));
    }

    Ok(())
}

use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::filter::{FilterOption, FilterOptions, derive_options};
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    print_filters(&derive_options(store.records()));
    Ok(())
}

pub(crate) fn print_filters(options: &FilterOptions) {
    header("Filters");
    print_group("Service", &options.services);
    print_group("Priority", &options.priorities);
    print_group("Assign To", &options.assignees);
}

fn print_group(title: &str, options: &[FilterOption]) {
    let values: Vec<String> = options
        .iter()
        .map(|o| {
            if o.is_sentinel() || o.value == o.label {
                o.label.clone()
            } else {
                format!("{} [{}]", o.label, o.value)
            }
        })
        .collect();
    println!("{title:<10}: {}", values.join(" | "));
}

pub mod data_uri;
pub mod priority;
pub mod record;
pub mod status;

pub use data_uri::DataUri;
pub use priority::{Priority, priority_label};
pub use record::Record;
pub use status::Status;

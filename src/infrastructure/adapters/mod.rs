pub mod catalog_translator;
pub mod html_form_page;
pub mod http_order_actions_adapter;
pub mod recording_console;

pub use catalog_translator::{CatalogTranslator, Locale};
pub use html_form_page::build_auto_submit_page;
pub use http_order_actions_adapter::HttpOrderActionsAdapter;
pub use recording_console::RecordingConsole;

pub mod adapters;
pub mod config;

pub use adapters::{
    build_auto_submit_page, CatalogTranslator, HttpOrderActionsAdapter, Locale, RecordingConsole,
};
pub use config::StorefrontConfig;

pub mod commands;
pub mod dispatch;
pub mod handlers;
pub mod logging;

// Re-export commonly used handler functions for convenience
pub use dispatch::run;
pub use handlers::{
    ResetTarget, generate_listing, handle_edit, handle_get, handle_help, handle_list,
    handle_rebuild, handle_reset,
};

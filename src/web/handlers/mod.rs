pub mod contact_handlers;
pub mod page_handlers;
pub mod preference_handlers;
pub mod system_handlers;

pub use contact_handlers::*;
pub use page_handlers::*;
pub use preference_handlers::*;
pub use system_handlers::*;

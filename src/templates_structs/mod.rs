// Response and template context structures, organized by surface.
// All types are re-exported: `use slidedeck::templates_structs::*`

pub mod api;
pub mod presenter;

pub use api::*;
pub use presenter::*;

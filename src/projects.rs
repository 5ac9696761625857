mod catalog;
mod detail;

pub use catalog::{Catalog, CatalogError, ProjectId, ProjectLinks, ProjectRecord};
pub use detail::{media_list, present, present_route_param, Lightbox, MediaItem, Presentation, ProjectDetail};

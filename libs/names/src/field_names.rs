//! Field names used in index and alias request bodies.

pub const ALIASES: &str = "aliases";
pub const FILTER: &str = "filter";
pub const INDEX_ROUTING: &str = "index_routing";
pub const IS_HIDDEN: &str = "is_hidden";
pub const IS_WRITE_INDEX: &str = "is_write_index";
pub const MAPPINGS: &str = "mappings";
pub const ROUTING: &str = "routing";
pub const SEARCH_ROUTING: &str = "search_routing";
pub const SETTINGS: &str = "settings";

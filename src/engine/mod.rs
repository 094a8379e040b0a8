pub(crate) mod cache;
pub(crate) mod layout_engine;

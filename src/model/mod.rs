pub(crate) mod attributes;
pub(crate) mod descriptor;
pub(crate) mod scroll;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod get_image;
pub(crate) mod get_prop;
pub(crate) mod list;
pub(crate) mod models;

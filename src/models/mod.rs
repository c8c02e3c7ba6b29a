pub(crate) mod location;
pub(crate) mod prop;
pub(crate) mod user;

pub(crate) mod location_management;
pub(crate) mod prop_management;

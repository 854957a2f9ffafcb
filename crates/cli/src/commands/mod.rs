pub(crate) mod browse;
pub(crate) mod dashboard;
pub(crate) mod house;
pub(crate) mod houses;

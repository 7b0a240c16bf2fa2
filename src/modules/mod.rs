pub(crate) mod auth;
pub(crate) mod maintenance;
pub(crate) mod shared;

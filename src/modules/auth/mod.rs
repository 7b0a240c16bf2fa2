mod http;
pub(crate) mod types;

pub(crate) use http::login;
pub(crate) use types::Session;

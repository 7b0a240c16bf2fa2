mod http;
pub(crate) mod types;

pub(crate) use http::delete_expired_jwt;
pub(crate) use types::PurgeOutcome;

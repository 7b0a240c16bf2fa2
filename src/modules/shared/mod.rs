mod http;

pub(crate) use http::{auth_headers, ensure_success};

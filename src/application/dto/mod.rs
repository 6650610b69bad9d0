/// Data Transfer Objects for the application layer
mod rewrite_request;
mod rewrite_response;

pub use rewrite_request::RewriteRequest;
pub use rewrite_response::{RewriteResponse, RewrittenDocument};

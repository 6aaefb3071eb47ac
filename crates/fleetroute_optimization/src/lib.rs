pub mod client;
pub mod export;
pub mod pipeline;
pub mod plan;
pub mod request;
pub mod response;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_utils;

mod company;
mod draft_memory;
mod draft_redis;
mod provisioning_request;

#[rustfmt::skip]
pub use {
    draft_memory::MemoryDraftRepo,
    draft_redis::RedisDraftRepo,
};

mod id;
mod key;

pub use id::ConnectionId;
pub use key::CacheKey;

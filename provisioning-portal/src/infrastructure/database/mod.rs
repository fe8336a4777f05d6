pub mod orm;
pub use orm::{Database, OrmRepo, StoreTables};

pub mod redis;
pub use self::redis::{RedisClient, RedisConnection};

use redis::{from_redis_value, ConnectionLike, FromRedisValue, RedisResult};

#[derive(Clone)]
pub enum RedisClient {
    Single(redis::Client),
    Cluster(redis::cluster::ClusterClient),
}

pub enum RedisConnection {
    Single(redis::Connection),
    Cluster(redis::cluster::ClusterConnection),
}

impl RedisClient {
    /// A single url opens a plain client, several open a cluster client.
    pub fn open(urls: &[String]) -> anyhow::Result<Self> {
        Ok(match urls {
            [] => anyhow::bail!("redis.urls must not be empty."),
            [url] => RedisClient::Single(redis::Client::open(url.as_str())?),
            urls => RedisClient::Cluster(redis::cluster::ClusterClient::new(urls.to_vec())?),
        })
    }

    pub fn get_connection(&self) -> RedisResult<RedisConnection> {
        match self {
            RedisClient::Single(s) => Ok(RedisConnection::Single(s.get_connection()?)),
            RedisClient::Cluster(c) => Ok(RedisConnection::Cluster(c.get_connection()?)),
        }
    }
}

impl RedisConnection {
    pub fn check_open(&self) -> anyhow::Result<()> {
        let flag = match self {
            RedisConnection::Single(sc) => sc.is_open(),
            RedisConnection::Cluster(cc) => cc.is_open(),
        };
        if !flag {
            anyhow::bail!("Redis connection is closed.");
        }
        Ok(())
    }

    pub fn query<T: FromRedisValue>(&mut self, cmd: &redis::Cmd) -> RedisResult<T> {
        match self {
            RedisConnection::Single(sc) => from_redis_value(&sc.req_command(cmd)?),
            RedisConnection::Cluster(cc) => from_redis_value(&cc.req_command(cmd)?),
        }
    }
}

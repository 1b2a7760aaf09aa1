use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// サーバ設定（環境変数から読み込み）
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// `HOST`（既定 127.0.0.1）と `PORT`（既定 3000）を読み込みます。
    /// 解釈できない値は既定値にフォールバックします。
    pub fn from_env() -> Self {
        let host = env::var("HOST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);
        Config { host, port }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

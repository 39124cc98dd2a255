//! Server configuration.
//!
//! Resolved once in `main` from command-line flags, then environment
//! variables, then built-in defaults, in that order of precedence.

use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_DATA_PATH: &str = "data/student_data.json";

pub const BIND_ENV: &str = "STUDENT_SEARCH_BIND";
pub const DATA_ENV: &str = "STUDENT_SEARCH_DATA";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env_and_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// `args[0]` is the program name and is skipped. Unknown flags are ignored.
    pub fn parse<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind: Option<String> = None;
        let mut data: Option<String> = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--data" => {
                    data = Some(flag_value(args, i)?);
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let bind = bind
            .or_else(|| env(BIND_ENV))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .map_err(|e| anyhow!("Invalid bind address {:?}: {}", bind, e))?;

        let data_path = data
            .or_else(|| env(DATA_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Ok(Self {
            bind_addr,
            data_path,
        })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| anyhow!("{} requires a value", args[i]))
}

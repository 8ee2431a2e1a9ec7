use log::warn;
use std::env;
use std::str::FromStr;

pub const DEFAULT_DATA_URL: &str = "http://localhost:4000/allData";
pub const DEFAULT_CHART_CANVAS: &str = "transactionChart";

pub struct Config {
    pub data_url: String,
    pub data_file: Option<String>,
    pub chart_canvas: String,
    pub chart_height: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_url: env::var("DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.to_string()),
            data_file: env::var("DATA_FILE").ok().filter(|path| !path.trim().is_empty()),
            chart_canvas: env::var("CHART_CANVAS")
                .unwrap_or_else(|_| DEFAULT_CHART_CANVAS.to_string()),
            chart_height: parse_or_default("CHART_HEIGHT", env::var("CHART_HEIGHT").ok(), 12),
        }
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", key, value, default);
            default
        }),
        None => default,
    }
}

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use strum_macros::Display;

/// Runtime configuration for both process roles, read once at startup.
///
/// Every option is an environment variable with a documented default:
/// - `PALMLINK_SOCKET`: endpoint path of the datagram channel (`./comm.sock`)
/// - `PALMLINK_SAFETY_TIMEOUT_MS`: failsafe staleness threshold (`500`)
/// - `PALMLINK_SEND_PERIOD_MS`: sender-side tick period (`10`)
/// - `PALMLINK_RECV_TIMEOUT_MS`: receiver read bound before rebind (`500`)
/// - `PALMLINK_HEIGHT_MIN` / `PALMLINK_HEIGHT_MAX`: palm-height calibration
///   range mapped onto thrust `0.0..=1.0` (`210` / `600`)
/// - `PALMLINK_ANGLE_SCALE`: multiplier from radians to actuator angular
///   units (`10`)
/// - `PALMLINK_MAX_THRUST`: actuator full-scale thrust (`65000`)
/// - `PALMLINK_SOURCE`: pose source of the remote role (`sine`)
/// - `PALMLINK_LINK`: actuator link of the pilot role (`console`)
#[derive(Debug, Clone)]
pub struct Config {
    socket_path: PathBuf,
    safety_timeout: Duration,
    send_period: Duration,
    recv_timeout: Duration,
    height_min: f64,
    height_max: f64,
    angle_scale: f64,
    max_thrust: u16,
    source: SourceKind,
    link: LinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SourceKind {
    Sine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LinkKind {
    Console,
}

#[derive(Debug, Display)]
pub enum ConfigError {
    Unparsable(String),
    DegenerateHeightRange,
    ZeroPeriod(String),
    UnknownSource(String),
    UnknownLink(String),
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            socket_path: PathBuf::from(
                env::var("PALMLINK_SOCKET").unwrap_or_else(|_| "./comm.sock".to_string()),
            ),
            safety_timeout: Duration::from_millis(parse_var("PALMLINK_SAFETY_TIMEOUT_MS", 500)?),
            send_period: Duration::from_millis(parse_var("PALMLINK_SEND_PERIOD_MS", 10)?),
            recv_timeout: Duration::from_millis(parse_var("PALMLINK_RECV_TIMEOUT_MS", 500)?),
            height_min: parse_var("PALMLINK_HEIGHT_MIN", 210.0)?,
            height_max: parse_var("PALMLINK_HEIGHT_MAX", 600.0)?,
            angle_scale: parse_var("PALMLINK_ANGLE_SCALE", 10.0)?,
            max_thrust: parse_var("PALMLINK_MAX_THRUST", 65000)?,
            source: match env::var("PALMLINK_SOURCE").as_deref() {
                Ok("sine") | Err(_) => SourceKind::Sine,
                Ok(other) => return Err(ConfigError::UnknownSource(other.to_string())),
            },
            link: match env::var("PALMLINK_LINK").as_deref() {
                Ok("console") | Err(_) => LinkKind::Console,
                Ok(other) => return Err(ConfigError::UnknownLink(other.to_string())),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Startup validation. Degenerate ranges are configuration errors and
    /// must never surface later as runtime data errors.
    fn validate(&self) -> Result<(), ConfigError> {
        if (self.height_max - self.height_min).abs() < f64::EPSILON {
            return Err(ConfigError::DegenerateHeightRange);
        }
        if self.send_period.is_zero() {
            return Err(ConfigError::ZeroPeriod("PALMLINK_SEND_PERIOD_MS".to_string()));
        }
        if self.recv_timeout.is_zero() {
            return Err(ConfigError::ZeroPeriod("PALMLINK_RECV_TIMEOUT_MS".to_string()));
        }
        Ok(())
    }

    pub fn socket_path(&self) -> &PathBuf { &self.socket_path }

    pub fn safety_timeout(&self) -> Duration { self.safety_timeout }

    pub fn send_period(&self) -> Duration { self.send_period }

    pub fn recv_timeout(&self) -> Duration { self.recv_timeout }

    pub fn height_min(&self) -> f64 { self.height_min }

    pub fn height_max(&self) -> f64 { self.height_max }

    pub fn angle_scale(&self) -> f64 { self.angle_scale }

    pub fn max_thrust(&self) -> u16 { self.max_thrust }

    pub fn source(&self) -> SourceKind { self.source }

    pub fn link(&self) -> LinkKind { self.link }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Unparsable(key.to_string())),
        Err(_) => Ok(default),
    }
}

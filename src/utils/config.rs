#![forbid(unsafe_code)]

use std::env;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::{info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as Log4rsConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

// Greet Server Utilities
use crate::utils::errors::Errors;
use crate::utils::greet_utils::get_absolute_path;
use crate::utils::idgen::{IdSource, RandomIdSource};

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Logging.  An operator can point the server at a log4rs yaml file; when the
// file is absent the built-in stderr configuration below is used instead.
const ENV_LOG_CONFIG       : &str = "GREET_LOG_CONFIG";
const DEFAULT_LOG_CONFIG   : &str = "~/.greet_server/log4rs.yml";
const DEFAULT_LOG_PATTERN  : &str = "{d} {l} {t} - {m}{n}";

// Networking.  The listen address and port are fixed; the server accepts
// plain HTTP on all interfaces.
const DEFAULT_HTTP_ADDR    : &str = "0.0.0.0";
const DEFAULT_HTTP_PORT    : u16  = 8080;

// ***************************************************************************
//                               Config Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// Parms:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct Parms {
    pub config: Config,
}

// ---------------------------------------------------------------------------
// RuntimeCtx:
// ---------------------------------------------------------------------------
pub struct RuntimeCtx {
    pub parms: Parms,
    pub id_source: Arc<dyn IdSource>,
}

// ---------------------------------------------------------------------------
// Config:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct Config {
    #[allow(dead_code)]
    pub title: String,
    pub http_addr: String,
    pub http_port: u16,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Greet Server".to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

// ***************************************************************************
//                               Log Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_log:
// ---------------------------------------------------------------------------
/** Initialize log4rs logging.  A yaml file named by the environment is
 * honored when present; an invalid file is fatal.  Without a file we fall
 * back to a stderr appender, which keeps stdout reserved for the startup
 * greeting.
 */
pub fn init_log() {
    let logconfig = init_log_config();
    if Path::new(&logconfig).is_file() {
        match log4rs::init_file(logconfig.clone(), Default::default()) {
            Ok(_) => (),
            Err(e) => {
                eprintln!("{}", e);
                let s = format!("{}", Errors::Log4rsInitialization(logconfig.clone()));
                panic!("{}", s);
            },
        }
        info!("Log4rs initialized using: {}", logconfig);
    } else {
        init_default_log().expect("FAILED to initialize default logging.");
        info!("Log4rs initialized with the default stderr configuration.");
    }
}

// ---------------------------------------------------------------------------
// init_log_config:
// ---------------------------------------------------------------------------
/** Resolve the log4rs configuration file path.  Order of precedence:
 *
 *   1. If set, the value of the GREET_LOG_CONFIG environment variable,
 *   2. Otherwise, ~/.greet_server/log4rs.yml
 */
fn init_log_config() -> String {
    let path = env::var(ENV_LOG_CONFIG).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string());
    get_absolute_path(&path)
}

// ---------------------------------------------------------------------------
// init_default_log:
// ---------------------------------------------------------------------------
fn init_default_log() -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();
    let config = Log4rsConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

// ***************************************************************************
//                             Config Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_runtime_context:
// ---------------------------------------------------------------------------
pub fn init_runtime_context() -> RuntimeCtx {
    let parms = Parms { config: Config::new() };
    RuntimeCtx { parms, id_source: Arc::new(RandomIdSource) }
}

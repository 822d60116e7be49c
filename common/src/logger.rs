use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn format(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    // stderr keeps log lines out of the rendered board on stdout.
    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format(file, line, message));
    }

    pub fn debug(&self, file: &str, line: u32, message: &str) {
        if self.verbose {
            self.log(file, line, message);
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn is_verbose() -> bool {
    LOGGER.get().is_some_and(|logger| logger.verbose)
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn debug(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

/// Like `log!`, but only printed when the logger was initialised as verbose.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::debug(file!(), line!(), &format!($($arg)*))
        }
    };
}

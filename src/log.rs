use std::{cell::RefCell, io::Write};

/// Logs only when the logger is present and verbose. Arguments are not
/// evaluated otherwise.
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)*) => {
        if let Some(logger) = &$logger {
            if logger.is_verbose() {
                logger.log(&format!($($arg)*));
            }
        }
    };
}

/// Logs when a logger is present, regardless of verbosity.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        if let Some(logger) = &$logger {
            logger.log(&format!($($arg)*));
        }
    };
}

pub(crate) struct Logger {
    write: RefCell<Box<dyn Write>>,
    verbose: bool,
}

impl Logger {
    pub(crate) fn new(write: Box<dyn Write>, verbose: bool) -> Self {
        Logger {
            write: RefCell::new(write),
            verbose,
        }
    }

    pub(crate) fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub(crate) fn log(&self, message: &str) {
        let mut write = self.write.borrow_mut();
        writeln!(write, "{}", message).unwrap_or_else(|_| eprintln!("{}", message));
    }
}

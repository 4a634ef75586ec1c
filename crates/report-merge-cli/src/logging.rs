use colored::{Colorize, CustomColor};

pub const PREFIX_COLOR: CustomColor = CustomColor {
    r: 0,
    g: 150,
    b: 199,
};

const PREFIX: &str = "report-merge";

pub fn print_err(err_message: &str) {
    eprintln!(
        "[{}] {}: {}",
        PREFIX.custom_color(PREFIX_COLOR),
        "error".red().bold(),
        err_message
    );
}

#[macro_export]
macro_rules! print_err {
    ($($arg:tt)*) => {
        $crate::logging::print_err(&format!($($arg)*));
    };
}

pub fn print_warn(warn_message: &str) {
    eprintln!(
        "[{}] {}: {}",
        PREFIX.custom_color(PREFIX_COLOR),
        "warning".yellow().bold(),
        warn_message
    );
}

#[macro_export]
macro_rules! print_warn {
    ($($arg:tt)*) => {
        $crate::logging::print_warn(&format!($($arg)*));
    };
}

#[cfg(debug_assertions)]
pub fn print_debug(debug_message: &str) {
    eprintln!(
        "[{}] {}: {}",
        PREFIX.custom_color(PREFIX_COLOR),
        "debug".green().bold(),
        debug_message
    );
}

#[cfg(not(debug_assertions))]
pub fn print_debug(_debug_message: &str) {}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        $crate::logging::print_debug(&format!($($arg)*));
    };
}

pub fn print_success(success_message: &str) {
    println!(
        "[{}] {}: {}",
        PREFIX.custom_color(PREFIX_COLOR),
        "success".green().bold(),
        success_message
    );
}

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {
        $crate::logging::print_success(&format!($($arg)*));
    };
}

/// Installs `env_logger` for the library's `log` records. `RUST_LOG`
/// overrides the default `warn` level.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

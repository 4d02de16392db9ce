//! Status-line macros for user-facing terminal output.
//!
//! These print directly to stdout/stderr with the same symbol vocabulary
//! the tracing formatter uses, so diagnostic and user-facing lines read
//! as one stream.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize;
        println!("{} {}", "[+]".blue(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize;
        println!("{} {}", "[+]".green().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize;
        println!("{} {}", "[*]".yellow().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize;
        eprintln!("{} {}", "[-]".red().bold(), format!($($arg)*));
    }};
}

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[clap(about, version, author)]
pub struct Cli {
    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "warn")]
    pub log_level: LevelFilter,

    /// One of on, off, toggle, query or reboot. Anything else prints the usage, and
    /// everything after the first word is ignored
    #[clap(value_name = "COMMAND", allow_hyphen_values = true, trailing_var_arg = true)]
    pub command: Vec<String>,
}

#[repr(usize)]
#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{Action, Invocation};

    fn invocation(args: &[&str]) -> Invocation {
        let cli = Cli::try_parse_from(args).unwrap();
        Invocation::from_args(&cli.command)
    }

    #[test]
    fn no_argument_prints_usage() {
        assert_eq!(invocation(&["usbnetpower"]), Invocation::Unrecognized);
    }

    #[test]
    fn unknown_word_prints_usage() {
        assert_eq!(invocation(&["usbnetpower", "foo"]), Invocation::Unrecognized);
    }

    #[test]
    fn flag_like_tokens_print_usage() {
        assert_eq!(invocation(&["usbnetpower", "-x"]), Invocation::Unrecognized);
        assert_eq!(invocation(&["usbnetpower", "--bogus"]), Invocation::Unrecognized);
        assert_eq!(
            invocation(&["usbnetpower", "--bogus", "on"]),
            Invocation::Unrecognized
        );
    }

    #[test]
    fn trailing_words_are_ignored() {
        assert_eq!(
            invocation(&["usbnetpower", "on", "extra"]),
            Invocation::Action(Action::On)
        );
        assert_eq!(
            invocation(&["usbnetpower", "query", "-x", "--bogus"]),
            Invocation::Action(Action::Query)
        );
        assert_eq!(
            invocation(&["usbnetpower", "foo", "on"]),
            Invocation::Unrecognized
        );
    }

    #[test]
    fn log_level_still_parses_before_the_command() {
        let cli = Cli::try_parse_from(["usbnetpower", "--log-level", "debug", "toggle"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert_eq!(
            Invocation::from_args(&cli.command),
            Invocation::Action(Action::Toggle)
        );
    }
}

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "PhonePad")]
#[command(about = "Phone number fields that group digits as you type")]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flags() {
        assert!(!Cli::try_parse_from(["PhonePad"]).unwrap().verbose);
        assert!(Cli::try_parse_from(["PhonePad", "-v"]).unwrap().verbose);
        assert!(Cli::try_parse_from(["PhonePad", "--verbose"]).unwrap().verbose);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["PhonePad", "--verbos"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_reported() {
        let err = Cli::try_parse_from(["PhonePad", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}

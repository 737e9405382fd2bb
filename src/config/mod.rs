pub mod relay;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, InvokeArgs, SubmitArgs};

#[cfg(feature = "cli")]
mod cli {
    use crate::client::transport::DEFAULT_RELAY_PATH;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
    use clap::{Args, Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "lead-relay")]
    #[command(about = "Drive the lead form or the email relay from a terminal")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Fill the contact form and submit it to a relay endpoint
        Submit(SubmitArgs),
        /// Run the relay handler once with a JSON body from a file or stdin
        Invoke(InvokeArgs),
    }

    #[derive(Debug, Clone, Args)]
    pub struct SubmitArgs {
        #[arg(long, default_value_t = format!("http://localhost:3000{}", DEFAULT_RELAY_PATH))]
        pub endpoint: String,

        #[arg(long, default_value = "")]
        pub first_name: String,

        #[arg(long, default_value = "")]
        pub last_name: String,

        #[arg(long, default_value = "")]
        pub email: String,

        #[arg(long, default_value = "", help = "Digits or any punctuation, formatted as typed")]
        pub phone: String,

        #[arg(long, default_value = "", help = "One of the service labels, e.g. \"Drain Cleaning\"")]
        pub service: String,

        #[arg(long, default_value = "")]
        pub message: String,

        #[arg(long, help = "Tick the human-verification box")]
        pub human: bool,

        #[arg(long, default_value = "(555) 123-4567")]
        pub business_phone: String,
    }

    #[derive(Debug, Clone, Args)]
    pub struct InvokeArgs {
        #[arg(long, default_value = "POST")]
        pub method: String,

        #[arg(long, help = "JSON body to send; read from stdin when omitted")]
        pub body_file: Option<PathBuf>,
    }

    impl Validate for SubmitArgs {
        fn validate(&self) -> Result<()> {
            validate_url("endpoint", &self.endpoint)?;
            validate_non_empty_string("business_phone", &self.business_phone)?;
            Ok(())
        }
    }

    impl Validate for InvokeArgs {
        fn validate(&self) -> Result<()> {
            validate_non_empty_string("method", &self.method)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_submit() {
            let config = CliConfig::try_parse_from([
                "lead-relay",
                "submit",
                "--first-name",
                "Jane",
                "--phone",
                "555-123-4567",
                "--service",
                "Drain Cleaning",
                "--human",
            ])
            .unwrap();

            let Command::Submit(args) = config.command else {
                panic!("expected submit");
            };
            assert_eq!(args.first_name, "Jane");
            assert_eq!(args.last_name, "");
            assert_eq!(args.endpoint, "http://localhost:3000/api/send-email");
            assert!(args.human);
            assert!(args.validate().is_ok());
        }

        #[test]
        fn test_parse_invoke_with_global_verbose() {
            let config =
                CliConfig::try_parse_from(["lead-relay", "invoke", "--method", "GET", "--verbose"])
                    .unwrap();

            assert!(config.verbose);
            let Command::Invoke(args) = config.command else {
                panic!("expected invoke");
            };
            assert_eq!(args.method, "GET");
            assert!(args.body_file.is_none());
        }
    }
}

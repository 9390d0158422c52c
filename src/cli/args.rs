use clap::Parser;

/// Run the Taka account and transfer service
#[derive(Parser, Debug)]
#[command(name = "taka-core")]
#[command(about = "Account and transfer backend for the Taka service", long_about = None)]
pub struct CliArgs {
    /// Address to bind the HTTP listener on
    #[arg(
        long = "bind",
        value_name = "ADDR",
        default_value = "0.0.0.0",
        help = "Interface address to bind"
    )]
    pub bind: String,

    /// Port to listen on; falls back to the PORT environment variable
    #[arg(
        long = "port",
        value_name = "PORT",
        env = "PORT",
        default_value_t = 5000,
        help = "TCP port to listen on (default: 5000)"
    )]
    pub port: u16,
}

impl CliArgs {
    /// The socket address string the server should bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(&["program"], "0.0.0.0", 5000)]
    #[case::custom_port(&["program", "--port", "8080"], "0.0.0.0", 8080)]
    #[case::custom_bind(&["program", "--bind", "127.0.0.1"], "127.0.0.1", 5000)]
    #[case::both(&["program", "--bind", "127.0.0.1", "--port", "9000"], "127.0.0.1", 9000)]
    fn test_arg_parsing(#[case] args: &[&str], #[case] bind: &str, #[case] port: u16) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.bind, bind);
        assert_eq!(parsed.port, port);
    }

    #[rstest]
    #[case::bad_port(&["program", "--port", "not-a-port"])]
    #[case::port_out_of_range(&["program", "--port", "70000"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }

    #[test]
    fn test_bind_addr_formatting() {
        let parsed = CliArgs::try_parse_from(["program", "--port", "8080"]).unwrap();
        assert_eq!(parsed.bind_addr(), "0.0.0.0:8080");
    }
}

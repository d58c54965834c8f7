use clap::Parser;
use exec_assert::assertion::executor::DEFAULT_SHELL;
use exec_assert::config::{
    RawConfig, DEFAULT_INTERVAL, DEFAULT_OUTPUT, DEFAULT_RESULT, DEFAULT_STRATEGY, DEFAULT_TIMEOUT,
};

const LONG_ABOUT: &str = "\
Execute a shell command and assert something about its result and output.

The command is passed as a single argument and run with '<shell> -c'. Assertions can be made
about the result of the command and about its output to stdout and stderr; the tool fails
unless every assertion holds. The command can run once, or repeatedly until the assertions
are met, with a timeout and an interval between executions.

Captured output is shown only when an assertion fails, or always with '-v'. Regular
expressions passed as tests should be quoted so the shell does not interpret backslashes.";

const EXAMPLES: &str = "\
Examples:
  # Run a command and expect it to succeed
  $ exec-assert 'pwd'

  # Run a command and expect it to fail
  $ exec-assert --result failure 'grep'

  # Expect failure, and that the output contains a phrase
  $ exec-assert --result failure --output contains --test \"Try 'grep --help'\" 'grep'

  # Expect success, and that the output does not match a regular expression
  $ exec-assert --output excludes --test '/(var|lib|bin)/' 'pwd'

  # Run a command until it succeeds or times out
  $ exec-assert --execute until --result success 'curl http://192.168.0.1:4000'

  # Same, with a custom timeout and interval
  $ exec-assert --execute until --timeout 2m0s --interval 1m500ms 'curl http://192.168.0.1:4000'

  # Several output assertions, with tests split on a delimiter
  $ exec-assert --output contains,excludes --test 'ready|error' --delimiter '|' 'cat app.log'

  # Name the test for more descriptive output
  $ exec-assert --name 'TestWorkingDir' 'pwd'";

#[derive(Parser, Debug)]
#[command(name = "exec-assert")]
#[command(about = "Execute a shell command and assert something about its result and output")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = EXAMPLES)]
#[command(version)]
pub struct Cli {
    /// The command to execute, as a single argument
    pub command: String,

    /// How to execute the command: once, until
    #[arg(long, value_name = "STRATEGY", default_value = DEFAULT_STRATEGY)]
    pub execute: String,

    /// What to assert about the result: success, failure, ambivalent
    #[arg(long, value_name = "ASSERTION", default_value = DEFAULT_RESULT)]
    pub result: String,

    /// Comma-delimited list of assertions about the output: contains, excludes, ambivalent
    #[arg(long, value_name = "ASSERTIONS", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Regular expressions to test the output with, split on --delimiter
    #[arg(long, value_name = "TESTS", default_value = "", allow_hyphen_values = true)]
    pub test: String,

    /// Delimiter for the list of tests; without one, --test is a single expression
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub delimiter: String,

    /// How long to keep executing with --execute until
    #[arg(
        long,
        value_name = "DURATION",
        default_value = DEFAULT_TIMEOUT,
        allow_hyphen_values = true
    )]
    pub timeout: String,

    /// Pause between executions with --execute until
    #[arg(
        long,
        value_name = "DURATION",
        default_value = DEFAULT_INTERVAL,
        allow_hyphen_values = true
    )]
    pub interval: String,

    /// Optional name for the test
    #[arg(long, default_value = "")]
    pub name: String,

    /// Shell used to interpret the command
    #[arg(long, default_value = DEFAULT_SHELL)]
    pub shell: String,

    /// Always show the command's output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_raw_config(self) -> RawConfig {
        RawConfig {
            command: self.command,
            strategy: self.execute,
            result: self.result,
            outputs: self.output,
            tests: self.test,
            delimiter: self.delimiter,
            timeout: self.timeout,
            interval: self.interval,
            name: self.name,
            shell: self.shell,
            verbose: self.verbose,
        }
    }
}
